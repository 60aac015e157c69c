//! The closed set of arithmetic operations and their display symbols.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An arithmetic operation the calculator service can perform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in button order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Glyph shown on the operation button and in the result expression.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Numeric tag used on the wire.
    pub fn tag(self) -> u8 {
        match self {
            Self::Add => 0,
            Self::Subtract => 1,
            Self::Multiply => 2,
            Self::Divide => 3,
        }
    }

    pub fn from_tag(tag: u64) -> Option<Self> {
        match tag {
            0 => Some(Self::Add),
            1 => Some(Self::Subtract),
            2 => Some(Self::Multiply),
            3 => Some(Self::Divide),
            _ => None,
        }
    }

    /// Lowercase name, as accepted by the REST endpoint.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when text does not name an operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts names in any case, the display glyphs, and their ASCII
    /// look-alikes (`*`, `x`, `/`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Self::Add),
            "subtract" | "-" | "−" => Ok(Self::Subtract),
            "multiply" | "*" | "x" | "×" => Ok(Self::Multiply),
            "divide" | "/" | "÷" => Ok(Self::Divide),
            _ => Err(UnknownOperation(trimmed.to_string())),
        }
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Tag(u64),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Tag(tag) => Operation::from_tag(tag)
                .ok_or_else(|| de::Error::custom(format!("unknown operation tag: {}", tag))),
            Raw::Name(name) => name.parse().map_err(de::Error::custom),
        }
    }
}
