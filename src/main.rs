use anyhow::{Context, Result};
use calcform::calculator::Operation;
use calcform::client::HttpCalculatorClient;
use calcform::config::Config;
use calcform::form::{CalculatorForm, Operand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calcform", version, about = "Two-operand calculator backed by a calculator service")]
struct Cli {
    /// Config file (defaults to ~/.config/calcform/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the calculator service
    Serve {
        /// Address to listen on
        #[arg(long)]
        listen: Option<String>,
    },
    /// Submit one calculation and print the result
    #[command(allow_negative_numbers = true)]
    Calc {
        /// First number
        num1: String,
        /// Operation: + - x / (or add, subtract, multiply, divide)
        operation: String,
        /// Second number
        num2: String,
        /// Calculator service URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Open the calculator window
    #[cfg(feature = "gui")]
    Gui {
        /// Calculator service URL
        #[arg(long)]
        url: Option<String>,
    },
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    });

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        Command::Serve { listen } => {
            if let Some(listen) = listen {
                config.listen = listen;
            }
            runtime
                .block_on(calcform::service::serve(
                    &config.listen,
                    &config.allowed_origins,
                ))
                .with_context(|| format!("Calculator service failed on {}", config.listen))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Calc {
            num1,
            operation,
            num2,
            url,
        } => {
            if let Some(url) = url {
                config.server_url = url;
            }
            let operation: Operation = operation.parse()?;
            let client = HttpCalculatorClient::from_config(&config)?;

            let mut form = CalculatorForm::new();
            form.set_operand(Operand::First, num1);
            form.set_operand(Operand::Second, num2);
            form.select_operation(operation);
            runtime.block_on(form.submit(&client));

            let panel = form.panel();
            if panel.is_error() {
                eprintln!("{}", panel);
                Ok(ExitCode::FAILURE)
            } else {
                println!("{}", panel);
                Ok(ExitCode::SUCCESS)
            }
        }
        #[cfg(feature = "gui")]
        Command::Gui { url } => {
            if let Some(url) = url {
                config.server_url = url;
            }
            let client = HttpCalculatorClient::from_config(&config)?;
            calcform::ui::run(runtime.handle().clone(), std::sync::Arc::new(client));
            Ok(ExitCode::SUCCESS)
        }
    }
}
