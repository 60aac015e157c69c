use crate::calculator::{CALCULATE_PATH, CalculationRequest, CalculationResponse, evaluate};
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the service router.
///
/// An empty `allowed_origins` allows any origin.
pub fn router(allowed_origins: &[String]) -> Router {
    Router::new()
        .route(CALCULATE_PATH, post(calculate))
        .route("/calculate", post(calculate))
        .route("/health", get(health))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn calculate(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> (StatusCode, Json<CalculationResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Rejected calculation request: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(CalculationResponse::failure(format!(
                    "invalid JSON: {}",
                    rejection.body_text()
                ))),
            );
        }
    };

    match evaluate(request.operand1, request.operand2, request.operation) {
        Ok(result) => {
            tracing::debug!(?request, result, "Calculated");
            (StatusCode::OK, Json(CalculationResponse::success(result)))
        }
        Err(e) => {
            tracing::debug!(?request, error = %e, "Calculation failed");
            (
                StatusCode::BAD_REQUEST,
                Json(CalculationResponse::failure(e.to_string())),
            )
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn post_json(path: &str, body: &str) -> (StatusCode, CalculationResponse) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router(&[]).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_calculate_success() {
        let (status, body) =
            post_json(CALCULATE_PATH, r#"{"num1": 10, "num2": 5, "operation": 2}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, CalculationResponse::success(50.0));
    }

    #[tokio::test]
    async fn test_rest_alias_accepts_names() {
        let (status, body) =
            post_json("/calculate", r#"{"num1": 7, "num2": 2, "operation": "subtract"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.result, 5.0);
    }

    #[tokio::test]
    async fn test_division_by_zero_is_bad_request() {
        let (status, body) =
            post_json(CALCULATE_PATH, r#"{"num1": 10, "num2": 0, "operation": 3}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "division by zero");
    }

    #[tokio::test]
    async fn test_overflow_is_bad_request() {
        let body = format!(
            r#"{{"num1": {:e}, "num2": {:e}, "operation": 2}}"#,
            f64::MAX,
            f64::MAX
        );
        let (status, body) = post_json(CALCULATE_PATH, &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "result is infinite");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = post_json(CALCULATE_PATH, "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.starts_with("invalid JSON"));
    }

    #[tokio::test]
    async fn test_unknown_operation() {
        let (status, body) =
            post_json(CALCULATE_PATH, r#"{"num1": 1, "num2": 1, "operation": 9}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.starts_with("invalid JSON"));
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = router(&[]).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(CALCULATE_PATH)
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let response = router(&["http://localhost:3000".to_string()])
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:3000"
        );
    }
}
