use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paxflow_core::CoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    UpstreamError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::UpstreamError(msg) => {
                tracing::error!("Upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, "Upstream service unavailable".to_string())
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRequest(msg) => AppError::ValidationError(msg),
            err if err.is_upstream() => AppError::UpstreamError(err.to_string()),
            err => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let invalid = AppError::from(CoreError::InvalidRequest("flight id is required".into()));
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let upstream = AppError::from(CoreError::FlightSource("timeout".into()));
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);

        let lookup = AppError::from(CoreError::PassengerLookup("refused".into()));
        assert_eq!(lookup.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_not_found_and_internal() {
        let missing = AppError::NotFoundError("Flight x not found".into());
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let internal = AppError::InternalServerError("boom".into());
        assert_eq!(internal.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
