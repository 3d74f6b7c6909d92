use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{debug, error};

/// JSON error body: `{"error": <summary>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // 404 carries no body
            ApiError::Service(ServiceError::NotFound(what)) => {
                debug!(%what, "responding not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::Service(e @ ServiceError::StorageUnavailable(_)) => {
                error!(err = %e, "storage unavailable");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Unavailable", Some(e.to_string()))
                    .into_response()
            }
            ApiError::BadRequest(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(msg)).into_response(),
        }
    }
}
