use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::core::CanopyError;

pub struct ApiError(pub CanopyError);

impl From<CanopyError> for ApiError {
    fn from(err: CanopyError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CanopyError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CanopyError::IndexError(msg) | CanopyError::StoreError(msg) => {
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            CanopyError::IoError(msg) | CanopyError::ConfigParsingError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
