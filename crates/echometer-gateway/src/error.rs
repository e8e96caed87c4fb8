//! HTTP mapping for `EchoError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use echometer_core::error::EchoError;

/// Response-side wrapper so handlers can return `Result<_, ApiError>` with `?`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub EchoError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            EchoError::BadRequest(_) | EchoError::UnsupportedVersion => StatusCode::BAD_REQUEST,
            EchoError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            EchoError::Io(_) | EchoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self.0, "request failed");
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
