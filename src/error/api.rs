use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP layer.
///
/// Wrong passwords and wrong dates are **not** errors; they are ordinary
/// `200 OK` responses carrying `success: false`. Only requests that cannot be
/// evaluated at all end up here.
///
/// # Example
/// ```
/// use datelock::error::api::ApiError;
///
/// let err = ApiError::BadRequest("Password missing".into());
/// assert_eq!(err.to_string(), "Password missing");
/// assert_eq!(err.status().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required input is absent or empty.
    #[error("{0}")]
    BadRequest(String),

    #[error("Not Found")]
    NotFound,
}

/// JSON error envelope returned for every [`ApiError`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Path (and query) of the request that failed.
    pub url: String,
    pub status_code: u16,
    pub status_message: String,
    pub message: String,
}

/// An [`ApiError`] bound to the request URL it occurred on.
///
/// Handlers produce one with [`ApiError::at`].
#[derive(Debug)]
pub struct ErrorResponse {
    pub error: ApiError,
    pub url: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Attaches the request URL, making the error renderable.
    pub fn at(self, url: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            error: self,
            url: url.into(),
        }
    }
}

impl ErrorResponse {
    pub fn envelope(&self) -> ErrorEnvelope {
        let message = self.error.to_string();
        ErrorEnvelope {
            url: self.url.clone(),
            status_code: self.error.status().as_u16(),
            status_message: message.clone(),
            message,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        tracing::debug!(status = status.as_u16(), url = %self.url, error = %self.error, "request rejected");
        (status, Json(self.envelope())).into_response()
    }
}
