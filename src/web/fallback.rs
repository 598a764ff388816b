use axum::{extract::OriginalUri, response::IntoResponse};

use crate::error::api::ApiError;

/// Default 404 Not Found handler.
///
/// Used as the final fallback of the router. Unknown paths get the same JSON
/// error envelope as every other [`ApiError`].
pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    ApiError::NotFound.at(uri.to_string())
}
