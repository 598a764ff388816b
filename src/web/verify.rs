//! # Verification Endpoint
//!
//! `POST /api/verify-password` with a JSON body `{ "password"?: string }`.
//!
//! The body is read as raw bytes so that a missing `Content-Type` does not
//! short-circuit into an extractor rejection. Empty, unparsable and
//! non-object bodies carry no `password` and get the missing-password error.
//!
//! ## Responses
//! - `200 OK` `{ "success": bool }`
//! - `200 OK` `{ "success": false, "message": "Wrong! Hint: ..." }` on the
//!   target date with a wrong password
//! - `400 BAD REQUEST` error envelope with `"Password missing"`

use std::sync::Arc;

use axum::{Extension, Json, body::Bytes, extract::OriginalUri};

use crate::error::api::ErrorResponse;
use crate::verify::model::{VerifyRequest, VerifyResponse};
use crate::verify::verifier::Verifier;

pub async fn verify_password(
    Extension(verifier): Extension<Arc<Verifier>>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> Result<Json<VerifyResponse>, ErrorResponse> {
    let req = VerifyRequest::from_body(&body);
    verifier
        .verify(&req)
        .map(Json)
        .map_err(|e| e.at(uri.to_string()))
}
