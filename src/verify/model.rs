//! Request and response bodies of the verification endpoint.

use serde::Serialize;
use serde_json::Value;

/// Incoming request body: `{ "password"?: any }`.
///
/// The field is kept as a raw JSON value so that non-string inputs are
/// judged by truthiness instead of failing deserialization.
#[derive(Debug, Default)]
pub struct VerifyRequest {
    pub password: Option<Value>,
}

impl VerifyRequest {
    /// Reads `password` from a JSON object.
    ///
    /// Any other JSON value (array, string, number, boolean, `null`) has no
    /// `password` field.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(mut map) => Self {
                password: map.remove("password"),
            },
            _ => Self::default(),
        }
    }

    /// Parses a raw request body.
    ///
    /// Blank or unparsable bodies are treated like a body without a
    /// `password` field, so they end in the same "Password missing" error.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(Self::from_json)
            .unwrap_or_default()
    }
}

/// A submitted password after the presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    /// A non-empty string.
    Text(String),
    /// A truthy non-string value (number, `true`, array, object).
    /// It can never equal the secret.
    Other,
}

impl VerifyRequest {
    /// Returns the submitted password, or `None` if it is falsy:
    /// absent, `null`, `""`, `false` or a number equal to zero.
    pub fn submitted(&self) -> Option<Submitted> {
        match self.password.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(Submitted::Text(s.clone())),
            Value::Number(n) if n.as_f64().is_some_and(|f| f == 0.0) => None,
            _ => Some(Submitted::Other),
        }
    }
}

/// Response body: `{ "success": bool, "message"?: string }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyResponse {
    pub fn outcome(success: bool) -> Self {
        Self {
            success,
            message: None,
        }
    }

    pub fn hint(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
