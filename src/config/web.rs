//! # HTTP and CORS Configuration
//!
//! Configuration structures for the HTTP listener and CORS behavior.
//! Both are part of [`AppConfig`](crate::config::app::AppConfig).
//!
//! # Examples
//! ```rust
//! use datelock::config::web::{CorsConfig, HttpConfig};
//!
//! let http = HttpConfig::from_env_with(|_| None);
//! assert_eq!(http.bind_addr(), "0.0.0.0:3000");
//!
//! let cors = CorsConfig {
//!     env: "http://localhost:3000".into(),
//!     credentials: false,
//! };
//! assert_eq!(cors.env, "http://localhost:3000");
//! ```

use crate::config::env::{read_flag_from, read_parsed_from, read_string_from};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_KB: usize = 16;
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

/// HTTP listener configuration.
///
/// Reads from environment variables:
/// - `HTTP_HOST`, `HTTP_PORT` — bind address
/// - `HTTP_MAX_BODY_BYTES` — request body limit; when unset it is derived
///   from `HTTP_MAX_BODY_KB`
#[derive(Clone, Debug, PartialEq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl HttpConfig {
    pub fn from_env_with<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = read_string_from(&get, "HTTP_HOST", DEFAULT_HOST)
            .trim()
            .to_string();
        let port = read_parsed_from(&get, "HTTP_PORT", DEFAULT_PORT);

        let max_body_bytes = get("HTTP_MAX_BODY_BYTES")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or_else(|| {
                read_parsed_from(&get, "HTTP_MAX_BODY_KB", DEFAULT_MAX_BODY_KB) * 1024
            });

        Self {
            host,
            port,
            max_body_bytes,
        }
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
///
/// `env` holds the raw comma-separated `CORS_ORIGINS` value.
#[derive(Clone, Debug, PartialEq)]
pub struct CorsConfig {
    pub env: String,
    pub credentials: bool,
}

impl CorsConfig {
    pub fn from_env_with<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            env: read_string_from(&get, "CORS_ORIGINS", DEFAULT_CORS_ORIGINS),
            credentials: read_flag_from(&get, "CORS_CREDENTIALS", false),
        }
    }
}
