//! # CORS (Cross-Origin Resource Sharing) Utilities
//!
//! Builds the [`CorsLayer`] that lets a browser front end on another origin
//! call the verification endpoint.
//!
//! Origins come from [`CorsConfig`]. `"*"` allows any origin, unless
//! credentials are enabled, where a wildcard is not permitted and the
//! default local origin is used instead. An empty list also falls back to
//! `http://localhost:3000`.
//!
//! # Example
//! ```rust,no_run
//! use axum::{routing::post, Router};
//! use datelock::config::web::CorsConfig;
//! use datelock::web::cors::build_cors;
//!
//! let cfg = CorsConfig {
//!     env: "https://puzzle.example".into(),
//!     credentials: false,
//! };
//!
//! let app: Router = Router::new()
//!     .route("/api/verify-password", post(|| async { "ok" }))
//!     .layer(build_cors(&cfg));
//! ```

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::web::{CorsConfig, DEFAULT_CORS_ORIGINS};

/// Parses a comma-separated list of origins from environment configuration.
///
/// Invalid or empty entries are ignored.
fn parse_origins_from_env(cors_env: &str) -> Vec<HeaderValue> {
    cors_env
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() || s == "*" {
                None
            } else {
                HeaderValue::from_str(s).ok()
            }
        })
        .collect()
}

fn is_wildcard(cors_env: &str) -> bool {
    cors_env.split(',').any(|s| s.trim() == "*")
}

/// Builds a [`CorsLayer`] configured from [`CorsConfig`].
///
/// - Allows `GET`, `POST`, and `OPTIONS` methods.
/// - Allows the `Content-Type` request header.
/// - Enables credentials when `CorsConfig.credentials` is `true`.
pub fn build_cors(cors: &CorsConfig) -> CorsLayer {
    let origins = parse_origins_from_env(&cors.env);

    let origin_cfg = if is_wildcard(&cors.env) && !cors.credentials {
        AllowOrigin::any()
    } else if origins.is_empty() {
        AllowOrigin::list([HeaderValue::from_static(DEFAULT_CORS_ORIGINS)])
    } else {
        AllowOrigin::list(origins)
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origin_cfg)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if cors.credentials {
        layer = layer.allow_credentials(true);
    }

    layer
}
