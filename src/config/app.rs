//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for the verification settings,
//! the HTTP listener and CORS.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! This configuration is initialized once at startup and never mutated.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `VERIFY_SECRET` | Expected password | `"the password.."` |
//! | `VERIFY_TARGET_DATE` | Target date (`YYYY-MM-DD`) | `"2025-04-26"` |
//! | `VERIFY_TIMEZONE` | IANA timezone for "today" | `"Europe/Oslo"` |
//! | `HTTP_HOST` / `HTTP_PORT` | Bind address | `0.0.0.0` / `3000` |
//! | `HTTP_MAX_BODY_BYTES` | Maximum request body size (bytes) | derived from `HTTP_MAX_BODY_KB` |
//! | `HTTP_MAX_BODY_KB` | Max body size in kilobytes (if bytes not set) | `16` |
//! | `CORS_ORIGINS` | Allowed origins for CORS | `"http://localhost:3000"` |
//! | `CORS_CREDENTIALS` | Allow cookies/headers in CORS requests | `false` |
//!
//! # Example
//! ```rust,no_run
//! use datelock::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env().expect("invalid configuration");
//! println!("listening on {}", cfg.http.bind_addr());
//! ```

use std::env;

use anyhow::Result;

use crate::config::{
    verify::VerifyConfig,
    web::{CorsConfig, HttpConfig},
};

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Current environment name (`APP_ENV`).
    pub app_env: String,
    /// Secret, target date and timezone.
    pub verify: VerifyConfig,
    /// HTTP listener configuration.
    pub http: HttpConfig,
    /// Cross-Origin Resource Sharing configuration.
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    ///
    /// # Errors
    /// Fails if the verification settings are invalid
    /// (see [`VerifyConfig::from_env_with`]).
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let get = |k: &str| env::var(k).ok();

        Ok(AppConfig {
            app_env,
            verify: VerifyConfig::from_env_with(get)?,
            http: HttpConfig::from_env_with(get),
            cors: CorsConfig::from_env_with(get),
        })
    }
}
