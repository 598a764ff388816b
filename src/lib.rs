//! # datelock
//!
//! A small HTTP service that accepts a password only on one calendar day.
//!
//! `POST /api/verify-password` compares the submitted password with a
//! configured secret, and today's date in a configured IANA timezone
//! (`Europe/Oslo` by default) with a configured target date.
//!
//! ## Example usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use datelock::config::app::AppConfig;
//! use datelock::time::system_clock::SystemClock;
//! use datelock::verify::verifier::Verifier;
//! use datelock::web::router::build_router;
//!
//! # fn main() -> datelock::anyhow::Result<()> {
//! let cfg = AppConfig::from_env()?;
//! let clock = SystemClock::with_tz(cfg.verify.timezone);
//! let verifier = Verifier::new(&cfg.verify, Arc::new(clock));
//! let app = build_router(Arc::new(verifier), &cfg.http, &cfg.cors);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use chrono;
pub use chrono_tz;
pub use serde_json;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod time;
pub mod verify;
pub mod web;
