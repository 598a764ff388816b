//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with common type conversions.
//! Every reader takes a provider closure (`std::env::var` in production,
//! a `match` over keys in tests), which is what the configuration loaders call.

use std::str::FromStr;

/// Reads a boolean flag using a custom provider function.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`.
///
/// # Example
/// ```rust
/// use datelock::config::env::read_flag_from;
///
/// let val = read_flag_from(|_| Some("true".into()), "ENABLE_FEATURE", false);
/// assert!(val);
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'');
            matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}

/// Reads and parses a value using a custom provider function,
/// returning the provided default if it is missing or fails to parse.
///
/// # Example
/// ```rust
/// use datelock::config::env::read_parsed_from;
///
/// let port: u16 = read_parsed_from(|_| Some(" 8080 ".into()), "HTTP_PORT", 3000);
/// assert_eq!(port, 8080);
/// ```
pub fn read_parsed_from<F, T>(provider: F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    provider(name)
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Reads a string value, falling back to `default` when the variable is unset.
///
/// The value is returned verbatim: no trimming is applied, because some values
/// (such as secrets) are compared byte for byte.
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    provider(name).unwrap_or_else(|| default.to_string())
}
