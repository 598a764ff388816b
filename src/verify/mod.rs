//! Password and date verification.
//!
//! [`model`] holds the wire types; [`verifier`] holds the decision logic.

pub mod model;
pub mod verifier;
