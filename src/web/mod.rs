pub mod cors;
pub mod fallback;
pub mod health;
pub mod router;
pub mod verify;
