pub mod app;
pub mod env;
pub mod verify;
pub mod web;
