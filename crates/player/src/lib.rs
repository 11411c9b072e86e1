//! Charsheet Player crate.
//!
//! This crate contains the character sheet form, the service driving it and
//! the HTTP adapter for the character API.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::PlayerConfig;
pub use ui::app;
