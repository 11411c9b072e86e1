//! Presentation layer - Dioxus UI components and views

pub mod components;
pub mod services;
pub mod views;

pub use services::Services;
