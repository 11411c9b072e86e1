//! Application layer - use cases that sit between the form and the ports

pub mod error;
pub mod services;

pub use error::ServiceError;
pub use services::CharacterSheetService;
