//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod character_sheet_service;

pub use character_sheet_service::CharacterSheetService;
