//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Exposes behavior through methods, not public fields
//! - Returns outcome enums from mutations

pub mod character_sheet;

pub use character_sheet::{CharacterSheet, SheetSnapshot};
