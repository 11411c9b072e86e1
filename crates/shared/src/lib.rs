//! Charsheet Shared - Wire types for the character API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain crate
//! 2. **No business logic** - Pure data types, serialization and conversions
//! 3. **Domain stays wire-agnostic** - casing and envelopes live here

pub mod character_sheet;

pub use character_sheet::{CharacterDocument, CharacterEnvelope};
