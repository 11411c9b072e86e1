//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod character_api_port;

pub use character_api_port::{ApiError, CharacterApiPort};

#[cfg(any(test, feature = "testing"))]
pub use character_api_port::MockCharacterApiPort;
