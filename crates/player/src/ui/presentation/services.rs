//! Service providers for the presentation layer
//!
//! Components use `use_context` to reach application services without
//! depending on infrastructure adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::CharacterSheetService;

/// Services provided to the component tree by the composition root.
#[derive(Clone)]
pub struct Services {
    pub character_sheet: Arc<CharacterSheetService>,
}

impl Services {
    pub fn new(character_sheet: CharacterSheetService) -> Self {
        Self {
            character_sheet: Arc::new(character_sheet),
        }
    }
}

/// Hook to access the CharacterSheetService from context
pub fn use_character_sheet_service() -> Arc<CharacterSheetService> {
    let services = use_context::<Services>();
    services.character_sheet.clone()
}
