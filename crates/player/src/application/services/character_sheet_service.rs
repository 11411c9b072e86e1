//! Character Sheet Service - loads, edits and saves the character being built
//!
//! The service owns no state: the form keeps the [`CharacterSheet`] in a
//! signal and passes it in. Edits run synchronously against the aggregate;
//! only `initialize` and `save` touch the network.

use std::sync::Arc;

use charsheet_domain::{
    AllocationRules, Attribute, AttributeChange, CharacterSheet, Skill, SkillBudgetOutcome,
    SkillChange,
};
use charsheet_shared::CharacterDocument;

use crate::application::ServiceError;
use crate::ports::outbound::CharacterApiPort;

#[derive(Clone)]
pub struct CharacterSheetService {
    api: Arc<dyn CharacterApiPort>,
    rules: AllocationRules,
}

impl CharacterSheetService {
    /// Create a service using the reference allocation rules
    pub fn new(api: Arc<dyn CharacterApiPort>) -> Self {
        Self::with_rules(api, AllocationRules::default())
    }

    pub fn with_rules(api: Arc<dyn CharacterApiPort>, rules: AllocationRules) -> Self {
        Self { api, rules }
    }

    pub fn rules(&self) -> AllocationRules {
        self.rules
    }

    /// The sheet shown before the stored character arrives.
    pub fn blank_sheet(&self) -> CharacterSheet {
        CharacterSheet::with_rules(self.rules)
    }

    /// Fetch the stored character and build a sheet from it.
    ///
    /// No retry; a failure leaves the caller's current sheet untouched. A
    /// stored character that breaks the budgets is a
    /// [`ServiceError::Validation`].
    pub async fn initialize(&self) -> Result<CharacterSheet, ServiceError> {
        let document = self.api.fetch_character().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to load character");
            e
        })?;

        let sheet = document.into_sheet(self.rules).map_err(|e| {
            tracing::warn!(error = %e, "Stored character is invalid");
            e
        })?;
        tracing::info!(
            name = %sheet.name(),
            attribute_total = sheet.attribute_total(),
            skill_points_spent = sheet.skill_points_spent(),
            skill_points_available = sheet.skill_points_available(),
            "Loaded character"
        );
        Ok(sheet)
    }

    /// Apply an attribute stepper change.
    pub fn change_attribute(
        &self,
        sheet: &mut CharacterSheet,
        attribute: Attribute,
        requested: i32,
        previous: i32,
    ) -> AttributeChange {
        let outcome = sheet.change_attribute(attribute, requested, previous);
        match outcome {
            AttributeChange::Applied {
                skill_budget:
                    SkillBudgetOutcome::Reset {
                        available,
                        cleared_points,
                    },
                ..
            } => {
                tracing::info!(
                    %attribute,
                    cleared_points,
                    available,
                    "Skill budget shrank below spending; skills reset"
                );
            }
            AttributeChange::Applied { .. } => {}
            AttributeChange::Ignored { attribute, reason } => {
                tracing::debug!(%attribute, ?reason, "Attribute edit ignored");
            }
        }
        outcome
    }

    /// Apply a skill stepper change.
    pub fn change_skill(
        &self,
        sheet: &mut CharacterSheet,
        skill: Skill,
        requested: i32,
        previous: i32,
    ) -> SkillChange {
        let outcome = sheet.change_skill(skill, requested, previous);
        if let SkillChange::Ignored { skill, reason } = outcome {
            tracing::debug!(%skill, ?reason, "Skill edit ignored");
        }
        outcome
    }

    /// Persist the sheet.
    ///
    /// Fails fast with [`ServiceError::Validation`] when the name is blank,
    /// without sending anything. The response body is read but not applied.
    pub async fn save(&self, sheet: &CharacterSheet) -> Result<(), ServiceError> {
        let name = sheet.validated_name()?;

        let mut document = CharacterDocument::from(sheet);
        document.name = name.into();

        let response = self.api.save_character(&document).await.map_err(|e| {
            tracing::warn!(error = %e, name = %document.name, "Failed to save character");
            e
        })?;

        tracing::info!(name = %document.name, "Saved character");
        tracing::trace!(%response, "Save response");
        Ok(())
    }
}
