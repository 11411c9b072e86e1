//! Character documents as stored by the remote character API.
//!
//! `GET` returns the document wrapped in `{ "body": ... }`; `POST` accepts
//! the bare document. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use charsheet_domain::{
    AllocationRules, Attributes, CharacterSheet, DomainError, SheetSnapshot, Skills,
};

/// The persisted character.
///
/// `attributeTotal` and `skillPointsSpent` are stored so the sheet can be
/// restored without recounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDocument {
    #[serde(default)]
    pub name: String,
    pub attributes: Attributes,
    pub attribute_total: i32,
    pub skills: Skills,
    pub skill_points_spent: i32,
}

/// Envelope the API wraps around a fetched document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEnvelope {
    pub body: CharacterDocument,
}

impl CharacterDocument {
    /// Restore a sheet from this document under the given rules.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the stored values break the
    /// sheet's budgets (see [`CharacterSheet::restore`]).
    pub fn into_sheet(self, rules: AllocationRules) -> Result<CharacterSheet, DomainError> {
        CharacterSheet::restore(self.into(), rules)
    }
}

impl From<&CharacterSheet> for CharacterDocument {
    fn from(sheet: &CharacterSheet) -> Self {
        sheet.snapshot().into()
    }
}

impl From<SheetSnapshot> for CharacterDocument {
    fn from(snapshot: SheetSnapshot) -> Self {
        Self {
            name: snapshot.name,
            attributes: snapshot.attributes,
            attribute_total: snapshot.attribute_total,
            skills: snapshot.skills,
            skill_points_spent: snapshot.skill_points_spent,
        }
    }
}

impl From<CharacterDocument> for SheetSnapshot {
    fn from(document: CharacterDocument) -> Self {
        Self {
            name: document.name,
            attributes: document.attributes,
            attribute_total: document.attribute_total,
            skills: document.skills,
            skill_points_spent: document.skill_points_spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsheet_domain::{Attribute, Skill};
    use serde_json::json;

    #[test]
    fn envelope_decodes_into_a_sheet() {
        let payload = json!({
            "statusCode": 200,
            "body": {
                "name": "Keyleth",
                "attributes": {
                    "Strength": 10, "Dexterity": 10, "Constitution": 10,
                    "Intelligence": 12, "Wisdom": 14, "Charisma": 10
                },
                "attributeTotal": 66,
                "skills": { "Nature": 3, "SleightofHand": 1 },
                "skillPointsSpent": 4
            }
        });

        let envelope: CharacterEnvelope = serde_json::from_value(payload).expect("decode");
        let sheet = envelope
            .body
            .into_sheet(AllocationRules::default())
            .expect("valid document");

        assert_eq!(sheet.name(), "Keyleth");
        assert_eq!(sheet.attribute(Attribute::Wisdom), 14);
        assert_eq!(sheet.attribute_total(), 66);
        assert_eq!(sheet.skill(Skill::SleightOfHand), 1);
        assert_eq!(sheet.skill(Skill::Arcana), 0);
        // modifier(12) = 1 -> 14 budget, 4 spent
        assert_eq!(sheet.skill_points_available(), 10);
    }

    #[test]
    fn document_serializes_with_camel_case_fields() {
        let mut sheet = CharacterSheet::new();
        sheet.set_name("Vax");
        sheet.increment_attribute(Attribute::Dexterity);
        sheet.increment_skill(Skill::Stealth);

        let value = serde_json::to_value(CharacterDocument::from(&sheet)).expect("encode");

        assert_eq!(value["name"], "Vax");
        assert_eq!(value["attributes"]["Dexterity"], 11);
        assert_eq!(value["attributeTotal"], 61);
        assert_eq!(value["skills"]["Stealth"], 1);
        assert_eq!(value["skillPointsSpent"], 1);
        assert!(value.get("skillPointsAvailable").is_none());
        assert_eq!(value["skills"].as_object().map(|s| s.len()), Some(18));
    }

    #[test]
    fn missing_name_decodes_as_empty() {
        let payload = json!({
            "attributes": {},
            "attributeTotal": 60,
            "skills": {},
            "skillPointsSpent": 0
        });
        let document: CharacterDocument = serde_json::from_value(payload).expect("decode");
        assert_eq!(document.name, "");
        assert_eq!(document.attributes, Attributes::default());
    }

    #[test]
    fn out_of_range_documents_are_rejected_on_restore() {
        let huge_intelligence = json!({
            "body": {
                "attributes": { "Intelligence": 2000000000 },
                "attributeTotal": 2000000050,
                "skills": {},
                "skillPointsSpent": 0
            }
        });
        let envelope: CharacterEnvelope =
            serde_json::from_value(huge_intelligence).expect("decode");
        let err = envelope
            .body
            .into_sheet(AllocationRules::default())
            .expect_err("score above budget");
        assert!(err.is_validation());

        let negatives = json!({
            "attributes": { "Strength": -5 },
            "attributeTotal": 45,
            "skills": { "Arcana": -3 },
            "skillPointsSpent": -3
        });
        let document: CharacterDocument = serde_json::from_value(negatives).expect("decode");
        assert!(document.into_sheet(AllocationRules::default()).is_err());
    }

    #[test]
    fn missing_counters_fail_to_decode() {
        let payload = json!({ "name": "Percy", "attributes": {}, "skills": {} });
        assert!(serde_json::from_value::<CharacterDocument>(payload).is_err());
    }
}
