//! The six core attributes and their ability modifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Score every attribute starts at on a fresh character.
pub const DEFAULT_ATTRIBUTE_SCORE: i32 = 10;

/// Calculate the ability modifier for a score.
///
/// `floor((score - 10) / 2)`. Rust's `/` truncates toward zero, so this uses
/// Euclidean division, which floors for a positive divisor. Saturates at
/// `i32::MIN` instead of overflowing.
pub fn modifier(score: i32) -> i32 {
    score.saturating_sub(10).div_euclid(2)
}

/// One of the six fixed character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Dexterity => "Dexterity",
            Attribute::Constitution => "Constitution",
            Attribute::Intelligence => "Intelligence",
            Attribute::Wisdom => "Wisdom",
            Attribute::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown attribute: {}", s)))
    }
}

/// Scores for all six attributes.
///
/// Missing keys in a wire document fall back to [`DEFAULT_ATTRIBUTE_SCORE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Attributes {
    strength: i32,
    dexterity: i32,
    constitution: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(DEFAULT_ATTRIBUTE_SCORE)
    }
}

impl Attributes {
    /// All six attributes set to the same score.
    pub fn uniform(score: i32) -> Self {
        Self {
            strength: score,
            dexterity: score,
            constitution: score,
            intelligence: score,
            wisdom: score,
            charisma: score,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, attribute: Attribute, score: i32) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = score;
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, attribute: Attribute, score: i32) -> Self {
        self.set(attribute, score);
        self
    }

    /// Ability modifier of a single attribute.
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        modifier(self.get(attribute))
    }

    /// `(attribute, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// Sum of all six scores, saturating at the `i32` bounds.
    pub fn total(&self) -> i32 {
        self.iter()
            .fold(0i32, |total, (_, score)| total.saturating_add(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_floors_toward_negative_infinity() {
        assert_eq!(modifier(1), -5);
        assert_eq!(modifier(7), -2);
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(12), 1);
        assert_eq!(modifier(20), 5);
        assert_eq!(modifier(0), -5);
    }

    #[test]
    fn modifier_handles_extreme_scores() {
        assert_eq!(modifier(i32::MAX), (i32::MAX - 10) / 2);
        assert_eq!(modifier(i32::MIN), i32::MIN / 2);
    }

    #[test]
    fn defaults_to_ten_everywhere() {
        let attributes = Attributes::default();
        for (attribute, score) in attributes.iter() {
            assert_eq!(score, 10, "{attribute} should default to 10");
        }
        assert_eq!(attributes.total(), 60);
    }

    #[test]
    fn set_and_get_round_through_each_slot() {
        let mut attributes = Attributes::default();
        for (i, attribute) in Attribute::ALL.into_iter().enumerate() {
            attributes.set(attribute, 11 + i as i32);
        }
        assert_eq!(attributes.get(Attribute::Strength), 11);
        assert_eq!(attributes.get(Attribute::Charisma), 16);
        assert_eq!(attributes.modifier(Attribute::Charisma), 3);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("intelligence".parse::<Attribute>(), Ok(Attribute::Intelligence));
        assert_eq!(" Wisdom ".parse::<Attribute>(), Ok(Attribute::Wisdom));
        assert!("Luck".parse::<Attribute>().is_err());
    }

    #[test]
    fn serializes_with_pascal_case_keys() {
        let attributes = Attributes::default().with(Attribute::Strength, 14);
        let json = serde_json::to_value(attributes).expect("serialize");
        assert_eq!(json["Strength"], 14);
        assert_eq!(json["Intelligence"], 10);
    }

    #[test]
    fn missing_keys_fall_back_to_default_score() {
        let attributes: Attributes =
            serde_json::from_str(r#"{"Strength": 15}"#).expect("deserialize");
        assert_eq!(attributes.get(Attribute::Strength), 15);
        assert_eq!(attributes.get(Attribute::Wisdom), 10);
    }
}
