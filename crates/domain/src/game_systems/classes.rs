//! Character classes and their attribute requirements.
//!
//! Eligibility is a pure function of the current attributes; the form calls
//! [`evaluate_all`] on every render.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{Attribute, Attributes};

/// Classes offered by the reference rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Barbarian,
    Wizard,
    Bard,
}

impl CharacterClass {
    /// All classes in display order.
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Barbarian,
        CharacterClass::Wizard,
        CharacterClass::Bard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Barbarian => "Barbarian",
            CharacterClass::Wizard => "Wizard",
            CharacterClass::Bard => "Bard",
        }
    }

    /// The published minimum for every attribute.
    pub fn requirement(&self) -> ClassRequirement {
        let minimums = Attributes::uniform(9);
        let minimums = match self {
            CharacterClass::Barbarian => minimums.with(Attribute::Strength, 14),
            CharacterClass::Wizard => minimums.with(Attribute::Intelligence, 14),
            CharacterClass::Bard => minimums.with(Attribute::Charisma, 14),
        };
        ClassRequirement::new(minimums)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown class: {}", s)))
    }
}

/// Per-attribute minimum scores for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRequirement {
    minimums: Attributes,
}

impl ClassRequirement {
    pub fn new(minimums: Attributes) -> Self {
        Self { minimums }
    }

    pub fn minimum(&self, attribute: Attribute) -> i32 {
        self.minimums.get(attribute)
    }

    /// True iff every attribute meets or exceeds its minimum.
    pub fn is_met_by(&self, attributes: &Attributes) -> bool {
        Attribute::ALL
            .into_iter()
            .all(|attribute| attributes.get(attribute) >= self.minimum(attribute))
    }

    /// `(attribute, minimum)` in display order.
    pub fn minimums(&self) -> Vec<(Attribute, i32)> {
        self.minimums.iter().collect()
    }

    /// One row per attribute comparing the minimum against `attributes`.
    pub fn breakdown(&self, attributes: &Attributes) -> Vec<RequirementCheck> {
        Attribute::ALL
            .into_iter()
            .map(|attribute| {
                let minimum = self.minimum(attribute);
                let current = attributes.get(attribute);
                RequirementCheck {
                    attribute,
                    minimum,
                    current,
                    met: current >= minimum,
                }
            })
            .collect()
    }
}

/// A single row of a class requirement panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementCheck {
    pub attribute: Attribute,
    pub minimum: i32,
    pub current: i32,
    pub met: bool,
}

/// Eligibility of one class against the current attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassEligibility {
    pub class: CharacterClass,
    pub eligible: bool,
}

pub fn is_eligible(class: CharacterClass, attributes: &Attributes) -> bool {
    class.requirement().is_met_by(attributes)
}

pub fn requirements_for(class: CharacterClass) -> Vec<(Attribute, i32)> {
    class.requirement().minimums()
}

pub fn breakdown(class: CharacterClass, attributes: &Attributes) -> Vec<RequirementCheck> {
    class.requirement().breakdown(attributes)
}

pub fn evaluate_all(attributes: &Attributes) -> Vec<ClassEligibility> {
    CharacterClass::ALL
        .into_iter()
        .map(|class| ClassEligibility {
            class,
            eligible: is_eligible(class, attributes),
        })
        .collect()
}
