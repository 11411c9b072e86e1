//! Skills and the attribute that governs each one

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::attribute::Attribute;
use crate::error::DomainError;

/// One of the eighteen fixed skills.
///
/// The serialized form is the display name with spaces removed, matching the
/// keys the character API stores (note the lowercase `of` in `SleightofHand`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    #[serde(rename = "SleightofHand")]
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    /// All skills in display order.
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    /// Human-readable name for the form.
    pub fn display_name(&self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::AnimalHandling => "Animal Handling",
            Skill::Arcana => "Arcana",
            Skill::Athletics => "Athletics",
            Skill::Deception => "Deception",
            Skill::History => "History",
            Skill::Insight => "Insight",
            Skill::Intimidation => "Intimidation",
            Skill::Investigation => "Investigation",
            Skill::Medicine => "Medicine",
            Skill::Nature => "Nature",
            Skill::Perception => "Perception",
            Skill::Performance => "Performance",
            Skill::Persuasion => "Persuasion",
            Skill::Religion => "Religion",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Stealth => "Stealth",
            Skill::Survival => "Survival",
        }
    }

    /// The attribute whose modifier is added to this skill.
    pub fn governing_attribute(&self) -> Attribute {
        match self {
            Skill::Athletics => Attribute::Strength,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Attribute::Dexterity,
            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Attribute::Intelligence,
            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Attribute::Wisdom,
            Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
                Attribute::Charisma
            }
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    /// Accepts both the display name and the space-free wire key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Skill::ALL
            .into_iter()
            .find(|skill| {
                let key: String = skill
                    .display_name()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                key.eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}

/// Points allocated to every skill.
///
/// Always holds an entry for each of the eighteen skills. Like [`Attributes`],
/// a wire document may omit keys (filled with zero) or carry keys this sheet
/// does not know (ignored).
///
/// [`Attributes`]: crate::value_objects::Attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, i32>", into = "BTreeMap<Skill, i32>")]
pub struct Skills(BTreeMap<Skill, i32>);

impl Default for Skills {
    fn default() -> Self {
        Self(Skill::ALL.into_iter().map(|skill| (skill, 0)).collect())
    }
}

impl Skills {
    pub fn get(&self, skill: Skill) -> i32 {
        self.0.get(&skill).copied().unwrap_or(0)
    }

    pub fn set(&mut self, skill: Skill, points: i32) {
        self.0.insert(skill, points);
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, skill: Skill, points: i32) -> Self {
        self.set(skill, points);
        self
    }

    /// Return every skill to zero.
    pub fn clear(&mut self) {
        for points in self.0.values_mut() {
            *points = 0;
        }
    }

    /// `(skill, points)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, i32)> + '_ {
        self.0.iter().map(|(skill, points)| (*skill, *points))
    }

    /// Sum of points across all skills, saturating at the `i32` bounds.
    pub fn total(&self) -> i32 {
        self.0
            .values()
            .fold(0i32, |total, points| total.saturating_add(*points))
    }
}

impl From<BTreeMap<Skill, i32>> for Skills {
    fn from(values: BTreeMap<Skill, i32>) -> Self {
        let mut skills = Skills::default();
        for (skill, points) in values {
            skills.set(skill, points);
        }
        skills
    }
}

impl From<BTreeMap<String, i32>> for Skills {
    fn from(values: BTreeMap<String, i32>) -> Self {
        let mut skills = Skills::default();
        for (key, points) in values {
            if let Ok(skill) = key.parse::<Skill>() {
                skills.set(skill, points);
            }
        }
        skills
    }
}

impl From<Skills> for BTreeMap<Skill, i32> {
    fn from(skills: Skills) -> Self {
        skills.0
    }
}
