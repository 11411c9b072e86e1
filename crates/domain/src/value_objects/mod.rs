//! Value objects - Immutable objects defined by their attributes

mod allocation_rules;
mod attribute;
mod names;
mod skill;

pub use allocation_rules::{
    AllocationRules, BASE_SKILL_POINTS, MAX_ATTRIBUTE_POINTS, SKILL_POINTS_PER_MODIFIER,
};
pub use attribute::{modifier, Attribute, Attributes, DEFAULT_ATTRIBUTE_SCORE};
pub use names::CharacterName;
pub use skill::{Skill, Skills};
