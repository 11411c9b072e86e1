pub mod aggregates;
pub mod error;
pub mod events;
pub mod game_systems;
pub mod value_objects;

pub use aggregates::{CharacterSheet, SheetSnapshot};
pub use error::DomainError;
pub use events::{AttributeChange, IgnoreReason, SkillBudgetOutcome, SkillChange};

pub use game_systems::{
    breakdown, evaluate_all, is_eligible, requirements_for, CharacterClass, ClassEligibility,
    ClassRequirement, RequirementCheck,
};

pub use value_objects::{
    modifier, AllocationRules, Attribute, Attributes, CharacterName, Skill, Skills,
    BASE_SKILL_POINTS, DEFAULT_ATTRIBUTE_SCORE, MAX_ATTRIBUTE_POINTS, SKILL_POINTS_PER_MODIFIER,
};
