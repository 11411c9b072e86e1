//! Rule-set specific mechanics.

pub mod classes;

pub use classes::{
    breakdown, evaluate_all, is_eligible, requirements_for, CharacterClass, ClassEligibility,
    ClassRequirement, RequirementCheck,
};
