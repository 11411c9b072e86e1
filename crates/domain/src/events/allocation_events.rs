//! Allocation outcomes
//!
//! These enums communicate what happened when the character sheet was edited,
//! allowing the form to react (or not) appropriately. An ignored edit is a
//! normal outcome, not an error.

use crate::value_objects::{Attribute, Skill};

/// Why an edit left the sheet untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Requested value equals the previous value
    Unchanged,
    /// No attribute or skill points left to spend
    BudgetExhausted,
    /// Value is already zero and cannot go lower
    AtFloor,
}

/// Outcome of recomputing the skill point budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillBudgetOutcome {
    /// Spending still fits; only the available pool changed (if at all)
    Recomputed { available: i32 },
    /// Spending no longer fits the budget; every skill went back to zero
    Reset { available: i32, cleared_points: i32 },
}

impl SkillBudgetOutcome {
    pub fn available(&self) -> i32 {
        match self {
            SkillBudgetOutcome::Recomputed { available }
            | SkillBudgetOutcome::Reset { available, .. } => *available,
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, SkillBudgetOutcome::Reset { .. })
    }
}

/// Outcome of an attribute stepper change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChange {
    Applied {
        attribute: Attribute,
        from: i32,
        to: i32,
        attribute_total: i32,
        skill_budget: SkillBudgetOutcome,
    },
    Ignored {
        attribute: Attribute,
        reason: IgnoreReason,
    },
}

impl AttributeChange {
    pub fn is_applied(&self) -> bool {
        matches!(self, AttributeChange::Applied { .. })
    }
}

/// Outcome of a skill stepper change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillChange {
    Applied {
        skill: Skill,
        from: i32,
        to: i32,
        available: i32,
        spent: i32,
    },
    Ignored {
        skill: Skill,
        reason: IgnoreReason,
    },
}

impl SkillChange {
    pub fn is_applied(&self) -> bool {
        matches!(self, SkillChange::Applied { .. })
    }
}
