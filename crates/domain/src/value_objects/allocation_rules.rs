//! Point-buy budgets for attributes and skills

use serde::{Deserialize, Serialize};

use super::attribute::modifier;
use crate::error::DomainError;

/// Maximum running attribute total in the reference configuration.
pub const MAX_ATTRIBUTE_POINTS: i32 = 70;

/// Skill points granted before the Intelligence modifier is applied.
pub const BASE_SKILL_POINTS: i32 = 10;

/// Skill points gained (or lost) per point of Intelligence modifier.
pub const SKILL_POINTS_PER_MODIFIER: i32 = 4;

/// Budgets the character sheet enforces on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRules {
    max_attribute_points: i32,
    base_skill_points: i32,
    skill_points_per_modifier: i32,
}

impl Default for AllocationRules {
    fn default() -> Self {
        Self {
            max_attribute_points: MAX_ATTRIBUTE_POINTS,
            base_skill_points: BASE_SKILL_POINTS,
            skill_points_per_modifier: SKILL_POINTS_PER_MODIFIER,
        }
    }
}

impl AllocationRules {
    /// Build a custom rule set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if any budget is negative.
    pub fn new(
        max_attribute_points: i32,
        base_skill_points: i32,
        skill_points_per_modifier: i32,
    ) -> Result<Self, DomainError> {
        if max_attribute_points < 0 || base_skill_points < 0 || skill_points_per_modifier < 0 {
            return Err(DomainError::constraint(
                "allocation budgets cannot be negative",
            ));
        }
        Ok(Self {
            max_attribute_points,
            base_skill_points,
            skill_points_per_modifier,
        })
    }

    pub fn max_attribute_points(&self) -> i32 {
        self.max_attribute_points
    }

    pub fn base_skill_points(&self) -> i32 {
        self.base_skill_points
    }

    pub fn skill_points_per_modifier(&self) -> i32 {
        self.skill_points_per_modifier
    }

    /// Total skill points an Intelligence score grants, before any spending.
    ///
    /// `max(0, base + per_modifier * modifier(intelligence))`
    ///
    /// Saturates instead of overflowing for extreme scores.
    pub fn skill_point_budget(&self, intelligence: i32) -> i32 {
        self.skill_points_per_modifier
            .saturating_mul(modifier(intelligence))
            .saturating_add(self.base_skill_points)
            .max(0)
    }

    /// Skill points still available after `spent` have been allocated.
    pub fn skill_points_available(&self, intelligence: i32, spent: i32) -> i32 {
        self.skill_point_budget(intelligence)
            .saturating_sub(spent)
            .max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_budget_follows_intelligence_modifier() {
        let rules = AllocationRules::default();
        assert_eq!(rules.skill_point_budget(10), 10);
        assert_eq!(rules.skill_point_budget(11), 10);
        assert_eq!(rules.skill_point_budget(12), 14);
        assert_eq!(rules.skill_point_budget(8), 6);
        assert_eq!(rules.skill_point_budget(20), 30);
    }

    #[test]
    fn budget_is_floored_at_zero() {
        let rules = AllocationRules::default();
        // modifier(1) = -5 -> 10 - 20
        assert_eq!(rules.skill_point_budget(1), 0);
        assert_eq!(rules.skill_points_available(10, 12), 0);
    }

    #[test]
    fn available_subtracts_spent_points() {
        let rules = AllocationRules::default();
        assert_eq!(rules.skill_points_available(10, 4), 6);
        assert_eq!(rules.skill_points_available(14, 4), 14);
    }

    #[test]
    fn extreme_scores_saturate_instead_of_overflowing() {
        let rules = AllocationRules::default();
        assert_eq!(rules.skill_point_budget(2_000_000_000), i32::MAX);
        assert_eq!(rules.skill_point_budget(i32::MAX), i32::MAX);
        assert_eq!(rules.skill_point_budget(i32::MIN), 0);
        assert_eq!(rules.skill_points_available(10, i32::MIN), i32::MAX);
    }

    #[test]
    fn negative_budgets_are_rejected() {
        assert!(AllocationRules::new(-1, 10, 4).is_err());
        assert!(AllocationRules::new(70, -10, 4).is_err());
        let rules = AllocationRules::new(72, 8, 2).expect("valid rules");
        assert_eq!(rules.max_attribute_points(), 72);
        assert_eq!(rules.skill_point_budget(14), 12);
    }
}
