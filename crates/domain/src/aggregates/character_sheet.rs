//! Character sheet aggregate - point-buy attributes and skills
//!
//! # Invariants
//!
//! - `attribute_total` never exceeds `rules.max_attribute_points()` through an
//!   increment (a loaded snapshot may already be over it)
//! - A restored snapshot has no negative values, no single score above the
//!   attribute budget, and counters that match their maps
//! - No attribute or skill goes below zero through a decrement
//! - `skill_points_available == max(0, budget(Intelligence) - skill_points_spent)`
//!   after every mutation
//! - If lowering Intelligence shrinks the budget below what is already spent,
//!   every skill is reset to zero (see [`CharacterSheet::recompute_skill_budget`])
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all state is mutated through methods that keep the
//!   budgets consistent
//! - **Outcome enums**: every edit returns what happened, including edits that
//!   were ignored because a budget ran out
//! - **Single-step edits**: a stepper change moves exactly one point in the
//!   requested direction, however far the requested value is from the previous

use std::cmp::Ordering;

use crate::error::DomainError;
use crate::events::{AttributeChange, IgnoreReason, SkillBudgetOutcome, SkillChange};
use crate::game_systems::{evaluate_all, ClassEligibility};
use crate::value_objects::{AllocationRules, Attribute, Attributes, CharacterName, Skill, Skills};

/// Persisted fields of a character sheet.
///
/// `skill_points_available` is intentionally absent: it is always derived
/// from Intelligence and `skill_points_spent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSnapshot {
    pub name: String,
    pub attributes: Attributes,
    pub attribute_total: i32,
    pub skills: Skills,
    pub skill_points_spent: i32,
}

/// The character being edited in the form.
///
/// # Example
///
/// ```
/// use charsheet_domain::aggregates::CharacterSheet;
/// use charsheet_domain::value_objects::{Attribute, Skill};
///
/// let mut sheet = CharacterSheet::new();
/// assert_eq!(sheet.skill_points_available(), 10);
///
/// sheet.increment_attribute(Attribute::Intelligence);
/// sheet.increment_attribute(Attribute::Intelligence);
/// assert_eq!(sheet.skill_points_available(), 14);
///
/// assert!(sheet.increment_skill(Skill::Arcana).is_applied());
/// assert_eq!(sheet.skill_total(Skill::Arcana), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheet {
    name: String,
    attributes: Attributes,
    attribute_total: i32,
    skills: Skills,
    skill_points_spent: i32,
    skill_points_available: i32,
    rules: AllocationRules,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterSheet {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// A blank sheet under the reference rules.
    pub fn new() -> Self {
        Self::with_rules(AllocationRules::default())
    }

    /// A blank sheet under custom rules.
    pub fn with_rules(rules: AllocationRules) -> Self {
        let attributes = Attributes::default();
        Self {
            name: String::new(),
            attributes,
            attribute_total: attributes.total(),
            skills: Skills::default(),
            skill_points_spent: 0,
            skill_points_available: rules.skill_point_budget(attributes.get(Attribute::Intelligence)),
            rules,
        }
    }

    /// Replace everything with a fetched snapshot.
    ///
    /// Available skill points are recomputed from the snapshot's Intelligence
    /// and spent points. No reset is applied here even if the snapshot spends
    /// more than its Intelligence allows.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - An attribute score is negative or above `rules.max_attribute_points()`
    /// - `attribute_total` is not the sum of the scores
    /// - A skill or `skill_points_spent` is negative
    /// - `skill_points_spent` is not the sum of the skill points
    pub fn restore(snapshot: SheetSnapshot, rules: AllocationRules) -> Result<Self, DomainError> {
        Self::validate_snapshot(&snapshot, &rules)?;

        let available = rules.skill_points_available(
            snapshot.attributes.get(Attribute::Intelligence),
            snapshot.skill_points_spent,
        );
        Ok(Self {
            name: snapshot.name,
            attributes: snapshot.attributes,
            attribute_total: snapshot.attribute_total,
            skills: snapshot.skills,
            skill_points_spent: snapshot.skill_points_spent,
            skill_points_available: available,
            rules,
        })
    }

    fn validate_snapshot(
        snapshot: &SheetSnapshot,
        rules: &AllocationRules,
    ) -> Result<(), DomainError> {
        let max_score = rules.max_attribute_points();
        let mut score_sum: i64 = 0;
        for (attribute, score) in snapshot.attributes.iter() {
            if !(0..=max_score).contains(&score) {
                return Err(DomainError::validation(format!(
                    "Stored {} score {} is outside 0..={}",
                    attribute, score, max_score
                )));
            }
            score_sum += i64::from(score);
        }
        if i64::from(snapshot.attribute_total) != score_sum {
            return Err(DomainError::validation(format!(
                "Stored attribute total {} does not match the scores ({})",
                snapshot.attribute_total, score_sum
            )));
        }

        let mut points_sum: i64 = 0;
        for (skill, points) in snapshot.skills.iter() {
            if points < 0 {
                return Err(DomainError::validation(format!(
                    "Stored {} points cannot be negative",
                    skill
                )));
            }
            points_sum += i64::from(points);
        }
        if snapshot.skill_points_spent < 0 {
            return Err(DomainError::validation(
                "Stored skill points spent cannot be negative",
            ));
        }
        if i64::from(snapshot.skill_points_spent) != points_sum {
            return Err(DomainError::validation(format!(
                "Stored skill points spent {} does not match the skills ({})",
                snapshot.skill_points_spent, points_sum
            )));
        }
        Ok(())
    }

    /// Capture the persisted fields, e.g. for saving.
    pub fn snapshot(&self) -> SheetSnapshot {
        SheetSnapshot {
            name: self.name.clone(),
            attributes: self.attributes,
            attribute_total: self.attribute_total,
            skills: self.skills.clone(),
            skill_points_spent: self.skill_points_spent,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.attributes.modifier(attribute)
    }

    pub fn attribute_total(&self) -> i32 {
        self.attribute_total
    }

    /// Points left before the attribute budget is exhausted.
    pub fn attribute_points_remaining(&self) -> i32 {
        self.rules
            .max_attribute_points()
            .saturating_sub(self.attribute_total)
            .max(0)
    }

    pub fn skills(&self) -> &Skills {
        &self.skills
    }

    pub fn skill(&self, skill: Skill) -> i32 {
        self.skills.get(skill)
    }

    /// Skill points plus the governing attribute's modifier.
    pub fn skill_total(&self, skill: Skill) -> i32 {
        self.skills.get(skill) + self.modifier(skill.governing_attribute())
    }

    pub fn skill_points_spent(&self) -> i32 {
        self.skill_points_spent
    }

    pub fn skill_points_available(&self) -> i32 {
        self.skill_points_available
    }

    pub fn rules(&self) -> &AllocationRules {
        &self.rules
    }

    /// Eligibility for every class against the current attributes.
    pub fn class_eligibility(&self) -> Vec<ClassEligibility> {
        evaluate_all(&self.attributes)
    }

    /// The name as it would be saved.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the name is blank.
    pub fn validated_name(&self) -> Result<CharacterName, DomainError> {
        CharacterName::new(self.name.as_str())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Free-text edit of the name field. Validation happens on save.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Apply a stepper change for an attribute.
    ///
    /// The direction is taken from `requested` vs `previous`; the stored score
    /// moves by exactly one point.
    pub fn change_attribute(
        &mut self,
        attribute: Attribute,
        requested: i32,
        previous: i32,
    ) -> AttributeChange {
        match requested.cmp(&previous) {
            Ordering::Greater => self.increment_attribute(attribute),
            Ordering::Less => self.decrement_attribute(attribute),
            Ordering::Equal => AttributeChange::Ignored {
                attribute,
                reason: IgnoreReason::Unchanged,
            },
        }
    }

    pub fn increment_attribute(&mut self, attribute: Attribute) -> AttributeChange {
        if self.attribute_total >= self.rules.max_attribute_points() {
            return AttributeChange::Ignored {
                attribute,
                reason: IgnoreReason::BudgetExhausted,
            };
        }
        self.step_attribute(attribute, 1)
    }

    pub fn decrement_attribute(&mut self, attribute: Attribute) -> AttributeChange {
        if self.attributes.get(attribute) <= 0 {
            return AttributeChange::Ignored {
                attribute,
                reason: IgnoreReason::AtFloor,
            };
        }
        self.step_attribute(attribute, -1)
    }

    fn step_attribute(&mut self, attribute: Attribute, delta: i32) -> AttributeChange {
        let from = self.attributes.get(attribute);
        let to = from.saturating_add(delta);
        self.attributes.set(attribute, to);
        self.attribute_total = self.attribute_total.saturating_add(delta);

        // Every attribute edit, not only Intelligence.
        let skill_budget = self.recompute_skill_budget();

        AttributeChange::Applied {
            attribute,
            from,
            to,
            attribute_total: self.attribute_total,
            skill_budget,
        }
    }

    /// Apply a stepper change for a skill.
    pub fn change_skill(&mut self, skill: Skill, requested: i32, previous: i32) -> SkillChange {
        match requested.cmp(&previous) {
            Ordering::Greater => self.increment_skill(skill),
            Ordering::Less => self.decrement_skill(skill),
            Ordering::Equal => SkillChange::Ignored {
                skill,
                reason: IgnoreReason::Unchanged,
            },
        }
    }

    pub fn increment_skill(&mut self, skill: Skill) -> SkillChange {
        if self.skill_points_available <= 0 {
            return SkillChange::Ignored {
                skill,
                reason: IgnoreReason::BudgetExhausted,
            };
        }
        self.step_skill(skill, 1)
    }

    /// Refunds one point to the available pool.
    pub fn decrement_skill(&mut self, skill: Skill) -> SkillChange {
        if self.skills.get(skill) <= 0 {
            return SkillChange::Ignored {
                skill,
                reason: IgnoreReason::AtFloor,
            };
        }
        self.step_skill(skill, -1)
    }

    fn step_skill(&mut self, skill: Skill, delta: i32) -> SkillChange {
        let from = self.skills.get(skill);
        let to = from.saturating_add(delta);
        self.skills.set(skill, to);
        self.skill_points_spent = self.skill_points_spent.saturating_add(delta);
        self.skill_points_available = self.rules.skill_points_available(
            self.attributes.get(Attribute::Intelligence),
            self.skill_points_spent,
        );

        SkillChange::Applied {
            skill,
            from,
            to,
            available: self.skill_points_available,
            spent: self.skill_points_spent,
        }
    }

    /// Re-derive available skill points from Intelligence.
    ///
    /// When the new budget is smaller than what is already spent, spending
    /// cannot be re-proportioned: every skill returns to zero and the whole
    /// budget becomes available again.
    ///
    /// The reset compares `spent > budget`, not `spent > budget - spent`:
    /// a sheet whose spending still fits the new budget keeps its skills and
    /// just has fewer points left.
    pub fn recompute_skill_budget(&mut self) -> SkillBudgetOutcome {
        let budget = self
            .rules
            .skill_point_budget(self.attributes.get(Attribute::Intelligence));

        if self.skill_points_spent > budget {
            let cleared_points = self.skill_points_spent;
            self.skills.clear();
            self.skill_points_spent = 0;
            self.skill_points_available = budget;
            return SkillBudgetOutcome::Reset {
                available: budget,
                cleared_points,
            };
        }

        self.skill_points_available = budget.saturating_sub(self.skill_points_spent);
        SkillBudgetOutcome::Recomputed {
            available: self.skill_points_available,
        }
    }
}
