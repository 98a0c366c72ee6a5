//! Interactive gap scorer: priority from `gap × importance`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::{Importance, SkillRequirement};
use crate::scoring::Priority;

/// One skill scored against a user's stated proficiency. Ephemeral: built
/// per scoring invocation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSkill {
    pub skill: String,
    pub required: i32,
    pub user: i32,
    /// required − user; signed, may be negative when the user exceeds the
    /// requirement.
    pub gap: i32,
    pub importance: Importance,
    /// gap × importance weight. Only this scoring path uses it.
    pub priority_score: i32,
    pub priority: Priority,
}

/// Interactive priority policy: thresholds on the weighted score.
///
/// Distinct from [`crate::scoring::batch::categorize_gap`]; the two reports
/// evolved separately and stakeholders asked to keep both rules as-is.
pub fn categorize_score(priority_score: i32) -> Priority {
    if priority_score >= 6 {
        Priority::High
    } else if priority_score >= 3 {
        Priority::Medium
    } else {
        // Includes zero and negative scores: a skill the user already meets
        // or exceeds is simply low priority, not a special case.
        Priority::Low
    }
}

/// Scores every requirement of a role against the user's proficiencies.
///
/// A skill missing from `user_levels` defaults to 1 (Beginner). Output
/// order matches input order. Pure and deterministic; no failure mode for
/// well-typed input.
pub fn score_skills(
    requirements: &[&SkillRequirement],
    user_levels: &HashMap<String, i32>,
) -> Vec<ScoredSkill> {
    requirements
        .iter()
        .map(|req| {
            let required = req.required.weight();
            let user = user_levels.get(&req.skill).copied().unwrap_or(1);
            let gap = required - user;
            let priority_score = gap * req.importance.weight();
            ScoredSkill {
                skill: req.skill.clone(),
                required,
                user,
                gap,
                importance: req.importance,
                priority_score,
                priority: categorize_score(priority_score),
            }
        })
        .collect()
}

/// Form-input convention: blank or non-numeric proficiency means 0.
///
/// This is distinct from the default of 1 applied to skills absent from the
/// proficiency map; a submitted-but-unparseable value fails open to 0.
/// Only unsigned digit strings count as numeric ("-2" is not a level).
pub fn parse_form_level(raw: &str) -> i32 {
    raw.trim().parse::<u32>().map(|v| v as i32).unwrap_or(0)
}
