//! Batch gap scorer: priority from the raw gap with an importance override.

use crate::catalog::Importance;
use crate::scoring::Priority;

/// Gap assumed for a skill entirely absent from a user's profile. Maximal
/// on the 1..=3 ordinal scale regardless of the actual required level.
pub const MISSING_SKILL_GAP: i32 = 3;

/// Batch priority policy.
///
/// `gap ≥ 2 OR importance == High → High`; `gap == 1 OR importance ==
/// Medium → Medium`; else Low. This rule differs from
/// [`crate::scoring::interactive::categorize_score`] — the two reports
/// evolved independently and the divergence is preserved on purpose.
pub fn categorize_gap(gap: i32, importance: Importance) -> Priority {
    if gap >= 2 || importance == Importance::High {
        Priority::High
    } else if gap == 1 || importance == Importance::Medium {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Priority for a skill the user does not have at all. Always High: the
/// assumed gap of 3 satisfies the `gap ≥ 2` arm before importance is even
/// consulted.
pub fn missing_skill_priority(importance: Importance) -> Priority {
    categorize_gap(MISSING_SKILL_GAP, importance)
}
