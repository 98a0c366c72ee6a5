//! Recommendation text for a scored skill.

use serde::{Deserialize, Serialize};

use crate::scoring::interactive::ScoredSkill;

/// One row of the interactive results view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    pub gap: i32,
    pub importance: String,
    pub text: String,
}

/// Maps a scored skill to a suggestion string. The importance level is
/// always appended in parentheses; a met requirement never mentions "gap".
pub fn recommend(scored: &ScoredSkill) -> Recommendation {
    let skill = &scored.skill;
    let mut text = if scored.gap <= 0 {
        format!("You meet the required proficiency for {skill}.")
    } else if scored.gap == 1 {
        format!("Small gap for {skill}. Consider additional practice or short courses.")
    } else if scored.gap == 2 {
        format!("Moderate gap for {skill}. Consider focused training or hands-on projects.")
    } else {
        format!("Large gap for {skill}. Consider foundational learning to improve this skill.")
    };
    text.push_str(&format!(" (Future Importance: {}).", scored.importance));

    Recommendation {
        skill: skill.clone(),
        gap: scored.gap,
        importance: scored.importance.to_string(),
        text,
    }
}

/// Generates recommendations for a whole scored role, preserving order.
pub fn recommend_all(scored: &[ScoredSkill]) -> Vec<Recommendation> {
    scored.iter().map(recommend).collect()
}
