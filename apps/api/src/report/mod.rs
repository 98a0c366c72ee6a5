//! Batch report generation: per-user gap analysis text and CSV export.

pub mod writer;

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::catalog::RoleCatalog;
use crate::errors::AppError;
use crate::profiles::{find_profile, UserProfile};
use crate::scoring::batch::{categorize_gap, missing_skill_priority};

/// One output row: `User ID, User Name, Job Role, Result`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    #[serde(rename = "User ID")]
    pub user_id: u32,
    #[serde(rename = "User Name")]
    pub user_name: String,
    #[serde(rename = "Job Role")]
    pub job_role: String,
    /// Multi-line analysis text.
    #[serde(rename = "Result")]
    pub result: String,
}

/// Runs the batch analysis for one user profile.
///
/// Skills the user lacks entirely are reported at the assumed maximal gap;
/// skills where the user meets or exceeds the requirement are omitted. A
/// role with no catalog entries reads as fully satisfied, matching the
/// behavior of the report this replaces.
pub fn analyze_user(catalog: &RoleCatalog, profile: &UserProfile) -> ReportRow {
    let mut missing = Vec::new();
    let mut gaps = Vec::new();

    for req in catalog.requirements_for(&profile.job_role) {
        let key = req.skill.trim().to_lowercase();
        let required = req.required.weight();

        match profile.skills.get(&key) {
            None => {
                let priority = missing_skill_priority(req.importance);
                missing.push(format!(
                    "- {key} (Required Proficiency: {required}, Priority: {priority})"
                ));
            }
            Some(&user) => {
                let gap = required - user;
                if gap > 0 {
                    let priority = categorize_gap(gap, req.importance);
                    let size = match gap {
                        1 => "Small",
                        2 => "Moderate",
                        _ => "Large",
                    };
                    gaps.push(format!(
                        "- {key} (Required: {required}, User: {user}) - {size} gap, Priority: {priority}"
                    ));
                }
            }
        }
    }

    let mut lines = Vec::new();
    if !missing.is_empty() {
        lines.push("Missing Skills (with Priority):".to_string());
        lines.extend(missing);
    }
    if !gaps.is_empty() {
        lines.push("\nProficiency Gaps (with Priority):".to_string());
        lines.extend(gaps);
    }
    if lines.is_empty() {
        lines.push(format!(
            "User {} ({}) has all the required skills and proficiencies for the role: {}",
            profile.user_id, profile.user_name, profile.job_role
        ));
    }

    ReportRow {
        user_id: profile.user_id,
        user_name: profile.user_name.clone(),
        job_role: profile.job_role.clone(),
        result: lines.join("\n"),
    }
}

/// Runs the analysis for every user id in the range, in order. A missing
/// id is fatal; bad input data here is not a condition to score around.
pub fn run_batch(
    catalog: &RoleCatalog,
    profiles: &[UserProfile],
    user_ids: RangeInclusive<u32>,
) -> Result<Vec<ReportRow>, AppError> {
    let mut rows = Vec::new();
    for user_id in user_ids {
        let profile = find_profile(profiles, user_id)?;
        rows.push(analyze_user(catalog, profile));
    }
    Ok(rows)
}
