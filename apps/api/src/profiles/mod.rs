//! User-profile reference data for the batch report.
//!
//! Expected columns: `User ID, User Name, Job Role, Skill Proficiencies`.
//! The last column is free text of the form `"SQL(Expert), Python(Beginner)"`;
//! an unknown level word inside it is fatal for the whole load, per the
//! no-partial-scoring rule.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::catalog::Proficiency;
use crate::errors::AppError;

/// One user's profile row, with the skill list already parsed.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user_id: u32,
    pub user_name: String,
    pub job_role: String,
    /// Skill name (lowercased, trimmed) → proficiency ordinal 1..=3.
    pub skills: HashMap<String, i32>,
}

#[derive(Debug, Deserialize)]
struct ProfileRecord {
    #[serde(rename = "User ID")]
    user_id: u32,
    #[serde(rename = "User Name")]
    user_name: String,
    #[serde(rename = "Job Role")]
    job_role: String,
    #[serde(rename = "Skill Proficiencies")]
    skill_proficiencies: String,
}

/// Parses a `"Name(Level), Name(Level)"` proficiency string.
///
/// Skill names are lowercased and trimmed so they match the catalog's
/// normalized skill names. A token without parentheses or with a level word
/// outside the closed set is a hard error.
pub fn parse_skill_proficiencies(raw: &str) -> Result<HashMap<String, i32>, AppError> {
    let mut skills = HashMap::new();
    if raw.trim().is_empty() {
        return Ok(skills);
    }

    for token in raw.split(", ") {
        let (name, level) = token.split_once('(').ok_or_else(|| {
            AppError::DataIntegrity(format!(
                "malformed skill proficiency token '{token}' (expected 'Name(Level)')"
            ))
        })?;
        let level_word = level.trim().trim_end_matches(')');
        let proficiency: Proficiency = level_word
            .parse()
            .map_err(|e| AppError::DataIntegrity(format!("skill '{}': {e}", name.trim())))?;
        skills.insert(name.trim().to_lowercase(), proficiency.weight());
    }

    Ok(skills)
}

/// Loads user profiles from a CSV file on disk.
pub fn load_profiles(path: &Path) -> Result<Vec<UserProfile>, AppError> {
    let file = std::fs::File::open(path).map_err(|e| {
        AppError::DataIntegrity(format!(
            "failed to open user profiles '{}': {e}",
            path.display()
        ))
    })?;
    let profiles = read_profiles(file)?;
    info!("Loaded {} user profiles", profiles.len());
    Ok(profiles)
}

/// Reads user profiles from any CSV source; tests feed in-memory fixtures.
pub fn read_profiles<R: Read>(reader: R) -> Result<Vec<UserProfile>, AppError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for record in csv_reader.deserialize::<ProfileRecord>() {
        let record = record?;
        let skills = parse_skill_proficiencies(&record.skill_proficiencies).map_err(|e| {
            AppError::DataIntegrity(format!("user {}: {e}", record.user_id))
        })?;
        profiles.push(UserProfile {
            user_id: record.user_id,
            user_name: record.user_name.trim().to_string(),
            job_role: record.job_role.trim().to_string(),
            skills,
        });
    }

    Ok(profiles)
}

/// First profile matching the id. Batch mode treats absence as fatal.
pub fn find_profile(profiles: &[UserProfile], user_id: u32) -> Result<&UserProfile, AppError> {
    profiles
        .iter()
        .find(|p| p.user_id == user_id)
        .ok_or(AppError::UserNotFound(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_multiple_skills() {
        let skills = parse_skill_proficiencies("SQL(Expert), Python(Beginner)").unwrap();
        assert_eq!(skills.get("sql"), Some(&3));
        assert_eq!(skills.get("python"), Some(&1));
    }

    #[test]
    fn test_skill_names_are_normalized() {
        let skills = parse_skill_proficiencies("Machine Learning(Intermediate)").unwrap();
        assert_eq!(skills.get("machine learning"), Some(&2));
    }

    #[test]
    fn test_unknown_level_word_is_fatal() {
        let err = parse_skill_proficiencies("SQL(Ninja)").unwrap_err();
        assert!(err.to_string().contains("Ninja"));
    }

    #[test]
    fn test_token_without_parentheses_is_fatal() {
        let err = parse_skill_proficiencies("SQL Expert").unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_empty_proficiency_string_is_no_skills() {
        assert!(parse_skill_proficiencies("").unwrap().is_empty());
        assert!(parse_skill_proficiencies("  ").unwrap().is_empty());
    }

    const PROFILES_CSV: &str = "\
User ID,User Name,Job Role,Skill Proficiencies
1,Alice,Data Analyst,\"SQL(Expert), Python(Beginner)\"
2,Bob,Web Developer,JavaScript(Intermediate)
";

    #[test]
    fn test_reads_profile_rows() {
        let profiles = read_profiles(PROFILES_CSV.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].user_name, "Alice");
        assert_eq!(profiles[0].skills.get("sql"), Some(&3));
        assert_eq!(profiles[1].job_role, "Web Developer");
    }

    #[test]
    fn test_bad_level_in_any_row_aborts_the_load() {
        let csv = "\
User ID,User Name,Job Role,Skill Proficiencies
1,Alice,Data Analyst,SQL(Guru)
";
        let err = read_profiles(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("user 1"));
        assert!(err.to_string().contains("Guru"));
    }

    #[test]
    fn test_find_profile_missing_id_is_an_error() {
        let profiles = read_profiles(PROFILES_CSV.as_bytes()).unwrap();
        assert!(find_profile(&profiles, 1).is_ok());
        let err = find_profile(&profiles, 42).unwrap_err();
        assert!(matches!(err, AppError::UserNotFound(42)));
    }
}
