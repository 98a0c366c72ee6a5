//! CSV loader for the roles dataset.
//!
//! Expected columns: `Role_Name, Skill_Name, Skill_Level,
//! Future_Skill_Importance`. Level and importance are enum words; any
//! unknown word aborts the load with a data-integrity error rather than
//! producing partial scoring data.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::catalog::{RoleCatalog, SkillRequirement};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
struct RoleRecord {
    #[serde(rename = "Role_Name")]
    role_name: String,
    #[serde(rename = "Skill_Name")]
    skill_name: String,
    #[serde(rename = "Skill_Level")]
    skill_level: String,
    #[serde(rename = "Future_Skill_Importance")]
    future_importance: String,
}

/// Loads the role catalog from a CSV file on disk.
pub fn load_catalog(path: &Path) -> Result<RoleCatalog, AppError> {
    let file = std::fs::File::open(path).map_err(|e| {
        AppError::DataIntegrity(format!(
            "failed to open roles dataset '{}': {e}",
            path.display()
        ))
    })?;
    let catalog = read_catalog(file)?;
    info!(
        "Loaded role catalog: {} requirements across {} roles",
        catalog.len(),
        catalog.roles().len()
    );
    Ok(catalog)
}

/// Reads a role catalog from any CSV source. Separated from `load_catalog`
/// so tests can feed in-memory fixtures.
pub fn read_catalog<R: Read>(reader: R) -> Result<RoleCatalog, AppError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut requirements = Vec::new();

    for (idx, record) in csv_reader.deserialize::<RoleRecord>().enumerate() {
        let record = record?;
        let line = idx + 2; // header is line 1
        let required = record.skill_level.parse().map_err(|e| {
            AppError::DataIntegrity(format!("roles dataset line {line}: {e}"))
        })?;
        let importance = record.future_importance.parse().map_err(|e| {
            AppError::DataIntegrity(format!("roles dataset line {line}: {e}"))
        })?;
        requirements.push(SkillRequirement {
            role: record.role_name.trim().to_string(),
            skill: record.skill_name.trim().to_string(),
            required,
            importance,
        });
    }

    Ok(RoleCatalog::new(requirements))
}
