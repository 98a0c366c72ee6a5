use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; the datasets ship under ./data.
#[derive(Debug, Clone)]
pub struct Config {
    pub roles_dataset_path: String,
    pub user_profiles_path: String,
    pub report_output_path: String,
    /// Inclusive bounds of the user-id range the batch report covers.
    /// Defaults to 1..=10, the range the report historically ran over.
    pub batch_user_id_min: u32,
    pub batch_user_id_max: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            roles_dataset_path: env_or("ROLES_DATASET_PATH", "./data/roles_dataset.csv"),
            user_profiles_path: env_or("USER_PROFILES_PATH", "./data/user_profile.csv"),
            report_output_path: env_or(
                "REPORT_OUTPUT_PATH",
                "./data/skill_gap_analysis_with_priority.csv",
            ),
            batch_user_id_min: parse_env("BATCH_USER_ID_MIN", 1)?,
            batch_user_id_max: parse_env("BATCH_USER_ID_MAX", 10)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn batch_user_ids(&self) -> std::ops::RangeInclusive<u32> {
        self.batch_user_id_min..=self.batch_user_id_max
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("'{key}' must be a valid number")),
        Err(_) => Ok(default),
    }
}
