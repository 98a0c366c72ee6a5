//! Batch skill-gap report.
//!
//! Loads the roles dataset and user-profile CSV, runs the batch-variant
//! gap analysis for the configured user-id range, prints each report, and
//! exports the rows to CSV.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillgap::catalog::loader::load_catalog;
use skillgap::config::Config;
use skillgap::profiles::load_profiles;
use skillgap::report::writer::write_report_csv;
use skillgap::report::run_batch;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = load_catalog(Path::new(&config.roles_dataset_path))?;
    let profiles = load_profiles(Path::new(&config.user_profiles_path))?;

    // A missing user id in the range aborts the run; the range bounds are
    // env-configurable and default to 1..=10.
    let rows = run_batch(&catalog, &profiles, config.batch_user_ids())?;

    for row in &rows {
        println!("User {} ({}) - Job Role: {}", row.user_id, row.user_name, row.job_role);
        println!("{}", row.result);
        println!("{}", "=".repeat(50));
    }

    let output = Path::new(&config.report_output_path);
    write_report_csv(output, &rows)?;
    info!(
        "Skill gap analysis results with priority exported to: {}",
        output.display()
    );

    Ok(())
}
