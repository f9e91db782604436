//! mindwell-stats - Country statistic lookup demo
//!
//! Loads the five statistic tables and prints one sentence per family for the
//! requested country. Each table loads independently; a table that cannot be
//! read is reported and its statistic degrades to the fixed "no data"
//! sentence.

use anyhow::{Context, Result};
use clap::Parser;
use mindwell_common::config::DataConfig;
use mindwell_common::display::Ui;
use mindwell_common::stats;
use mindwell_common::table::{ComfortTable, SingleValueTable};
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mindwell-stats")]
#[command(about = "Country-level mental health statistics lookup", long_about = None)]
struct Cli {
    /// Country to look up (any case)
    #[arg(default_value = "India")]
    country: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ui = Ui::auto();
    let config = DataConfig::load().context("failed to load configuration")?;

    let comfort = load_or_warn(&ui, &config.dataset_path(&config.demo.comfort_speaking), ComfortTable::load);
    let policy = load_or_warn(
        &ui,
        &config.dataset_path(&config.demo.mental_health_policy),
        SingleValueTable::load,
    );
    let funding = load_or_warn(
        &ui,
        &config.dataset_path(&config.demo.gov_funding_support),
        SingleValueTable::load,
    );
    let lifetime = load_or_warn(
        &ui,
        &config.dataset_path(&config.demo.lifetime_anxiety_depression),
        SingleValueTable::load,
    );
    let psychiatrists = load_or_warn(
        &ui,
        &config.dataset_path(&config.demo.psychiatrists_per_country),
        SingleValueTable::load,
    );

    let country = &cli.country;
    ui.info(&match &comfort {
        Some(table) => stats::comfort_stats(country, table),
        None => stats::NO_COMFORT_DATA.to_string(),
    });
    ui.info(&match &policy {
        Some(table) => stats::policy_status(country, table),
        None => stats::NO_POLICY_DATA.to_string(),
    });
    ui.info(&match &funding {
        Some(table) => stats::research_support(country, table),
        None => stats::NO_RESEARCH_DATA.to_string(),
    });
    ui.info(&match &lifetime {
        Some(table) => stats::lifetime_disorder_prevalence(country, table),
        None => stats::NO_PREVALENCE_DATA.to_string(),
    });
    ui.info(&match &psychiatrists {
        Some(table) => stats::psychiatrist_density(country, table),
        None => stats::NO_PSYCHIATRIST_DATA.to_string(),
    });

    Ok(())
}

/// Load one table, converting failure into an absent table plus a diagnostic.
fn load_or_warn<T>(
    ui: &Ui,
    path: &Path,
    load: impl Fn(&Path) -> Result<T, mindwell_common::DatasetError>,
) -> Option<T> {
    match load(path) {
        Ok(table) => Some(table),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping table");
            ui.error(&e.to_string());
            None
        }
    }
}
