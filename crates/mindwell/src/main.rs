//! Mindwell - Conversational mental wellbeing assistant
//!
//! Interactive REPL over pre-processed country statistics. No flags; type
//! `exit` to end the conversation.

use anyhow::{Context, Result};
use mindwell::{datasets::Datasets, repl};
use mindwell_common::config::DataConfig;
use mindwell_common::display::Ui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the conversation on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let ui = Ui::auto();
    ui.info("Initializing Mental Health Assistant...");

    let config = DataConfig::load().context("failed to load configuration")?;
    info!(data_dir = %config.data_dir.display(), "configuration loaded");

    let datasets = match Datasets::load(&config) {
        Ok(datasets) => datasets,
        Err(e) => {
            ui.error(&e.to_string());
            ui.info("Failed to initialize Mental Health Assistant. Please check your data files and try again.");
            return Err(e).context("dataset initialization failed");
        }
    };

    ui.info("All available datasets loaded successfully.");
    ui.info("Mental Health Assistant initialized successfully.");
    ui.info("== Mental Health Assistant ==");
    ui.info("Type 'exit' to end the conversation.");
    ui.blank();

    repl::run(&ui, &datasets)
}
