//! Assistant dataset loading
//!
//! The assistant needs the prevalence and coping-strategies tables; a failure
//! loading either one is a hard startup failure. Entity values stay verbatim
//! here because the aggregator matches the exact user-entered country string.

use mindwell_common::config::DataConfig;
use mindwell_common::error::DatasetError;
use mindwell_common::table::{load_rows, CopingRow, PrevalenceRow};
use tracing::info;

/// Tables the dialogue consults at step 4.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub prevalence: Vec<PrevalenceRow>,
    pub coping: Vec<CopingRow>,
}

impl Datasets {
    /// Load all required tables, failing on the first missing or malformed one.
    pub fn load(config: &DataConfig) -> Result<Self, DatasetError> {
        let prevalence_path = config.dataset_path(&config.assistant.prevalence);
        let prevalence: Vec<PrevalenceRow> = load_rows(&prevalence_path)?;
        info!(rows = prevalence.len(), path = %prevalence_path.display(), "loaded prevalence table");

        let coping_path = config.dataset_path(&config.assistant.coping_strategies);
        let coping: Vec<CopingRow> = load_rows(&coping_path)?;
        info!(rows = coping.len(), path = %coping_path.display(), "loaded coping-strategies table");

        Ok(Self { prevalence, coping })
    }

    /// Empty tables; the dialogue then falls back to the documented defaults.
    pub fn empty() -> Self {
        Self {
            prevalence: Vec::new(),
            coping: Vec::new(),
        }
    }
}
