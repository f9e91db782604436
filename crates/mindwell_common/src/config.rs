//! Mindwell configuration
//!
//! Dataset locations for both binaries. Config file: `mindwell.toml` in the
//! working directory, with `MINDWELL_DATA_DIR` as an environment override for
//! the data directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "mindwell.toml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MINDWELL_DATA_DIR";

/// File names of the lookup-demo statistic tables, relative to the data dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoFiles {
    #[serde(default = "default_comfort")]
    pub comfort_speaking: String,
    #[serde(default = "default_policy")]
    pub mental_health_policy: String,
    #[serde(default = "default_funding")]
    pub gov_funding_support: String,
    #[serde(default = "default_lifetime")]
    pub lifetime_anxiety_depression: String,
    #[serde(default = "default_psychiatrists")]
    pub psychiatrists_per_country: String,
}

fn default_comfort() -> String {
    "perceived-comfort-speaking-anxiety-depression.csv".into()
}
fn default_policy() -> String {
    "stand-alone-policy-or-plan-for-mental-health.csv".into()
}
fn default_funding() -> String {
    "share-who-say-its-extremely-important-for-the-national-government-to-fund-research-on-anxietydepression.csv".into()
}
fn default_lifetime() -> String {
    "share-who-report-lifetime-anxiety-or-depression.csv".into()
}
fn default_psychiatrists() -> String {
    "psychiatrists-working-in-the-mental-health-sector.csv".into()
}

impl Default for DemoFiles {
    fn default() -> Self {
        Self {
            comfort_speaking: default_comfort(),
            mental_health_policy: default_policy(),
            gov_funding_support: default_funding(),
            lifetime_anxiety_depression: default_lifetime(),
            psychiatrists_per_country: default_psychiatrists(),
        }
    }
}

/// File names of the assistant's tables, relative to the data dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantFiles {
    #[serde(default = "default_prevalence")]
    pub prevalence: String,
    #[serde(default = "default_coping")]
    pub coping_strategies: String,
}

fn default_prevalence() -> String {
    "processed_mental_illness_prevalence.csv".into()
}
fn default_coping() -> String {
    "dealing_anxiety.csv".into()
}

impl Default for AssistantFiles {
    fn default() -> Self {
        Self {
            prevalence: default_prevalence(),
            coping_strategies: default_coping(),
        }
    }
}

/// Main configuration for dataset locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory containing the CSV datasets.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub demo: DemoFiles,

    #[serde(default)]
    pub assistant: AssistantFiles,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            demo: DemoFiles::default(),
            assistant: AssistantFiles::default(),
        }
    }
}

impl DataConfig {
    /// Load configuration: `mindwell.toml` if present, defaults otherwise.
    /// `MINDWELL_DATA_DIR` overrides the data directory either way.
    pub fn load() -> Result<Self> {
        let config = match fs::metadata(CONFIG_FILE) {
            Ok(_) => Self::load_from(Path::new(CONFIG_FILE))?,
            Err(_) => Self::default(),
        };

        Ok(config.with_data_dir_override(std::env::var(DATA_DIR_ENV).ok()))
    }

    /// Apply the data-directory override, if any. The override beats both the
    /// default and a config-file `data_dir`.
    fn with_data_dir_override(mut self, dir: Option<String>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Resolve a dataset file name against the data directory.
    pub fn dataset_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}
