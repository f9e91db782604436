//! Mindwell Common - Shared types and dataset plumbing for the Mindwell assistant
//!
//! Everything here is synchronous and side-effect free apart from file loading:
//! typed CSV tables, the statistic formatters, country aggregation, the static
//! resource directory, and the symptom-to-condition classifier.

pub mod condition;
pub mod config;
pub mod country;
pub mod display;
pub mod error;
pub mod resources;
pub mod stats;
pub mod table;

pub use condition::Condition;
pub use config::DataConfig;
pub use error::DatasetError;
