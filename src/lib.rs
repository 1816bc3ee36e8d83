pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::pipelines::tracker_pipeline::TrackerPipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::etl::{RunOutcome, TrackerEngine};
pub use crate::core::filter::EligibilityCriteria;
pub use utils::error::{Result, TrackerError};
