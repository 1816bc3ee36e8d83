pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, TrackerError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "startup-tracker"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Find $100M+ funded startups in the USA and Europe")
)]
pub struct CliConfig {
    /// Directory the input, output and template files live in
    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub data_dir: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "input_data.csv"))]
    pub input: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "startup_results.csv"))]
    pub output: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "input_data_template.csv"))]
    pub template: String,

    /// TOML file overriding the default eligibility criteria.
    /// Resolved against the working directory, not --data-dir
    #[cfg_attr(feature = "cli", arg(long))]
    pub criteria: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "10"))]
    pub top_locations: usize,

    #[cfg_attr(feature = "cli", arg(long, default_value = "5"))]
    pub top_funded: usize,

    /// Write results in funding order instead of input order
    #[cfg_attr(feature = "cli", arg(long))]
    pub ranked: bool,

    /// Also write the summary as JSON to this file (relative to data dir)
    #[cfg_attr(feature = "cli", arg(long))]
    pub summary_json: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value_t = LogFormat::Compact))]
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: ".".to_string(),
            input: "input_data.csv".to_string(),
            output: "startup_results.csv".to_string(),
            template: "input_data_template.csv".to_string(),
            criteria: None,
            top_locations: 10,
            top_funded: 5,
            ranked: false,
            summary_json: None,
            verbose: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn template_path(&self) -> &str {
        &self.template
    }

    fn ranked_output(&self) -> bool {
        self.ranked
    }

    fn summary_path(&self) -> Option<&str> {
        self.summary_json.as_deref()
    }

    fn top_locations(&self) -> usize {
        self.top_locations
    }

    fn top_funded(&self) -> usize {
        self.top_funded
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;

        for (field, path) in [
            ("input", &self.input),
            ("output", &self.output),
            ("template", &self.template),
        ] {
            validate_path(field, path)?;
            validate_file_extension(field, path, &["csv"])?;
        }

        if let Some(criteria) = &self.criteria {
            validate_path("criteria", criteria)?;
            validate_file_extension("criteria", criteria, &["toml"])?;
        }

        if let Some(summary) = &self.summary_json {
            validate_path("summary_json", summary)?;
            validate_file_extension("summary_json", summary, &["json"])?;
        }

        validate_positive_number("top_locations", self.top_locations, 1)?;
        validate_positive_number("top_funded", self.top_funded, 1)?;

        // 以 data_dir 為基準比較，`./input_data.csv` 也算同一檔案
        let storage = cli::LocalStorage::new(self.data_dir.clone());
        if storage.full_path(&self.input) == storage.full_path(&self.output) {
            return Err(TrackerError::ConfigValidationError {
                field: "output".to_string(),
                message: "Output file would overwrite the input file".to_string(),
            });
        }

        Ok(())
    }
}
