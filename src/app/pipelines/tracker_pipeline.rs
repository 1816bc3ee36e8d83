use crate::app::report::SummaryReport;
use crate::app::template::render_template;
use crate::core::aggregator::{Ranking, Summary};
use crate::core::codec::{decode_records, encode_results};
use crate::core::filter::{filter_records, EligibilityCriteria};
use crate::core::{ConfigProvider, Pipeline, RawRecord, Storage, TransformResult};
use crate::utils::error::{Result, TrackerError};

/// Reads the curated CSV, keeps eligible startups and writes them back out.
pub struct TrackerPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    criteria: EligibilityCriteria,
}

impl<S: Storage, C: ConfigProvider> TrackerPipeline<S, C> {
    pub fn new(storage: S, config: C, criteria: EligibilityCriteria) -> Self {
        Self {
            storage,
            config,
            criteria,
        }
    }

    pub fn criteria(&self) -> &EligibilityCriteria {
        &self.criteria
    }

    fn write_output(&self, path: &str, data: &[u8]) -> Result<()> {
        self.storage
            .write_file(path, data)
            .map_err(|e| TrackerError::Export {
                path: path.to_string(),
                message: e.to_string(),
            })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for TrackerPipeline<S, C> {
    fn has_input(&self) -> bool {
        self.storage.exists(self.config.input_path())
    }

    fn write_template(&self) -> Result<String> {
        let path = self.config.template_path();
        self.storage.write_file(path, &render_template()?)?;
        tracing::info!("✓ Created template file: {}", path);
        Ok(path.to_string())
    }

    fn extract(&self) -> Result<Vec<RawRecord>> {
        let path = self.config.input_path();
        tracing::info!("📂 Loading data from {}...", path);

        if !self.storage.exists(path) {
            return Err(TrackerError::InputMissing {
                path: path.to_string(),
            });
        }

        let data = self.storage.read_file(path)?;
        let records = decode_records(&data)?;

        tracing::info!("✓ Loaded {} startups", records.len());
        Ok(records)
    }

    fn transform(&self, data: Vec<RawRecord>) -> Result<TransformResult> {
        Ok(filter_records(data, &self.criteria))
    }

    fn load(&self, result: &TransformResult) -> Result<String> {
        if result.is_empty() {
            return Err(TrackerError::ProcessingError {
                message: "No startups to export".to_string(),
            });
        }

        let output_path = self.config.output_path();
        tracing::info!("💾 Exporting results to {}...", output_path);

        let csv_data = if self.config.ranked_output() {
            encode_results(Ranking::from_records(&result.eligible).as_slice().iter().copied())?
        } else {
            encode_results(&result.eligible)?
        };
        self.write_output(output_path, &csv_data)?;
        tracing::info!(
            "✓ Exported {} startups to {}",
            result.eligible.len(),
            output_path
        );

        if let Some(summary_path) = self.config.summary_path() {
            let report = SummaryReport::new(
                &Summary::new(result),
                &self.criteria,
                self.config.top_locations(),
                self.config.top_funded(),
            );
            self.write_output(summary_path, &report.to_json()?)?;
            tracing::info!("✓ Wrote summary report to {}", summary_path);
        }

        Ok(output_path.to_string())
    }
}
