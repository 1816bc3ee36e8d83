use crate::core::{Pipeline, TransformResult};
use crate::utils::error::{Result, TrackerError};

/// How a run ended. A failed export is reported here, not as `Err`.
#[derive(Debug)]
pub enum RunOutcome {
    /// Input was missing; a template was written instead.
    TemplateCreated { template_path: String },
    /// Nothing passed the filter, so nothing was exported.
    NoMatches { result: TransformResult },
    Completed {
        result: TransformResult,
        output_path: String,
    },
    /// Filtering succeeded but writing the output did not. The result is
    /// kept so the summary can still be shown.
    ExportFailed {
        result: TransformResult,
        error: TrackerError,
    },
}

pub struct TrackerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TrackerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting startup tracker run...");

        if !self.pipeline.has_input() {
            tracing::warn!("⚠️  No input file found, writing a template instead");
            let template_path = self.pipeline.write_template()?;
            return Ok(RunOutcome::TemplateCreated { template_path });
        }

        // Extract
        let raw_data = self.pipeline.extract()?;
        tracing::debug!("Extracted {} records", raw_data.len());

        // Transform
        let result = self.pipeline.transform(raw_data)?;
        if result.is_empty() {
            tracing::warn!("❌ No startups matched the criteria");
            return Ok(RunOutcome::NoMatches { result });
        }

        // Load
        match self.pipeline.load(&result) {
            Ok(output_path) => {
                tracing::debug!("Output saved to: {}", output_path);
                Ok(RunOutcome::Completed {
                    result,
                    output_path,
                })
            }
            Err(error) => {
                tracing::error!("❌ Export failed: {}", error);
                Ok(RunOutcome::ExportFailed { result, error })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{filter_records, EligibilityCriteria};
    use crate::core::RawRecord;
    use crate::domain::model::{COMPANY_NAME, FUNDING_AMOUNT, LOCATION};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MockPipeline {
        input: Option<Vec<RawRecord>>,
        fail_load: bool,
        template_written: Cell<bool>,
        loaded: RefCell<Vec<usize>>,
    }

    impl Pipeline for MockPipeline {
        fn has_input(&self) -> bool {
            self.input.is_some()
        }

        fn write_template(&self) -> Result<String> {
            self.template_written.set(true);
            Ok("template.csv".to_string())
        }

        fn extract(&self) -> Result<Vec<RawRecord>> {
            Ok(self.input.clone().unwrap_or_default())
        }

        fn transform(&self, data: Vec<RawRecord>) -> Result<TransformResult> {
            Ok(filter_records(data, &EligibilityCriteria::default()))
        }

        fn load(&self, result: &TransformResult) -> Result<String> {
            if self.fail_load {
                return Err(TrackerError::Export {
                    path: "out.csv".to_string(),
                    message: "disk full".to_string(),
                });
            }
            self.loaded.borrow_mut().push(result.eligible.len());
            Ok("out.csv".to_string())
        }
    }

    fn row(name: &str, funding: &str, location: &str) -> RawRecord {
        [
            (COMPANY_NAME, name),
            (FUNDING_AMOUNT, funding),
            (LOCATION, location),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_missing_input_writes_template() {
        let engine = TrackerEngine::new(MockPipeline::default());

        let outcome = engine.run().unwrap();

        assert!(matches!(outcome, RunOutcome::TemplateCreated { ref template_path } if template_path == "template.csv"));
        assert!(engine.pipeline().template_written.get());
        assert!(engine.pipeline().loaded.borrow().is_empty());
    }

    #[test]
    fn test_no_matches_skips_load() {
        let engine = TrackerEngine::new(MockPipeline {
            input: Some(vec![row("Tiny", "5M", "USA"), row("Far", "500M", "Tokyo")]),
            ..MockPipeline::default()
        });

        let outcome = engine.run().unwrap();

        match outcome {
            RunOutcome::NoMatches { result } => assert_eq!(result.total_records, 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(engine.pipeline().loaded.borrow().is_empty());
    }

    #[test]
    fn test_completed_run() {
        let engine = TrackerEngine::new(MockPipeline {
            input: Some(vec![
                row("A", "150M", "USA"),
                row("B", "50M", "Germany"),
                row("C", "200M", "Tokyo"),
            ]),
            ..MockPipeline::default()
        });

        let outcome = engine.run().unwrap();

        match outcome {
            RunOutcome::Completed {
                result,
                output_path,
            } => {
                assert_eq!(output_path, "out.csv");
                assert_eq!(result.eligible.len(), 1);
                assert_eq!(result.eligible[0].company_name(), "A");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(*engine.pipeline().loaded.borrow(), vec![1]);
    }

    #[test]
    fn test_load_failure_keeps_result() {
        let engine = TrackerEngine::new(MockPipeline {
            input: Some(vec![row("A", "150M", "USA"), row("B", "50M", "USA")]),
            fail_load: true,
            ..MockPipeline::default()
        });

        let outcome = engine.run().unwrap();

        match outcome {
            RunOutcome::ExportFailed { result, error } => {
                assert!(matches!(error, TrackerError::Export { .. }));
                assert_eq!(result.total_records, 2);
                assert_eq!(result.eligible.len(), 1);
                assert_eq!(result.eligible[0].company_name(), "A");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
