use crate::core::aggregator::Summary;
use crate::core::filter::EligibilityCriteria;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON form of the console summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub criteria: EligibilityCriteria,
    pub total_records: usize,
    pub eligible_records: usize,
    pub skipped_records: usize,
    pub locations: Vec<LocationCount>,
    pub top_funded: Vec<RankedCompany>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCompany {
    pub rank: usize,
    pub company_name: String,
    pub funding: f64,
    pub funding_display: String,
    pub location: String,
}

impl SummaryReport {
    pub fn new(
        summary: &Summary<'_>,
        criteria: &EligibilityCriteria,
        top_locations: usize,
        top_funded: usize,
    ) -> Self {
        let locations = summary
            .tally
            .most_common(top_locations)
            .into_iter()
            .map(|(location, count)| LocationCount {
                location: location.to_string(),
                count,
            })
            .collect();

        let top_funded = summary
            .ranking
            .top(top_funded)
            .iter()
            .enumerate()
            .map(|(i, record)| RankedCompany {
                rank: i + 1,
                company_name: record.company_name().to_string(),
                funding: record.funding().value(),
                funding_display: record.funding().to_string(),
                location: record.location().to_string(),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            criteria: criteria.clone(),
            total_records: summary.total_records,
            eligible_records: summary.eligible(),
            skipped_records: summary.skipped,
            locations,
            top_funded,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}
