use crate::core::normalizer::parse_funding;
use crate::domain::model::{
    EligibleRecord, FundingAmount, RawRecord, SkippedRecord, TransformResult, FUNDING_AMOUNT,
    IPO_STATUS, STATUS,
};
use crate::utils::error::FundingParseError;
use serde::Serialize;

pub const DEFAULT_MIN_FUNDING: f64 = 100_000_000.0;

pub const DEFAULT_TARGET_REGIONS: [&str; 22] = [
    "usa",
    "united states",
    "us",
    "america",
    "europe",
    "uk",
    "united kingdom",
    "germany",
    "france",
    "spain",
    "italy",
    "netherlands",
    "sweden",
    "ireland",
    "belgium",
    "austria",
    "denmark",
    "finland",
    "norway",
    "switzerland",
    "portugal",
    "poland",
];

pub const DEFAULT_EXCLUDED_IPO_STATUSES: [&str; 3] = ["ipo", "public", "listed"];

/// Parameters of the eligibility test. Keywords and statuses are stored case-folded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityCriteria {
    pub min_funding: f64,
    pub target_regions: Vec<String>,
    pub excluded_ipo_statuses: Vec<String>,
}

impl Default for EligibilityCriteria {
    fn default() -> Self {
        Self::new(
            DEFAULT_MIN_FUNDING,
            DEFAULT_TARGET_REGIONS,
            DEFAULT_EXCLUDED_IPO_STATUSES,
        )
    }
}

impl EligibilityCriteria {
    pub fn new<R, I>(min_funding: f64, target_regions: R, excluded_ipo_statuses: I) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            min_funding,
            target_regions: fold_all(target_regions),
            excluded_ipo_statuses: fold_all(excluded_ipo_statuses),
        }
    }

    pub fn meets_funding(&self, funding: FundingAmount) -> bool {
        funding.value() >= self.min_funding
    }

    /// Substring containment, not tokenization: `us` also matches `Russia`.
    pub fn meets_location(&self, location: &str) -> bool {
        contains_any(&location.to_lowercase(), &self.target_regions)
    }

    /// Empty status counts as active. `inactive` contains `active` and passes too.
    pub fn meets_status(&self, status: &str) -> bool {
        let status = status.to_lowercase();
        status.is_empty() || status.contains("active")
    }

    pub fn not_ipod(&self, ipo_status: &str) -> bool {
        let ipo_status = ipo_status.to_lowercase();
        !self.excluded_ipo_statuses.iter().any(|s| *s == ipo_status)
    }

    /// 單筆判定；資金欄位無法解析時回傳錯誤
    pub fn evaluate(&self, record: &RawRecord) -> Result<Verdict, FundingParseError> {
        let funding = parse_funding(record.get(FUNDING_AMOUNT))?;

        Ok(Verdict {
            funding,
            meets_funding: self.meets_funding(funding),
            meets_location: self.meets_location(record.location()),
            meets_status: self.meets_status(record.get(STATUS)),
            not_ipod: self.not_ipod(record.get(IPO_STATUS)),
        })
    }
}

/// Result of checking one record against the criteria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub funding: FundingAmount,
    pub meets_funding: bool,
    pub meets_location: bool,
    pub meets_status: bool,
    pub not_ipod: bool,
}

impl Verdict {
    pub fn is_eligible(&self) -> bool {
        self.meets_funding && self.meets_location && self.meets_status && self.not_ipod
    }

    pub fn failed_checks(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.meets_funding {
            failed.push("funding");
        }
        if !self.meets_location {
            failed.push("location");
        }
        if !self.meets_status {
            failed.push("status");
        }
        if !self.not_ipod {
            failed.push("ipo_status");
        }
        failed
    }
}

/// Keeps the records that pass every check, in input order.
///
/// Records whose funding text does not parse are reported in
/// `TransformResult::skipped` and logged; they never abort the run.
pub fn filter_records(records: Vec<RawRecord>, criteria: &EligibilityCriteria) -> TransformResult {
    let total_records = records.len();
    let mut eligible = Vec::new();
    let mut skipped = Vec::new();

    for (position, record) in records.into_iter().enumerate() {
        match criteria.evaluate(&record) {
            Ok(verdict) if verdict.is_eligible() => {
                eligible.push(EligibleRecord::new(record, verdict.funding));
            }
            Ok(verdict) => {
                tracing::debug!(
                    "Rejected {}: failed {}",
                    display_name(&record),
                    verdict.failed_checks().join(", ")
                );
            }
            Err(reason) => {
                tracing::warn!(
                    "⚠️  Skipping row due to parsing error: {} ({})",
                    display_name(&record),
                    reason
                );
                skipped.push(SkippedRecord {
                    position,
                    company_name: display_name(&record).to_string(),
                    reason,
                });
            }
        }
    }

    tracing::info!(
        "✓ Found {} startups matching criteria ({} skipped)",
        eligible.len(),
        skipped.len()
    );

    TransformResult {
        total_records,
        eligible,
        skipped,
    }
}

fn display_name(record: &RawRecord) -> &str {
    match record.company_name() {
        "" => "Unknown",
        name => name,
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

fn fold_all<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().to_lowercase())
        .collect()
}
