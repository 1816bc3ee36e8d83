use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

pub const COMPANY_NAME: &str = "company_name";
pub const FUNDING_AMOUNT: &str = "funding_amount";
pub const LOCATION: &str = "location";
pub const STATUS: &str = "status";
pub const IPO_STATUS: &str = "ipo_status";
pub const FUNDING_ROUND: &str = "funding_round";
pub const DESCRIPTION: &str = "description";
pub const WEBSITE: &str = "website";
pub const FOUNDED_YEAR: &str = "founded_year";

/// 輸入檔案的欄位順序（也用於範本）
pub const INPUT_COLUMNS: [&str; 9] = [
    COMPANY_NAME,
    FUNDING_AMOUNT,
    LOCATION,
    STATUS,
    IPO_STATUS,
    FUNDING_ROUND,
    DESCRIPTION,
    WEBSITE,
    FOUNDED_YEAR,
];

/// 輸出檔案的欄位順序
pub const OUTPUT_COLUMNS: [&str; 9] = [
    COMPANY_NAME,
    "funding_amount_parsed",
    LOCATION,
    STATUS,
    IPO_STATUS,
    FUNDING_ROUND,
    DESCRIPTION,
    WEBSITE,
    FOUNDED_YEAR,
];

/// One row of the input file, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub data: HashMap<String, String>,
}

impl RawRecord {
    /// Absent fields read as the empty string.
    pub fn get(&self, field: &str) -> &str {
        self.data.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn company_name(&self) -> &str {
        self.get(COMPANY_NAME)
    }

    pub fn location(&self) -> &str {
        self.get(LOCATION)
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Non-negative, finite funding in base currency units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct FundingAmount(f64);

impl FundingAmount {
    /// 由正規化器建立；呼叫端需保證數值有限且非負
    pub(crate) fn new(value: f64) -> Self {
        debug_assert!(value.is_finite() && value >= 0.0);
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for FundingAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.0))
    }
}

/// `$150,000,000` style: rounded to whole units, comma-grouped.
pub fn format_currency(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if value.is_sign_negative() && value.round() != 0.0 {
        grouped.push('-');
    }
    grouped.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// A record that passed every eligibility check, with its resolved amount.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibleRecord {
    record: RawRecord,
    funding: FundingAmount,
}

impl EligibleRecord {
    pub(crate) fn new(record: RawRecord, funding: FundingAmount) -> Self {
        Self { record, funding }
    }

    pub fn funding(&self) -> FundingAmount {
        self.funding
    }

    pub fn get(&self, field: &str) -> &str {
        self.record.get(field)
    }

    pub fn company_name(&self) -> &str {
        self.record.company_name()
    }

    pub fn location(&self) -> &str {
        self.record.location()
    }
}

/// A record dropped because its funding text could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub position: usize,
    pub company_name: String,
    pub reason: crate::utils::error::FundingParseError,
}

/// Output of the transform stage.
#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub total_records: usize,
    pub eligible: Vec<EligibleRecord>,
    pub skipped: Vec<SkippedRecord>,
}

impl TransformResult {
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty()
    }
}
