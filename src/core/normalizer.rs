//! Funding text normalization.
//!
//! Accepts free-form amounts such as `150000000`, `$150,000,000`, `150M`
//! or `$2.3B` and resolves them to base currency units. The magnitude
//! suffix is checked before plain parsing, `M` first, then `B`, both
//! case-insensitive.

use crate::domain::model::FundingAmount;
use crate::utils::error::FundingParseError;

const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

pub fn parse_funding(text: &str) -> Result<FundingAmount, FundingParseError> {
    let cleaned: String = text.chars().filter(|c| *c != ',' && *c != '$').collect();

    let (number, multiplier) = if cleaned.contains(['M', 'm']) {
        (strip_letter(&cleaned, 'm'), MILLION)
    } else if cleaned.contains(['B', 'b']) {
        (strip_letter(&cleaned, 'b'), BILLION)
    } else {
        (cleaned, 1.0)
    };

    let value = parse_number(&number)? * multiplier;
    if !value.is_finite() {
        return Err(FundingParseError::NotFinite {
            text: text.to_string(),
        });
    }
    if value.is_sign_negative() && value != 0.0 {
        return Err(FundingParseError::Negative {
            text: text.to_string(),
        });
    }

    // -0.0 歸一為 0
    Ok(FundingAmount::new(value.abs()))
}

fn strip_letter(text: &str, letter: char) -> String {
    text.chars()
        .filter(|c| !c.eq_ignore_ascii_case(&letter))
        .collect()
}

fn parse_number(text: &str) -> Result<f64, FundingParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FundingParseError::Empty);
    }

    trimmed.parse().map_err(|_| FundingParseError::Invalid {
        text: trimmed.to_string(),
    })
}
