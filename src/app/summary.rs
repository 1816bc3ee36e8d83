//! Console views over a run: the criteria banner and the summary block.

use crate::core::aggregator::Summary;
use crate::core::filter::EligibilityCriteria;
use crate::domain::model::format_currency;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

pub fn render_criteria(criteria: &EligibilityCriteria) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🔍 Filtering startups by criteria...");
    let _ = writeln!(out, "   • Funding >= {}", format_currency(criteria.min_funding));
    let _ = writeln!(out, "   • Location: {}", criteria.target_regions.join(", "));
    let _ = writeln!(out, "   • Status: Active");
    let _ = writeln!(
        out,
        "   • IPO Status: not {}",
        criteria.excluded_ipo_statuses.join(" / ")
    );
    out
}

pub fn render_summary(summary: &Summary<'_>, top_locations: usize, top_funded: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "📊 SUMMARY");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "   {} of {} startups matched ({} skipped)",
        summary.eligible(),
        summary.total_records,
        summary.skipped
    );

    let _ = writeln!(out, "\n🌍 Startups by Location:");
    for (location, count) in summary.tally.most_common(top_locations) {
        let _ = writeln!(out, "   {}: {}", location, count);
    }

    let _ = writeln!(out, "\n💰 Top {} Most Funded:", top_funded);
    for (i, record) in summary.ranking.top(top_funded).iter().enumerate() {
        let _ = writeln!(
            out,
            "   {}. {} - {} ({})",
            i + 1,
            or_unknown(record.company_name()),
            record.funding(),
            or_unknown(record.location())
        );
    }

    let _ = writeln!(out, "\n{}", rule);
    out
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "Unknown"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::decode_records;
    use crate::core::filter::filter_records;

    const INPUT: &[u8] = b"company_name,funding_amount,location,status,ipo_status
Alpha,150M,\"Austin, USA\",active,private
Beta,$2.3B,\"Berlin, Germany\",active,private
Gamma,300M,\"Austin, USA\",,
Delta,oops,\"Austin, USA\",active,private
";

    #[test]
    fn test_render_summary() {
        let result = filter_records(
            decode_records(INPUT).unwrap(),
            &EligibilityCriteria::default(),
        );
        let summary = Summary::new(&result);
        let text = render_summary(&summary, 10, 2);

        assert!(text.contains("3 of 4 startups matched (1 skipped)"));
        assert!(text.contains("   Austin, USA: 2\n   Berlin, Germany: 1\n"));
        assert!(text.contains("   1. Beta - $2,300,000,000 (Berlin, Germany)"));
        assert!(text.contains("   2. Gamma - $300,000,000 (Austin, USA)"));
        assert!(!text.contains("Alpha - "));
    }

    #[test]
    fn test_render_criteria() {
        let text = render_criteria(&EligibilityCriteria::default());
        assert!(text.contains("Funding >= $100,000,000"));
        assert!(text.contains("not ipo / public / listed"));
    }
}
