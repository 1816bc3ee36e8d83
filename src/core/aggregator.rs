use crate::domain::model::{EligibleRecord, TransformResult};
use std::collections::HashMap;

/// Eligible-record counts per verbatim location, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationTally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl LocationTally {
    pub fn from_records(records: &[EligibleRecord]) -> Self {
        let mut tally = Self::default();
        for record in records {
            tally.add(record.location());
        }
        tally
    }

    fn add(&mut self, location: &str) {
        match self.index.get(location) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(location.to_string(), self.entries.len());
                self.entries.push((location.to_string(), 1));
            }
        }
    }

    pub fn count(&self, location: &str) -> usize {
        self.index
            .get(location)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(loc, count)| (loc.as_str(), *count))
    }

    /// Top `n` locations by count; equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

/// Eligible records by funding, descending. Ties keep input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    entries: Vec<&'a EligibleRecord>,
}

impl<'a> Ranking<'a> {
    pub fn from_records(records: &'a [EligibleRecord]) -> Self {
        let mut entries: Vec<&EligibleRecord> = records.iter().collect();
        // sort_by 為穩定排序
        entries.sort_by(|a, b| b.funding().value().total_cmp(&a.funding().value()));
        Self { entries }
    }

    pub fn top(&self, n: usize) -> &[&'a EligibleRecord] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn as_slice(&self) -> &[&'a EligibleRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derived views over one transform result.
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    pub total_records: usize,
    pub skipped: usize,
    pub tally: LocationTally,
    pub ranking: Ranking<'a>,
}

impl<'a> Summary<'a> {
    pub fn new(result: &'a TransformResult) -> Self {
        Self {
            total_records: result.total_records,
            skipped: result.skipped.len(),
            tally: LocationTally::from_records(&result.eligible),
            ranking: Ranking::from_records(&result.eligible),
        }
    }

    pub fn eligible(&self) -> usize {
        self.ranking.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::parse_funding;
    use crate::domain::model::{RawRecord, COMPANY_NAME, LOCATION};

    fn eligible(name: &str, funding: &str, location: &str) -> EligibleRecord {
        let record: RawRecord = [(COMPANY_NAME, name), (LOCATION, location)]
            .into_iter()
            .collect();
        EligibleRecord::new(record, parse_funding(funding).unwrap())
    }

    fn names<'a>(records: &[&'a EligibleRecord]) -> Vec<&'a str> {
        records.iter().copied().map(|r| r.company_name()).collect()
    }

    #[test]
    fn test_tally_is_case_preserving() {
        let records = vec![
            eligible("A", "150M", "Berlin, Germany"),
            eligible("B", "150M", "berlin, germany"),
            eligible("C", "150M", "Berlin, Germany"),
        ];
        let tally = LocationTally::from_records(&records);

        assert_eq!(tally.len(), 2);
        assert_eq!(tally.count("Berlin, Germany"), 2);
        assert_eq!(tally.count("berlin, germany"), 1);
        assert_eq!(tally.count("Paris, France"), 0);
    }

    #[test]
    fn test_most_common_orders_by_count_then_first_seen() {
        let records = vec![
            eligible("A", "150M", "Paris, France"),
            eligible("B", "150M", "Austin, USA"),
            eligible("C", "150M", "London, UK"),
            eligible("D", "150M", "Austin, USA"),
        ];
        let tally = LocationTally::from_records(&records);

        assert_eq!(
            tally.most_common(10),
            vec![("Austin, USA", 2), ("Paris, France", 1), ("London, UK", 1)]
        );
        assert_eq!(tally.most_common(1), vec![("Austin, USA", 2)]);
    }

    #[test]
    fn test_ranking_descending() {
        let records = vec![
            eligible("Small", "120M", "USA"),
            eligible("Huge", "$2.3B", "USA"),
            eligible("Mid", "500M", "USA"),
        ];
        let ranking = Ranking::from_records(&records);
        assert_eq!(names(ranking.as_slice()), vec!["Huge", "Mid", "Small"]);
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let records = vec![
            eligible("First", "500M", "USA"),
            eligible("Bigger", "600M", "USA"),
            eligible("Second", "500,000,000", "USA"),
        ];
        let ranking = Ranking::from_records(&records);
        assert_eq!(names(ranking.as_slice()), vec!["Bigger", "First", "Second"]);
    }

    #[test]
    fn test_top_is_a_view() {
        let records: Vec<EligibleRecord> = (1..=7)
            .map(|i| eligible(&format!("Co{}", i), &format!("{}00M", i), "USA"))
            .collect();
        let ranking = Ranking::from_records(&records);

        assert_eq!(names(ranking.top(5)), vec!["Co7", "Co6", "Co5", "Co4", "Co3"]);
        assert_eq!(ranking.len(), 7);
        assert_eq!(ranking.top(100).len(), 7);
        assert!(ranking.top(0).is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let result = TransformResult {
            total_records: 4,
            eligible: vec![eligible("A", "150M", "USA"), eligible("B", "200M", "UK")],
            skipped: vec![],
        };
        let summary = Summary::new(&result);

        assert_eq!(summary.total_records, 4);
        assert_eq!(summary.eligible(), 2);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.tally.len(), 2);
        assert_eq!(summary.ranking.top(1)[0].company_name(), "B");
    }
}
