//! Read-only dataset store.

use std::collections::BTreeSet;

use crate::range::YearRange;
use crate::record::Record;

/// Loaded records plus the filter options observed at load time.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    regions: Vec<String>,
    income_levels: Vec<String>,
    years: Option<YearRange>,
}

impl Dataset {
    /// Build the store. An empty dataset is valid and has no year bounds.
    pub fn new(records: Vec<Record>) -> Self {
        let years = year_bounds(&records);
        let regions = distinct_non_empty(&records, |record| &record.region);
        let income_levels = distinct_non_empty(&records, |record| &record.income_level);
        Self {
            records,
            regions,
            income_levels,
            years,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct non-empty regions.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Sorted distinct non-empty income levels.
    pub fn income_levels(&self) -> &[String] {
        &self.income_levels
    }

    /// Smallest and largest year present, `None` without rows.
    pub fn year_bounds(&self) -> Option<YearRange> {
        self.years
    }
}

fn year_bounds(records: &[Record]) -> Option<YearRange> {
    let min = records.iter().map(|record| record.year).min()?;
    let max = records.iter().map(|record| record.year).max()?;
    Some(YearRange::new(min, max))
}

fn distinct_non_empty<F>(records: &[Record], field: F) -> Vec<String>
where
    F: Fn(&Record) -> &String,
{
    records
        .iter()
        .map(field)
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_skip_missing_values() {
        let dataset = Dataset::new(vec![
            Record::new("A", "Europe", "High", 2001, 1.0),
            Record::new("B", "", "Low", 1999, 2.0),
            Record::new("C", "Asia", "", 2005, 3.0),
            Record::new("D", "Europe", "High", 2002, 4.0),
        ]);

        assert_eq!(dataset.regions(), ["Asia", "Europe"]);
        assert_eq!(dataset.income_levels(), ["High", "Low"]);
        assert_eq!(dataset.year_bounds(), Some(YearRange::new(1999, 2005)));
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn empty_dataset_has_no_bounds_or_options() {
        let dataset = Dataset::new(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_bounds(), None);
        assert!(dataset.regions().is_empty());
        assert!(dataset.income_levels().is_empty());
    }
}
