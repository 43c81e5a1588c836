//! Group-and-sum helpers over filtered views.

use std::collections::BTreeMap;

use serde::Serialize;

use co2_model::{Record, Sector};

/// Summed emissions for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearTotal {
    pub year: i32,
    pub value: f64,
}

/// Summed sector emissions for one year, indexed by [`Sector::index`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectorYear {
    pub year: i32,
    pub values: [f64; 4],
}

impl SectorYear {
    pub fn value(&self, sector: Sector) -> f64 {
        self.values[sector.index()]
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Sum `co2` per year, ascending by year.
pub fn yearly_totals(view: &[&Record]) -> Vec<YearTotal> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for record in view {
        *totals.entry(record.year).or_default() += record.co2;
    }
    totals
        .into_iter()
        .map(|(year, value)| YearTotal { year, value })
        .collect()
}

/// Sum `co2` per country, largest first, truncated to `limit` entries.
///
/// Equal totals keep alphabetical order.
pub fn country_totals(view: &[&Record], limit: usize) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in view {
        *totals.entry(record.country.as_str()).or_default() += record.co2;
    }
    let mut ranked: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(country, value)| (country.to_string(), value))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Sum each sector per year, ascending by year.
pub fn yearly_sector_totals(view: &[&Record]) -> Vec<SectorYear> {
    let mut totals: BTreeMap<i32, [f64; 4]> = BTreeMap::new();
    for record in view {
        let entry = totals.entry(record.year).or_insert([0.0; 4]);
        for sector in Sector::ALL {
            entry[sector.index()] += record.sector(sector);
        }
    }
    totals
        .into_iter()
        .map(|(year, values)| SectorYear { year, values })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new("B", "R1", "I1", 2001, 5.0).with_sector(Sector::Coal, 3.0),
            Record::new("A", "R1", "I1", 2000, 10.0).with_sector(Sector::Gas, 1.0),
            Record::new("A", "R1", "I1", 2001, 2.0).with_sector(Sector::Coal, 1.0),
            Record::new("C", "R1", "I1", 2000, 12.0),
        ]
    }

    #[test]
    fn yearly_totals_are_sorted_by_year() {
        let rows = rows();
        let view: Vec<&Record> = rows.iter().collect();
        let totals = yearly_totals(&view);
        assert_eq!(
            totals,
            vec![
                YearTotal {
                    year: 2000,
                    value: 22.0
                },
                YearTotal {
                    year: 2001,
                    value: 7.0
                },
            ]
        );
    }

    #[test]
    fn country_totals_rank_and_truncate() {
        let rows = rows();
        let view: Vec<&Record> = rows.iter().collect();
        assert_eq!(
            country_totals(&view, 2),
            vec![("A".to_string(), 12.0), ("C".to_string(), 12.0)]
        );
        assert!(country_totals(&[], 10).is_empty());
    }

    #[test]
    fn sector_totals_sum_missing_as_zero() {
        let rows = rows();
        let view: Vec<&Record> = rows.iter().collect();
        let sectors = yearly_sector_totals(&view);
        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[0].value(Sector::Gas), 1.0);
        assert_eq!(sectors[1].value(Sector::Coal), 4.0);
        assert_eq!(sectors[1].total(), 4.0);
    }
}
