//! KPI summary over the shared view.

use serde::Serialize;

use co2_model::{Record, YoyCategory, percent_change};

use crate::aggregate::{YearTotal, yearly_totals};
use crate::format::{UNAVAILABLE, format_mt, format_signed_percent};

/// Figures computed from a non-empty view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiFigures {
    pub first_year: i32,
    /// Sum of every yearly total in the filtered range.
    pub total: f64,
    pub latest: YearTotal,
    /// Year immediately before `latest` in the data, if any.
    pub previous: Option<YearTotal>,
    /// Percent change from `previous` to `latest`; `None` without a usable baseline.
    pub yoy_percent: Option<f64>,
    pub category: YoyCategory,
    /// Drill-down country the figures are narrowed to.
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum KpiSummary {
    NoData,
    Figures(KpiFigures),
}

impl KpiSummary {
    /// Summarize `view`. `country` is the active shared drill-down, if any.
    pub fn from_view(view: &[&Record], country: Option<&str>) -> Self {
        let yearly = yearly_totals(view);
        let (Some(first), Some(latest)) = (yearly.first(), yearly.last()) else {
            return Self::NoData;
        };
        let total: f64 = yearly.iter().map(|entry| entry.value).sum();
        let previous = yearly.len().checked_sub(2).map(|idx| yearly[idx]);
        let yoy_percent = previous.and_then(|prev| percent_change(latest.value, prev.value));
        Self::Figures(KpiFigures {
            first_year: first.year,
            total,
            latest: *latest,
            previous,
            yoy_percent,
            category: YoyCategory::from_change(yoy_percent),
            country: country.map(str::to_string),
        })
    }

    pub fn figures(&self) -> Option<&KpiFigures> {
        match self {
            Self::NoData => None,
            Self::Figures(figures) => Some(figures),
        }
    }

    pub fn category(&self) -> YoyCategory {
        self.figures()
            .map_or(YoyCategory::Unavailable, |figures| figures.category)
    }

    /// Period caption, e.g. `(1990–2020) - Germany`. Empty without data.
    pub fn period_label(&self) -> String {
        let Some(figures) = self.figures() else {
            return String::new();
        };
        let mut label = format!("({}–{})", figures.first_year, figures.latest.year);
        if let Some(country) = &figures.country {
            label.push_str(" - ");
            label.push_str(country);
        }
        label
    }

    /// Headline total, or the placeholder without data.
    pub fn total_text(&self) -> String {
        self.figures()
            .map_or_else(|| UNAVAILABLE.to_string(), |figures| format_mt(figures.total))
    }

    /// Latest yearly total, e.g. `1,234 Mt (2020)`. Empty without data.
    pub fn latest_text(&self) -> String {
        self.figures()
            .map(|figures| format!("{} ({})", format_mt(figures.latest.value), figures.latest.year))
            .unwrap_or_default()
    }

    /// Year-over-year line. Empty without data.
    pub fn yoy_text(&self) -> String {
        let Some(figures) = self.figures() else {
            return String::new();
        };
        match (figures.previous, figures.yoy_percent) {
            (Some(previous), Some(change)) => {
                format!("YoY vs {}: {}", previous.year, format_signed_percent(change))
            }
            _ => format!("YoY: {UNAVAILABLE}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize(rows: &[Record]) -> KpiSummary {
        let view: Vec<&Record> = rows.iter().collect();
        KpiSummary::from_view(&view, None)
    }

    #[test]
    fn empty_view_is_no_data() {
        let summary = summarize(&[]);
        assert_eq!(summary, KpiSummary::NoData);
        assert_eq!(summary.total_text(), "—");
        assert_eq!(summary.yoy_text(), "");
        assert_eq!(summary.category(), YoyCategory::Unavailable);
    }

    #[test]
    fn zero_baseline_is_unavailable() {
        let summary = summarize(&[
            Record::new("A", "R", "I", 2019, 0.0),
            Record::new("A", "R", "I", 2020, 50.0),
        ]);
        let figures = summary.figures().unwrap();
        assert_eq!(figures.yoy_percent, None);
        assert_eq!(summary.category(), YoyCategory::Unavailable);
        assert_eq!(summary.yoy_text(), "YoY: —");
    }

    #[test]
    fn latest_uses_last_year() {
        let summary = summarize(&[
            Record::new("A", "R", "I", 2021, 1500.0),
            Record::new("B", "R", "I", 2019, 100.0),
            Record::new("A", "R", "I", 2020, 1000.0),
        ]);
        assert_eq!(summary.latest_text(), "1,500 Mt (2021)");
        assert_eq!(summary.period_label(), "(2019–2021)");
        assert_eq!(summary.yoy_text(), "YoY vs 2020: +50.0%");
    }
}
