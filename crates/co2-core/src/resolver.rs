//! Derive the per-chart filtered views from the dataset and filter state.
//!
//! Every call recomputes from scratch; the views borrow records from the
//! dataset and may be empty.

use co2_model::{Dataset, Record};

use crate::state::FilterState;

/// Filtered rows in dataset order.
pub type View<'a> = Vec<&'a Record>;

/// True when `record` passes the year, region and income-level filters.
pub fn passes_base_filters(record: &Record, state: &FilterState) -> bool {
    state.year_range().contains(record.year)
        && state.regions().is_checked(&record.region)
        && state.income_levels().is_checked(&record.income_level)
}

fn restrict<'a>(rows: View<'a>, country: Option<&str>) -> View<'a> {
    match country {
        Some(country) => rows
            .into_iter()
            .filter(|record| record.country == country)
            .collect(),
        None => rows,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FilterResolver<'a> {
    dataset: &'a Dataset,
    state: &'a FilterState,
}

impl<'a> FilterResolver<'a> {
    pub fn new(dataset: &'a Dataset, state: &'a FilterState) -> Self {
        Self { dataset, state }
    }

    /// Rows passing the year range and both checklists, before any drill-down.
    pub fn base_filtered(&self) -> View<'a> {
        let state = self.state;
        self.dataset
            .records()
            .iter()
            .filter(|record| passes_base_filters(record, state))
            .collect()
    }

    /// Base rows narrowed to the bar chart's own selection.
    pub fn bar_view(&self) -> View<'a> {
        restrict(self.base_filtered(), self.state.drill_down().bar())
    }

    /// Base rows narrowed to the treemap's own selection.
    pub fn treemap_view(&self) -> View<'a> {
        restrict(self.base_filtered(), self.state.drill_down().treemap())
    }

    /// View for the line chart, stacked area chart and KPI summary.
    pub fn shared_view(&self) -> View<'a> {
        restrict(self.base_filtered(), self.state.drill_down().shared())
    }
}
