//! Data prepared for each chart drawer.
//!
//! These models carry everything a renderer needs except geometry: values,
//! ordering, and the highlight state implied by the drill-down selections.

use serde::Serialize;

use co2_model::{Record, Sector};

use crate::aggregate::{SectorYear, YearTotal, country_totals, yearly_sector_totals, yearly_totals};

/// Highlight flags for a clickable country element.
fn highlight(country: &str, selected: Option<&str>) -> (bool, bool) {
    match selected {
        Some(selected) if selected == country => (true, false),
        Some(_) => (false, true),
        None => (false, false),
    }
}

/// Yearly totals for the line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartModel {
    pub points: Vec<YearTotal>,
}

impl LineChartModel {
    pub fn from_view(view: &[&Record]) -> Self {
        Self {
            points: yearly_totals(view),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest yearly total, used as the top of the value axis.
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| point.value)
            .max_by(f64::total_cmp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarItem {
    pub country: String,
    pub value: f64,
    /// This bar is the bar chart's drill-down selection.
    pub selected: bool,
    /// Another bar is selected; this one is drawn faded.
    ///
    /// The dashboard narrows the bar view to the bar selection before
    /// building this model, so a live frame only ever holds the selected
    /// bar and this stays `false`. It is set only for models built from an
    /// unnarrowed view.
    pub dimmed: bool,
}

/// Top emitters for the bar chart, largest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartModel {
    pub bars: Vec<BarItem>,
}

impl BarChartModel {
    pub fn from_view(view: &[&Record], selected: Option<&str>, limit: usize) -> Self {
        let bars = country_totals(view, limit)
            .into_iter()
            .map(|(country, value)| {
                let (is_selected, dimmed) = highlight(&country, selected);
                BarItem {
                    country,
                    value,
                    selected: is_selected,
                    dimmed,
                }
            })
            .collect();
        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// `(country, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&str, f64)> {
        self.bars
            .iter()
            .map(|bar| (bar.country.as_str(), bar.value))
            .collect()
    }
}

/// Sector breakdown per year for the stacked area chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedAreaModel {
    pub sectors: [Sector; 4],
    pub years: Vec<SectorYear>,
}

impl StackedAreaModel {
    pub fn from_view(view: &[&Record]) -> Self {
        Self {
            sectors: Sector::ALL,
            years: yearly_sector_totals(view),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Height of the top band, used as the top of the value axis.
    pub fn max_stack(&self) -> Option<f64> {
        self.years.iter().map(SectorYear::total).max_by(f64::total_cmp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapTile {
    pub country: String,
    pub value: f64,
    /// Share of the shown tiles' total, `None` when that total is zero.
    pub share_percent: Option<f64>,
    pub selected: bool,
    /// Another tile is selected. Always `false` in a dashboard frame, where
    /// the treemap view is already narrowed to its selection; see
    /// [`BarItem::dimmed`].
    pub dimmed: bool,
}

/// Largest emitters as treemap tiles, largest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapModel {
    pub tiles: Vec<TreemapTile>,
    /// Sum of the shown tiles.
    pub total: f64,
}

impl TreemapModel {
    pub fn from_view(view: &[&Record], selected: Option<&str>, limit: usize) -> Self {
        let ranked = country_totals(view, limit);
        let total: f64 = ranked.iter().map(|(_, value)| value).sum();
        let tiles = ranked
            .into_iter()
            .map(|(country, value)| {
                let (is_selected, dimmed) = highlight(&country, selected);
                let share_percent = (total != 0.0).then(|| value / total * 100.0);
                TreemapTile {
                    country,
                    value,
                    share_percent,
                    selected: is_selected,
                    dimmed,
                }
            })
            .collect();
        Self { tiles, total }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new("USA", "NA", "High", 2020, 300.0),
            Record::new("China", "EA", "Upper", 2020, 600.0),
            Record::new("India", "SA", "Lower", 2020, 100.0),
        ]
    }

    #[test]
    fn bars_flag_selection() {
        let rows = rows();
        let view: Vec<&Record> = rows.iter().collect();
        let model = BarChartModel::from_view(&view, Some("USA"), 10);
        assert_eq!(model.entries(), vec![("China", 600.0), ("USA", 300.0), ("India", 100.0)]);
        assert!(model.bars[1].selected);
        assert!(model.bars[0].dimmed);
        assert!(!model.bars[1].dimmed);
    }

    #[test]
    fn treemap_shares_sum_to_hundred() {
        let rows = rows();
        let view: Vec<&Record> = rows.iter().collect();
        let model = TreemapModel::from_view(&view, None, 2);
        assert_eq!(model.tiles.len(), 2);
        assert_eq!(model.total, 900.0);
        let shares: f64 = model.tiles.iter().filter_map(|tile| tile.share_percent).sum();
        assert!((shares - 100.0).abs() < 1e-9);
        assert!(model.tiles.iter().all(|tile| !tile.dimmed && !tile.selected));
    }

    #[test]
    fn treemap_share_unavailable_for_zero_total() {
        let rows = vec![Record::new("A", "R", "I", 2000, 0.0)];
        let view: Vec<&Record> = rows.iter().collect();
        let model = TreemapModel::from_view(&view, None, 15);
        assert_eq!(model.tiles[0].share_percent, None);
    }

    #[test]
    fn empty_views_produce_empty_models() {
        assert!(LineChartModel::from_view(&[]).is_empty());
        assert!(BarChartModel::from_view(&[], None, 10).is_empty());
        assert!(StackedAreaModel::from_view(&[]).is_empty());
        assert!(TreemapModel::from_view(&[], Some("A"), 15).is_empty());
        assert_eq!(LineChartModel::from_view(&[]).max_value(), None);
    }
}
