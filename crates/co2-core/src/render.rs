//! Render dispatch: recompute every view and hand each chart model to a renderer.
//!
//! # Order
//!
//! 1. Controls (year slider fill + label, checklist labels)
//! 2. Shared view → KPI summary, line chart, stacked area chart
//! 3. Bar chart view → bar chart
//! 4. Treemap view → treemap
//!
//! Every pass redraws everything; nothing is diffed.

use serde::Serialize;
use tracing::debug;

use co2_model::{DashboardOptions, Dataset, YearRange};

use crate::charts::{BarChartModel, LineChartModel, StackedAreaModel, TreemapModel};
use crate::controls::{ChecklistKind, ChecklistSummary, SliderFill};
use crate::kpi::KpiSummary;
use crate::resolver::FilterResolver;
use crate::state::FilterState;

/// Drawing surface for the dashboard.
///
/// Implementations only draw; they never mutate filter state. Chart clicks
/// are reported back as [`crate::UiEvent`]s.
pub trait Renderer {
    fn draw_controls(&mut self, controls: &ControlsView);
    fn draw_kpi(&mut self, kpi: &KpiSummary);
    fn draw_line(&mut self, model: &LineChartModel);
    fn draw_stacked(&mut self, model: &StackedAreaModel);
    fn draw_bars(&mut self, model: &BarChartModel);
    fn draw_treemap(&mut self, model: &TreemapModel);

    /// Shown instead of the dashboard when the dataset failed to load.
    fn show_load_error(&mut self, message: &str);
}

/// Renderer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_controls(&mut self, _controls: &ControlsView) {}
    fn draw_kpi(&mut self, _kpi: &KpiSummary) {}
    fn draw_line(&mut self, _model: &LineChartModel) {}
    fn draw_stacked(&mut self, _model: &StackedAreaModel) {}
    fn draw_bars(&mut self, _model: &BarChartModel) {}
    fn draw_treemap(&mut self, _model: &TreemapModel) {}
    fn show_load_error(&mut self, _message: &str) {}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistView {
    pub kind: ChecklistKind,
    pub summary: ChecklistSummary,
    pub label: String,
}

/// Visual state of the filter controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlsView {
    pub range: YearRange,
    pub year_label: String,
    pub fill: SliderFill,
    pub checklists: Vec<ChecklistView>,
}

impl ControlsView {
    pub fn from_state(state: &FilterState, options: &DashboardOptions) -> Self {
        let years = state.years();
        let checklists = ChecklistKind::ALL
            .into_iter()
            .map(|kind| {
                let summary = state.checklist(kind).summary();
                ChecklistView {
                    kind,
                    summary,
                    label: summary.to_string(),
                }
            })
            .collect();
        Self {
            range: years.range(),
            year_label: years.label(),
            fill: years.fill(options.track_width_px, options.thumb_radius_px),
            checklists,
        }
    }

    pub fn checklist(&self, kind: ChecklistKind) -> Option<&ChecklistView> {
        self.checklists.iter().find(|view| view.kind == kind)
    }
}

/// Everything produced by one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub controls: ControlsView,
    pub kpi: KpiSummary,
    pub line: LineChartModel,
    pub stacked: StackedAreaModel,
    pub bars: BarChartModel,
    pub treemap: TreemapModel,
}

/// Run one full render pass against `renderer` and return what was drawn.
pub fn render_all<R>(
    dataset: &Dataset,
    state: &FilterState,
    options: &DashboardOptions,
    renderer: &mut R,
) -> DashboardFrame
where
    R: Renderer + ?Sized,
{
    let resolver = FilterResolver::new(dataset, state);
    let drill_down = state.drill_down();

    let controls = ControlsView::from_state(state, options);
    renderer.draw_controls(&controls);

    let shared = resolver.shared_view();
    let kpi = KpiSummary::from_view(&shared, drill_down.shared());
    renderer.draw_kpi(&kpi);
    let line = LineChartModel::from_view(&shared);
    renderer.draw_line(&line);
    let stacked = StackedAreaModel::from_view(&shared);
    renderer.draw_stacked(&stacked);

    let bar_view = resolver.bar_view();
    let bars = BarChartModel::from_view(&bar_view, drill_down.bar(), options.bar_top_n);
    renderer.draw_bars(&bars);

    let treemap_view = resolver.treemap_view();
    let treemap =
        TreemapModel::from_view(&treemap_view, drill_down.treemap(), options.treemap_top_n);
    renderer.draw_treemap(&treemap);

    debug!(
        shared_rows = shared.len(),
        bar_rows = bar_view.len(),
        treemap_rows = treemap_view.len(),
        "render pass"
    );

    DashboardFrame {
        controls,
        kpi,
        line,
        stacked,
        bars,
        treemap,
    }
}
