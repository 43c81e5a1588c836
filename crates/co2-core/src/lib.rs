//! Cross-filtering core of the CO2 dashboard.
//!
//! [`Dashboard`] owns the dataset, the [`FilterState`] and a [`Renderer`].
//! UI events are mapped to [`Mutation`]s through the control table and
//! applied with [`Dashboard::apply`], which re-renders every chart.

pub mod aggregate;
pub mod charts;
pub mod control_table;
pub mod controls;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod kpi;
pub mod render;
pub mod resolver;
pub mod selection;
pub mod state;

pub use aggregate::{SectorYear, YearTotal, country_totals, yearly_sector_totals, yearly_totals};
pub use charts::{
    BarChartModel, BarItem, LineChartModel, StackedAreaModel, TreemapModel, TreemapTile,
};
pub use control_table::{ControlAction, ControlId, UiEvent, UiInput, binding};
pub use controls::{ChecklistGroup, ChecklistKind, ChecklistSummary, SliderFill, YearSlider};
pub use dashboard::{Dashboard, DashboardPhase, Outcome};
pub use error::{DispatchError, Result};
pub use kpi::{KpiFigures, KpiSummary};
pub use render::{
    ChecklistView, ControlsView, DashboardFrame, NullRenderer, Renderer, render_all,
};
pub use resolver::{FilterResolver, View, passes_base_filters};
pub use selection::{ChartSource, DrillDown};
pub use state::{FilterState, Mutation};
