//! The dashboard: dataset, filter state, renderer, and the single
//! apply-and-render entry point.
//!
//! Events are accepted from construction onwards but stay inert until the
//! dataset has loaded. A failed load is terminal.

use std::fmt::Display;

use tracing::{debug, error, info, warn};

use co2_model::{DashboardOptions, Dataset};

use crate::control_table::{UiEvent, binding};
use crate::error::Result;
use crate::render::{DashboardFrame, Renderer, render_all};
use crate::resolver::FilterResolver;
use crate::state::{FilterState, Mutation};

/// Lifecycle of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPhase {
    Loading,
    Ready,
    Failed,
}

/// What happened to an event or mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and every visual was redrawn.
    Rendered,
    /// The dashboard is not ready; nothing changed.
    Inert,
}

#[derive(Debug)]
enum Phase {
    Loading,
    Ready {
        dataset: Dataset,
        state: FilterState,
    },
    Failed(String),
}

pub struct Dashboard<R: Renderer> {
    phase: Phase,
    renderer: R,
    options: DashboardOptions,
    render_count: u64,
    last_frame: Option<DashboardFrame>,
}

impl<R: Renderer> Dashboard<R> {
    /// A dashboard waiting for its dataset.
    pub fn new(renderer: R, options: DashboardOptions) -> Self {
        Self {
            phase: Phase::Loading,
            renderer,
            options,
            render_count: 0,
            last_frame: None,
        }
    }

    /// Convenience for a dashboard whose dataset is already in memory.
    pub fn with_dataset(renderer: R, options: DashboardOptions, dataset: Dataset) -> Self {
        let mut dashboard = Self::new(renderer, options);
        dashboard.finish_loading(Ok::<_, std::convert::Infallible>(dataset));
        dashboard
    }

    /// Complete the one-time load. Success triggers the initial render;
    /// failure is shown by the renderer and leaves the dashboard inert.
    pub fn finish_loading<E: Display>(&mut self, result: std::result::Result<Dataset, E>) -> Outcome {
        if !matches!(self.phase, Phase::Loading) {
            warn!("dataset already loaded; ignoring second load");
            return Outcome::Inert;
        }
        match result {
            Ok(dataset) => {
                let state = FilterState::initial(&dataset);
                info!(
                    rows = dataset.len(),
                    regions = dataset.regions().len(),
                    income_levels = dataset.income_levels().len(),
                    "dashboard ready"
                );
                self.phase = Phase::Ready { dataset, state };
                self.render();
                Outcome::Rendered
            }
            Err(load_error) => {
                let message = format!("failed to load dataset: {load_error}");
                error!("{message}");
                self.renderer.show_load_error(&message);
                self.phase = Phase::Failed(message);
                Outcome::Inert
            }
        }
    }

    /// Apply one mutation and redraw everything.
    ///
    /// This is the only way to change filter state. Invalid mutations are
    /// rejected without a redraw.
    pub fn apply(&mut self, mutation: Mutation) -> Result<Outcome> {
        let Phase::Ready { state, .. } = &mut self.phase else {
            debug!(?mutation, "dashboard not ready; mutation ignored");
            return Ok(Outcome::Inert);
        };
        state.apply(&mutation)?;
        debug!(?mutation, "mutation applied");
        self.render();
        Ok(Outcome::Rendered)
    }

    /// Resolve a UI event through the control table and apply it.
    pub fn handle(&mut self, event: UiEvent) -> Result<Outcome> {
        let mutation = binding(event)?;
        self.apply(mutation)
    }

    fn render(&mut self) {
        let Phase::Ready { dataset, state } = &self.phase else {
            return;
        };
        let frame = render_all(dataset, state, &self.options, &mut self.renderer);
        self.render_count += 1;
        self.last_frame = Some(frame);
    }

    pub fn phase(&self) -> DashboardPhase {
        match self.phase {
            Phase::Loading => DashboardPhase::Loading,
            Phase::Ready { .. } => DashboardPhase::Ready,
            Phase::Failed(_) => DashboardPhase::Failed,
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.phase {
            Phase::Ready { dataset, .. } => Some(dataset),
            _ => None,
        }
    }

    pub fn state(&self) -> Option<&FilterState> {
        match &self.phase {
            Phase::Ready { state, .. } => Some(state),
            _ => None,
        }
    }

    /// Resolver over the current dataset and state.
    pub fn resolver(&self) -> Option<FilterResolver<'_>> {
        match &self.phase {
            Phase::Ready { dataset, state } => Some(FilterResolver::new(dataset, state)),
            _ => None,
        }
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    /// Number of completed render passes.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Output of the most recent render pass.
    pub fn last_frame(&self) -> Option<&DashboardFrame> {
        self.last_frame.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
