use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use co2_core::{ChartSource, ChecklistKind, Dashboard, UiEvent};
use co2_ingest::read_dataset;
use co2_model::DashboardOptions;

use crate::cli::{DashboardArgs, OptionsArgs, OutputFormatArg, ReplayArgs, ShowArgs};
use crate::script::parse_script;
use crate::terminal::{TerminalRenderer, load_report_line, options_table};

/// A rendered dashboard and the number of events it refused.
pub struct RunResult {
    pub dashboard: Dashboard<TerminalRenderer>,
    pub rejected: usize,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        self.rejected > 0
    }
}

pub fn run_options(args: &OptionsArgs) -> Result<String> {
    let loaded = read_dataset(&args.csv)?;
    let source = args.csv.display().to_string();
    Ok(format!(
        "{}\n{}\n",
        load_report_line(&source, &loaded.report),
        options_table(&loaded.dataset)
    ))
}

pub fn run_show(args: &ShowArgs) -> Result<RunResult> {
    let mut dashboard = open_dashboard(&args.dashboard)?;
    for event in show_events(args) {
        let control = event.control;
        dashboard
            .handle(event)
            .with_context(|| format!("apply {control}"))?;
    }
    Ok(RunResult {
        dashboard,
        rejected: 0,
    })
}

pub fn run_replay(args: &ReplayArgs) -> Result<RunResult> {
    let text = fs::read_to_string(&args.script)
        .with_context(|| format!("read script {}", args.script.display()))?;
    let events = parse_script(&text)
        .with_context(|| format!("parse script {}", args.script.display()))?;

    let mut dashboard = open_dashboard(&args.dashboard)?;
    let span = info_span!("replay", events = events.len());
    let _guard = span.enter();
    let mut rejected = 0usize;
    for scripted in events {
        if let Err(error) = dashboard.handle(scripted.event) {
            warn!(line = scripted.line, %error, "event rejected");
            rejected += 1;
        }
    }
    info!(renders = dashboard.render_count(), rejected, "replay finished");
    Ok(RunResult {
        dashboard,
        rejected,
    })
}

/// The final frame as a table dump or JSON.
pub fn render_output(
    dashboard: &Dashboard<TerminalRenderer>,
    format: OutputFormatArg,
) -> Result<String> {
    match format {
        OutputFormatArg::Table => Ok(dashboard.renderer().render_text()),
        OutputFormatArg::Json => {
            let mut json = serde_json::to_string_pretty(&dashboard.last_frame())
                .context("serialize dashboard frame")?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn load_options(config: Option<&Path>) -> Result<DashboardOptions> {
    let Some(path) = config else {
        return Ok(DashboardOptions::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

fn open_dashboard(args: &DashboardArgs) -> Result<Dashboard<TerminalRenderer>> {
    let mut options = load_options(args.config.as_deref())?;
    if let Some(n) = args.bar_top {
        options = options.with_bar_top_n(n);
    }
    if let Some(n) = args.treemap_top {
        options = options.with_treemap_top_n(n);
    }

    let mut dashboard = Dashboard::new(TerminalRenderer::new(), options);
    let source = args.csv.display().to_string();
    let loaded = read_dataset(&args.csv).map(|loaded| {
        info!("{}", load_report_line(&source, &loaded.report));
        loaded.dataset
    });
    dashboard.finish_loading(loaded);
    if let Some(message) = dashboard.load_error() {
        bail!("{message}");
    }
    Ok(dashboard)
}

/// Control events equivalent to the `show` flags, in the order a user would click.
fn show_events(args: &ShowArgs) -> Vec<UiEvent> {
    let mut events = Vec::new();
    if let Some(year) = args.from {
        events.push(UiEvent::year_start(year));
    }
    if let Some(year) = args.to {
        events.push(UiEvent::year_end(year));
    }
    let checklists = [
        (ChecklistKind::Region, args.no_regions, &args.regions),
        (ChecklistKind::IncomeLevel, args.no_incomes, &args.incomes),
    ];
    for (kind, none, values) in checklists {
        if none || !values.is_empty() {
            events.push(UiEvent::select_all(kind, false));
        }
        events.extend(
            values
                .iter()
                .map(|value| UiEvent::checkbox(kind, value.as_str(), true)),
        );
    }
    if let Some(country) = &args.bar {
        events.push(UiEvent::chart_click(ChartSource::Bar, country.as_str()));
    }
    if let Some(country) = &args.treemap {
        events.push(UiEvent::chart_click(ChartSource::Treemap, country.as_str()));
    }
    events
}
