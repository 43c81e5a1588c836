//! Terminal renderer: each chart becomes a `comfy-table` panel.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use co2_core::format::{UNAVAILABLE, format_mt, format_share, group_thousands};
use co2_core::{
    BarChartModel, ControlsView, KpiSummary, LineChartModel, Renderer, StackedAreaModel,
    TreemapModel,
};
use co2_ingest::LoadReport;
use co2_model::{Dataset, Sector, YoyCategory};

/// Widest bar drawn in the bar chart panel, in characters.
const BAR_WIDTH: usize = 30;

/// Keeps the latest drawing of every panel.
#[derive(Default)]
pub struct TerminalRenderer {
    controls: Option<Table>,
    kpi: Option<Table>,
    line: Option<Table>,
    stacked: Option<Table>,
    bars: Option<Table>,
    treemap: Option<Table>,
    load_error: Option<String>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Every panel drawn so far, in dashboard order.
    pub fn render_text(&self) -> String {
        if let Some(message) = &self.load_error {
            return format!("Error: {message}\n");
        }
        let panels = [
            ("Filters", &self.controls),
            ("Summary", &self.kpi),
            ("Emissions by year", &self.line),
            ("Emissions by sector", &self.stacked),
            ("Top emitters", &self.bars),
            ("Share of emissions", &self.treemap),
        ];
        let mut out = String::new();
        for (title, table) in panels {
            if let Some(table) = table {
                out.push_str(title);
                out.push('\n');
                out.push_str(&table.to_string());
                out.push_str("\n\n");
            }
        }
        out
    }
}

impl Renderer for TerminalRenderer {
    fn draw_controls(&mut self, controls: &ControlsView) {
        let mut table = panel_table(&["Filter", "Value"]);
        table.add_row(vec![Cell::new("Years"), Cell::new(&controls.year_label)]);
        table.add_row(vec![
            dim_cell("Slider fill"),
            dim_cell(format!(
                "left {:.1}px, width {:.1}px",
                controls.fill.left_px, controls.fill.width_px
            )),
        ]);
        for checklist in &controls.checklists {
            table.add_row(vec![
                Cell::new(checklist.kind.label()),
                Cell::new(&checklist.label),
            ]);
        }
        self.controls = Some(table);
    }

    fn draw_kpi(&mut self, kpi: &KpiSummary) {
        let mut table = panel_table(&["KPI", "Value"]);
        match kpi {
            KpiSummary::NoData => {
                table.add_row(vec![Cell::new("Total"), dim_cell(UNAVAILABLE)]);
            }
            KpiSummary::Figures(_) => {
                table.add_row(vec![Cell::new("Period"), Cell::new(kpi.period_label())]);
                table.add_row(vec![
                    Cell::new("Total"),
                    Cell::new(kpi.total_text()).add_attribute(Attribute::Bold),
                ]);
                table.add_row(vec![Cell::new("Latest"), Cell::new(kpi.latest_text())]);
                table.add_row(vec![
                    Cell::new("Change"),
                    Cell::new(kpi.yoy_text()).fg(category_color(kpi.category())),
                ]);
            }
        }
        self.kpi = Some(table);
    }

    fn draw_line(&mut self, model: &LineChartModel) {
        let mut table = panel_table(&["Year", "CO2"]);
        align_column(&mut table, 1, CellAlignment::Right);
        if model.is_empty() {
            table.add_row(no_data_row(2));
        }
        for point in &model.points {
            table.add_row(vec![Cell::new(point.year), Cell::new(format_mt(point.value))]);
        }
        self.line = Some(table);
    }

    fn draw_stacked(&mut self, model: &StackedAreaModel) {
        let mut header = vec!["Year"];
        header.extend(model.sectors.into_iter().map(Sector::label));
        header.push("Total");
        let mut table = panel_table(&header);
        for index in 1..header.len() {
            align_column(&mut table, index, CellAlignment::Right);
        }
        if model.is_empty() {
            table.add_row(no_data_row(header.len()));
        }
        for year in &model.years {
            let mut row = vec![Cell::new(year.year)];
            row.extend(
                Sector::ALL
                    .into_iter()
                    .map(|sector| Cell::new(group_thousands(year.value(sector)))),
            );
            row.push(Cell::new(group_thousands(year.total())).add_attribute(Attribute::Bold));
            table.add_row(row);
        }
        self.stacked = Some(table);
    }

    fn draw_bars(&mut self, model: &BarChartModel) {
        let mut table = panel_table(&["Country", "CO2", ""]);
        align_column(&mut table, 1, CellAlignment::Right);
        if model.is_empty() {
            table.add_row(no_data_row(3));
        }
        let max = model
            .bars
            .iter()
            .map(|bar| bar.value)
            .fold(0.0_f64, f64::max);
        for bar in &model.bars {
            let length = bar_length(bar.value, max);
            let cells = vec![
                Cell::new(&bar.country),
                Cell::new(format_mt(bar.value)),
                Cell::new("█".repeat(length)),
            ];
            table.add_row(highlight_row(cells, bar.selected, bar.dimmed));
        }
        self.bars = Some(table);
    }

    fn draw_treemap(&mut self, model: &TreemapModel) {
        let mut table = panel_table(&["Country", "CO2", "Share"]);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        if model.is_empty() {
            table.add_row(no_data_row(3));
        }
        for tile in &model.tiles {
            let cells = vec![
                Cell::new(&tile.country),
                Cell::new(format_mt(tile.value)),
                Cell::new(format_share(tile.share_percent)),
            ];
            table.add_row(highlight_row(cells, tile.selected, tile.dimmed));
        }
        self.treemap = Some(table);
    }

    fn show_load_error(&mut self, message: &str) {
        self.load_error = Some(message.to_string());
    }
}

/// Filter options of a dataset, for the `options` command.
pub fn options_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Filter"), header_cell("Options")]);
    apply_table_style(&mut table);
    let years = dataset.year_bounds().map_or_else(
        || UNAVAILABLE.to_string(),
        |bounds| format!("{} – {}", bounds.first(), bounds.last()),
    );
    table.add_row(vec![Cell::new("Years"), Cell::new(years)]);
    table.add_row(vec![
        Cell::new(format!("Regions ({})", dataset.regions().len())),
        Cell::new(dataset.regions().join("\n")),
    ]);
    table.add_row(vec![
        Cell::new(format!("Income levels ({})", dataset.income_levels().len())),
        Cell::new(dataset.income_levels().join("\n")),
    ]);
    table
}

pub fn load_report_line(source: &str, report: &LoadReport) -> String {
    let kept = report.rows_read.saturating_sub(report.rows_skipped);
    let mut line = format!("Loaded {kept} rows from {source}");
    if report.rows_skipped > 0 {
        line.push_str(&format!(", skipped {} without a year", report.rows_skipped));
    }
    if report.values_defaulted > 0 {
        line.push_str(&format!(", {} empty values read as 0", report.values_defaulted));
    }
    line
}

fn bar_length(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    // Bounded by BAR_WIDTH, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let length = (value / max * BAR_WIDTH as f64).round() as usize;
    length.min(BAR_WIDTH)
}

fn category_color(category: YoyCategory) -> Color {
    let hex = category.color_hex().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .unwrap_or(0)
    };
    Color::Rgb {
        r: channel(0..2),
        g: channel(2..4),
        b: channel(4..6),
    }
}

fn highlight_row(cells: Vec<Cell>, selected: bool, dimmed: bool) -> Vec<Cell> {
    cells
        .into_iter()
        .map(|cell| {
            if selected {
                cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
            } else if dimmed {
                cell.fg(Color::DarkGrey)
            } else {
                cell
            }
        })
        .collect()
}

fn no_data_row(columns: usize) -> Vec<Cell> {
    let mut row = vec![dim_cell("No data")];
    row.extend((1..columns).map(|_| dim_cell("")));
    row
}

fn panel_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(header.iter().copied().map(header_cell).collect::<Vec<_>>());
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
