//! Drill-down selections raised by clicking chart elements.

use serde::{Deserialize, Serialize};

/// Chart whose elements own a drill-down selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSource {
    Bar,
    Treemap,
}

impl ChartSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "bar chart",
            Self::Treemap => "treemap",
        }
    }
}

/// The two independent single-country selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DrillDown {
    bar: Option<String>,
    treemap: Option<String>,
}

impl DrillDown {
    pub fn get(&self, source: ChartSource) -> Option<&str> {
        match source {
            ChartSource::Bar => self.bar.as_deref(),
            ChartSource::Treemap => self.treemap.as_deref(),
        }
    }

    pub fn bar(&self) -> Option<&str> {
        self.get(ChartSource::Bar)
    }

    pub fn treemap(&self) -> Option<&str> {
        self.get(ChartSource::Treemap)
    }

    /// Selection driving the shared charts: the bar chart's wins over the treemap's.
    pub fn shared(&self) -> Option<&str> {
        self.bar().or(self.treemap())
    }

    /// Clear the selection when it already equals `country`, otherwise replace it.
    pub(crate) fn toggle(&mut self, source: ChartSource, country: &str) {
        let slot = match source {
            ChartSource::Bar => &mut self.bar,
            ChartSource::Treemap => &mut self.treemap,
        };
        if slot.as_deref() == Some(country) {
            *slot = None;
        } else {
            *slot = Some(country.to_string());
        }
    }
}
