//! Configuration options for the dashboard.

use serde::{Deserialize, Serialize};

/// Tunables shared by the chart models and the slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOptions {
    /// Number of countries shown in the bar chart.
    pub bar_top_n: usize,
    /// Number of tiles shown in the treemap.
    pub treemap_top_n: usize,
    /// Width of the year slider track in pixels.
    pub track_width_px: f64,
    /// Radius of a slider thumb in pixels.
    pub thumb_radius_px: f64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            bar_top_n: 10,
            treemap_top_n: 15,
            track_width_px: 300.0,
            thumb_radius_px: 7.0,
        }
    }
}

impl DashboardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bar_top_n(mut self, n: usize) -> Self {
        self.bar_top_n = n;
        self
    }

    #[must_use]
    pub fn with_treemap_top_n(mut self, n: usize) -> Self {
        self.treemap_top_n = n;
        self
    }

    #[must_use]
    pub fn with_track_width(mut self, width_px: f64) -> Self {
        self.track_width_px = width_px;
        self
    }
}
