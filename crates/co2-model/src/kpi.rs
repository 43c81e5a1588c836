use serde::{Deserialize, Serialize};

/// Display category chosen from the sign of the year-over-year change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YoyCategory {
    Positive,
    Negative,
    /// Zero change or no comparison available.
    Unavailable,
}

impl YoyCategory {
    pub fn from_change(change: Option<f64>) -> Self {
        match change {
            Some(value) if value > 0.0 => Self::Positive,
            Some(value) if value < 0.0 => Self::Negative,
            _ => Self::Unavailable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Unavailable => "unavailable",
        }
    }

    /// Hex colour used for the YoY text.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Positive => "#d97706",
            Self::Negative => "#2563eb",
            Self::Unavailable => "#6b7280",
        }
    }
}

/// Percentage change from `previous` to `latest`, `None` when `previous` is zero.
pub fn percent_change(latest: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    let change = (latest - previous) / previous * 100.0;
    change.is_finite().then_some(change)
}
