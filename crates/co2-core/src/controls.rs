//! Filter controls: the two checklists and the year range slider.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use co2_model::YearRange;

use crate::format::UNAVAILABLE;

/// Which checklist a control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistKind {
    Region,
    IncomeLevel,
}

impl ChecklistKind {
    pub const ALL: [Self; 2] = [Self::Region, Self::IncomeLevel];

    pub fn label(self) -> &'static str {
        match self {
            Self::Region => "Region",
            Self::IncomeLevel => "Income level",
        }
    }
}

/// Text shown on a checklist's dropdown toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum ChecklistSummary {
    All,
    None,
    Some(usize),
}

impl fmt::Display for ChecklistSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All selected"),
            Self::None => f.write_str("None selected"),
            Self::Some(count) => write!(f, "{count} selected"),
        }
    }
}

/// A multi-select group of checkboxes over a fixed option list.
///
/// The checked set is always a subset of the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistGroup {
    options: Vec<String>,
    checked: BTreeSet<String>,
}

impl ChecklistGroup {
    /// Group with every option checked.
    pub fn all_checked(options: &[String]) -> Self {
        Self {
            options: options.to_vec(),
            checked: options.iter().cloned().collect(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Currently checked values.
    pub fn checked(&self) -> &BTreeSet<String> {
        &self.checked
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.checked.contains(value)
    }

    pub fn contains_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }

    pub fn summary(&self) -> ChecklistSummary {
        let count = self.checked.len();
        if count == self.options.len() {
            ChecklistSummary::All
        } else if count == 0 {
            ChecklistSummary::None
        } else {
            ChecklistSummary::Some(count)
        }
    }

    /// Check or uncheck one option. Returns `false` for values that are not options.
    pub(crate) fn set_checked(&mut self, value: &str, checked: bool) -> bool {
        if !self.contains_option(value) {
            return false;
        }
        if checked {
            self.checked.insert(value.to_string());
        } else {
            self.checked.remove(value);
        }
        true
    }

    pub(crate) fn set_all(&mut self, checked: bool) {
        if checked {
            self.checked = self.options.iter().cloned().collect();
        } else {
            self.checked.clear();
        }
    }
}

/// Position of the highlighted segment between the two slider thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderFill {
    pub left_px: f64,
    pub width_px: f64,
}

/// Two independent year inputs sharing one track.
///
/// Endpoints are clamped to the dataset's year bounds but may cross. A
/// dataset without rows has no bounds; the slider then accepts any year and
/// draws an empty fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSlider {
    bounds: Option<YearRange>,
    start: i32,
    end: i32,
}

impl YearSlider {
    /// Slider spanning the full bounds.
    pub fn full(bounds: YearRange) -> Self {
        Self {
            bounds: Some(bounds),
            start: bounds.first(),
            end: bounds.last(),
        }
    }

    /// Slider over an empty dataset.
    pub fn unbounded() -> Self {
        Self {
            bounds: None,
            start: 0,
            end: 0,
        }
    }

    pub fn bounds(&self) -> Option<YearRange> {
        self.bounds
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Effective, order-normalized range.
    pub fn range(&self) -> YearRange {
        YearRange::new(self.start, self.end)
    }

    pub(crate) fn set_start(&mut self, year: i32) {
        self.start = self.clamp(year);
    }

    pub(crate) fn set_end(&mut self, year: i32) {
        self.end = self.clamp(year);
    }

    fn clamp(&self, year: i32) -> i32 {
        self.bounds.map_or(year, |bounds| bounds.clamp(year))
    }

    /// Fill segment for a track `track_width` pixels wide with thumbs of `thumb_radius`.
    pub fn fill(&self, track_width: f64, thumb_radius: f64) -> SliderFill {
        let empty = SliderFill {
            left_px: thumb_radius,
            width_px: 0.0,
        };
        let Some(bounds) = self.bounds else {
            return empty;
        };
        let span = f64::from(bounds.span());
        let usable = (track_width - 2.0 * thumb_radius).max(0.0);
        if span == 0.0 {
            return empty;
        }
        let range = self.range();
        let offset = f64::from(range.first() - bounds.first());
        SliderFill {
            left_px: thumb_radius + offset / span * usable,
            width_px: f64::from(range.span()) / span * usable,
        }
    }

    pub fn label(&self) -> String {
        if self.bounds.is_none() {
            return UNAVAILABLE.to_string();
        }
        let range = self.range();
        format!("{} – {}", range.first(), range.last())
    }
}
