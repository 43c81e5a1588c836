use serde::{Deserialize, Serialize};

/// Inclusive, order-normalized year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    first: i32,
    last: i32,
}

impl YearRange {
    /// Build a range from two endpoints in either order.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            first: a.min(b),
            last: a.max(b),
        }
    }

    pub fn first(self) -> i32 {
        self.first
    }

    pub fn last(self) -> i32 {
        self.last
    }

    pub fn contains(self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Number of years between the endpoints (zero for a single-year range).
    pub fn span(self) -> i32 {
        self.last - self.first
    }

    /// Clamp a year into this range.
    pub fn clamp(self, year: i32) -> i32 {
        year.clamp(self.first, self.last)
    }
}
