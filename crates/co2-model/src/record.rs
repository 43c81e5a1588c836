//! Emission records as loaded from the dataset.

use serde::{Deserialize, Serialize};

/// Emission sector tracked alongside the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Coal,
    Oil,
    Gas,
    Cement,
}

impl Sector {
    /// All sectors in stacking order (bottom to top).
    pub const ALL: [Self; 4] = [Self::Coal, Self::Oil, Self::Gas, Self::Cement];

    /// Source column name in the dataset.
    pub fn column(self) -> &'static str {
        match self {
            Self::Coal => "coal_co2",
            Self::Oil => "oil_co2",
            Self::Gas => "gas_co2",
            Self::Cement => "cement_co2",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Coal => "Coal",
            Self::Oil => "Oil",
            Self::Gas => "Gas",
            Self::Cement => "Cement",
        }
    }

    /// Position within [`Sector::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Coal => 0,
            Self::Oil => 1,
            Self::Gas => 2,
            Self::Cement => 3,
        }
    }
}

/// One country-year row. Empty strings mark missing categorical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    pub region: String,
    pub income_level: String,
    pub year: i32,
    /// Total emissions (Mt).
    pub co2: f64,
    pub coal_co2: f64,
    pub oil_co2: f64,
    pub gas_co2: f64,
    pub cement_co2: f64,
}

impl Record {
    /// Create a record with all sector components set to zero.
    pub fn new(
        country: impl Into<String>,
        region: impl Into<String>,
        income_level: impl Into<String>,
        year: i32,
        co2: f64,
    ) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            income_level: income_level.into(),
            year,
            co2,
            coal_co2: 0.0,
            oil_co2: 0.0,
            gas_co2: 0.0,
            cement_co2: 0.0,
        }
    }

    /// Set one sector component.
    #[must_use]
    pub fn with_sector(mut self, sector: Sector, value: f64) -> Self {
        *self.sector_mut(sector) = value;
        self
    }

    pub fn sector(&self, sector: Sector) -> f64 {
        match sector {
            Sector::Coal => self.coal_co2,
            Sector::Oil => self.oil_co2,
            Sector::Gas => self.gas_co2,
            Sector::Cement => self.cement_co2,
        }
    }

    pub fn sector_mut(&mut self, sector: Sector) -> &mut f64 {
        match sector {
            Sector::Coal => &mut self.coal_co2,
            Sector::Oil => &mut self.oil_co2,
            Sector::Gas => &mut self.gas_co2,
            Sector::Cement => &mut self.cement_co2,
        }
    }
}
