//! The dashboard's mutable filter state and the mutations it accepts.
//!
//! Mutators are crate-private: outside code changes state only through
//! [`crate::Dashboard::apply`], which always re-renders afterwards.

use serde::{Deserialize, Serialize};

use co2_model::{Dataset, YearRange};

use crate::controls::{ChecklistGroup, ChecklistKind, YearSlider};
use crate::error::{DispatchError, Result};
use crate::selection::{ChartSource, DrillDown};

/// One named change to [`FilterState`]. Each touches exactly one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    SetYearStart { year: i32 },
    SetYearEnd { year: i32 },
    SetChecked {
        kind: ChecklistKind,
        value: String,
        checked: bool,
    },
    SetAll { kind: ChecklistKind, checked: bool },
    ToggleDrillDown { source: ChartSource, country: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    years: YearSlider,
    regions: ChecklistGroup,
    income_levels: ChecklistGroup,
    drill_down: DrillDown,
}

impl FilterState {
    /// Full year range, every option checked, no drill-down.
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            years: dataset
                .year_bounds()
                .map_or_else(YearSlider::unbounded, YearSlider::full),
            regions: ChecklistGroup::all_checked(dataset.regions()),
            income_levels: ChecklistGroup::all_checked(dataset.income_levels()),
            drill_down: DrillDown::default(),
        }
    }

    pub fn years(&self) -> &YearSlider {
        &self.years
    }

    pub fn year_range(&self) -> YearRange {
        self.years.range()
    }

    pub fn checklist(&self, kind: ChecklistKind) -> &ChecklistGroup {
        match kind {
            ChecklistKind::Region => &self.regions,
            ChecklistKind::IncomeLevel => &self.income_levels,
        }
    }

    pub fn regions(&self) -> &ChecklistGroup {
        &self.regions
    }

    pub fn income_levels(&self) -> &ChecklistGroup {
        &self.income_levels
    }

    pub fn drill_down(&self) -> &DrillDown {
        &self.drill_down
    }

    fn checklist_mut(&mut self, kind: ChecklistKind) -> &mut ChecklistGroup {
        match kind {
            ChecklistKind::Region => &mut self.regions,
            ChecklistKind::IncomeLevel => &mut self.income_levels,
        }
    }

    /// Validate and apply a mutation. State is untouched on error.
    pub(crate) fn apply(&mut self, mutation: &Mutation) -> Result<()> {
        match mutation {
            Mutation::SetYearStart { year } => self.years.set_start(*year),
            Mutation::SetYearEnd { year } => self.years.set_end(*year),
            Mutation::SetChecked {
                kind,
                value,
                checked,
            } => {
                if !self.checklist_mut(*kind).set_checked(value, *checked) {
                    return Err(DispatchError::UnknownOption {
                        kind: *kind,
                        value: value.clone(),
                    });
                }
            }
            Mutation::SetAll { kind, checked } => self.checklist_mut(*kind).set_all(*checked),
            Mutation::ToggleDrillDown { source, country } => {
                if country.trim().is_empty() {
                    return Err(DispatchError::EmptyCountry);
                }
                self.drill_down.toggle(*source, country);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use co2_model::Record;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Record::new("A", "R1", "I1", 2000, 1.0),
            Record::new("B", "R2", "I2", 2005, 2.0),
        ])
    }

    #[test]
    fn initial_state_is_unfiltered() {
        let state = FilterState::initial(&dataset());
        assert_eq!(state.year_range(), YearRange::new(2000, 2005));
        assert_eq!(state.regions().checked().len(), 2);
        assert_eq!(state.income_levels().checked().len(), 2);
        assert_eq!(state.drill_down(), &DrillDown::default());
    }

    #[test]
    fn unknown_option_leaves_state_untouched() {
        let mut state = FilterState::initial(&dataset());
        let before = state.clone();
        let error = state
            .apply(&Mutation::SetChecked {
                kind: ChecklistKind::Region,
                value: "R9".to_string(),
                checked: false,
            })
            .unwrap_err();
        assert!(matches!(error, DispatchError::UnknownOption { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut state = FilterState::initial(&dataset());
        let before = state.clone();
        let toggle = Mutation::ToggleDrillDown {
            source: ChartSource::Treemap,
            country: "A".to_string(),
        };
        state.apply(&toggle).unwrap();
        assert_ne!(state, before);
        state.apply(&toggle).unwrap();
        assert_eq!(state, before);
    }
}
