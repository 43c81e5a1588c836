//! Mapping from UI controls to the mutation each one performs.
//!
//! [`ControlId::action`] is the table: one entry per control. [`binding`]
//! combines that entry with the event payload. Nothing here touches state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::controls::ChecklistKind;
use crate::error::{DispatchError, Result};
use crate::selection::ChartSource;
use crate::state::Mutation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    YearStart,
    YearEnd,
    RegionOptions,
    IncomeOptions,
    RegionSelectAll,
    RegionSelectNone,
    IncomeSelectAll,
    IncomeSelectNone,
    BarChart,
    Treemap,
}

/// What a control does, independent of the event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    SetYearStart,
    SetYearEnd,
    Check(ChecklistKind),
    SetAll(ChecklistKind, bool),
    ToggleDrillDown(ChartSource),
}

impl ControlId {
    pub const ALL: [Self; 10] = [
        Self::YearStart,
        Self::YearEnd,
        Self::RegionOptions,
        Self::IncomeOptions,
        Self::RegionSelectAll,
        Self::RegionSelectNone,
        Self::IncomeSelectAll,
        Self::IncomeSelectNone,
        Self::BarChart,
        Self::Treemap,
    ];

    /// Element id the control is bound to.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::YearStart => "yearStart",
            Self::YearEnd => "yearEnd",
            Self::RegionOptions => "regionOptions",
            Self::IncomeOptions => "incomeOptions",
            Self::RegionSelectAll => "regionDropdown.all",
            Self::RegionSelectNone => "regionDropdown.none",
            Self::IncomeSelectAll => "incomeDropdown.all",
            Self::IncomeSelectNone => "incomeDropdown.none",
            Self::BarChart => "barChart",
            Self::Treemap => "treemapChart",
        }
    }

    pub fn action(self) -> ControlAction {
        match self {
            Self::YearStart => ControlAction::SetYearStart,
            Self::YearEnd => ControlAction::SetYearEnd,
            Self::RegionOptions => ControlAction::Check(ChecklistKind::Region),
            Self::IncomeOptions => ControlAction::Check(ChecklistKind::IncomeLevel),
            Self::RegionSelectAll => ControlAction::SetAll(ChecklistKind::Region, true),
            Self::RegionSelectNone => ControlAction::SetAll(ChecklistKind::Region, false),
            Self::IncomeSelectAll => ControlAction::SetAll(ChecklistKind::IncomeLevel, true),
            Self::IncomeSelectNone => ControlAction::SetAll(ChecklistKind::IncomeLevel, false),
            Self::BarChart => ControlAction::ToggleDrillDown(ChartSource::Bar),
            Self::Treemap => ControlAction::ToggleDrillDown(ChartSource::Treemap),
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

impl FromStr for ControlId {
    type Err = DispatchError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.element_id() == value)
            .ok_or_else(|| DispatchError::UnknownControl(value.to_string()))
    }
}

/// Payload carried by a UI event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiInput {
    /// Numeric input value (slider).
    Value(i32),
    /// A checkbox inside a checklist changed.
    Checkbox { value: String, checked: bool },
    /// A button was pressed.
    Click,
    /// A chart element for this country was clicked.
    Country(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiEvent {
    pub control: ControlId,
    pub input: UiInput,
}

impl UiEvent {
    pub fn new(control: ControlId, input: UiInput) -> Self {
        Self { control, input }
    }

    pub fn year_start(year: i32) -> Self {
        Self::new(ControlId::YearStart, UiInput::Value(year))
    }

    pub fn year_end(year: i32) -> Self {
        Self::new(ControlId::YearEnd, UiInput::Value(year))
    }

    pub fn checkbox(kind: ChecklistKind, value: impl Into<String>, checked: bool) -> Self {
        let control = match kind {
            ChecklistKind::Region => ControlId::RegionOptions,
            ChecklistKind::IncomeLevel => ControlId::IncomeOptions,
        };
        Self::new(
            control,
            UiInput::Checkbox {
                value: value.into(),
                checked,
            },
        )
    }

    pub fn select_all(kind: ChecklistKind, checked: bool) -> Self {
        let control = match (kind, checked) {
            (ChecklistKind::Region, true) => ControlId::RegionSelectAll,
            (ChecklistKind::Region, false) => ControlId::RegionSelectNone,
            (ChecklistKind::IncomeLevel, true) => ControlId::IncomeSelectAll,
            (ChecklistKind::IncomeLevel, false) => ControlId::IncomeSelectNone,
        };
        Self::new(control, UiInput::Click)
    }

    pub fn chart_click(source: ChartSource, country: impl Into<String>) -> Self {
        let control = match source {
            ChartSource::Bar => ControlId::BarChart,
            ChartSource::Treemap => ControlId::Treemap,
        };
        Self::new(control, UiInput::Country(country.into()))
    }
}

fn expects(control: ControlId, expected: &'static str) -> DispatchError {
    DispatchError::InputMismatch { control, expected }
}

/// Resolve an event to the mutation its control performs.
pub fn binding(event: UiEvent) -> Result<Mutation> {
    let UiEvent { control, input } = event;
    let action = control.action();
    match (action, input) {
        (ControlAction::SetYearStart, UiInput::Value(year)) => Ok(Mutation::SetYearStart { year }),
        (ControlAction::SetYearEnd, UiInput::Value(year)) => Ok(Mutation::SetYearEnd { year }),
        (ControlAction::Check(kind), UiInput::Checkbox { value, checked }) => {
            Ok(Mutation::SetChecked {
                kind,
                value,
                checked,
            })
        }
        (ControlAction::SetAll(kind, checked), UiInput::Click) => {
            Ok(Mutation::SetAll { kind, checked })
        }
        (ControlAction::ToggleDrillDown(source), UiInput::Country(country)) => {
            Ok(Mutation::ToggleDrillDown { source, country })
        }
        (ControlAction::SetYearStart | ControlAction::SetYearEnd, _) => {
            Err(expects(control, "a year value"))
        }
        (ControlAction::Check(_), _) => Err(expects(control, "a checkbox change")),
        (ControlAction::SetAll(..), _) => Err(expects(control, "a click")),
        (ControlAction::ToggleDrillDown(_), _) => Err(expects(control, "a country")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_round_trip() {
        for id in ControlId::ALL {
            let parsed: ControlId = id.element_id().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn unknown_element_id_is_rejected() {
        let error = "kpiTotal".parse::<ControlId>().unwrap_err();
        assert_eq!(error, DispatchError::UnknownControl("kpiTotal".to_string()));
    }

    #[test]
    fn select_none_maps_to_set_all_false() {
        let mutation = binding(UiEvent::select_all(ChecklistKind::IncomeLevel, false)).unwrap();
        assert_eq!(
            mutation,
            Mutation::SetAll {
                kind: ChecklistKind::IncomeLevel,
                checked: false
            }
        );
    }

    #[test]
    fn mismatched_payload_names_the_control() {
        let error = binding(UiEvent::new(ControlId::YearEnd, UiInput::Click)).unwrap_err();
        assert_eq!(error.to_string(), "control `yearEnd` expects a year value");
    }
}
