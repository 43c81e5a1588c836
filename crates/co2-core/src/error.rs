use thiserror::Error;

use crate::control_table::ControlId;
use crate::controls::ChecklistKind;

/// Errors raised while turning UI events into mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unknown control `{0}`")]
    UnknownControl(String),
    #[error("control `{control}` expects {expected}")]
    InputMismatch {
        control: ControlId,
        expected: &'static str,
    },
    #[error("`{value}` is not a {} option", kind.label().to_lowercase())]
    UnknownOption { kind: ChecklistKind, value: String },
    #[error("a chart click must name a country")]
    EmptyCountry,
}

pub type Result<T> = std::result::Result<T, DispatchError>;
