//! Event scripts for `replay`.
//!
//! One event per line: `<control-id> [argument...]`. Blank lines and lines
//! starting with `#` are ignored. Arguments by control:
//!
//! - `yearStart` / `yearEnd`: a year
//! - `regionOptions` / `incomeOptions`: `on` or `off`, then the option value
//! - `regionDropdown.all`, `regionDropdown.none`, `incomeDropdown.all`,
//!   `incomeDropdown.none`: nothing
//! - `barChart` / `treemapChart`: a country name
//!
//! Values and country names may contain spaces.

use thiserror::Error;

use co2_core::{ControlAction, ControlId, DispatchError, UiEvent, UiInput};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Control {
        line: usize,
        #[source]
        source: DispatchError,
    },
    #[error("line {line}: `{control}` expects {expected}")]
    Argument {
        line: usize,
        control: ControlId,
        expected: &'static str,
    },
}

/// A parsed event and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEvent {
    pub line: usize,
    pub event: UiEvent,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if let Some(event) = parse_line(raw, line)? {
            events.push(ScriptEvent { line, event });
        }
    }
    Ok(events)
}

fn parse_line(raw: &str, line: usize) -> Result<Option<UiEvent>, ScriptError> {
    let text = raw.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let (id, argument) = match text.split_once(char::is_whitespace) {
        Some((id, rest)) => (id, rest.trim()),
        None => (text, ""),
    };
    let control: ControlId = id
        .parse()
        .map_err(|source| ScriptError::Control { line, source })?;
    let bad = |expected| ScriptError::Argument {
        line,
        control,
        expected,
    };

    let input = match control.action() {
        ControlAction::SetYearStart | ControlAction::SetYearEnd => {
            let year = argument.parse::<i32>().map_err(|_| bad("a year"))?;
            UiInput::Value(year)
        }
        ControlAction::Check(_) => {
            let (state, value) = argument
                .split_once(char::is_whitespace)
                .ok_or_else(|| bad("`on` or `off` and a value"))?;
            let checked = match state {
                "on" => true,
                "off" => false,
                _ => return Err(bad("`on` or `off` and a value")),
            };
            UiInput::Checkbox {
                value: value.trim().to_string(),
                checked,
            }
        }
        ControlAction::SetAll(..) => {
            if !argument.is_empty() {
                return Err(bad("no argument"));
            }
            UiInput::Click
        }
        ControlAction::ToggleDrillDown(_) => {
            if argument.is_empty() {
                return Err(bad("a country"));
            }
            UiInput::Country(argument.to_string())
        }
    };
    Ok(Some(UiEvent::new(control, input)))
}
