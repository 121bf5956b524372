//! Line-oriented form session over JSON.
//!
//! Each input line is either a change event `{"name": .., "value": ..}` or
//! an action `{"action": "validate" | "reset"}`. After each accepted line
//! the form's values and errors are written as one JSON line.

use std::io::BufRead;
use std::io::Write;

use formkit_lib::form::ChangeEvent;
use formkit_lib::form::FormState;
use formkit_lib::{ErrorMapping, Record};
use serde::Deserialize;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SessionInput {
    Action { action: SessionAction },
    Change(ChangeEvent),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SessionAction {
    Validate,
    Reset,
}

/// Snapshot written after every accepted line.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub values: &'a Record,
    pub errors: &'a ErrorMapping,
    pub valid: bool,
}

impl<'a> Snapshot<'a> {
    pub fn of(form: &'a FormState) -> Self {
        Self {
            values: form.values(),
            errors: form.errors(),
            valid: form.is_valid(),
        }
    }
}

/// Runs a session until `input` is exhausted.
///
/// Unparseable lines are reported on `diagnostics` and skipped. Returns
/// the number of lines applied.
pub fn run<R, W, D>(
    form: &mut FormState,
    input: R,
    mut output: W,
    mut diagnostics: D,
) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    let mut applied = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<SessionInput>(line) {
            Ok(SessionInput::Change(event)) => {
                log::debug!("Change on '{}'", event.name);
                form.handle_event(event);
            }
            Ok(SessionInput::Action { action }) => {
                log::debug!("Action {:?}", action);
                match action {
                    SessionAction::Validate => {
                        form.validate_all();
                    }
                    SessionAction::Reset => form.reset(),
                }
            }
            Err(e) => {
                log::warn!("Skipping line {}: {}", index + 1, e);
                writeln!(diagnostics, "line {}: {}", index + 1, e)?;
                continue;
            }
        }

        serde_json::to_writer(&mut output, &Snapshot::of(form))?;
        writeln!(output)?;
        applied += 1;
    }

    output.flush()?;
    Ok(applied)
}
