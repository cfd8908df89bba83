//! Line-oriented event scripts for `ticklist replay`.
//!
//! ```text
//! # comments and blank lines are skipped
//! add buy milk
//! toggle 1
//! filter active
//! clear
//! theme
//! ```

use std::io::BufRead;

use crate::model::{FilterMode, Projection};
use crate::ops::InputEvent;

/// Error type for script parsing
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' needs an argument")]
    MissingArgument { line: usize, command: &'static str },
    #[error("line {line}: '{value}' is not a positive item number")]
    BadIndex { line: usize, value: String },
    #[error("line {line}: {source}")]
    BadFilter {
        line: usize,
        source: crate::model::ParseFilterError,
    },
    #[error("line {line}: '{command}' takes no argument")]
    UnexpectedArgument { line: usize, command: &'static str },
    #[error("line {line}: could not read script: {source}")]
    Read { line: usize, source: std::io::Error },
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(String),
    /// 1-based position in the visible list at the time the line runs
    Toggle(usize),
    Filter(FilterMode),
    Clear,
    Theme,
}

impl ScriptCommand {
    /// Turn the command into an input event against the current projection.
    /// A toggle past the end of the visible list resolves to nothing.
    pub fn to_event(&self, projection: &Projection) -> Option<InputEvent> {
        match self {
            ScriptCommand::Add(text) => Some(InputEvent::SubmitItem(text.clone())),
            ScriptCommand::Toggle(n) => n
                .checked_sub(1)
                .and_then(|index| projection.id_at(index))
                .map(InputEvent::SelectItem),
            ScriptCommand::Filter(mode) => Some(InputEvent::SelectFilter(*mode)),
            ScriptCommand::Clear => Some(InputEvent::ClearCompleted),
            ScriptCommand::Theme => Some(InputEvent::ToggleTheme),
        }
    }
}

/// Parse a single line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    let parsed = match command {
        // The text is kept as written; blank text is rejected by the store, not here
        "add" => ScriptCommand::Add(rest.to_string()),
        "toggle" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line: line_no,
                    command: "toggle",
                });
            }
            match rest.parse::<usize>() {
                Ok(n) if n > 0 => ScriptCommand::Toggle(n),
                _ => {
                    return Err(ScriptError::BadIndex {
                        line: line_no,
                        value: rest.to_string(),
                    });
                }
            }
        }
        "filter" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line: line_no,
                    command: "filter",
                });
            }
            let mode = rest.parse().map_err(|source| ScriptError::BadFilter {
                line: line_no,
                source,
            })?;
            ScriptCommand::Filter(mode)
        }
        "clear" => no_argument(line_no, "clear", rest, ScriptCommand::Clear)?,
        "theme" => no_argument(line_no, "theme", rest, ScriptCommand::Theme)?,
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(parsed))
}

fn no_argument(
    line_no: usize,
    command: &'static str,
    rest: &str,
    parsed: ScriptCommand,
) -> Result<ScriptCommand, ScriptError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ScriptError::UnexpectedArgument {
            line: line_no,
            command,
        })
    }
}

/// Parse a whole script, stopping at the first bad line.
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ScriptError::Read { line: i + 1, source })?;
        if let Some(command) = parse_line(i + 1, &line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}
