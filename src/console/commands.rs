//! Console command grammar

use crate::validate::DurationField;

/// A parsed console command
///
/// `light` is the zero-based index of the light the command targets and
/// defaults to 0 when the trailing argument is omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Stage a duration text for one field without applying it
    Stage {
        field: DurationField,
        text: String,
        light: usize,
    },
    /// Validate and commit all three staged durations at once
    Apply { light: usize },
    /// Toggle the countdown between paused and running
    TogglePause { light: usize },
    /// Step a paused light to its next color, staying paused
    Advance { light: usize },
    /// Step a paused light to its next color and resume the countdown
    Skip { light: usize },
    /// Restore the starting durations
    Reset { light: usize },
    /// Print the full state as JSON
    Status,
    /// Print the command list
    Help,
    /// Stop the simulator
    Quit,
}

/// Parse one console line into a command
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let word = parts
        .next()
        .ok_or_else(|| "Empty command".to_string())?
        .to_ascii_lowercase();

    let command = match word.as_str() {
        "red" | "yellow" | "green" => {
            let field = match word.as_str() {
                "red" => DurationField::Red,
                "yellow" => DurationField::Yellow,
                _ => DurationField::Green,
            };
            let text = parts
                .next()
                .ok_or_else(|| format!("Usage: {} <seconds> [light]", word))?;
            Command::Stage {
                field,
                text: text.to_string(),
                light: parse_light(parts.next())?,
            }
        }
        "set" => Command::Apply {
            light: parse_light(parts.next())?,
        },
        "pause" => Command::TogglePause {
            light: parse_light(parts.next())?,
        },
        "advance" => Command::Advance {
            light: parse_light(parts.next())?,
        },
        "skip" => Command::Skip {
            light: parse_light(parts.next())?,
        },
        "reset" => Command::Reset {
            light: parse_light(parts.next())?,
        },
        "status" => Command::Status,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(format!(
                "Unknown command: {}. Type 'help' for the command list.",
                other
            ))
        }
    };

    if let Some(extra) = parts.next() {
        return Err(format!("Unexpected argument: {}", extra));
    }

    Ok(command)
}

fn parse_light(token: Option<&str>) -> Result<usize, String> {
    match token {
        None => Ok(0),
        Some(text) => text
            .parse::<usize>()
            .map_err(|_| format!("Light index must be a number, got '{}'", text)),
    }
}
