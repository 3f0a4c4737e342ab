//! Interactive console module
//!
//! This module contains the command loop, the command grammar, and the
//! status report structures.

pub mod commands;
pub mod render;
pub mod status;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use crate::state::{AppState, LightState};
use commands::{parse_command, Command};
use status::StatusReport;

// Re-export main functions
pub use render::light_render_task;

const HELP_TEXT: &str = "\
Commands:
  red <seconds> [light]     stage a new red duration
  yellow <seconds> [light]  stage a new yellow duration
  green <seconds> [light]   stage a new green duration
  set [light]               apply the staged durations
  pause [light]             pause or resume the countdown
  advance [light]           step a paused light to its next color
  skip [light]              resume a paused light at its next color
  reset [light]             restore the starting durations
  status                    print the full state as JSON
  help                      show this list
  quit                      stop the simulator";

/// Run the interactive command loop over stdin
///
/// Returns when the user quits or the input reaches end of file.
pub async fn console_task(state: Arc<AppState>) {
    info!("Starting console task");
    println!("{}", HELP_TEXT);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match parse_command(line) {
                    Ok(command) => {
                        if !dispatch(&state, line, command) {
                            break;
                        }
                    }
                    Err(message) => report_failure(&message),
                }
            }
            Ok(None) => {
                info!("Console input closed");
                break;
            }
            Err(e) => {
                error!("Failed to read console input: {}", e);
                break;
            }
        }
    }
}

/// Apply one command to the state, returning false when the loop should stop
fn dispatch(state: &AppState, line: &str, command: Command) -> bool {
    match command {
        Command::Stage { field, text, light } => {
            if let Some(light) = find_light(state, light) {
                match light.set_pending(field, &text) {
                    Ok(()) => {
                        println!("light {}: staged {} '{}'", light.id, field.label(), text);
                        state.record_command(line);
                    }
                    Err(e) => report_failure(&e),
                }
            }
        }

        Command::Apply { light } => {
            if let Some(light) = find_light(state, light) {
                match light.apply_pending() {
                    Ok(durations) => {
                        println!(
                            "light {}: durations set to red {}s, yellow {}s, green {}s",
                            light.id,
                            durations.red_seconds,
                            durations.yellow_seconds,
                            durations.green_seconds
                        );
                        state.record_command(line);
                    }
                    Err(e) => report_failure(&e),
                }
            }
        }

        Command::TogglePause { light } => {
            if let Some(light) = find_light(state, light) {
                match light.toggle_paused() {
                    Ok(counter) => {
                        if counter.paused {
                            println!("light {}: paused", light.id);
                        } else {
                            println!("light {}: running", light.id);
                        }
                        state.record_command(line);
                    }
                    Err(e) => report_failure(&e),
                }
            }
        }

        Command::Advance { light } => {
            if let Some(light) = find_light(state, light) {
                match light.is_paused() {
                    Ok(true) => match light.advance_phase() {
                        Ok(counter) => {
                            println!(
                                "light {}: stepped to {} for {}s",
                                light.id, counter.phase, counter.remaining_seconds
                            );
                            state.record_command(line);
                        }
                        Err(e) => report_failure(&e),
                    },
                    Ok(false) => println!(
                        "light {}: colors only step while paused, pause it first",
                        light.id
                    ),
                    Err(e) => report_failure(&e),
                }
            }
        }

        Command::Skip { light } => {
            if let Some(light) = find_light(state, light) {
                match light.is_paused() {
                    Ok(true) => match light.resume_and_advance() {
                        Ok(counter) => {
                            println!(
                                "light {}: running again at {} for {}s",
                                light.id, counter.phase, counter.remaining_seconds
                            );
                            state.record_command(line);
                        }
                        Err(e) => report_failure(&e),
                    },
                    Ok(false) => println!(
                        "light {}: skip only applies while paused, pause it first",
                        light.id
                    ),
                    Err(e) => report_failure(&e),
                }
            }
        }

        Command::Reset { light } => {
            if let Some(light) = find_light(state, light) {
                match light.reset() {
                    Ok(durations) => {
                        println!(
                            "light {}: durations back to red {}s, yellow {}s, green {}s",
                            light.id,
                            durations.red_seconds,
                            durations.yellow_seconds,
                            durations.green_seconds
                        );
                        state.record_command(line);
                    }
                    Err(e) => report_failure(&e),
                }
            }
        }

        Command::Status => match StatusReport::gather(state) {
            Ok(report) => match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize status report: {}", e),
            },
            Err(e) => report_failure(&e),
        },

        Command::Help => println!("{}", HELP_TEXT),

        Command::Quit => {
            info!("Quit requested from console");
            return false;
        }
    }

    true
}

fn find_light<'a>(state: &'a AppState, id: usize) -> Option<&'a Arc<LightState>> {
    let light = state.light(id);
    if light.is_none() {
        println!("! No light {}; {} light(s) are configured", id, state.lights.len());
    }
    light
}

fn report_failure(message: &str) {
    for line in message.lines() {
        println!("! {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;

    #[test]
    fn dispatch_applies_staged_durations() {
        let state = AppState::new(1, Some(5.0), Some(3.0), Some(5.0));

        for line in ["red 7", "yellow 2", "green 4", "set"] {
            let command = parse_command(line).unwrap();
            assert!(dispatch(&state, line, command));
        }

        let snapshot = state.lights[0].snapshot().unwrap();
        assert_eq!(snapshot.durations().red_seconds, 7);
        assert_eq!(snapshot.durations().yellow_seconds, 2);
        assert_eq!(snapshot.durations().green_seconds, 4);
        assert_eq!(state.get_last_command().0.as_deref(), Some("set"));
    }

    #[test]
    fn advance_is_ignored_while_running() {
        let state = AppState::new(1, Some(5.0), Some(3.0), Some(5.0));

        let command = parse_command("advance").unwrap();
        dispatch(&state, "advance", command);

        let snapshot = state.lights[0].snapshot().unwrap();
        assert_eq!(snapshot.phase(), Phase::Green);
        assert_eq!(state.get_last_command().0, None);
    }

    #[test]
    fn skip_resumes_a_paused_light_on_the_next_color() {
        let state = AppState::new(1, Some(5.0), Some(3.0), Some(5.0));
        state.lights[0].toggle_paused().unwrap();

        let command = parse_command("skip").unwrap();
        dispatch(&state, "skip", command);

        let snapshot = state.lights[0].snapshot().unwrap();
        assert_eq!(snapshot.phase(), Phase::Yellow);
        assert!(!snapshot.is_paused());
        assert_eq!(snapshot.counter().remaining_seconds, 3);
    }

    #[test]
    fn quit_stops_the_loop() {
        let state = AppState::new(1, Some(5.0), Some(3.0), Some(5.0));
        assert!(!dispatch(&state, "quit", Command::Quit));
    }

    #[test]
    fn unknown_lights_are_reported_not_panicked() {
        let state = AppState::new(1, Some(5.0), Some(3.0), Some(5.0));

        let command = parse_command("pause 9").unwrap();
        assert!(dispatch(&state, "pause 9", command));

        assert!(!state.lights[0].is_paused().unwrap());
    }
}
