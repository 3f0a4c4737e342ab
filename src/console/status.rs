//! Status report structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    display::format_countdown,
    state::{AppState, DurationSet, LightController, PendingInput, Phase},
};

/// One light's entry in the status report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightReport {
    pub id: usize,
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub paused: bool,
    pub countdown: String,
    pub durations: DurationSet,
    pub pending: PendingInput,
}

impl LightReport {
    /// Build a report entry from a controller snapshot
    pub fn from_snapshot(id: usize, snapshot: &LightController) -> Self {
        let counter = snapshot.counter();
        Self {
            id,
            phase: counter.phase,
            remaining_seconds: counter.remaining_seconds,
            paused: counter.paused,
            countdown: format_countdown(counter.remaining_seconds, counter.paused),
            durations: snapshot.durations(),
            pending: snapshot.pending().clone(),
        }
    }
}

/// Full report printed by the `status` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub lights: Vec<LightReport>,
    pub uptime: String,
    pub last_command: Option<String>,
    pub last_command_time: Option<DateTime<Utc>>,
}

impl StatusReport {
    /// Snapshot every light plus run metadata
    pub fn gather(state: &AppState) -> Result<Self, String> {
        let mut lights = Vec::with_capacity(state.lights.len());
        for light in &state.lights {
            let snapshot = light.snapshot()?;
            lights.push(LightReport::from_snapshot(light.id, &snapshot));
        }

        let (last_command, last_command_time) = state.get_last_command();

        Ok(Self {
            lights,
            uptime: state.get_uptime(),
            last_command,
            last_command_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_with_lowercase_phases() {
        let state = AppState::new(2, Some(5.0), Some(3.0), Some(5.0));
        state.record_command("pause 1");

        let report = StatusReport::gather(&state).unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(report.lights.len(), 2);
        assert!(json.contains("\"phase\":\"green\""));
        assert!(json.contains("\"countdown\":\"005\""));
        assert!(json.contains("\"last_command\":\"pause 1\""));
    }

    #[test]
    fn paused_lights_report_the_placeholder() {
        let state = AppState::new(1, Some(5.0), Some(3.0), Some(5.0));
        state.lights[0].toggle_paused().unwrap();

        let report = StatusReport::gather(&state).unwrap();

        assert!(report.lights[0].paused);
        assert_eq!(report.lights[0].countdown, "---");
    }
}
