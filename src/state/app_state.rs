//! Top-level application state

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Utc};

use super::LightState;

/// Application state: the independent lights plus run metadata
///
/// Lights never share mutable state with each other; each carries its own
/// lock and its own clock subscription.
#[derive(Debug)]
pub struct AppState {
    /// The independent light instances
    pub lights: Vec<Arc<LightState>>,
    /// Simulator metadata
    pub start_time: Instant,
    /// Last command tracking
    pub last_command: Mutex<Option<String>>,
    pub last_command_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create the state with `count` lights sharing the same initial durations
    pub fn new(count: usize, red: Option<f64>, yellow: Option<f64>, green: Option<f64>) -> Self {
        let lights = (0..count)
            .map(|id| Arc::new(LightState::new(id, red, yellow, green)))
            .collect();

        Self {
            lights,
            start_time: Instant::now(),
            last_command: Mutex::new(None),
            last_command_time: Mutex::new(None),
        }
    }

    /// Look up a light by index
    pub fn light(&self, id: usize) -> Option<&Arc<LightState>> {
        self.lights.get(id)
    }

    /// Record the most recent successful command
    pub fn record_command(&self, command: &str) {
        if let Ok(mut last_command) = self.last_command.lock() {
            *last_command = Some(command.to_string());
        }
        if let Ok(mut last_time) = self.last_command_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Get last command information
    pub fn get_last_command(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_command = self.last_command.lock().ok().and_then(|c| c.clone());
        let last_command_time = self.last_command_time.lock().ok().and_then(|t| *t);
        (last_command, last_command_time)
    }

    /// Calculate simulator uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lights_are_created_with_sequential_ids() {
        let state = AppState::new(3, Some(5.0), Some(3.0), Some(5.0));

        assert_eq!(state.lights.len(), 3);
        for (expected, light) in state.lights.iter().enumerate() {
            assert_eq!(light.id, expected);
        }
        assert!(state.light(2).is_some());
        assert!(state.light(3).is_none());
    }

    #[test]
    fn last_command_round_trips() {
        let state = AppState::new(1, Some(5.0), Some(3.0), Some(5.0));
        assert_eq!(state.get_last_command().0, None);

        state.record_command("pause");

        let (command, time) = state.get_last_command();
        assert_eq!(command.as_deref(), Some("pause"));
        assert!(time.is_some());
    }

    #[test]
    fn fresh_uptime_renders_in_seconds() {
        let state = AppState::new(1, Some(5.0), Some(3.0), Some(5.0));
        assert!(state.get_uptime().ends_with('s'));
        assert!(!state.get_uptime().contains('m'));
    }
}
