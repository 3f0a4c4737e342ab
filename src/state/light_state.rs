//! Shared per-light state management

use std::sync::Mutex;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::validate::DurationField;

use super::{CounterState, DurationSet, LightController};

/// Shared handle to one light
///
/// Wraps the controller in a mutex and publishes a `CounterState` snapshot
/// after every change, so the clock task, the renderer, and the command
/// loop all read live state at call time instead of values captured when
/// they were spawned.
#[derive(Debug)]
pub struct LightState {
    pub id: usize,
    controller: Mutex<LightController>,
    /// Channel for counter updates
    update_tx: watch::Sender<CounterState>,
    /// Keep the receiver alive to prevent channel closure
    _update_rx: watch::Receiver<CounterState>,
}

impl LightState {
    /// Create a light with the given initial durations
    pub fn new(id: usize, red: Option<f64>, yellow: Option<f64>, green: Option<f64>) -> Self {
        let controller = LightController::new(red, yellow, green);
        let (update_tx, update_rx) = watch::channel(controller.counter());

        Self {
            id,
            controller: Mutex::new(controller),
            update_tx,
            _update_rx: update_rx,
        }
    }

    /// Subscribe to counter updates
    pub fn subscribe(&self) -> watch::Receiver<CounterState> {
        self.update_tx.subscribe()
    }

    /// Lock the controller, apply the update, and publish the new counter
    /// when it changed
    fn update<T, F>(&self, updater: F) -> Result<T, String>
    where
        F: FnOnce(&mut LightController) -> T,
    {
        let mut controller = self
            .controller
            .lock()
            .map_err(|e| format!("Failed to lock light {} state: {}", self.id, e))?;

        let before = controller.counter();
        let out = updater(&mut controller);
        let after = controller.counter();
        drop(controller); // Release the lock early

        if after != before {
            if let Err(e) = self.update_tx.send(after) {
                warn!("Failed to send counter update for light {}: {}", self.id, e);
            }
        }

        Ok(out)
    }

    /// Apply one elapsed second to the live counter
    ///
    /// Inert while paused; a paused tick publishes nothing.
    pub fn on_tick(&self) -> Result<(), String> {
        self.update(|controller| {
            let before = controller.phase();
            controller.on_tick();
            let counter = controller.counter();

            if counter.phase != before {
                info!(
                    "Light {} changed to {} for {}s",
                    self.id, counter.phase, counter.remaining_seconds
                );
            }
        })
    }

    /// Flip the paused flag, returning the new counter
    pub fn toggle_paused(&self) -> Result<CounterState, String> {
        self.update(|controller| {
            let paused = !controller.is_paused();
            controller.set_paused(paused);
            info!("Light {} paused set to: {}", self.id, paused);
            controller.counter()
        })
    }

    /// Force the next phase regardless of the countdown
    pub fn advance_phase(&self) -> Result<CounterState, String> {
        self.update(|controller| {
            controller.advance_phase();
            let counter = controller.counter();
            info!(
                "Light {} advanced to {} for {}s",
                self.id, counter.phase, counter.remaining_seconds
            );
            counter
        })
    }

    /// Resume the clock and force the next phase in one step
    pub fn resume_and_advance(&self) -> Result<CounterState, String> {
        self.update(|controller| {
            controller.resume_and_advance();
            let counter = controller.counter();
            info!(
                "Light {} resumed and advanced to {} for {}s",
                self.id, counter.phase, counter.remaining_seconds
            );
            counter
        })
    }

    /// Stage an in-progress duration edit for one field
    pub fn set_pending(&self, field: DurationField, text: &str) -> Result<(), String> {
        self.update(|controller| controller.set_pending(field, text))
    }

    /// Validate and commit the staged duration texts
    ///
    /// A rejected update comes back as the newline-joined batch of field
    /// messages for alert-style display; nothing changes in that case.
    pub fn apply_pending(&self) -> Result<DurationSet, String> {
        let outcome = self.update(|controller| {
            let pending = controller.pending().clone();
            controller.apply_durations(&pending.red, &pending.yellow, &pending.green)
        })?;

        match outcome {
            Ok(durations) => {
                info!(
                    "Light {} durations set to red={}s yellow={}s green={}s",
                    self.id,
                    durations.red_seconds,
                    durations.yellow_seconds,
                    durations.green_seconds
                );
                Ok(durations)
            }
            Err(err) => {
                warn!("Light {} rejected duration update", self.id);
                Err(err.to_string())
            }
        }
    }

    /// Restore the initialize-time durations
    pub fn reset(&self) -> Result<DurationSet, String> {
        self.update(|controller| {
            controller.reset();
            info!("Light {} durations reset to initial values", self.id);
            controller.durations()
        })
    }

    /// Whether the light is currently paused
    pub fn is_paused(&self) -> Result<bool, String> {
        self.controller
            .lock()
            .map(|controller| controller.is_paused())
            .map_err(|e| format!("Failed to lock light {} state: {}", self.id, e))
    }

    /// Clone of the full controller state for status reporting
    pub fn snapshot(&self) -> Result<LightController, String> {
        self.controller
            .lock()
            .map(|controller| controller.clone())
            .map_err(|e| format!("Failed to lock light {} state: {}", self.id, e))
    }
}
