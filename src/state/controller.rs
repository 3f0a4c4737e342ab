//! Per-light timing state machine

use crate::validate::{parse_duration_text, DurationField, InvalidDurationInput};

use super::{CounterState, DurationSet, PendingInput, Phase};

/// One light's full state and the operations that evolve it
///
/// Purely synchronous: a clock collaborator calls `on_tick` once per
/// elapsed second and user commands call the remaining operations. Every
/// operation is total except `apply_durations`, which rejects invalid input
/// as a whole without touching any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightController {
    initial: DurationSet,
    durations: DurationSet,
    counter: CounterState,
    pending: PendingInput,
}

impl LightController {
    /// Create a controller from the caller's initial durations
    ///
    /// Values round to the nearest integer (ties away from zero) and
    /// default to 1 when omitted. The light starts green and running with
    /// the full green countdown; the pending edit texts are seeded with the
    /// raw values as supplied.
    pub fn new(red: Option<f64>, yellow: Option<f64>, green: Option<f64>) -> Self {
        let durations = DurationSet::from_initial(red, yellow, green);

        Self {
            initial: durations,
            durations,
            counter: CounterState::starting(durations.green_seconds),
            pending: PendingInput::from_initial(red, yellow, green),
        }
    }

    /// Current live counter
    pub fn counter(&self) -> CounterState {
        self.counter
    }

    /// Currently configured durations
    pub fn durations(&self) -> DurationSet {
        self.durations
    }

    /// In-progress duration edits
    pub fn pending(&self) -> &PendingInput {
        &self.pending
    }

    pub fn is_paused(&self) -> bool {
        self.counter.paused
    }

    /// Advance the countdown by one elapsed second
    ///
    /// Inert while paused. Transitions to the next phase once the counter
    /// would reach zero, otherwise decrements it by one.
    pub fn on_tick(&mut self) {
        if self.counter.paused {
            return;
        }

        if self.counter.remaining_seconds <= 1 {
            self.transition();
        } else {
            self.counter.remaining_seconds -= 1;
        }
    }

    /// Force the next phase regardless of the remaining countdown
    ///
    /// Same transition rule as a natural zero-countdown tick, decoupled
    /// from the per-second cadence.
    pub fn advance_phase(&mut self) {
        self.transition();
    }

    // Shared transition rule: enter the successor phase with its configured
    // duration, read at transition time so duration updates take effect.
    fn transition(&mut self) {
        let next = self.counter.phase.next();
        self.counter.phase = next;
        self.counter.remaining_seconds = self.durations.for_phase(next);
    }

    /// Set the paused flag; phase and countdown are untouched
    pub fn set_paused(&mut self, paused: bool) {
        self.counter.paused = paused;
    }

    /// Validate and commit new durations, all three fields or none
    ///
    /// A single validation pass collects every failing field; if any fail,
    /// the whole update is rejected and no state changes. On success only
    /// the configured durations change; the live counter keeps its phase
    /// and countdown and picks the new values up at the next transition.
    pub fn apply_durations(
        &mut self,
        red: &str,
        yellow: &str,
        green: &str,
    ) -> Result<DurationSet, InvalidDurationInput> {
        let parsed = (
            parse_duration_text(red),
            parse_duration_text(yellow),
            parse_duration_text(green),
        );

        if let (Some(red_seconds), Some(yellow_seconds), Some(green_seconds)) = parsed {
            self.durations = DurationSet {
                red_seconds,
                yellow_seconds,
                green_seconds,
            };
            return Ok(self.durations);
        }

        let mut fields = Vec::new();
        if parsed.0.is_none() {
            fields.push(DurationField::Red);
        }
        if parsed.1.is_none() {
            fields.push(DurationField::Yellow);
        }
        if parsed.2.is_none() {
            fields.push(DurationField::Green);
        }

        Err(InvalidDurationInput { fields })
    }

    /// Restore the configured durations to their initialize-time values
    ///
    /// Restores durations only: the current phase, countdown, pause flag,
    /// and pending edits all stay as they are.
    pub fn reset(&mut self) {
        self.durations = self.initial;
    }

    /// Resume the clock and force the next phase in one step
    pub fn resume_and_advance(&mut self) {
        self.set_paused(false);
        self.advance_phase();
    }

    /// Record an in-progress duration edit for one field
    pub fn set_pending(&mut self, field: DurationField, text: impl Into<String>) {
        self.pending.set(field, text);
    }

    /// Phase currently showing
    pub fn phase(&self) -> Phase {
        self.counter.phase
    }
}
