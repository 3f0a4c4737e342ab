//! Live counter state for one light

use serde::{Deserialize, Serialize};

use super::Phase;

/// The live phase + countdown + pause snapshot for one light
///
/// Mutated on every clock tick while running; also the payload published to
/// display subscribers after each change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub paused: bool,
}

impl CounterState {
    /// Counter at the start of the cycle: green, full countdown, running
    pub fn starting(green_seconds: u64) -> Self {
        Self {
            phase: Phase::Green,
            remaining_seconds: green_seconds,
            paused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_counter_is_green_and_running() {
        let counter = CounterState::starting(5);
        assert_eq!(counter.phase, Phase::Green);
        assert_eq!(counter.remaining_seconds, 5);
        assert!(!counter.paused);
    }
}
