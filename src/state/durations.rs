//! Configured phase durations and in-progress edits

use serde::{Deserialize, Serialize};

use crate::validate::DurationField;

use super::Phase;

/// The configured length of each phase in seconds
///
/// Mutated only by a validated apply action; live countdowns read it at
/// transition time, so an update takes effect on the next transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSet {
    pub red_seconds: u64,
    pub yellow_seconds: u64,
    pub green_seconds: u64,
}

impl DurationSet {
    /// Build the initial set from caller-supplied seconds
    ///
    /// Each value is rounded to the nearest integer (ties away from zero);
    /// omitted values default to 1.
    pub fn from_initial(red: Option<f64>, yellow: Option<f64>, green: Option<f64>) -> Self {
        Self {
            red_seconds: round_seconds(red),
            yellow_seconds: round_seconds(yellow),
            green_seconds: round_seconds(green),
        }
    }

    /// The configured duration for one phase
    pub fn for_phase(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Red => self.red_seconds,
            Phase::Yellow => self.yellow_seconds,
            Phase::Green => self.green_seconds,
        }
    }
}

/// User-in-progress duration edits, one free-form text per phase
///
/// Independent of the committed `DurationSet` until an apply action
/// validates the texts; until then they may hold anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInput {
    pub red: String,
    pub yellow: String,
    pub green: String,
}

impl PendingInput {
    /// Seed the edit texts with the textual form of the initial values
    pub fn from_initial(red: Option<f64>, yellow: Option<f64>, green: Option<f64>) -> Self {
        Self {
            red: initial_text(red),
            yellow: initial_text(yellow),
            green: initial_text(green),
        }
    }

    pub fn get(&self, field: DurationField) -> &str {
        match field {
            DurationField::Red => &self.red,
            DurationField::Yellow => &self.yellow,
            DurationField::Green => &self.green,
        }
    }

    pub fn set(&mut self, field: DurationField, text: impl Into<String>) {
        match field {
            DurationField::Red => self.red = text.into(),
            DurationField::Yellow => self.yellow = text.into(),
            DurationField::Green => self.green = text.into(),
        }
    }
}

fn round_seconds(value: Option<f64>) -> u64 {
    value.unwrap_or(1.0).round() as u64
}

fn initial_text(value: Option<f64>) -> String {
    format!("{}", value.unwrap_or(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values_round_to_nearest() {
        let set = DurationSet::from_initial(Some(4.4), Some(2.5), Some(5.0));
        assert_eq!(set.red_seconds, 4);
        assert_eq!(set.yellow_seconds, 3);
        assert_eq!(set.green_seconds, 5);
    }

    #[test]
    fn omitted_values_default_to_one() {
        let set = DurationSet::from_initial(None, None, Some(9.0));
        assert_eq!(set.red_seconds, 1);
        assert_eq!(set.yellow_seconds, 1);
        assert_eq!(set.green_seconds, 9);
    }

    #[test]
    fn for_phase_selects_the_matching_duration() {
        let set = DurationSet::from_initial(Some(5.0), Some(3.0), Some(7.0));
        assert_eq!(set.for_phase(Phase::Red), 5);
        assert_eq!(set.for_phase(Phase::Yellow), 3);
        assert_eq!(set.for_phase(Phase::Green), 7);
    }

    #[test]
    fn pending_input_keeps_the_raw_textual_form() {
        let pending = PendingInput::from_initial(Some(5.0), Some(4.7), None);
        assert_eq!(pending.red, "5");
        assert_eq!(pending.yellow, "4.7");
        assert_eq!(pending.green, "1");
    }

    #[test]
    fn pending_input_edits_one_field_at_a_time() {
        let mut pending = PendingInput::from_initial(Some(5.0), Some(3.0), Some(5.0));
        pending.set(DurationField::Yellow, "abc");

        assert_eq!(pending.get(DurationField::Yellow), "abc");
        assert_eq!(pending.get(DurationField::Red), "5");
        assert_eq!(pending.get(DurationField::Green), "5");
    }
}
