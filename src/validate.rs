//! Duration input validation

use thiserror::Error;

/// Reason attached to every failing duration field
pub const INVALID_INPUT_MESSAGE: &str = "must be an integer greater than or equal 1";

/// Identifies one of the three per-phase duration inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationField {
    Red,
    Yellow,
    Green,
}

impl DurationField {
    /// Human-readable field name as shown in error messages
    pub fn label(&self) -> &'static str {
        match self {
            DurationField::Red => "Red duration",
            DurationField::Yellow => "Yellow duration",
            DurationField::Green => "Green duration",
        }
    }

    /// Full error message for this field
    pub fn message(&self) -> String {
        format!("{} {}", self.label(), INVALID_INPUT_MESSAGE)
    }
}

fn joined_messages(fields: &[DurationField]) -> String {
    fields
        .iter()
        .map(|field| field.message())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rejection of a duration update
///
/// Produced by a single validation pass over all three texts; holds every
/// failing field so the caller can surface the whole batch at once. A
/// rejected update never mutates any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", joined_messages(.fields))]
pub struct InvalidDurationInput {
    pub fields: Vec<DurationField>,
}

impl InvalidDurationInput {
    /// One message per failing field, in field order
    pub fn messages(&self) -> Vec<String> {
        self.fields.iter().map(|field| field.message()).collect()
    }
}

/// Check whether a user-entered duration text is acceptable
///
/// Valid texts parse as a finite number with no fractional part and a value
/// of at least 1. Surrounding whitespace is ignored.
pub fn is_valid_duration_text(text: &str) -> bool {
    match text.trim().parse::<f64>() {
        Ok(value) => value.is_finite() && value.fract() == 0.0 && value >= 1.0,
        Err(_) => false,
    }
}

/// Parse a valid duration text into its committed value
///
/// Returns `None` for any text `is_valid_duration_text` rejects.
pub fn parse_duration_text(text: &str) -> Option<u64> {
    if !is_valid_duration_text(text) {
        return None;
    }

    text.trim().parse::<f64>().ok().map(|value| value.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_numbers_of_at_least_one() {
        assert!(is_valid_duration_text("1"));
        assert!(is_valid_duration_text("42"));
        assert!(is_valid_duration_text(" 3"));
        assert!(is_valid_duration_text("3 "));
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert!(!is_valid_duration_text("0"));
        assert!(!is_valid_duration_text("-3"));
    }

    #[test]
    fn rejects_fractions_and_non_numbers() {
        assert!(!is_valid_duration_text("1.5"));
        assert!(!is_valid_duration_text("abc"));
        assert!(!is_valid_duration_text(""));
        assert!(!is_valid_duration_text("Infinity"));
        assert!(!is_valid_duration_text("NaN"));
    }

    #[test]
    fn parses_committed_values() {
        assert_eq!(parse_duration_text("7"), Some(7));
        assert_eq!(parse_duration_text(" 12 "), Some(12));
        assert_eq!(parse_duration_text("1e3"), Some(1000));
        assert_eq!(parse_duration_text("0"), None);
        assert_eq!(parse_duration_text("2.5"), None);
    }

    #[test]
    fn error_reports_every_failing_field() {
        let err = InvalidDurationInput {
            fields: vec![DurationField::Red, DurationField::Green],
        };

        let messages = err.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0],
            "Red duration must be an integer greater than or equal 1"
        );
        assert_eq!(
            messages[1],
            "Green duration must be an integer greater than or equal 1"
        );
        assert_eq!(err.to_string(), messages.join("\n"));
    }
}
