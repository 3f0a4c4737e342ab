//! Countdown display formatting

/// Placeholder shown in place of the countdown while a light is paused
pub const PAUSED_PLACEHOLDER: &str = "---";

/// Format the remaining seconds for display
///
/// Paused lights show a fixed placeholder. Running lights show the counter
/// zero-padded to three characters; values of 1000 and above simply render
/// at their natural width.
pub fn format_countdown(remaining_seconds: u64, paused: bool) -> String {
    if paused {
        PAUSED_PLACEHOLDER.to_string()
    } else {
        format!("{:03}", remaining_seconds)
    }
}
