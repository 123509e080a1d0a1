//! Display formatting for remaining time.

/// Whole seconds remaining -- the big label at the center of the dial.
pub fn seconds_label(remaining_ms: u64) -> String {
    (remaining_ms / 1_000).to_string()
}

/// `MM:SS`, growing to `H:MM:SS` for hour-plus durations.
pub fn clock_label(remaining_ms: u64) -> String {
    let total_secs = remaining_ms / 1_000;
    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
