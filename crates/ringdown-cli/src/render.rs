//! Terminal rendering for the countdown ring.
//!
//! The circular dial is flattened to a single row of segments that empty as
//! time runs out; a full row is a full ring.

const FILLED: char = '●';
const EMPTY: char = '○';
const FILLED_ASCII: char = '#';
const EMPTY_ASCII: char = '-';

/// Render the ring for a remaining-time fraction in 0.0..=1.0.
pub fn ring(progress: f64, segments: usize, ascii: bool) -> String {
    let clamped = progress.clamp(0.0, 1.0);
    let filled = (clamped * segments as f64).round() as usize;
    let (full, empty) = if ascii {
        (FILLED_ASCII, EMPTY_ASCII)
    } else {
        (FILLED, EMPTY)
    };

    let mut out = String::with_capacity(segments * 3 + 2);
    out.push('[');
    for i in 0..segments {
        out.push(if i < filled { full } else { empty });
    }
    out.push(']');
    out
}

/// One display frame: the ring plus the seconds label at its center.
pub fn frame(remaining_ms: u64, total_ms: u64, segments: usize, ascii: bool) -> String {
    let progress = if total_ms == 0 {
        0.0
    } else {
        remaining_ms as f64 / total_ms as f64
    };
    format!(
        "{} {:>4}s",
        ring(progress, segments, ascii),
        ringdown_core::format::seconds_label(remaining_ms)
    )
}
