use std::time::{
    Instant,
    Duration,
};

/// Seconds elapsed between two instants, for timing log lines.
pub fn get_duration(start: Instant, end: Instant) -> f64 {
    let duration: Duration = end.saturating_duration_since(start);
    duration.as_secs() as f64 + f64::from(duration.subsec_nanos()) / 1_000_000_000.0
}
