use std::time::Duration;

/// formats a duration using the largest whole unit available
pub fn format_duration(duration: &Duration) -> String {
    if duration.as_secs() != 0 {
        format!("{}s", duration.as_secs())
    } else if duration.as_millis() != 0 {
        format!("{}ms", duration.as_millis())
    } else if duration.as_micros() != 0 {
        format!("{}μs", duration.as_micros())
    } else {
        format!("{}ns", duration.as_nanos())
    }
}
