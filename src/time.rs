use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Invalid time format: {0:?} (expected HH:MM)")]
    Format(String),

    #[error("Time out of range: {0:?}")]
    OutOfRange(String),
}

/// Parse an "HH:MM" time of day into minutes since midnight.
pub fn time_to_minutes(time: &str) -> Result<u32, TimeError> {
    let (hours, minutes) = time
        .split_once(':')
        .ok_or_else(|| TimeError::Format(time.to_string()))?;

    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(TimeError::Format(time.to_string()));
    }

    let hours: u32 = hours
        .parse()
        .map_err(|_| TimeError::Format(time.to_string()))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| TimeError::Format(time.to_string()))?;

    if hours > 23 || minutes > 59 {
        return Err(TimeError::OutOfRange(time.to_string()));
    }

    Ok(hours * 60 + minutes)
}

/// Render minutes since midnight as a 12-hour clock string, e.g. "1:30 PM".
pub fn minutes_to_time(minutes: u32) -> String {
    let h = minutes / 60;
    let m = minutes % 60;
    let ampm = if h >= 12 { "PM" } else { "AM" };
    let display_h = match h {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02} {}", display_h, m, ampm)
}

/// Render a duration as "1h 30m", "2h" or "45m".
pub fn duration_string(minutes: u32) -> String {
    let h = minutes / 60;
    let m = minutes % 60;
    match (h, m) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
