use chrono::NaiveTime;

/// Conversions between the 24h "HH:MM" values the time pickers produce and
/// the 12h "hh:MM AM/PM" strings stored on offers.

pub fn parse_24h(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// "13:00" -> "01:00 PM", "00:00" -> "12:00 AM", "12:00" -> "12:00 PM".
pub fn to_12h(value: &str) -> Option<String> {
    let t = parse_24h(value)?;
    Some(t.format("%I:%M %p").to_string())
}

/// Inverse of [`to_12h`]; recovers the 24h form.
pub fn to_24h(value: &str) -> Option<String> {
    let t = NaiveTime::parse_from_str(value.trim(), "%I:%M %p").ok()?;
    Some(t.format("%H:%M").to_string())
}

/// The `availableHours` string persisted on an offer, e.g.
/// "09:00 AM - 11:30 PM". Returns None when either input is malformed or
/// the window is inverted.
pub fn format_available_hours(open_24h: &str, close_24h: &str) -> Option<String> {
    let open = parse_24h(open_24h)?;
    let close = parse_24h(close_24h)?;
    if close <= open {
        return None;
    }
    Some(format!(
        "{} - {}",
        open.format("%I:%M %p"),
        close.format("%I:%M %p")
    ))
}
