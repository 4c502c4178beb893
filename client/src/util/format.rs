//! Compact display formatting for server timestamps.
//!
//! Timestamps arrive as ISO-8601 strings and are shown as short `M/D/YYYY`
//! dates. Anything that does not look like an ISO timestamp is shown
//! verbatim rather than dropped.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `M/D/YYYY` rendering of an ISO-8601 timestamp.
#[must_use]
pub fn short_date(iso: &str) -> String {
    match parse_date(iso) {
        Some((year, month, day)) => format!("{month}/{day}/{year}"),
        None => iso.to_owned(),
    }
}

/// `M/D/YYYY, HH:MM` rendering of an ISO-8601 timestamp. Falls back to the
/// date alone when no time component is present.
#[must_use]
pub fn short_datetime(iso: &str) -> String {
    let Some((year, month, day)) = parse_date(iso) else {
        return iso.to_owned();
    };
    match clock_time(iso) {
        Some(clock) => format!("{month}/{day}/{year}, {clock}"),
        None => format!("{month}/{day}/{year}"),
    }
}

/// Year, month, day from the leading `YYYY-MM-DD`.
fn parse_date(iso: &str) -> Option<(u32, u32, u32)> {
    let date = iso.split('T').next()?;
    let mut parts = date.splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// `HH:MM` from the time component, when one exists.
fn clock_time(iso: &str) -> Option<String> {
    let time = iso.split('T').nth(1)?;
    let mut parts = time.splitn(3, ':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().all(|b| b.is_ascii_digit()) || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{hours}:{minutes}"))
}
