//! Clock-time helpers for meeting and log templates.

use crate::store::Clock;
use chrono::{Duration, NaiveDateTime, NaiveTime};

const OUTPUT_FORMAT: &str = "%H:%M";

/// Accepted input formats, tried in order: `h:mm AM/PM`, then `HH:mm` / `h:mm`.
const INPUT_FORMATS: &[&str] = &["%I:%M %p", "%H:%M"];

/// Normalizes a user-entered time to `HH:mm`, or returns the current time
/// when the input is empty or not a recognized time.
pub fn sanitize_time<C: Clock>(input: &str, clock: &C) -> String {
    parse_time(input)
        .unwrap_or_else(|| clock.local_time())
        .format(OUTPUT_FORMAT)
        .to_string()
}

fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(input, format).ok())
}

/// Elapsed time between two `YYYY-MM-DD` + `HH:mm` instants as `H:MM`.
///
/// An end before the start is taken to be on the following day. Returns `None`
/// when any part does not parse.
pub fn calculate_duration(
    start_date: &str,
    start_time: &str,
    end_date: &str,
    end_time: &str,
) -> Option<String> {
    let start = parse_date_time(start_date, start_time)?;
    let mut end = parse_date_time(end_date, end_time)?;
    if end < start {
        end += Duration::days(1);
    }

    let minutes = (end - start).num_minutes();
    Some(format!("{}:{:02}", minutes / 60, minutes % 60))
}

fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let joined = format!("{} {}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&joined, "%Y-%m-%d %H:%M").ok()
}
