//! Date and time utility functions
//!
//! This module is the date collaborator behind calendar grouping and
//! chronological sorting: parsing date values with or without an explicit
//! format, formatting, and relative-calendar labeling (e.g. "Yesterday",
//! "Today", "Tomorrow").

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// ISO day format used as the default storage format for dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Literal date format used for calendar buckets outside the relative window
pub const BUCKET_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Format date with offset from today to YYYY-MM-DD string
///
/// # Arguments
/// * `days_offset` - Number of days to add/subtract from today
///
/// # Returns
/// * `String` - Date string in YYYY-MM-DD format
pub fn format_date_with_offset(days_offset: i64) -> String {
    let target_date = Local::now().date_naive() + Duration::days(days_offset);
    format_ymd(target_date)
}

/// Parse a date value into a NaiveDateTime, leniently or with an explicit format
///
/// With `format` given, the value is parsed strictly against that chrono
/// format string, first as a datetime and then as a date-only value at
/// midnight. Without a format, a lenient cascade is tried in order:
/// RFC 3339 (normalized to UTC), ISO 8601 without timezone, space-separated
/// datetime, ISO date, and DD/MM/YYYY.
///
/// Returns `None` when nothing matches.
pub fn parse_datetime(value: &str, format: Option<&str>) -> Option<NaiveDateTime> {
    if let Some(fmt) = format {
        return NaiveDateTime::parse_from_str(value, fmt)
            .ok()
            .or_else(|| NaiveDate::parse_from_str(value, fmt).ok().map(at_midnight));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        // RFC3339 with timezone (e.g., "2025-01-15T14:30:00Z")
        Some(dt.naive_utc())
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        // ISO 8601 without timezone (e.g., "2025-01-15T14:30:00")
        Some(dt)
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        // Space-separated format (e.g., "2025-01-15 14:30:00")
        Some(dt)
    } else if let Ok(d) = NaiveDate::parse_from_str(value, ISO_DATE_FORMAT) {
        Some(at_midnight(d))
    } else if let Ok(d) = NaiveDate::parse_from_str(value, BUCKET_DATE_FORMAT) {
        Some(at_midnight(d))
    } else {
        None
    }
}

fn at_midnight(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

/// Relative position of a date with respect to an evaluation day
///
/// The week windows follow the usual relative-calendar convention: two to
/// six days ahead is "next week", two to six days back is "last week",
/// anything further out in either direction falls through to [`RelativeDay::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelativeDay {
    /// The evaluation day itself
    Today,
    /// One day after the evaluation day
    Tomorrow,
    /// One day before the evaluation day
    Yesterday,
    /// Two to six days ahead
    NextWeek(Weekday),
    /// Two to six days back
    LastWeek(Weekday),
    /// Outside the relative window
    Other(NaiveDate),
}

/// Compute the relative position of a date against an evaluation day
pub fn relative_day(date: NaiveDate, today: NaiveDate) -> RelativeDay {
    let days_diff = (date - today).num_days();

    match days_diff {
        0 => RelativeDay::Today,
        1 => RelativeDay::Tomorrow,
        -1 => RelativeDay::Yesterday,
        2..=6 => RelativeDay::NextWeek(date.weekday()),
        -6..=-2 => RelativeDay::LastWeek(date.weekday()),
        _ => RelativeDay::Other(date),
    }
}

/// Label set used to render [`RelativeDay`] values as bucket names
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarLabels {
    /// Label for the evaluation day itself
    pub today: String,
    /// Label for one day ahead
    pub tomorrow: String,
    /// Label for one day back
    pub yesterday: String,
    /// Prefix prepended to the weekday name for last-week buckets
    pub last_prefix: String,
    /// chrono format string for dates outside the relative window
    pub other_format: String,
}

impl Default for CalendarLabels {
    fn default() -> Self {
        Self {
            today: "Today".to_string(),
            tomorrow: "Tomorrow".to_string(),
            yesterday: "Yesterday".to_string(),
            last_prefix: "Last ".to_string(),
            other_format: BUCKET_DATE_FORMAT.to_string(),
        }
    }
}

impl CalendarLabels {
    /// Render a relative day with this label set
    pub fn render(&self, rel: RelativeDay) -> String {
        match rel {
            RelativeDay::Today => self.today.clone(),
            RelativeDay::Tomorrow => self.tomorrow.clone(),
            RelativeDay::Yesterday => self.yesterday.clone(),
            RelativeDay::NextWeek(weekday) => weekday_name(weekday).to_string(),
            RelativeDay::LastWeek(weekday) => format!("{}{}", self.last_prefix, weekday_name(weekday)),
            RelativeDay::Other(date) => date.format(&self.other_format).to_string(),
        }
    }
}

/// Compute the calendar bucket label for a date relative to an evaluation day
pub fn calendar_label(date: NaiveDate, today: NaiveDate, labels: &CalendarLabels) -> String {
    labels.render(relative_day(date, today))
}

/// Get a human-readable weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_day_window_edges() {
        // 2025-01-15 is a Wednesday
        let today = day(2025, 1, 15);

        assert_eq!(relative_day(today, today), RelativeDay::Today);
        assert_eq!(relative_day(day(2025, 1, 16), today), RelativeDay::Tomorrow);
        assert_eq!(relative_day(day(2025, 1, 14), today), RelativeDay::Yesterday);
        assert_eq!(relative_day(day(2025, 1, 17), today), RelativeDay::NextWeek(Weekday::Fri));
        assert_eq!(relative_day(day(2025, 1, 21), today), RelativeDay::NextWeek(Weekday::Tue));
        assert_eq!(relative_day(day(2025, 1, 22), today), RelativeDay::Other(day(2025, 1, 22)));
        assert_eq!(relative_day(day(2025, 1, 13), today), RelativeDay::LastWeek(Weekday::Mon));
        assert_eq!(relative_day(day(2025, 1, 9), today), RelativeDay::LastWeek(Weekday::Thu));
        assert_eq!(relative_day(day(2025, 1, 8), today), RelativeDay::Other(day(2025, 1, 8)));
    }

    #[test]
    fn test_default_labels_render() {
        let labels = CalendarLabels::default();
        assert_eq!(labels.render(RelativeDay::Today), "Today");
        assert_eq!(labels.render(RelativeDay::LastWeek(Weekday::Fri)), "Last Friday");
        assert_eq!(labels.render(RelativeDay::Other(day(2024, 3, 7))), "07/03/2024");
    }
}
