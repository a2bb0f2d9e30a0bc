//! Calendar-day grouping of timestamped records.

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use log::debug;

use crate::datetime::{self, CalendarLabels};

/// Group records into human-readable calendar-day buckets.
///
/// Each record's date field is read through `date_of`; records whose
/// accessor yields nothing (or an empty string), and records whose value
/// does not parse, appear in no bucket. `format` is an optional chrono
/// format string for the field value; without it the lenient cascade of
/// [`datetime::parse_datetime`] applies.
///
/// Bucketing is day-precision: two records on the same calendar day land
/// in the same bucket regardless of time of day. Labels are computed
/// relative to `today`, the injected evaluation day: "Today", "Tomorrow",
/// "Yesterday", a weekday name within the next week, "Last <Weekday>"
/// within the previous week, or a DD/MM/YYYY literal otherwise.
///
/// Buckets appear in first-appearance order and preserve record order.
pub fn group_by_day<T, F>(
    records: Vec<T>,
    date_of: F,
    format: Option<&str>,
    today: NaiveDate,
) -> IndexMap<String, Vec<T>>
where
    F: Fn(&T) -> Option<&str>,
{
    group_by_day_with_labels(records, date_of, format, today, &CalendarLabels::default())
}

/// Group like [`group_by_day`] with a custom bucket label set.
pub fn group_by_day_with_labels<T, F>(
    records: Vec<T>,
    date_of: F,
    format: Option<&str>,
    today: NaiveDate,
    labels: &CalendarLabels,
) -> IndexMap<String, Vec<T>>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut buckets: IndexMap<String, Vec<T>> = IndexMap::new();

    for record in records {
        let label = {
            let raw = match date_of(&record) {
                Some(raw) if !raw.is_empty() => raw,
                _ => continue,
            };
            let Some(parsed) = datetime::parse_datetime(raw, format) else {
                debug!("skipping record with unparseable date value: {:?}", raw);
                continue;
            };
            datetime::calendar_label(parsed.date(), today, labels)
        };

        buckets.entry(label).or_default().push(record);
    }

    buckets
}

/// Group like [`group_by_day`] with the local wall clock as the evaluation day.
pub fn group_by_day_local<T, F>(records: Vec<T>, date_of: F, format: Option<&str>) -> IndexMap<String, Vec<T>>
where
    F: Fn(&T) -> Option<&str>,
{
    group_by_day(records, date_of, format, Local::now().date_naive())
}
