//! Chronological sorting of timestamped records.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::datetime;

/// Direction of a chronological sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest first
    #[serde(rename = "asc")]
    Ascending,
    /// Newest first. This is the default when no order is specified.
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

/// Error returned when parsing a [`SortOrder`] from a string fails.
#[derive(Debug, thiserror::Error)]
#[error("invalid sort order '{0}', expected 'asc' or 'desc'")]
pub struct SortOrderParseError(String);

impl FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(SortOrderParseError(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// Sort records in place by a date field.
///
/// Each record's date field is read through `date_of` and parsed once
/// (strictly against `format` when given, otherwise with the lenient
/// cascade of [`datetime::parse_datetime`]). The sort is stable: records
/// with equal dates keep their original relative order. Records whose
/// accessor yields nothing, or whose value does not parse, order before
/// every dated record ascending and after every dated record descending,
/// preserving relative order among themselves.
pub fn sort_by_date<T, F>(records: &mut [T], date_of: F, order: SortOrder, format: Option<&str>)
where
    F: Fn(&T) -> Option<&str>,
{
    match order {
        SortOrder::Ascending => records.sort_by_cached_key(|r| date_key(r, &date_of, format)),
        SortOrder::Descending => records.sort_by_cached_key(|r| Reverse(date_key(r, &date_of, format))),
    }
}

fn date_key<T, F>(record: &T, date_of: &F, format: Option<&str>) -> Option<NaiveDateTime>
where
    F: Fn(&T) -> Option<&str>,
{
    let raw = date_of(record)?;
    let parsed = datetime::parse_datetime(raw, format);
    if parsed.is_none() {
        debug!("record date value {:?} did not parse, sorting it to the edge", raw);
    }
    parsed
}
