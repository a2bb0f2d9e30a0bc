//! Datashape - data-shaping helpers for JSON record collections
//!
//! This library provides a small set of stateless, synchronous helpers
//! for reshaping in-memory collections: merging heterogeneous JSON
//! values into a single object, encoding an object into a multipart-style
//! form payload with per-field transform pipelines, grouping timestamped
//! records into human-readable calendar buckets, and sorting records
//! chronologically.
//!
//! # Modules
//!
//! The library is organized into one module per helper:
//!
//! * [`merge`] - Merging sequences of JSON values into a single object
//! * [`form`] - Form payload encoding with per-field transforms
//! * [`group`] - Calendar-day grouping of timestamped records
//! * [`sort`] - Chronological sorting of timestamped records
//! * [`datetime`] - The date parsing/formatting/labeling collaborator
//!   shared by grouping and sorting
//!
//! Grouping and sorting are generic over the record type: they read the
//! date field through a caller-supplied accessor, and the evaluation day
//! that relative labels are computed against is an explicit parameter so
//! results are deterministic under test.

/// Date and time parsing, formatting, and relative-calendar labels
pub mod datetime;

/// Form payload encoding with per-field transform pipelines
pub mod form;

/// Calendar-day grouping of timestamped records
pub mod group;

/// Merging heterogeneous JSON values into a single object
pub mod merge;

/// Chronological sorting of timestamped records
pub mod sort;

// Re-export the primary entry points for convenient access
pub use form::{encode_form, FormPayload, Transform, Transforms};
pub use group::{group_by_day, group_by_day_local, group_by_day_with_labels};
pub use merge::{merge_values, merge_values_json};
pub use sort::{sort_by_date, SortOrder};
