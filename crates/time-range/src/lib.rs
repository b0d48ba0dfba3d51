//! Static catalog of the relative time ranges selectable in the dashboard.
//!
//! The selectable windows are fixed at compile time: an ordered list drives
//! the picker's display order, and a derived key map resolves a persisted
//! key (query parameter, saved preference) back into its descriptor. This
//! lives in its own crate so that consumers such as the dashboard API can
//! depend on the option set without pulling in anything else.

/// Catalog entries and key based lookup
pub mod catalog;
/// Time range keys and descriptors
pub mod key;

pub use catalog::{DEFAULT_TIME_RANGE, TIME_RANGES, by_key, list, lookup, resolve_or_default};
pub use key::{TimeRange, TimeRangeDescriptor};
