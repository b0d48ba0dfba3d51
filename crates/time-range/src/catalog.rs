//! Catalog of the selectable time ranges and its derived key lookup.

use std::{collections::HashMap, sync::LazyLock};

use crate::key::{TimeRange, TimeRangeDescriptor};

/// The selectable time ranges in display order.
pub const TIME_RANGES: [TimeRangeDescriptor; 6] = [
    TimeRangeDescriptor { key: TimeRange::Last15Min, label: "Last 15 Min" },
    TimeRangeDescriptor { key: TimeRange::LastHour, label: "Last Hour" },
    TimeRangeDescriptor { key: TimeRange::Last12Hours, label: "Last 12 Hours" },
    TimeRangeDescriptor { key: TimeRange::LastDay, label: "Last Day" },
    TimeRangeDescriptor { key: TimeRange::Last7Days, label: "Last 7 Days" },
    TimeRangeDescriptor { key: TimeRange::LastMonth, label: "Last Month" },
];

/// Descriptor used when an unknown key has to resolve to something sensible.
pub const DEFAULT_TIME_RANGE: TimeRangeDescriptor = TIME_RANGES[0];

static BY_KEY: LazyLock<HashMap<&'static str, TimeRangeDescriptor>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(TIME_RANGES.len());
    // Insertion follows display order; a repeated key keeps the later entry.
    for descriptor in &TIME_RANGES {
        map.insert(descriptor.key.as_str(), *descriptor);
    }
    map
});

/// Return the selectable time ranges in display order.
pub const fn list() -> &'static [TimeRangeDescriptor] {
    &TIME_RANGES
}

/// Return the key to descriptor mapping derived from [`TIME_RANGES`].
pub fn by_key() -> &'static HashMap<&'static str, TimeRangeDescriptor> {
    &BY_KEY
}

/// Look up a descriptor by its short identifier, e.g. `"15m"`.
///
/// Returns `None` when the key is not part of the catalog.
pub fn lookup(key: &str) -> Option<&'static TimeRangeDescriptor> {
    BY_KEY.get(key)
}

/// Resolve a persisted key to a descriptor, falling back to
/// [`DEFAULT_TIME_RANGE`] when the key is unknown.
pub fn resolve_or_default(key: &str) -> &'static TimeRangeDescriptor {
    lookup(key).unwrap_or_else(|| {
        tracing::debug!(key, "unknown time range key, using default");
        &DEFAULT_TIME_RANGE
    })
}
