//! Time range keys and their descriptors.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Supported relative time ranges for the dashboard picker
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TimeRange {
    /// Data from the last 15 minutes
    #[serde(rename = "15m")]
    Last15Min,
    /// Data from the last hour
    #[serde(rename = "1h")]
    LastHour,
    /// Data from the last 12 hours
    #[serde(rename = "12h")]
    Last12Hours,
    /// Data from the last day
    #[serde(rename = "1d")]
    LastDay,
    /// Data from the last 7 days
    #[serde(rename = "7d")]
    Last7Days,
    /// Data from the last 30 days
    #[serde(rename = "30d")]
    LastMonth,
}

impl TimeRange {
    /// All keys in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Last15Min,
        Self::LastHour,
        Self::Last12Hours,
        Self::LastDay,
        Self::Last7Days,
        Self::LastMonth,
    ];

    /// Return the short identifier for this range, e.g. `"15m"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Last15Min => "15m",
            Self::LastHour => "1h",
            Self::Last12Hours => "12h",
            Self::LastDay => "1d",
            Self::Last7Days => "7d",
            Self::LastMonth => "30d",
        }
    }

    /// Parse a short identifier, returning `None` for anything unrecognized.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|range| range.as_str() == key)
    }

    /// Return the duration in seconds for this range.
    pub const fn seconds(&self) -> u64 {
        match self {
            Self::Last15Min => 900,
            Self::LastHour => 3600,
            Self::Last12Hours => 43_200,
            Self::LastDay => 86_400,
            Self::Last7Days => 604_800,
            Self::LastMonth => 2_592_000,
        }
    }

    /// Return the [`chrono::Duration`] covered by this range.
    pub fn duration(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.seconds() as i64)
    }

    /// Map a [`chrono::Duration`] back to a key, matching exact lengths only.
    pub fn from_duration(duration: chrono::Duration) -> Option<Self> {
        let secs = u64::try_from(duration.num_seconds()).ok()?;
        Self::ALL.iter().copied().find(|range| range.seconds() == secs)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single selectable time range option: a key plus its display label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimeRangeDescriptor {
    /// Machine readable identifier, e.g. `"1h"`
    pub key: TimeRange,
    /// Human readable name shown in the picker
    pub label: &'static str,
}
