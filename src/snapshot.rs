//! Per-cycle dashboard snapshot
//!
//! The refresh worker publishes a `Snapshot` over a watch channel as each
//! section resolves; renderers only ever read the latest value.

use crate::standings::{ConstructorStanding, DriverStanding, NextRaceInfo};

/// Outcome of one section within a refresh cycle. Failures are data, not
/// errors: a section that could not be fetched or decoded still renders,
/// as a single error line.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionStatus<T> {
    /// Not fetched yet in this process lifetime.
    Pending,
    /// A fetch is in flight; renderers show a transient indicator.
    Fetching,
    Ready(T),
    /// Network failure, timeout, empty body, or an empty list.
    NoData,
    /// The document decoded to nonsense; carries the error text.
    Malformed(String),
}

impl<T> Default for SectionStatus<T> {
    fn default() -> Self {
        SectionStatus::Pending
    }
}

/// The full dashboard state as of the latest publication.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Number of refresh cycles started, 1-based.
    pub cycle: u64,
    pub drivers: SectionStatus<Vec<DriverStanding>>,
    pub constructors: SectionStatus<Vec<ConstructorStanding>>,
    pub next_race: SectionStatus<NextRaceInfo>,
    /// Local timestamp of the last completed cycle, for the footer.
    pub last_updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_pending() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.cycle, 0);
        assert_eq!(snapshot.drivers, SectionStatus::Pending);
        assert_eq!(snapshot.next_race, SectionStatus::Pending);
        assert!(snapshot.last_updated.is_none());
    }
}
