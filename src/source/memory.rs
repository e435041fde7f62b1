use std::collections::BTreeMap;

use crate::foundation::error::{SnapreelError, SnapreelResult};
use crate::source::TrackingSource;
use crate::source::tables::{GameRecord, PlayRecord, RosterEntry, TrackingRow};

/// In-memory source for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    /// Game records.
    pub games: Vec<GameRecord>,
    /// Play records.
    pub plays: Vec<PlayRecord>,
    /// Roster entries.
    pub roster: Vec<RosterEntry>,
    /// Tracking rows keyed by week.
    pub weeks: BTreeMap<u32, Vec<TrackingRow>>,
}

impl InMemorySource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tracking rows to `week`.
    pub fn push_week(&mut self, week: u32, rows: impl IntoIterator<Item = TrackingRow>) {
        self.weeks.entry(week).or_default().extend(rows);
    }
}

impl TrackingSource for InMemorySource {
    fn games(&self) -> SnapreelResult<Vec<GameRecord>> {
        Ok(self.games.clone())
    }

    fn plays(&self) -> SnapreelResult<Vec<PlayRecord>> {
        Ok(self.plays.clone())
    }

    fn roster(&self) -> SnapreelResult<Vec<RosterEntry>> {
        Ok(self.roster.clone())
    }

    fn week_samples(&self, week: u32) -> SnapreelResult<Vec<TrackingRow>> {
        self.weeks
            .get(&week)
            .cloned()
            .ok_or_else(|| SnapreelError::source(format!("no tracking table for week {week}")))
    }
}
