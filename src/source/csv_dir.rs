use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::foundation::error::{SnapreelError, SnapreelResult};
use crate::source::TrackingSource;
use crate::source::tables::{GameRecord, PlayRecord, RosterEntry, TrackingRow};

/// File names inside a data directory.
pub const GAMES_FILE: &str = "games.csv";
/// Plays table file name.
pub const PLAYS_FILE: &str = "plays.csv";
/// Roster table file name.
pub const PLAYERS_FILE: &str = "players.csv";
/// Prefix of the per-week tracking files (`tracking_week_<N>.csv`).
pub const TRACKING_PREFIX: &str = "tracking_week_";

/// Directory of CSV tables laid out like the Big Data Bowl release.
#[derive(Clone, Debug)]
pub struct CsvDirectory {
    root: PathBuf,
}

impl CsvDirectory {
    /// Tables are read from `root` on demand.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the tracking table for `week`.
    pub fn tracking_path(&self, week: u32) -> PathBuf {
        self.root.join(format!("{TRACKING_PREFIX}{week}.csv"))
    }

    fn read_table<T: DeserializeOwned>(&self, path: &Path) -> SnapreelResult<Vec<T>> {
        let f = File::open(path)
            .map_err(|e| SnapreelError::source(format!("open '{}': {e}", path.display())))?;
        let mut rdr = csv::Reader::from_reader(BufReader::new(f));
        let mut out = Vec::new();
        for (idx, rec) in rdr.deserialize::<T>().enumerate() {
            let rec = rec.map_err(|e| {
                SnapreelError::source(format!(
                    "parse '{}' record {}: {e}",
                    path.display(),
                    idx + 1
                ))
            })?;
            out.push(rec);
        }
        tracing::debug!(path = %path.display(), rows = out.len(), "loaded table");
        Ok(out)
    }
}

impl TrackingSource for CsvDirectory {
    fn games(&self) -> SnapreelResult<Vec<GameRecord>> {
        self.read_table(&self.root.join(GAMES_FILE))
    }

    fn plays(&self) -> SnapreelResult<Vec<PlayRecord>> {
        self.read_table(&self.root.join(PLAYS_FILE))
    }

    fn roster(&self) -> SnapreelResult<Vec<RosterEntry>> {
        self.read_table(&self.root.join(PLAYERS_FILE))
    }

    #[tracing::instrument(skip(self))]
    fn week_samples(&self, week: u32) -> SnapreelResult<Vec<TrackingRow>> {
        self.read_table(&self.tracking_path(week))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/csv_dir.rs"]
mod tests;
