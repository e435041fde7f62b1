//! Tabular inputs.
//!
//! Loading is front-loaded: the pipeline pulls every table it needs through a
//! [`TrackingSource`] before synthesis starts, so no stage after selection touches IO.

pub(crate) mod csv_dir;
pub(crate) mod memory;
pub(crate) mod tables;

use crate::foundation::error::SnapreelResult;
use tables::{GameRecord, PlayRecord, RosterEntry, TrackingRow};

/// Provider of the four raw tables.
pub trait TrackingSource {
    /// All game records.
    fn games(&self) -> SnapreelResult<Vec<GameRecord>>;
    /// All play records.
    fn plays(&self) -> SnapreelResult<Vec<PlayRecord>>;
    /// The entity roster.
    fn roster(&self) -> SnapreelResult<Vec<RosterEntry>>;
    /// Positional samples recorded during `week`.
    fn week_samples(&self, week: u32) -> SnapreelResult<Vec<TrackingRow>>;
}
