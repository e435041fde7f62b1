//! Snapreel turns the tracking data of one football play into an animation-ready scene sequence.
//!
//! The input is a directory of tabular tracking data (games, plays, players and weekly
//! tracking samples). The output is a [`SceneSequence`]: one [`Scene`] per time sample, each a
//! list of draw layers (yard numbers, scrimmage and first-down markers, one point group per
//! entity group), plus the play's title, playback steps and overlay values.
//!
//! # Pipeline overview
//!
//! 1. **Select**: `(game id, play id) -> week` via the game table ([`Selection`])
//! 2. **Enrich**: `TrackingRow -> TrackedSample` by joining the roster ([`EntityCatalog`])
//! 3. **Resolve**: `PlayRecord + samples -> EventContext` ([`PlayContextResolver`])
//! 4. **Synthesize**: `samples -> Scene` per time sample ([`FrameSynthesizer`])
//! 5. **Assemble**: `scenes -> SceneSequence` ([`SceneSequenceAssembler`])
//! 6. **Export** (optional): `SceneSequence -> PlotlyFigure` as JSON or a standalone HTML page
//!
//! [`animate_play`] runs steps 1 to 5 against any [`TrackingSource`].
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: parallel and sequential synthesis produce identical sequences.
//! - **Tolerant of data gaps**: unknown entities, roles and teams are logged and skipped or
//!   rendered with fallbacks; only a missing event is fatal.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assemble;
mod catalog;
mod context;
mod export;
mod foundation;
mod pipeline;
mod selection;
mod source;
mod synth;
mod tables;

#[cfg(test)]
#[path = "../tests/unit/fixtures.rs"]
pub(crate) mod fixtures;

pub use assemble::sequence::{
    LineSet, Overlay, PlaybackStep, SceneSequence, SceneSequenceAssembler, compose_title,
};
pub use catalog::entities::{CatalogEntry, EnrichReport, EntityCatalog, TrackedSample};
pub use context::description::{
    WRAP_FIRST_LINE_WORDS, WRAP_MIN_CHARS, WRAP_MIN_WORDS, WrappedDescription,
};
pub use context::resolver::{EventContext, PlayContextResolver, SelectedEvent, first_down_marker};
pub use export::json::{ensure_parent_dir, write_json};
pub use export::plotly::{PLOTLY_CDN, PlotlyFigure};
pub use foundation::core::{
    BALL_DISPLAY_ID, BALL_ROLE, EntityId, EntityKind, FIELD_LENGTH_YDS, FIELD_WIDTH_YDS, GameId,
    PlayDirection, PlayId, Point, TimeSampleId,
};
pub use foundation::error::{SnapreelError, SnapreelResult};
pub use pipeline::animate_play;
pub use selection::Selection;
pub use source::TrackingSource;
pub use source::csv_dir::{
    CsvDirectory, GAMES_FILE, PLAYERS_FILE, PLAYS_FILE, TRACKING_PREFIX,
};
pub use source::memory::InMemorySource;
pub use source::tables::{GameRecord, PlayRecord, RosterEntry, TrackingRow};
pub use synth::scene::{
    DrawLayer, EntityPoint, FieldLabel, GroupLayer, HoverInfo, MarkerKind, MarkerLayer,
    SPEED_UNITS, Scene, TextLayer,
};
pub use synth::synthesizer::{
    FrameSynthesizer, LINE_SET_TAG, SceneIter, SceneOutput, SynthOpts, is_line_set,
};
pub use tables::lookup::{EntityGroup, LookupTables};
