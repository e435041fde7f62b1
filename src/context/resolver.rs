use crate::catalog::entities::TrackedSample;
use crate::context::description::WrappedDescription;
use crate::foundation::core::{GameId, PlayDirection, PlayId};
use crate::foundation::error::{SnapreelError, SnapreelResult};
use crate::selection::Selection;
use crate::source::tables::PlayRecord;

/// Scalar facts about one play, computed once per run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventContext {
    /// Game of the play.
    pub game_id: GameId,
    /// Play identifier.
    pub play_id: PlayId,
    /// Line of scrimmage, absolute field yards.
    pub scrimmage_line: f64,
    /// Yard line the offense must reach for a first down.
    pub first_down_marker: f64,
    /// Down number.
    pub down: u8,
    /// Quarter.
    pub quarter: u8,
    /// Game clock at the snap.
    pub game_clock: String,
    /// Description split for display.
    pub description: WrappedDescription,
    /// Offensive direction.
    pub play_direction: PlayDirection,
    /// Yards needed for a first down.
    pub yards_to_go: f64,
}

/// The play record and the enriched samples of one selected play.
#[derive(Clone, Debug)]
pub struct SelectedEvent {
    /// Play metadata.
    pub play: PlayRecord,
    /// Samples of the play, in source order.
    pub samples: Vec<TrackedSample>,
}

impl SelectedEvent {
    /// Join `samples` with `plays` and keep only the selected play.
    ///
    /// An empty result is a resolution error: both a missing play record and a play without
    /// tracking rows report the pair as not found.
    pub fn select(
        selection: Selection,
        plays: &[PlayRecord],
        samples: impl IntoIterator<Item = TrackedSample>,
    ) -> SnapreelResult<Self> {
        let not_found = || {
            SnapreelError::not_found(format!(
                "event not found for gameId {} playId {}",
                selection.game_id, selection.play_id
            ))
        };
        let play = plays
            .iter()
            .find(|p| p.game_id == selection.game_id && p.play_id == selection.play_id)
            .cloned()
            .ok_or_else(not_found)?;
        let samples: Vec<_> = samples
            .into_iter()
            .filter(|s| s.game_id == selection.game_id && s.play_id == selection.play_id)
            .collect();
        if samples.is_empty() {
            return Err(not_found());
        }
        Ok(Self { play, samples })
    }
}

/// First-down yard line for a scrimmage line, distance and direction.
pub fn first_down_marker(scrimmage_line: f64, yards_to_go: f64, direction: PlayDirection) -> f64 {
    match direction {
        PlayDirection::Right => scrimmage_line + yards_to_go,
        PlayDirection::Left => scrimmage_line - yards_to_go,
    }
}

/// Derives the [`EventContext`] of a selected play.
pub struct PlayContextResolver;

impl PlayContextResolver {
    /// Derive the [`EventContext`] of `event`.
    #[tracing::instrument(skip(event), fields(game = %event.play.game_id, play = %event.play.play_id))]
    pub fn resolve(event: &SelectedEvent) -> SnapreelResult<EventContext> {
        if event.samples.is_empty() {
            return Err(SnapreelError::not_found(format!(
                "event not found for gameId {} playId {}",
                event.play.game_id, event.play.play_id
            )));
        }
        let play = &event.play;
        if !play.absolute_yardline_number.is_finite() {
            return Err(SnapreelError::validation(
                "absoluteYardlineNumber must be finite",
            ));
        }
        if !play.yards_to_go.is_finite() {
            return Err(SnapreelError::validation("yardsToGo must be finite"));
        }

        let play_direction = resolve_direction(event)?;
        let scrimmage_line = play.absolute_yardline_number;
        let ctx = EventContext {
            game_id: play.game_id,
            play_id: play.play_id,
            scrimmage_line,
            first_down_marker: first_down_marker(scrimmage_line, play.yards_to_go, play_direction),
            down: play.down,
            quarter: play.quarter,
            game_clock: play.game_clock.clone(),
            description: WrappedDescription::wrap(&play.play_description),
            play_direction,
            yards_to_go: play.yards_to_go,
        };
        tracing::info!(
            scrimmage = ctx.scrimmage_line,
            first_down = ctx.first_down_marker,
            down = ctx.down,
            quarter = ctx.quarter,
            clock = %ctx.game_clock,
            "resolved play context"
        );
        Ok(ctx)
    }
}

/// Direction from the play record, cross-checked against every tracking row that reports one.
fn resolve_direction(event: &SelectedEvent) -> SnapreelResult<PlayDirection> {
    let parse = |raw: &str| {
        PlayDirection::parse(raw).ok_or_else(|| {
            SnapreelError::validation(format!("unrecognized playDirection {raw:?}"))
        })
    };

    let reported = event
        .play
        .play_direction
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty() && !raw.eq_ignore_ascii_case("na"));
    let mut resolved = match reported {
        Some(raw) => Some(parse(raw)?),
        None => None,
    };
    for s in &event.samples {
        let Some(raw) = s.play_direction.as_deref() else {
            continue;
        };
        let dir = parse(raw)?;
        match resolved {
            None => resolved = Some(dir),
            Some(prev) if prev != dir => {
                return Err(SnapreelError::validation(format!(
                    "playDirection disagrees within the play ({prev} vs {dir} at sample {})",
                    s.sample
                )));
            }
            Some(_) => {}
        }
    }
    resolved.ok_or_else(|| SnapreelError::validation("playDirection is missing for the play"))
}

#[cfg(test)]
#[path = "../../tests/unit/context/resolver.rs"]
mod tests;
