use crate::foundation::core::{EntityId, GameId, PlayId, TimeSampleId};

/// One row of `games.csv`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Game identifier.
    pub game_id: GameId,
    /// Season week the game belongs to; selects the tracking file.
    pub week: u32,
}

/// One row of `plays.csv`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRecord {
    /// Game identifier.
    pub game_id: GameId,
    /// Play identifier, unique within a game.
    pub play_id: PlayId,
    /// Free-text play description.
    pub play_description: String,
    /// Quarter (1..=5, 5 is overtime).
    pub quarter: u8,
    /// Down (1..=4).
    pub down: u8,
    /// Yards needed for a first down.
    pub yards_to_go: f64,
    /// Line of scrimmage in absolute field yards (end zones included).
    pub absolute_yardline_number: f64,
    /// Game clock at the snap, `MM:SS`.
    pub game_clock: String,
    /// Offensive direction, when the plays table carries it.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub play_direction: Option<String>,
}

/// One row of `players.csv`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    /// Entity identifier.
    pub nfl_id: EntityId,
    /// Roster position, used as the entity's role.
    pub position: String,
    /// Player name.
    pub display_name: String,
}

/// One row of `tracking_week_<N>.csv`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRow {
    /// Game identifier.
    pub game_id: GameId,
    /// Play identifier.
    pub play_id: PlayId,
    /// Entity identifier; absent (`NA`) for the ball.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub nfl_id: Option<EntityId>,
    /// Name as reported by the tracking feed; used when the roster name is blank.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub display_name: Option<String>,
    /// Time sample within the play.
    pub frame_id: TimeSampleId,
    /// Club code, or `football` for the ball.
    pub club: String,
    /// Position along the field, yards.
    pub x: f64,
    /// Position across the field, yards.
    pub y: f64,
    /// Speed, yards per second.
    pub s: f64,
    /// Event tag attached to this sample, e.g. `line_set`.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub event: Option<String>,
    /// Offensive direction as reported per row.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub play_direction: Option<String>,
}
