use std::fmt;

pub use kurbo::Point;

/// Field width (sideline to sideline) in yards, as used for marker spans.
pub const FIELD_WIDTH_YDS: f64 = 53.5;
/// Field length including both end zones, in yards.
pub const FIELD_LENGTH_YDS: f64 = 120.0;

/// Display identity given to the ball wherever a numeric id is shown.
pub const BALL_DISPLAY_ID: u64 = 0;
/// Role (and team marker) the tracking feed uses for the ball.
pub const BALL_ROLE: &str = "football";

/// Game identifier from the games table.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct GameId(pub u64);

/// Play identifier, unique within a game.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PlayId(pub u64);

/// Roster identifier of a player.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub u64);

/// One discrete time sample (a tracking frame) within a play.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TimeSampleId(pub u32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TimeSampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a tracked entity.
///
/// The feed has no identifier for the ball; it is carried as its own variant instead of a
/// sentinel id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A rostered player.
    Player(EntityId),
    /// The synthesized ball entity.
    Ball,
}

impl EntityKind {
    /// Numeric identity shown to users (`0` for the ball).
    pub fn display_id(self) -> u64 {
        match self {
            Self::Player(id) => id.0,
            Self::Ball => BALL_DISPLAY_ID,
        }
    }

    /// True for the ball.
    pub fn is_ball(self) -> bool {
        matches!(self, Self::Ball)
    }
}

/// Direction the offense is moving on the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayDirection {
    /// Offense moves toward increasing x.
    Right,
    /// Offense moves toward decreasing x.
    Left,
}

impl PlayDirection {
    /// Parse the feed's `playDirection` cell (`"left"` / `"right"`, any case).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "right" => Some(Self::Right),
            "left" => Some(Self::Left),
            _ => None,
        }
    }

    /// `1.0` toward increasing x, `-1.0` otherwise.
    pub fn sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

impl fmt::Display for PlayDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Right => "right",
            Self::Left => "left",
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
