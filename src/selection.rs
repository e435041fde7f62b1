use crate::foundation::core::{GameId, PlayId};
use crate::foundation::error::{SnapreelError, SnapreelResult};
use crate::source::tables::GameRecord;

/// The (game, play) pair a run animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    /// Selected game.
    pub game_id: GameId,
    /// Selected play within the game.
    pub play_id: PlayId,
}

impl Selection {
    /// Selection of already-validated ids.
    pub fn new(game_id: GameId, play_id: PlayId) -> Self {
        Self { game_id, play_id }
    }

    /// Validate raw user arguments. Runs before any table is loaded.
    pub fn parse(game: Option<&str>, play: Option<&str>) -> SnapreelResult<Self> {
        let (Some(game), Some(play)) = (game, play) else {
            return Err(SnapreelError::missing_argument(
                "specify both gameId and playId",
            ));
        };
        Ok(Self {
            game_id: GameId(parse_positive("game id", game)?),
            play_id: PlayId(parse_positive("play id", play)?),
        })
    }

    /// Week of the selected game, from the games table.
    pub fn week_in(&self, games: &[GameRecord]) -> SnapreelResult<u32> {
        games
            .iter()
            .find(|g| g.game_id == self.game_id)
            .map(|g| g.week)
            .ok_or_else(|| {
                SnapreelError::not_found(format!("could not find week for game {}", self.game_id))
            })
    }
}

fn parse_positive(name: &str, raw: &str) -> SnapreelResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(SnapreelError::invalid_format(name, raw)),
    }
}

#[cfg(test)]
#[path = "../tests/unit/selection/selection.rs"]
mod tests;
