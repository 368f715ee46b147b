/// Events emitted during a simulation step.
/// The presentation layer consumes these for HUD messages.

use crate::domain::types::Point;
use super::world::EndReason;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten { at: Point, score: u32 },
    PowerUpSpawned { at: Point },
    PowerUpConsumed { at: Point },
    BoostExpired,
    GameOver { reason: EndReason },
    HighScoreBeaten { score: u32 },
    HighScoreSaveFailed,
}
