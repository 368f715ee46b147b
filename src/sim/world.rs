/// GameWorld: the complete state of one game attempt.
///
/// One world = one session, from spawn to game over. The driver builds a
/// fresh world to restart; nothing is shared between attempts except the
/// high-score store behind its trait.
///
/// All timing comes in from the outside: the driver passes a monotonic
/// `Instant` into `step`, and the world never reads the clock itself.
/// Randomness is a seeded `SessionRng` injected at construction, so a
/// session is fully deterministic given (seed, command stream, clock).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::{GameConfig, PowerUpConfig, SpeedConfig};
use crate::domain::grid::Grid;
use crate::domain::snake::Snake;
use crate::domain::types::{Command, Direction, Point};
use super::rng::SessionRng;
use super::score::HighScoreStore;
use super::spawn::place_free_cell;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell; nowhere left to place food.
    BoardFull,
}

/// Speed boost from a consumed power-up. Expires on wall-clock time,
/// not tick count, so pausing does not extend it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoostState {
    Inactive,
    Active { since: Instant },
}

pub struct GameWorld {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Point,
    pub powerup: Option<Point>,
    pub boost: BoostState,
    pub score: u32,
    pub high_score: u32,
    pub paused: bool,
    pub phase: Phase,
    pub end_reason: Option<EndReason>,

    // ── HUD message line ──
    pub message: String,
    pub message_timer: u32,

    // ── Internals driven by step() ──
    pub(crate) pending_direction: Option<Direction>,
    pub(crate) last_powerup_spawn: Instant,
    pub(crate) speed: SpeedConfig,
    pub(crate) powerup_cfg: PowerUpConfig,
    pub(crate) rng: SessionRng,
    pub(crate) store: Box<dyn HighScoreStore>,
}

impl GameWorld {
    pub fn new(
        config: &GameConfig,
        mut rng: SessionRng,
        store: Box<dyn HighScoreStore>,
        now: Instant,
    ) -> Self {
        let grid = Grid::new(config.grid_width, config.grid_height);
        let snake = Snake::new(grid.center(), Direction::Right);
        let high_score = store.load();
        let food = place_free_cell(&mut rng, grid, snake.cells())
            .expect("fresh grid always has a free cell");

        GameWorld {
            grid,
            snake,
            food,
            powerup: None,
            boost: BoostState::Inactive,
            score: 0,
            high_score,
            paused: false,
            phase: Phase::Playing,
            end_reason: None,
            message: String::new(),
            message_timer: 0,
            pending_direction: None,
            last_powerup_spawn: now,
            speed: config.speed.clone(),
            powerup_cfg: config.powerup.clone(),
            rng,
            store,
        }
    }

    // ── Commands ──

    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Turn(dir) => self.set_direction(dir),
            Command::TogglePause => self.toggle_pause(),
            // Quit is the driver's business; it never reaches game state.
            Command::Quit => {}
        }
    }

    /// Record a direction change for the next tick. A command that exactly
    /// reverses the current direction is dropped here, at submission time,
    /// so the most recent *valid* command wins the tick.
    pub fn set_direction(&mut self, dir: Direction) {
        if self.phase != Phase::Playing || self.paused {
            return;
        }
        if dir.is_opposite(self.snake.direction) {
            return;
        }
        self.pending_direction = Some(dir);
    }

    /// Flip pause. Pause blocks the simulation but keeps accepting the
    /// resume command; it never changes any other state.
    pub fn toggle_pause(&mut self) {
        if self.phase == Phase::Playing {
            self.paused = !self.paused;
        }
    }

    // ── Queries ──

    pub fn boosted(&self) -> bool {
        matches!(self.boost, BoostState::Active { .. })
    }

    /// The driver's pacing: normal interval, or the boosted one while a
    /// speed boost is active.
    pub fn tick_interval(&self) -> Duration {
        let ms = if self.boosted() {
            self.speed.boost_tick_rate_ms
        } else {
            self.speed.tick_rate_ms
        };
        Duration::from_millis(ms)
    }

    /// Read-only view for the renderer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            snake: self.snake.body(),
            food: self.food,
            powerup: self.powerup,
            score: self.score,
            high_score: self.high_score,
            paused: self.paused,
            phase: self.phase,
            boosted: self.boosted(),
            message: &self.message,
        }
    }

    pub fn set_message(&mut self, msg: &str, duration: u32) {
        self.message = msg.to_string();
        self.message_timer = duration;
    }
}

/// What the renderer sees: ordered snake cells (head first), the items,
/// the scores and the session status. Nothing here can mutate the world.
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub snake: &'a VecDeque<Point>,
    pub food: Point,
    pub powerup: Option<Point>,
    pub score: u32,
    pub high_score: u32,
    pub paused: bool,
    pub phase: Phase,
    pub boosted: bool,
    pub message: &'a str,
}
