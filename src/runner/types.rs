//! Potty Run data structures.
//!
//! World coordinates are surface units with the origin at the top-left
//! corner: `x` grows to the right, `y` grows downward.

use crate::core::config::GameConfig;
use std::time::Instant;

/// An axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A toilet scrolling in from the right edge.
///
/// Only `x` changes after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the whole obstacle is past the left edge of the surface.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// The runner. Horizontal position and size never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in units/tick (negative = upward).
    pub jump_velocity: f64,
    pub is_jumping: bool,
}

impl Player {
    /// A grounded player sized and placed from `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.player_x,
            y: config.resting_y(),
            width: config.player_width,
            height: config.player_height,
            jump_velocity: 0.0,
            is_jumping: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Put the player back on the ground, not jumping.
    pub fn reset(&mut self, resting_y: f64) {
        self.y = resting_y;
        self.jump_velocity = 0.0;
        self.is_jumping = false;
    }
}

/// Round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// `start()` has never been called.
    Idle,
    Running,
    GameOver,
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The player hit an obstacle.
    Crashed,
    /// The round was halted from outside (break timer stopped).
    Stopped,
}

/// Per-round bookkeeping, replaced wholesale by `start()`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub score: u32,
    pub is_game_over: bool,
    pub game_start_time: Instant,
    pub current_speed: f64,
    /// Physics ticks processed this round.
    pub tick_count: u64,
    pub end: Option<RoundEnd>,
}

impl RoundState {
    pub fn new(now: Instant, base_speed: f64) -> Self {
        Self {
            score: 0,
            is_game_over: false,
            game_start_time: now,
            current_speed: base_speed,
            tick_count: 0,
            end: None,
        }
    }
}

/// Notifications for the score sink and the restart affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEvent {
    /// A new round began (also emitted by restart).
    RoundStarted,
    /// Score after an obstacle left the screen.
    ScoreChanged(u32),
    /// Collision ended the round.
    Crashed { final_score: u32 },
    /// Round halted from outside.
    Stopped { final_score: u32 },
    RestartShown,
    RestartHidden,
}
