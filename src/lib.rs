//! Potty Run - jump-over-toilets endless runner for the terminal.
//!
//! The game core (`runner`) is pure and time-injected; `app` and `ui` put a
//! break timer and a ratatui front end around it.

pub mod app;
pub mod build_info;
pub mod core;
pub mod input;
pub mod runner;
pub mod session;
pub mod ui;
pub mod utils;

pub use app::{App, ScoreBoard, SessionState};
pub use crate::core::config::{ConfigError, GameConfig};
pub use runner::{
    FixedStepDriver, GamePhase, Obstacle, Player, RoundEnd, RunnerEvent, RunnerGame, StepReport,
};
pub use session::{BreakSession, SessionError, SessionSummary};
