//! Tunables and configuration shared by the game core and the front end.

pub mod config;
pub mod constants;

pub use config::{ConfigError, GameConfig};
pub use constants::*;
