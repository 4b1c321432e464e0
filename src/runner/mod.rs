//! Potty Run: jump over the toilets scrolling in from the right.
//!
//! A real-time endless runner. The player jumps on input, gravity brings
//! them back down each tick, obstacles scroll left at a speed that steps up
//! every ten seconds, and each obstacle that leaves the screen scores a point.
//! Touching an obstacle ends the round.

pub mod collision;
pub mod driver;
pub mod logic;
pub mod physics;
pub mod spawn;
pub mod speed;
pub mod types;

pub use driver::{FixedStepDriver, StepReport};
pub use logic::RunnerGame;
pub use types::*;
