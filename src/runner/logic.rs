//! Potty Run round state machine: start/stop/restart, the per-tick update,
//! and jump input.
//!
//! The game never touches a drawing surface or a real clock. Callers pass the
//! current [`Instant`] and an RNG into every operation that needs them, and
//! read [`RunnerEvent`]s back for the score display and the restart control.

use super::collision::collides;
use super::physics::{scroll, JumpPhysics};
use super::spawn::{should_spawn, ObstacleFactory};
use super::speed::SpeedController;
use super::types::*;
use crate::core::config::GameConfig;
use rand::Rng;
use std::time::{Duration, Instant};

/// The whole game: one player, the active obstacles, and the current round.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    config: GameConfig,
    factory: ObstacleFactory,
    physics: JumpPhysics,
    speed: SpeedController,

    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles in spawn order (oldest/leftmost first).
    pub obstacles: Vec<Obstacle>,
    /// `None` until the first `start()`.
    pub round: Option<RoundState>,
    /// Whether the "try again" control should be shown.
    pub restart_visible: bool,
}

impl RunnerGame {
    pub fn new(config: GameConfig) -> Self {
        let factory = ObstacleFactory::new(&config);
        let physics = JumpPhysics {
            jump_velocity: config.jump_velocity,
            gravity: config.gravity,
            resting_y: config.resting_y(),
        };
        let speed = SpeedController {
            base_speed: config.base_speed,
            step: config.speed_step,
            step_interval: Duration::from_secs(config.speed_step_interval_seconds),
        };
        let player = Player::new(&config);

        Self {
            config,
            factory,
            physics,
            speed,
            phase: GamePhase::Idle,
            player,
            obstacles: Vec::new(),
            round: None,
            restart_visible: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.round.as_ref().is_some_and(|r| r.is_game_over)
    }

    pub fn score(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.score)
    }

    pub fn current_speed(&self) -> f64 {
        self.round
            .as_ref()
            .map_or(self.config.base_speed, |r| r.current_speed)
    }

    pub fn round_end(&self) -> Option<RoundEnd> {
        self.round.as_ref().and_then(|r| r.end)
    }

    /// Begin a fresh round at `now` and spawn the first batch.
    pub fn start<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Vec<RunnerEvent> {
        self.round = Some(RoundState::new(now, self.config.base_speed));
        self.obstacles.clear();
        self.player.reset(self.config.resting_y());
        self.restart_visible = false;
        self.phase = GamePhase::Running;

        let batch = self
            .factory
            .spawn_batch(rng, self.config.surface_width, 0);
        log::info!("round started with a batch of {}", batch.len());
        self.obstacles.extend(batch);

        vec![
            RunnerEvent::RoundStarted,
            RunnerEvent::ScoreChanged(0),
            RunnerEvent::RestartHidden,
        ]
    }

    /// Same as [`start`](Self::start): the previous round is discarded.
    pub fn restart<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Vec<RunnerEvent> {
        log::info!("restarting after score {}", self.score());
        self.start(now, rng)
    }

    /// Halt the round from outside. No-op before the first start.
    pub fn stop(&mut self) -> Vec<RunnerEvent> {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        if self.phase == GamePhase::Running {
            round.end = Some(RoundEnd::Stopped);
        }
        self.phase = GamePhase::GameOver;
        round.is_game_over = true;
        let final_score = round.score;
        log::info!("round stopped with score {}", final_score);

        let mut events = vec![RunnerEvent::Stopped { final_score }];
        if self.restart_visible {
            self.restart_visible = false;
            events.push(RunnerEvent::RestartHidden);
        }
        events
    }

    /// Start a jump if the round is running and the player is grounded.
    pub fn jump_input(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.physics.trigger_jump(&mut self.player)
    }

    /// One fixed tick: speed, player, obstacles (newest first), then spawning.
    pub fn update<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Vec<RunnerEvent> {
        if !self.is_running() {
            return Vec::new();
        }
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        let mut events = Vec::new();
        round.tick_count += 1;
        round.current_speed = self
            .speed
            .speed_at(now.saturating_duration_since(round.game_start_time));

        self.physics.step(&mut self.player);

        let player_bounds = self.player.bounds();
        for i in (0..self.obstacles.len()).rev() {
            scroll(&mut self.obstacles[i], round.current_speed);
            let obstacle = self.obstacles[i];

            if obstacle.is_off_screen() {
                self.obstacles.remove(i);
                round.score += 1;
                log::trace!("obstacle cleared, score {}", round.score);
                events.push(RunnerEvent::ScoreChanged(round.score));
            }

            if collides(&player_bounds, &obstacle.bounds(), self.config.hitbox_margin) {
                self.phase = GamePhase::GameOver;
                round.is_game_over = true;
                round.end = Some(RoundEnd::Crashed);
                self.restart_visible = true;
                log::info!(
                    "crashed at tick {} with score {}",
                    round.tick_count,
                    round.score
                );
                events.push(RunnerEvent::Crashed {
                    final_score: round.score,
                });
                events.push(RunnerEvent::RestartShown);
                return events;
            }
        }

        if should_spawn(
            &self.obstacles,
            self.config.surface_width,
            self.config.spawn_gap,
        ) {
            let batch = self
                .factory
                .spawn_batch(rng, self.config.surface_width, round.score);
            log::debug!("spawned batch of {} at score {}", batch.len(), round.score);
            self.obstacles.extend(batch);
        }

        events
    }
}
