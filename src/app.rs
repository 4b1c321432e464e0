//! Adapter between the terminal loop and the game core.
//!
//! Owns the game, the fixed-step driver, the break session, and the score
//! board fed from game events.

use crate::core::config::GameConfig;
use crate::input::AppAction;
use crate::runner::{FixedStepDriver, RunnerEvent, RunnerGame};
use crate::session::{BreakSession, SessionError, SessionSummary};
use rand::Rng;
use std::time::Instant;

/// Score sink fed from [`RunnerEvent`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub current: u32,
    /// Set when a round ends, cleared when the next one starts.
    pub final_score: Option<u32>,
    /// Best score across rounds in this process.
    pub best: u32,
}

impl ScoreBoard {
    pub fn apply(&mut self, event: &RunnerEvent) {
        match *event {
            RunnerEvent::RoundStarted => self.final_score = None,
            RunnerEvent::ScoreChanged(score) => {
                self.current = score;
                self.best = self.best.max(score);
            }
            RunnerEvent::Crashed { final_score } | RunnerEvent::Stopped { final_score } => {
                self.final_score = Some(final_score);
            }
            RunnerEvent::RestartShown | RunnerEvent::RestartHidden => {}
        }
    }
}

/// Break timer state.
#[derive(Debug, Clone)]
pub enum SessionState {
    Active(BreakSession),
    Finished(SessionSummary),
}

pub struct App<R: Rng> {
    pub game: RunnerGame,
    pub driver: FixedStepDriver,
    pub session: SessionState,
    pub scores: ScoreBoard,
    pub should_quit: bool,
    monthly_salary: f64,
    rng: R,
}

impl<R: Rng> App<R> {
    /// Start the break and the first round at `now`.
    pub fn new(
        config: GameConfig,
        monthly_salary: f64,
        rng: R,
        now: Instant,
    ) -> Result<Self, SessionError> {
        let session = BreakSession::start(monthly_salary, now)?;
        let driver = FixedStepDriver::new(config.tick_interval());
        let mut app = Self {
            game: RunnerGame::new(config),
            driver,
            session: SessionState::Active(session),
            scores: ScoreBoard::default(),
            should_quit: false,
            monthly_salary,
            rng,
        };
        app.start_round(now);
        Ok(app)
    }

    fn start_round(&mut self, now: Instant) {
        let events = self.game.start(now, &mut self.rng);
        self.driver.reset(now);
        self.apply_events(&events);
    }

    fn apply_events(&mut self, events: &[RunnerEvent]) {
        for event in events {
            self.scores.apply(event);
        }
    }

    /// Run the ticks due at `now`.
    pub fn tick(&mut self, now: Instant) {
        let report = self.driver.advance(&mut self.game, now, &mut self.rng);
        self.apply_events(&report.events);
    }

    pub fn handle_action(&mut self, action: AppAction, now: Instant) {
        match action {
            AppAction::Jump => {
                self.game.jump_input();
            }
            AppAction::TryAgain => {
                if self.game.restart_visible {
                    let events = self.game.restart(now, &mut self.rng);
                    self.driver.reset(now);
                    self.apply_events(&events);
                }
            }
            AppAction::StopSession => self.stop_session(now),
            AppAction::ResetSession => self.reset_session(now),
            AppAction::Quit => self.should_quit = true,
        }
    }

    /// End the break; this also ends the running round.
    fn stop_session(&mut self, now: Instant) {
        let SessionState::Active(session) = &self.session else {
            return;
        };
        let summary = session.clone().stop(now);
        self.session = SessionState::Finished(summary);
        let events = self.game.stop();
        self.apply_events(&events);
    }

    /// Fresh break at the same salary and a fresh round.
    fn reset_session(&mut self, now: Instant) {
        match BreakSession::start(self.monthly_salary, now) {
            Ok(session) => self.session = SessionState::Active(session),
            Err(e) => {
                log::warn!("could not restart break: {}", e);
                return;
            }
        }
        self.start_round(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{GamePhase, Obstacle, RoundEnd};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    fn app(now: Instant) -> App<ChaCha8Rng> {
        App::new(
            GameConfig::default(),
            3360.0,
            ChaCha8Rng::seed_from_u64(42),
            now,
        )
        .unwrap()
    }

    fn crash(app: &mut App<ChaCha8Rng>, now: Instant) {
        app.game.obstacles = vec![Obstacle {
            x: 56.0,
            y: 490.0,
            width: 50.0,
            height: 50.0,
        }];
        app.tick(now);
    }

    #[test]
    fn test_new_app_starts_round_and_session() {
        let t0 = Instant::now();
        let app = app(t0);
        assert!(app.game.is_running());
        assert!(matches!(app.session, SessionState::Active(_)));
        assert_eq!(app.scores, ScoreBoard::default());
    }

    #[test]
    fn test_invalid_salary_rejected() {
        let result = App::new(
            GameConfig::default(),
            -1.0,
            ChaCha8Rng::seed_from_u64(1),
            Instant::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_score_board_tracks_events() {
        let mut board = ScoreBoard::default();
        board.apply(&RunnerEvent::ScoreChanged(4));
        board.apply(&RunnerEvent::Crashed { final_score: 4 });
        assert_eq!(board.final_score, Some(4));
        board.apply(&RunnerEvent::RoundStarted);
        board.apply(&RunnerEvent::ScoreChanged(0));
        assert_eq!(board.current, 0);
        assert_eq!(board.final_score, None);
        assert_eq!(board.best, 4);
    }

    #[test]
    fn test_try_again_only_after_crash() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let start_before = app.game.round.as_ref().unwrap().game_start_time;

        app.handle_action(AppAction::TryAgain, t0 + Duration::from_millis(50));
        assert_eq!(
            app.game.round.as_ref().unwrap().game_start_time,
            start_before
        );

        crash(&mut app, t0 + Duration::from_millis(20));
        assert!(app.game.restart_visible);
        assert_eq!(app.scores.final_score, Some(0));

        let t1 = t0 + Duration::from_secs(1);
        app.handle_action(AppAction::TryAgain, t1);
        assert!(app.game.is_running());
        assert!(!app.game.restart_visible);
        assert_eq!(app.game.round.as_ref().unwrap().game_start_time, t1);
        assert_eq!(app.scores.final_score, None);
    }

    #[test]
    fn test_stop_session_ends_round() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.tick(t0 + Duration::from_millis(40));

        app.handle_action(AppAction::StopSession, t0 + Duration::from_secs(90));

        assert_eq!(app.game.phase, GamePhase::GameOver);
        assert_eq!(app.game.round_end(), Some(RoundEnd::Stopped));
        assert!(!app.game.restart_visible);
        match &app.session {
            SessionState::Finished(summary) => assert_eq!(summary.total_seconds, 90),
            other => panic!("session should be finished, got {:?}", other),
        }
        assert_eq!(app.scores.final_score, Some(0));

        // Try again is not offered after an external stop
        app.handle_action(AppAction::TryAgain, t0 + Duration::from_secs(91));
        assert_eq!(app.game.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_stop_session_twice_keeps_first_summary() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.handle_action(AppAction::StopSession, t0 + Duration::from_secs(10));
        app.handle_action(AppAction::StopSession, t0 + Duration::from_secs(20));
        match &app.session {
            SessionState::Finished(summary) => assert_eq!(summary.total_seconds, 10),
            other => panic!("session should be finished, got {:?}", other),
        }
    }

    #[test]
    fn test_reset_session_starts_everything_again() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.handle_action(AppAction::StopSession, t0 + Duration::from_secs(10));

        app.handle_action(AppAction::ResetSession, t0 + Duration::from_secs(12));

        assert!(app.game.is_running());
        assert!(matches!(app.session, SessionState::Active(_)));
    }

    #[test]
    fn test_jump_and_quit() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.handle_action(AppAction::Jump, t0);
        assert!(app.game.player.is_jumping);
        app.handle_action(AppAction::Quit, t0);
        assert!(app.should_quit);
    }
}
