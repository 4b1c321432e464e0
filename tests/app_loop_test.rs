//! The terminal app without a terminal: key mapping, the fixed-step driver,
//! the break session, and the painted scene.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use potty_run::app::{App, SessionState};
use potty_run::core::config::GameConfig;
use potty_run::input::map_key;
use potty_run::runner::{Obstacle, RoundEnd};
use potty_run::ui::runner_scene::paint_scene;
use potty_run::ui::surface::CellSurface;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

fn new_app(now: Instant) -> App<ChaCha8Rng> {
    App::new(
        GameConfig::default(),
        3360.0,
        ChaCha8Rng::seed_from_u64(42),
        now,
    )
    .unwrap()
}

fn press(app: &mut App<ChaCha8Rng>, code: KeyCode, now: Instant) {
    if let Some(action) = map_key(KeyEvent::new(code, KeyModifiers::NONE)) {
        app.handle_action(action, now);
    }
}

fn toilet_in_front(app: &mut App<ChaCha8Rng>) {
    app.game.obstacles = vec![Obstacle {
        x: 56.0,
        y: 490.0,
        width: 50.0,
        height: 50.0,
    }];
}

#[test]
fn test_driver_steps_sixty_per_second() {
    let t0 = Instant::now();
    let mut app = new_app(t0);

    let mut total = 0;
    for i in 1..=10 {
        let before = app.game.round.as_ref().unwrap().tick_count;
        app.tick(t0 + Duration::from_millis(100 * i));
        total += app.game.round.as_ref().unwrap().tick_count - before;
    }

    // 1s of wall time at 60Hz, give or take the accumulator remainder
    assert!((59..=60).contains(&total), "ticks = {}", total);
}

#[test]
fn test_driver_clamps_a_stall() {
    let t0 = Instant::now();
    let mut app = new_app(t0);

    app.tick(t0 + Duration::from_secs(5));

    let ticks = app.game.round.as_ref().unwrap().tick_count;
    assert!(ticks <= 6, "a 5s stall ran {} ticks", ticks);
}

#[test]
fn test_space_jumps_and_release_is_ignored() {
    let t0 = Instant::now();
    let mut app = new_app(t0);

    press(&mut app, KeyCode::Char(' '), t0);
    assert!(app.game.player.is_jumping);

    let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    release.kind = crossterm::event::KeyEventKind::Release;
    assert_eq!(map_key(release), None);
}

#[test]
fn test_crash_then_enter_restarts() {
    let t0 = Instant::now();
    let mut app = new_app(t0);
    toilet_in_front(&mut app);

    app.tick(t0 + Duration::from_millis(20));
    assert!(app.game.restart_visible);
    assert_eq!(app.game.round_end(), Some(RoundEnd::Crashed));

    // Ticks after the crash change nothing
    let frozen = app.game.obstacles.clone();
    app.tick(t0 + Duration::from_millis(200));
    assert_eq!(app.game.obstacles, frozen);

    press(&mut app, KeyCode::Enter, t0 + Duration::from_secs(1));
    assert!(app.game.is_running());
    assert_eq!(app.game.obstacles[0].x, 800.0);
}

#[test]
fn test_stop_key_ends_break_and_round() {
    let t0 = Instant::now();
    let mut app = new_app(t0);
    app.tick(t0 + Duration::from_millis(500));
    let score = app.game.score();

    press(&mut app, KeyCode::Char('s'), t0 + Duration::from_secs(125));

    assert!(app.game.is_game_over());
    assert_eq!(app.scores.final_score, Some(score));
    match &app.session {
        SessionState::Finished(summary) => {
            assert_eq!(summary.time_spent(), "2:05");
            // 125s at 20/hour
            assert_eq!(summary.earnings_display(), "0.69€");
        }
        other => panic!("expected finished session, got {:?}", other),
    }

    // Enter does nothing: the restart control is hidden after a stop
    press(&mut app, KeyCode::Enter, t0 + Duration::from_secs(126));
    assert!(app.game.is_game_over());

    press(&mut app, KeyCode::Char('r'), t0 + Duration::from_secs(127));
    assert!(app.game.is_running());
    assert!(matches!(app.session, SessionState::Active(_)));
}

#[test]
fn test_quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let t0 = Instant::now();
        let mut app = new_app(t0);
        press(&mut app, code, t0);
        assert!(app.should_quit);
    }
}

#[test]
fn test_scene_reflects_crash() {
    let t0 = Instant::now();
    let mut app = new_app(t0);
    toilet_in_front(&mut app);
    app.tick(t0 + Duration::from_millis(20));

    let mut surface = CellSurface::new(800.0, 600.0, 80, 30);
    paint_scene(&mut surface, &app.game);

    assert!(surface.row_text(15).contains("Game Over!"));
}

#[test]
fn test_scene_painting_leaves_game_untouched() {
    let t0 = Instant::now();
    let mut app = new_app(t0);
    app.tick(t0 + Duration::from_millis(300));
    let before = app.game.clone();

    let mut surface = CellSurface::new(800.0, 600.0, 40, 15);
    paint_scene(&mut surface, &app.game);

    assert_eq!(app.game.obstacles, before.obstacles);
    assert_eq!(app.game.player, before.player);
    assert_eq!(app.game.phase, before.phase);
}
