//! Potty Run scene: sky, clouds, grass, the player, the toilets, and the
//! game-over overlay, plus the status bar and info panel around them.

use super::layout::{create_game_layout, render_info_panel_frame, render_status_bar};
use super::surface::{CellSurface, Surface};
use crate::app::{App, SessionState};
use crate::runner::{Obstacle, Player, Rect as WorldRect, RoundEnd, RunnerGame};
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

const SKY_TOP: Color = Color::Rgb(0x87, 0xCE, 0xEB);
const SKY_BOTTOM: Color = Color::Rgb(0xE0, 0xF6, 0xFF);
const CLOUD: Color = Color::Rgb(0xF6, 0xFC, 0xFF);
const GRASS_TOP: Color = Color::Rgb(0x90, 0xEE, 0x90);
const GRASS_BOTTOM: Color = Color::Rgb(0x22, 0x8B, 0x22);
const GROUND_LINE: Color = Color::Rgb(0x22, 0x8B, 0x22);
const PLAYER_BODY: Color = Color::Rgb(0x7B, 0x3F, 0x00);
const PLAYER_TOP: Color = Color::Rgb(0xA0, 0x5F, 0x28);
const TOILET_BOWL: Color = Color::Rgb(0xF5, 0xF5, 0xF5);
const TOILET_TANK: Color = Color::Rgb(0xD7, 0xE1, 0xE6);
const GAME_OVER_TEXT: Color = Color::Rgb(0xFF, 0x00, 0x00);

/// Overlay darkening when the round is over.
const OVERLAY_DIM: f64 = 0.3;

/// Decorative clouds: (x, y, scale).
const CLOUDS: [(f64, f64, f64); 3] = [(80.0, 40.0, 1.0), (200.0, 60.0, 0.8), (350.0, 30.0, 1.2)];

/// Paint one frame of the game onto `surface`. Reads state only.
pub fn paint_scene<S: Surface>(surface: &mut S, game: &RunnerGame) {
    let (width, height) = (surface.width(), surface.height());
    let ground_y = game.config().ground_y();

    surface.vertical_gradient(WorldRect::new(0.0, 0.0, width, height), SKY_TOP, SKY_BOTTOM);
    for (x, y, scale) in CLOUDS {
        draw_cloud(surface, x, y, scale);
    }

    surface.vertical_gradient(
        WorldRect::new(0.0, ground_y, width, height - ground_y),
        GRASS_TOP,
        GRASS_BOTTOM,
    );
    surface.stroke_hline(ground_y, 0.0, width, GROUND_LINE);

    draw_player(surface, &game.player);
    for obstacle in &game.obstacles {
        draw_toilet(surface, obstacle);
    }

    if game.is_game_over() {
        surface.dim(OVERLAY_DIM);
        let message = match game.round_end() {
            Some(RoundEnd::Stopped) => "Break's over!",
            _ => "Game Over!",
        };
        surface.text(width / 2.0, height / 2.0, message, GAME_OVER_TEXT);
    }
}

fn draw_cloud<S: Surface>(surface: &mut S, x: f64, y: f64, scale: f64) {
    surface.fill_circle(x, y, 20.0 * scale, CLOUD);
    surface.fill_circle(x + 15.0 * scale, y - 10.0 * scale, 15.0 * scale, CLOUD);
    surface.fill_circle(x + 30.0 * scale, y, 20.0 * scale, CLOUD);
    surface.fill_circle(x + 15.0 * scale, y + 5.0 * scale, 15.0 * scale, CLOUD);
}

/// Three stacked tiers, widest at the bottom.
fn draw_player<S: Surface>(surface: &mut S, player: &Player) {
    let (x, y, w, h) = (player.x, player.y, player.width, player.height);
    surface.fill_rect(WorldRect::new(x, y + h * 0.6, w, h * 0.4), PLAYER_BODY);
    surface.fill_rect(
        WorldRect::new(x + w * 0.15, y + h * 0.3, w * 0.7, h * 0.3),
        PLAYER_BODY,
    );
    surface.fill_rect(
        WorldRect::new(x + w * 0.32, y, w * 0.36, h * 0.3),
        PLAYER_TOP,
    );
}

/// Tank at the back, bowl in front, narrow pedestal underneath.
fn draw_toilet<S: Surface>(surface: &mut S, obstacle: &Obstacle) {
    let (x, y, w, h) = (obstacle.x, obstacle.y, obstacle.width, obstacle.height);
    surface.fill_rect(
        WorldRect::new(x + w * 0.55, y, w * 0.45, h * 0.5),
        TOILET_TANK,
    );
    surface.fill_rect(
        WorldRect::new(x, y + h * 0.45, w, h * 0.35),
        TOILET_BOWL,
    );
    surface.fill_rect(
        WorldRect::new(x + w * 0.3, y + h * 0.8, w * 0.4, h * 0.2),
        TOILET_BOWL,
    );
}

/// Render the whole game screen.
pub fn render_runner_scene<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>, now: Instant) {
    let layout = create_game_layout(frame, area, " Potty Run ", Color::LightYellow);

    let config = app.game.config();
    let mut surface = CellSurface::new(
        config.surface_width,
        config.surface_height,
        layout.play_field.width,
        layout.play_field.height,
    );
    paint_scene(&mut surface, &app.game);
    surface.render(frame, layout.play_field);

    render_status(frame, layout.status_bar, app);
    render_info_panel(frame, layout.info_panel, app, now);
}

fn render_status<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>) {
    if matches!(app.session, SessionState::Finished(_)) {
        render_status_bar(
            frame,
            area,
            "Break's over, back to work!",
            Color::LightYellow,
            &[("[R]", "New break"), ("[Q]", "Quit")],
        );
        return;
    }

    if app.game.restart_visible {
        let status = format!("Splash! Final score {}", app.scores.final_score.unwrap_or(0));
        render_status_bar(
            frame,
            area,
            &status,
            Color::LightRed,
            &[("[Enter]", "Try again"), ("[S]", "Stop break"), ("[Q]", "Quit")],
        );
        return;
    }

    render_status_bar(
        frame,
        area,
        "Jump the toilets!",
        Color::LightYellow,
        &[("[Space/Up]", "Jump"), ("[S]", "Stop break"), ("[Q]", "Quit")],
    );
}

fn render_info_panel<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>, now: Instant) {
    let inner = render_info_panel_frame(frame, area);
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                app.scores.current.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best: ", label),
            Span::styled(app.scores.best.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{:.1}", app.game.current_speed()), value),
        ]),
        Line::from(""),
    ];

    match &app.session {
        SessionState::Active(session) => {
            lines.push(Line::from(vec![
                Span::styled("Break: ", label),
                Span::styled(session.clock_display(now), value),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Earned: ", label),
                Span::styled(format!("{:.2}€", session.earnings_so_far(now)), value),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Since: ", label),
                Span::styled(session.started_at_local.format("%H:%M").to_string(), value),
            ]));
        }
        SessionState::Finished(summary) => {
            lines.push(Line::from(Span::styled(
                "Break summary",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled("Time spent: ", label),
                Span::styled(summary.time_spent(), value),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Earned: ", label),
                Span::styled(summary.earnings_display(), value),
            ]));
        }
    }

    if let Some(final_score) = app.scores.final_score {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Final score: ", label),
            Span::styled(final_score.to_string(), value),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
