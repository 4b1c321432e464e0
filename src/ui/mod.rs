pub mod layout;
pub mod runner_scene;
pub mod surface;

use crate::app::App;
use rand::Rng;
use ratatui::Frame;
use std::time::Instant;

/// Main UI drawing function.
pub fn draw_ui<R: Rng>(frame: &mut Frame, app: &App<R>, now: Instant) {
    let area = frame.size();
    runner_scene::render_runner_scene(frame, area, app, now);
}
