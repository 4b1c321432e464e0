//! Drawing surface in world units, rasterised onto terminal cells.
//!
//! The scene painter only talks to [`Surface`]. [`CellSurface`] maps world
//! coordinates onto a grid of cells with per-cell colours (the same cell
//! buffer approach as the other real-time scenes) and stamps the grid into a
//! ratatui frame row by row.

use crate::runner::Rect as WorldRect;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Drawing primitives used by the scene painter. Coordinates are world
/// units with the origin at the top-left corner.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn fill_rect(&mut self, rect: WorldRect, color: Color);
    /// Filled disc, the only arc the scene needs.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color);
    /// Fill `rect` blending from `top` to `bottom`.
    fn vertical_gradient(&mut self, rect: WorldRect, top: Color, bottom: Color);
    fn stroke_hline(&mut self, y: f64, x0: f64, x1: f64, color: Color);
    /// Text centred horizontally on `cx`, on the row containing `cy`.
    fn text(&mut self, cx: f64, cy: f64, text: &str, color: Color);
    /// Darken everything drawn so far by `amount` (0 = unchanged, 1 = black).
    fn dim(&mut self, amount: f64);
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// World-unit surface backed by a `cols` x `rows` cell grid.
#[derive(Debug, Clone)]
pub struct CellSurface {
    world_width: f64,
    world_height: f64,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl CellSurface {
    pub fn new(world_width: f64, world_height: f64, cols: u16, rows: u16) -> Self {
        Self {
            world_width,
            world_height,
            cols,
            rows,
            cells: vec![Cell::default(); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    /// Characters of one row, for assertions and debugging.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.cell(col, row).map(|c| c.ch))
            .collect()
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> &mut Cell {
        &mut self.cells[row * self.cols as usize + col]
    }

    fn x_scale(&self) -> f64 {
        self.cols as f64 / self.world_width
    }

    fn y_scale(&self) -> f64 {
        self.rows as f64 / self.world_height
    }

    /// Cell columns touched by the world span `[x0, x1)`.
    fn col_span(&self, x0: f64, x1: f64) -> (usize, usize) {
        span(x0 * self.x_scale(), x1 * self.x_scale(), self.cols)
    }

    fn row_span(&self, y0: f64, y1: f64) -> (usize, usize) {
        span(y0 * self.y_scale(), y1 * self.y_scale(), self.rows)
    }

    fn row_of(&self, y: f64) -> Option<usize> {
        let row = (y * self.y_scale()).floor();
        (row >= 0.0 && row < self.rows as f64).then_some(row as usize)
    }

    /// Stamp the grid into `area`, clipped to whichever is smaller.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(self.cols);
        let height = area.height.min(self.rows);

        for row in 0..height {
            let mut spans: Vec<Span> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for col in 0..width {
                let Some(&cell) = self.cell(col, row) else {
                    continue;
                };
                if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }

            let row_area = Rect::new(area.x, area.y + row, width, 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

/// Clamp a fractional cell range to whole cells, keeping at least one cell
/// for any span that lands on the grid.
fn span(start: f64, end: f64, limit: u16) -> (usize, usize) {
    let limit = limit as f64;
    if end <= 0.0 || start >= limit || end <= start {
        return (0, 0);
    }
    let first = start.max(0.0).floor();
    let last = end.min(limit).ceil().max(first + 1.0).min(limit);
    (first as usize, last as usize)
}

/// Linear blend between two RGB colours. Non-RGB colours snap to `a`.
pub fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => a,
    }
}

fn darken(color: Color, amount: f64) -> Color {
    match color {
        Color::Rgb(..) => lerp_color(color, Color::Rgb(0, 0, 0), amount),
        other => other,
    }
}

impl Surface for CellSurface {
    fn width(&self) -> f64 {
        self.world_width
    }

    fn height(&self) -> f64 {
        self.world_height
    }

    fn fill_rect(&mut self, rect: WorldRect, color: Color) {
        let (c0, c1) = self.col_span(rect.x, rect.right());
        let (r0, r1) = self.row_span(rect.y, rect.bottom());
        for row in r0..r1 {
            for col in c0..c1 {
                *self.cell_mut(col, row) = Cell {
                    ch: ' ',
                    fg: color,
                    bg: color,
                };
            }
        }
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let (c0, c1) = self.col_span(cx - radius, cx + radius);
        let (r0, r1) = self.row_span(cy - radius, cy + radius);
        let (xs, ys) = (self.x_scale(), self.y_scale());
        for row in r0..r1 {
            let y = (row as f64 + 0.5) / ys;
            for col in c0..c1 {
                let x = (col as f64 + 0.5) / xs;
                let inside = (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius;
                if inside {
                    *self.cell_mut(col, row) = Cell {
                        ch: ' ',
                        fg: color,
                        bg: color,
                    };
                }
            }
        }
    }

    fn vertical_gradient(&mut self, rect: WorldRect, top: Color, bottom: Color) {
        let (c0, c1) = self.col_span(rect.x, rect.right());
        let (r0, r1) = self.row_span(rect.y, rect.bottom());
        let steps = (r1 - r0).saturating_sub(1).max(1) as f64;
        for row in r0..r1 {
            let color = lerp_color(top, bottom, (row - r0) as f64 / steps);
            for col in c0..c1 {
                *self.cell_mut(col, row) = Cell {
                    ch: ' ',
                    fg: color,
                    bg: color,
                };
            }
        }
    }

    fn stroke_hline(&mut self, y: f64, x0: f64, x1: f64, color: Color) {
        let Some(row) = self.row_of(y) else {
            return;
        };
        let (c0, c1) = self.col_span(x0, x1);
        for col in c0..c1 {
            let cell = self.cell_mut(col, row);
            cell.ch = '▔';
            cell.fg = color;
        }
    }

    fn text(&mut self, cx: f64, cy: f64, text: &str, color: Color) {
        let Some(row) = self.row_of(cy) else {
            return;
        };
        let len = text.chars().count() as f64;
        let start = (cx * self.x_scale() - len / 2.0).round();
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as f64;
            if col < 0.0 || col >= self.cols as f64 {
                continue;
            }
            let cell = self.cell_mut(col as usize, row);
            cell.ch = ch;
            cell.fg = color;
        }
    }

    fn dim(&mut self, amount: f64) {
        for cell in &mut self.cells {
            cell.fg = darken(cell.fg, amount);
            cell.bg = darken(cell.bg, amount);
        }
    }
}
