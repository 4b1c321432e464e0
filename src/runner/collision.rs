//! Shrunk-hitbox AABB collision.

use super::types::Rect;

/// Inset `rect` by `margin` on every side.
pub fn hitbox(rect: &Rect, margin: f64) -> Rect {
    Rect::new(
        rect.x + margin,
        rect.y + margin,
        rect.width - 2.0 * margin,
        rect.height - 2.0 * margin,
    )
}

/// True when the inset boxes of `player` and `obstacle` overlap.
///
/// Touching edges count as a hit; only a strict gap separates them.
pub fn collides(player: &Rect, obstacle: &Rect, margin: f64) -> bool {
    let p = hitbox(player, margin);
    let o = hitbox(obstacle, margin);

    let separated =
        p.right() < o.x || p.x > o.right() || p.bottom() < o.y || p.y > o.bottom();
    !separated
}
