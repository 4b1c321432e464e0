//! Jump kinematics and horizontal scroll.

use super::types::{Obstacle, Player};

/// Constants of the jump arc, in units per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpPhysics {
    /// Velocity applied on take-off (negative = upward).
    pub jump_velocity: f64,
    /// Velocity gained each airborne tick.
    pub gravity: f64,
    /// Player `y` when standing.
    pub resting_y: f64,
}

impl JumpPhysics {
    /// Start a jump. Returns false (and changes nothing) mid-air.
    pub fn trigger_jump(&self, player: &mut Player) -> bool {
        if player.is_jumping {
            return false;
        }
        player.is_jumping = true;
        player.jump_velocity = self.jump_velocity;
        true
    }

    /// Advance one tick of the jump. Returns true on the tick the player lands.
    pub fn step(&self, player: &mut Player) -> bool {
        if !player.is_jumping {
            return false;
        }

        player.y += player.jump_velocity;
        player.jump_velocity += self.gravity;

        if player.y >= self.resting_y {
            player.reset(self.resting_y);
            return true;
        }
        false
    }

    /// Height of the arc's peak above the ground.
    pub fn apex_height(&self) -> f64 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }
}

/// Move an obstacle left by one tick of scrolling.
pub fn scroll(obstacle: &mut Obstacle, speed: f64) {
    obstacle.x -= speed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    fn physics() -> JumpPhysics {
        JumpPhysics {
            jump_velocity: -13.5,
            gravity: 0.7,
            resting_y: 500.0,
        }
    }

    fn grounded() -> Player {
        Player::new(&GameConfig::default())
    }

    #[test]
    fn test_trigger_jump_sets_velocity() {
        let mut player = grounded();
        assert!(physics().trigger_jump(&mut player));
        assert!(player.is_jumping);
        assert_eq!(player.jump_velocity, -13.5);
        // Position changes only on the next step
        assert_eq!(player.y, 500.0);
    }

    #[test]
    fn test_no_double_jump() {
        let physics = physics();
        let mut player = grounded();
        physics.trigger_jump(&mut player);
        physics.step(&mut player);
        let snapshot = player.clone();

        assert!(!physics.trigger_jump(&mut player));
        assert_eq!(player, snapshot);
    }

    #[test]
    fn test_step_while_grounded_is_noop() {
        let mut player = grounded();
        assert!(!physics().step(&mut player));
        assert_eq!(player, grounded());
    }

    #[test]
    fn test_first_step_applies_velocity_then_gravity() {
        let physics = physics();
        let mut player = grounded();
        physics.trigger_jump(&mut player);
        physics.step(&mut player);
        assert_eq!(player.y, 486.5);
        assert!((player.jump_velocity - (-12.8)).abs() < 1e-9);
    }

    #[test]
    fn test_jump_arc_is_parabola_and_lands_exactly() {
        let physics = physics();
        let mut player = grounded();
        physics.trigger_jump(&mut player);

        let mut heights = vec![player.y];
        let mut ticks = 0;
        while player.is_jumping {
            physics.step(&mut player);
            heights.push(player.y);
            ticks += 1;
            assert!(ticks < 100, "jump never landed");
        }

        let apex = heights
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        for pair in heights[..=apex].windows(2) {
            assert!(pair[1] < pair[0], "ascent must strictly decrease y");
        }
        for pair in heights[apex..].windows(2) {
            assert!(pair[1] > pair[0], "descent must strictly increase y");
        }

        assert_eq!(player.y, 500.0);
        assert_eq!(player.jump_velocity, 0.0);
        assert!(!player.is_jumping);
        // Roughly 2 * 13.5 / 0.7 ticks of airtime
        assert!((38..=41).contains(&ticks), "airtime was {} ticks", ticks);
        // Peak roughly 130 units above the resting position
        let peak = 500.0 - heights[apex];
        assert!((120.0..=140.0).contains(&peak), "peak was {}", peak);
    }

    #[test]
    fn test_apex_height() {
        assert!((physics().apex_height() - 130.178_571).abs() < 1e-3);
    }

    #[test]
    fn test_scroll() {
        let mut obstacle = Obstacle {
            x: 800.0,
            y: 490.0,
            width: 50.0,
            height: 50.0,
        };
        scroll(&mut obstacle, 6.8);
        assert!((obstacle.x - 793.2).abs() < 1e-9);
        assert_eq!(obstacle.width, 50.0);
    }
}
