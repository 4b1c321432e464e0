//! Obstacle generation: single toilets, touching pairs, and the occasional
//! third toilet once the player has some points.

use super::types::Obstacle;
use crate::core::config::GameConfig;
use rand::Rng;

/// Builds obstacles sitting on the ground line.
#[derive(Debug, Clone)]
pub struct ObstacleFactory {
    ground_y: f64,
    min_size: u32,
    max_size: u32,
    pair_overlap: f64,
    double_chance: f64,
    triple_chance: f64,
    triple_min_score: u32,
}

impl ObstacleFactory {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            ground_y: config.ground_y(),
            min_size: config.obstacle_min_size,
            max_size: config.obstacle_max_size,
            pair_overlap: config.pair_overlap,
            double_chance: config.double_chance,
            triple_chance: config.triple_chance,
            triple_min_score: config.triple_min_score,
        }
    }

    /// A square obstacle of random whole-unit size resting on the ground.
    pub fn create_obstacle<R: Rng>(&self, rng: &mut R, spawn_x: f64) -> Obstacle {
        let size = rng.gen_range(self.min_size..=self.max_size) as f64;
        Obstacle {
            x: spawn_x,
            y: self.ground_y - size,
            width: size,
            height: size,
        }
    }

    /// Obstacles to append to the active list, in spawn order.
    ///
    /// The third obstacle is offset by twice the width of the batch's first
    /// obstacle, whether the batch is a single or a pair.
    pub fn spawn_batch<R: Rng>(
        &self,
        rng: &mut R,
        surface_width: f64,
        current_score: u32,
    ) -> Vec<Obstacle> {
        let mut batch = Vec::with_capacity(3);

        let first = self.create_obstacle(rng, surface_width);
        batch.push(first);
        if rng.gen::<f64>() < self.double_chance {
            batch.push(Obstacle {
                x: surface_width + first.width - self.pair_overlap,
                ..first
            });
        }

        if current_score > self.triple_min_score && rng.gen::<f64>() < self.triple_chance {
            batch.push(self.create_obstacle(rng, surface_width + first.width * 2.0));
        }

        batch
    }
}

/// Whether a new batch is due: nothing on screen, or the newest obstacle has
/// scrolled more than `spawn_gap` in from the right edge.
pub fn should_spawn(obstacles: &[Obstacle], surface_width: f64, spawn_gap: f64) -> bool {
    match obstacles.last() {
        None => true,
        Some(last) => last.x < surface_width - spawn_gap,
    }
}
