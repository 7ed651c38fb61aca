use rand::Rng;
use tracing::trace;

use crate::constants::*;
use crate::particles::layer::ParticleLayer;
use crate::particles::particle::FloatingParticle;

/// Turns a click into particles. Stateless apart from its odds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpawner {
    sparkle_chance: f64,
    balloon_chance: f64,
}

impl Default for ParticleSpawner {
    fn default() -> Self {
        Self::new(SPARKLE_CHANCE, BALLOON_CHANCE)
    }
}

impl ParticleSpawner {
    pub fn new(sparkle_chance: f64, balloon_chance: f64) -> Self {
        Self {
            sparkle_chance: sparkle_chance.clamp(0.0, 1.0),
            balloon_chance: balloon_chance.clamp(0.0, 1.0),
        }
    }

    /// Always a heart; sparkle and balloon are independent draws. Returns how many were spawned.
    pub fn on_interaction<R: Rng>(
        &self,
        layer: &mut ParticleLayer,
        x: f32,
        y: f32,
        viewport_height: f32,
        rng: &mut R,
    ) -> usize {
        let mut spawned = 1;
        layer.push(FloatingParticle::heart(x, y, rng));

        if rng.random_bool(self.sparkle_chance) {
            layer.push(FloatingParticle::sparkle(x, y, rng));
            spawned += 1;
        }
        if rng.random_bool(self.balloon_chance) {
            layer.push(FloatingParticle::balloon(x, y, viewport_height, rng));
            spawned += 1;
        }
        trace!(x, y, spawned, "click particles");
        spawned
    }
}
