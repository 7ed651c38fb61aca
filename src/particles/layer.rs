use raylib::prelude::*;
use tracing::trace;

use crate::engine::Effect;
use crate::particles::particle::FloatingParticle;

/// Owns every live click particle until its animation completes.
#[derive(Debug, Default)]
pub struct ParticleLayer {
    particles: Vec<FloatingParticle>,
}

impl ParticleLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, particle: FloatingParticle) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FloatingParticle> {
        self.particles.iter()
    }
}

impl Effect for ParticleLayer {
    fn update(&mut self, dt: f32) {
        let before = self.particles.len();
        for particle in self.particles.iter_mut() {
            particle.update(dt);
        }
        // Finished particles are dropped here and never reused
        self.particles.retain(|p| !p.is_finished());
        if self.particles.len() != before {
            trace!(removed = before - self.particles.len(), live = self.particles.len(), "particles finished");
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, _area: Rectangle) {
        for particle in self.particles.iter() {
            particle.draw(d);
        }
    }
}
