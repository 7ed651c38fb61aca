//! Click effects: every click leaves a heart, sometimes a sparkle or a balloon.

pub mod layer;
pub mod particle;
pub mod spawner;

pub use self::layer::ParticleLayer;
pub use self::particle::{FloatingParticle, ParticleKind};
pub use self::spawner::ParticleSpawner;
