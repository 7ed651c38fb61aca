//! Full-window confetti simulation.
//!
//! The engine is a two-state machine: `Idle` until a burst arrives, `Running`
//! while any particle is alive, and back to `Idle` on the tick that removes the
//! last one. The frame loop only calls [`ConfettiEngine::tick`] while running.

use std::f32::consts::TAU;

use rand::Rng;
use raylib::prelude::*;
use tracing::debug;

use crate::constants::*;
use crate::engine::Effect;

/// The drawable area in logical units plus its logical-to-pixel factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self { width, height, scale: if scale > 0.0 { scale } else { 1.0 } }
    }

    pub fn pixel_size(&self) -> (i32, i32) {
        ((self.width * self.scale).round() as i32, (self.height * self.scale).round() as i32)
    }

    /// Where the reveal drops its burst.
    pub fn reveal_point(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 3.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiParticle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Color,
    pub life: f32,
    pub rotation: f32, // degrees
    pub vr: f32,
}

impl ConfettiParticle {
    pub fn spawn<R: Rng>(x: f32, y: f32, rng: &mut R) -> Self {
        let angle: f32 = rng.random_range(0.0..TAU);
        let speed: f32 = rng.random_range(4.0..=10.0);
        Self {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            size: rng.random_range(3.0..=6.0),
            color: CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())],
            life: rng.random_range(60.0..=120.0),
            rotation: rng.random_range(0.0..360.0),
            vr: rng.random_range(-6.0..=6.0),
        }
    }

    fn integrate(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += CONFETTI_GRAVITY;
        self.rotation += self.vr;
        self.life -= 1.0;
    }

    pub fn alpha(&self) -> f32 {
        (self.life / CONFETTI_FADE_TICKS).clamp(0.0, 1.0)
    }

    fn is_alive(&self, floor: f32) -> bool {
        self.life > 0.0 && self.y < floor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
}

pub struct ConfettiEngine {
    particles: Vec<ConfettiParticle>,
    state: EngineState,
    surface: Surface,
}

impl ConfettiEngine {
    pub fn new(surface: Surface) -> Self {
        debug!(?surface, pixels = ?surface.pixel_size(), "confetti surface ready");
        Self { particles: Vec::new(), state: EngineState::Idle, surface }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[ConfettiParticle] {
        &self.particles
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Follows the window; the particle set is left alone.
    pub fn resize(&mut self, surface: Surface) {
        if surface != self.surface {
            debug!(?surface, pixels = ?surface.pixel_size(), "confetti surface resized");
            self.surface = surface;
        }
    }

    pub fn burst<R: Rng>(&mut self, x: f32, y: f32, count: usize, rng: &mut R) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(ConfettiParticle::spawn(x, y, rng));
        }
        if count > 0 && self.state == EngineState::Idle {
            self.state = EngineState::Running;
        }
        debug!(x, y, count, live = self.particles.len(), "confetti burst");
    }

    /// One simulation step. Does nothing while idle.
    pub fn tick(&mut self) -> EngineState {
        if self.state == EngineState::Idle {
            return self.state;
        }

        let floor = self.surface.height + CONFETTI_FLOOR_MARGIN;
        for p in self.particles.iter_mut() {
            p.integrate();
        }
        self.particles.retain(|p| p.is_alive(floor));

        if self.particles.is_empty() {
            self.state = EngineState::Idle;
            debug!("confetti settled");
        }
        self.state
    }
}

impl Effect for ConfettiEngine {
    /// Ticks are per frame, not per second.
    fn update(&mut self, _dt: f32) {
        if self.is_running() {
            self.tick();
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, _area: Rectangle) {
        for p in self.particles.iter() {
            let color = Color { a: (p.alpha() * 255.0) as u8, ..p.color };
            d.draw_rectangle_pro(
                Rectangle::new(p.x, p.y, p.size, p.size),
                Vector2::new(p.size / 2.0, p.size / 2.0),
                p.rotation,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine() -> ConfettiEngine {
        ConfettiEngine::new(Surface::new(1280.0, 800.0, 1.0))
    }

    #[test]
    fn starts_idle_and_ignores_ticks() {
        let mut engine = engine();
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.tick(), EngineState::Idle);
        assert!(engine.is_empty());
    }

    #[test]
    fn burst_adds_exactly_count_and_starts_running() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut engine = engine();
        engine.burst(640.0, 266.0, DEFAULT_BURST, &mut rng);
        assert_eq!(engine.len(), 160);
        assert!(engine.is_running());

        engine.burst(10.0, 10.0, 40, &mut rng);
        assert_eq!(engine.len(), 200);
    }

    #[test]
    fn spawned_particles_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut engine = engine();
        engine.burst(0.0, 0.0, 500, &mut rng);
        for p in engine.particles() {
            let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
            assert!((4.0 - 1.0e-3..=10.0 + 1.0e-3).contains(&speed));
            assert!((3.0..=6.0).contains(&p.size));
            assert!((60.0..=120.0).contains(&p.life));
            assert!((0.0..360.0).contains(&p.rotation));
            assert!((-6.0..=6.0).contains(&p.vr));
            assert!(CONFETTI_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn tick_integrates_with_gravity() {
        let mut engine = engine();
        engine.particles.push(ConfettiParticle {
            x: 100.0,
            y: 100.0,
            vx: 2.0,
            vy: -1.0,
            size: 4.0,
            color: CONFETTI_PALETTE[0],
            life: 100.0,
            rotation: 10.0,
            vr: 3.0,
        });
        engine.state = EngineState::Running;
        engine.tick();
        let p = engine.particles()[0];
        assert_eq!((p.x, p.y), (102.0, 99.0));
        assert!((p.vy - (-1.0 + CONFETTI_GRAVITY)).abs() < 1.0e-6);
        assert_eq!(p.rotation, 13.0);
        assert_eq!(p.life, 99.0);
    }

    #[test]
    fn alpha_fades_over_the_last_ticks() {
        let mut p = ConfettiParticle::spawn(0.0, 0.0, &mut StdRng::seed_from_u64(1));
        p.life = 120.0;
        assert_eq!(p.alpha(), 1.0);
        p.life = 40.0;
        assert_eq!(p.alpha(), 0.5);
        p.life = -2.0;
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn particles_below_the_floor_are_dropped() {
        let mut engine = engine();
        let mut rng = StdRng::seed_from_u64(2);
        engine.burst(0.0, 0.0, 1, &mut rng);
        engine.particles[0].y = engine.surface().height + CONFETTI_FLOOR_MARGIN + 50.0;
        engine.particles[0].vy = 1.0;
        assert_eq!(engine.tick(), EngineState::Idle);
        assert!(engine.is_empty());
    }

    #[test]
    fn count_never_grows_and_engine_idles_then_restarts() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut engine = engine();
        engine.burst(100.0, 100.0, 10, &mut rng);
        assert_eq!(engine.len(), 10);

        let mut last = engine.len();
        for _ in 0..200 {
            engine.tick();
            assert!(engine.len() <= last);
            last = engine.len();
            assert_eq!(engine.is_running(), !engine.is_empty());
        }
        assert_eq!(engine.len(), 0);
        assert_eq!(engine.state(), EngineState::Idle);

        engine.burst(100.0, 100.0, 10, &mut rng);
        assert!(engine.is_running());
        engine.tick();
        assert!(engine.len() > 0);
    }

    #[test]
    fn resize_keeps_particles() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut engine = engine();
        engine.burst(10.0, 10.0, 25, &mut rng);
        engine.resize(Surface::new(640.0, 400.0, 2.0));
        assert_eq!(engine.len(), 25);
        assert_eq!(engine.surface().pixel_size(), (1280, 800));
        assert!(engine.is_running());
    }
}
