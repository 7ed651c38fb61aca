use rand::Rng;
use raylib::prelude::*;

use crate::constants::CONFETTI_PALETTE;
use crate::ease::{Easing, Keyframe, Track};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Heart,
    Sparkle,
    Balloon,
}

impl ParticleKind {
    /// Longest animation a particle of this kind may run (seconds).
    pub fn max_duration(self) -> f32 {
        match self {
            ParticleKind::Heart => 1.8,
            ParticleKind::Sparkle => 0.9,
            ParticleKind::Balloon => 4.5,
        }
    }
}

/// A short-lived floating element spawned by a click.
#[derive(Debug, Clone)]
pub struct FloatingParticle {
    kind: ParticleKind,
    origin: Vector2,
    size: f32,
    color: Color,
    track: Track,
    duration: f32,
    elapsed: f32,
}

/// `hsl(h, s, l)` with `s` and `l` in 0..1.
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color { r: channel(r), g: channel(g), b: channel(b), a: 255 }
}

impl FloatingParticle {
    /// Drifts up and sideways through a midpoint, fading out.
    pub fn heart<R: Rng>(x: f32, y: f32, rng: &mut R) -> Self {
        let size: f32 = rng.random_range(14.0..30.0);
        let dx: f32 = rng.random_range(-40.0..40.0);
        let dy: f32 = -rng.random_range(80.0..200.0);
        Self {
            kind: ParticleKind::Heart,
            origin: Vector2::new(x, y),
            size,
            color: hsl(rng.random_range(330.0..370.0), 0.8, 0.6),
            track: Track::new(
                vec![
                    Keyframe::new(0.0, 0.0, 1.0, 0.9),
                    Keyframe::new(dx / 2.0, dy / 2.0, 1.2, 0.8),
                    Keyframe::new(dx, dy, 0.9, 0.0),
                ],
                Easing::EASE_OUT,
            ),
            duration: rng.random_range(1.2..ParticleKind::Heart.max_duration()),
            elapsed: 0.0,
        }
    }

    /// Pops outward and up, growing as it fades.
    pub fn sparkle<R: Rng>(x: f32, y: f32, rng: &mut R) -> Self {
        let size: f32 = rng.random_range(6.0..14.0);
        let dx: f32 = rng.random_range(-40.0..40.0);
        let dy: f32 = -rng.random_range(40.0..120.0);
        let tint = if rng.random_bool(0.5) {
            Color { r: 0xff, g: 0xd6, b: 0xea, a: 255 }
        } else {
            Color { r: 0xe2, g: 0xdc, b: 0xff, a: 255 }
        };
        Self {
            kind: ParticleKind::Sparkle,
            origin: Vector2::new(x, y),
            size,
            color: tint,
            track: Track::new(
                vec![Keyframe::new(0.0, 0.0, 0.6, 0.95), Keyframe::new(dx, dy, 1.4, 0.0)],
                Easing::SWIFT_OUT,
            ),
            duration: ParticleKind::Sparkle.max_duration(),
            elapsed: 0.0,
        }
    }

    /// Rises most of the way up the viewport over a few seconds.
    pub fn balloon<R: Rng>(x: f32, y: f32, viewport_height: f32, rng: &mut R) -> Self {
        let size: f32 = rng.random_range(24.0..36.0);
        let dx: f32 = rng.random_range(-30.0..30.0);
        let dy: f32 = -(viewport_height * 0.8 + rng.random_range(0.0..120.0));
        Self {
            kind: ParticleKind::Balloon,
            origin: Vector2::new(x, y),
            size,
            color: CONFETTI_PALETTE[rng.random_range(0..4)],
            track: Track::new(
                vec![Keyframe::new(0.0, 0.0, 1.0, 1.0), Keyframe::new(dx, dy, 1.0, 0.9)],
                Easing::SWIFT_OUT,
            ),
            duration: rng.random_range(3.0..ParticleKind::Balloon.max_duration()),
            elapsed: 0.0,
        }
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Current pose and absolute centre.
    pub fn pose(&self) -> (Vector2, Keyframe) {
        let frame = self.track.sample(self.elapsed / self.duration);
        (self.origin + frame.offset, frame)
    }

    /// Total displacement the animation will cover.
    pub fn travel(&self) -> Vector2 {
        self.track.last().offset
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let (center, frame) = self.pose();
        let alpha = (frame.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        let color = Color { a: alpha, ..self.color };
        let s = self.size * frame.scale;

        match self.kind {
            ParticleKind::Heart => {
                let r = s * 0.27;
                d.draw_circle_v(Vector2::new(center.x - r * 0.9, center.y - r * 0.3), r, color);
                d.draw_circle_v(Vector2::new(center.x + r * 0.9, center.y - r * 0.3), r, color);
                d.draw_triangle(
                    Vector2::new(center.x - r * 1.85, center.y - r * 0.05),
                    Vector2::new(center.x, center.y + s * 0.5),
                    Vector2::new(center.x + r * 1.85, center.y - r * 0.05),
                    color,
                );
            }
            ParticleKind::Sparkle => {
                d.draw_circle_gradient(
                    center.x as i32,
                    center.y as i32,
                    s * 0.5,
                    Color { a: alpha, ..Color::WHITE },
                    Color { a: 0, ..self.color },
                );
            }
            ParticleKind::Balloon => {
                let rx = s * 0.38;
                let ry = s * 0.48;
                d.draw_line_v(
                    Vector2::new(center.x, center.y + ry),
                    Vector2::new(center.x - rx * 0.3, center.y + ry + s * 0.9),
                    Color { a: alpha / 2, ..Color::DARKGRAY },
                );
                d.draw_ellipse(center.x as i32, center.y as i32, rx, ry, color);
                d.draw_circle_v(Vector2::new(center.x - rx * 0.35, center.y - ry * 0.4), rx * 0.2, Color { a: alpha / 3, ..Color::WHITE });
            }
        }
    }
}
