//! CSS-style easing curves and keyframe tracks for the ephemeral effects.

use raylib::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    a1: f32,
    b1: f32,
    c1: f32,
    a2: f32,
    b2: f32,
    c2: f32,
}

const EPSILON: f32 = 1.0e-4;

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            a1: 3.0 * x1 - 3.0 * x2 + 1.0,
            b1: -6.0 * x1 + 3.0 * x2,
            c1: 3.0 * x1,
            a2: 3.0 * y1 - 3.0 * y2 + 1.0,
            b2: -6.0 * y1 + 3.0 * y2,
            c2: 3.0 * y1,
        }
    }

    fn x_t(&self, t: f32) -> f32 {
        ((self.a1 * t + self.b1) * t + self.c1) * t
    }

    fn y_t(&self, t: f32) -> f32 {
        ((self.a2 * t + self.b2) * t + self.c2) * t
    }

    fn dx_t(&self, t: f32) -> f32 {
        (3.0 * self.a1 * t + 2.0 * self.b1) * t + self.c1
    }

    pub fn apply(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        } else if x >= 1.0 {
            return 1.0;
        }

        // Newton first, bisection when the slope is too flat.
        let mut t = x;
        for _ in 0..8 {
            let d = self.x_t(t) - x;
            if d.abs() < EPSILON {
                return self.y_t(t);
            }
            let dx = self.dx_t(t);
            if dx.abs() < 1.0e-6 {
                break;
            }
            t -= d / dx;
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let xt = self.x_t(t);
            if (xt - x).abs() < EPSILON {
                break;
            }
            if x > xt {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        self.y_t(t)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    Linear,
    Curve(CubicBezier),
}

impl Easing {
    /// `ease-out`
    pub const EASE_OUT: Easing = Easing::Curve(CubicBezier::new(0.0, 0.0, 0.58, 1.0));
    /// `cubic-bezier(.2,.7,.2,1)`, a fast start that settles gently.
    pub const SWIFT_OUT: Easing = Easing::Curve(CubicBezier::new(0.2, 0.7, 0.2, 1.0));

    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Curve(curve) => curve.apply(t),
        }
    }
}

/// One pose of an animated element, relative to where it was spawned.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub offset: Vector2,
    pub scale: f32,
    pub opacity: f32,
}

impl Keyframe {
    pub fn new(dx: f32, dy: f32, scale: f32, opacity: f32) -> Self {
        Self { offset: Vector2::new(dx, dy), scale, opacity }
    }

    fn lerp(&self, other: &Keyframe, t: f32) -> Keyframe {
        if t <= 0.0 {
            return *self;
        } else if t >= 1.0 {
            return *other;
        }
        Keyframe {
            offset: self.offset.lerp(other.offset, t),
            scale: self.scale + (other.scale - self.scale) * t,
            opacity: self.opacity + (other.opacity - self.opacity) * t,
        }
    }
}

/// Evenly spaced keyframes; the easing applies to each segment on its own, as in CSS.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    frames: Vec<Keyframe>,
    easing: Easing,
}

impl Track {
    pub fn new(frames: Vec<Keyframe>, easing: Easing) -> Self {
        debug_assert!(frames.len() >= 2);
        Self { frames, easing }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn first(&self) -> Keyframe {
        self.frames[0]
    }

    pub fn last(&self) -> Keyframe {
        self.frames[self.frames.len() - 1]
    }

    pub fn sample(&self, progress: f32) -> Keyframe {
        let progress = progress.clamp(0.0, 1.0);
        let segments = self.frames.len() - 1;
        let scaled = progress * segments as f32;
        let segment = (scaled.floor() as usize).min(segments - 1);
        let local = self.easing.apply(scaled - segment as f32);
        self.frames[segment].lerp(&self.frames[segment + 1], local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_their_endpoints() {
        for easing in [Easing::Linear, Easing::EASE_OUT, Easing::SWIFT_OUT] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn ease_out_leads_linear_and_is_monotonic() {
        let mut last = 0.0;
        for step in 1..20 {
            let t = step as f32 / 20.0;
            let eased = Easing::EASE_OUT.apply(t);
            assert!(eased >= t - 1.0e-3, "ease-out should run ahead of linear at {t}");
            assert!(eased >= last);
            last = eased;
        }
    }

    #[test]
    fn linear_bezier_is_identity() {
        let curve = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for t in [0.1, 0.33, 0.5, 0.9] {
            assert!((curve.apply(t) - t).abs() < 1.0e-3);
        }
    }

    #[test]
    fn three_frame_track_passes_through_middle() {
        let track = Track::new(
            vec![
                Keyframe::new(0.0, 0.0, 1.0, 0.9),
                Keyframe::new(10.0, -50.0, 1.2, 0.8),
                Keyframe::new(20.0, -100.0, 0.9, 0.0),
            ],
            Easing::EASE_OUT,
        );
        assert_eq!(track.sample(0.0), track.first());
        assert_eq!(track.sample(0.5), Keyframe::new(10.0, -50.0, 1.2, 0.8));
        assert_eq!(track.sample(1.0), track.last());
        assert_eq!(track.sample(2.0), track.last());
    }
}
