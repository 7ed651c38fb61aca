use std::cell::Cell;
use std::rc::Rc;

/// Fixed-period repeating timer fed by frame deltas.
///
/// Stands in for `setInterval`: `start` (re)arms it from zero, `stop` clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    period: f32,
    elapsed: f32,
    armed: bool,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        debug_assert!(period > 0.0);
        Self { period, elapsed: 0.0, armed: false }
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.armed = true;
    }

    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Returns how many periods elapsed during `dt`.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.armed {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

/// Shared flag a running task polls at each yield point.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}
