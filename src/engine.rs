use raylib::prelude::*;

/// A self-contained visual effect driven by the frame loop.
pub trait Effect {
    /// Advance timers and animations by `dt` seconds.
    fn update(&mut self, dt: f32);

    /// Draw into `area`. Full-screen effects ignore it.
    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle);
}

/// Maps any integer onto `0..len` so navigation wraps in both directions.
pub fn wrap_index(i: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    i.rem_euclid(len as i64) as usize
}
