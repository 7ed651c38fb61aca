//! Photo carousel: one active slide, auto-advance with debounce-by-restart,
//! pause while the pointer hovers the slides.

pub mod slide;
pub mod state;

use std::path::PathBuf;

use raylib::prelude::*;
use tracing::debug;

use crate::constants::*;
use crate::engine::{Effect, wrap_index};
use crate::timer::Interval;

pub use self::slide::Slide;
pub use self::state::AutoAdvance;

const PLACEHOLDER: &str = "Add photos in assets/photos";
const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 22.0;

pub struct Carousel {
    slides: Vec<Slide>,
    current: usize,
    previous: Option<usize>,
    fade_timer: f32,
    auto: Interval,
    state: AutoAdvance,
}

impl Carousel {
    pub fn new(images: Vec<PathBuf>) -> Self {
        let slides: Vec<Slide> = images.into_iter().enumerate().map(|(i, path)| Slide::new(i, path)).collect();
        let mut auto = Interval::new(SLIDE_INTERVAL);
        let state = if slides.is_empty() {
            AutoAdvance::Disabled
        } else {
            auto.start();
            AutoAdvance::Running
        };
        Self {
            slides,
            current: 0,
            previous: None,
            fade_timer: SLIDE_FADE_DURATION,
            auto,
            state,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn state(&self) -> AutoAdvance {
        self.state
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(self.current)
    }

    /// Active flag of each dot, in slide order.
    pub fn indicators(&self) -> Vec<bool> {
        self.slides.iter().map(|s| Some(s.index) == self.active_index()).collect()
    }

    /// Requests every image once, before any navigation.
    pub fn preload(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for slide in self.slides.iter_mut() {
            slide.preload(rl, thread);
        }
        let loaded = self.slides.iter().filter(|s| s.is_loaded()).count();
        debug!(loaded, total = self.slides.len(), "carousel preload finished");
    }

    pub fn go_to(&mut self, i: i64) {
        if self.slides.is_empty() {
            return;
        }
        let target = wrap_index(i, self.slides.len());
        if target != self.current {
            self.previous = Some(self.current);
            self.fade_timer = 0.0;
        }
        self.current = target;
        debug!(slide = target, "carousel go_to");

        // Debounce-by-restart: a manual move pushes the next auto-advance a full period away
        if self.state == AutoAdvance::Running {
            self.auto.start();
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.current as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as i64 - 1);
    }

    /// Pointer entered the slides.
    pub fn suspend(&mut self) {
        if self.state == AutoAdvance::Running {
            self.auto.stop();
            self.state = AutoAdvance::Suspended;
        }
    }

    /// Pointer left the slides.
    pub fn resume(&mut self) {
        if self.state == AutoAdvance::Suspended {
            self.auto.start();
            self.state = AutoAdvance::Running;
        }
    }

    /// Dot hit boxes centred in `row`, one per slide.
    pub fn dot_rects(&self, row: Rectangle) -> Vec<Rectangle> {
        let count = self.slides.len() as f32;
        let start_x = row.x + row.width * 0.5 - (count - 1.0) * DOT_SPACING * 0.5;
        let center_y = row.y + row.height * 0.5;
        (0..self.slides.len())
            .map(|i| {
                let cx = start_x + i as f32 * DOT_SPACING;
                Rectangle::new(cx - DOT_SPACING * 0.5, center_y - DOT_SPACING * 0.5, DOT_SPACING, DOT_SPACING)
            })
            .collect()
    }

    pub fn draw_indicators(&self, d: &mut RaylibDrawHandle, row: Rectangle) {
        for (rect, active) in self.dot_rects(row).into_iter().zip(self.indicators()) {
            let center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
            if active {
                d.draw_circle_v(center, DOT_RADIUS + 1.0, ACCENT);
            } else {
                d.draw_circle_v(center, DOT_RADIUS, Color { a: 90, ..MUTED_INK });
            }
        }
    }
}

impl Effect for Carousel {
    fn update(&mut self, dt: f32) {
        self.fade_timer = (self.fade_timer + dt).min(SLIDE_FADE_DURATION);
        if self.state == AutoAdvance::Running && self.auto.tick(dt) > 0 {
            self.next();
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        d.draw_rectangle_rounded(area, 0.04, 8, CARD);

        if self.slides.is_empty() {
            d.draw_text(
                PLACEHOLDER,
                (area.x + area.width * 0.5) as i32 - measure_text(PLACEHOLDER, 22) / 2,
                (area.y + area.height * 0.5) as i32 - 11,
                22,
                MUTED_INK,
            );
            return;
        }

        let t = self.fade_timer / SLIDE_FADE_DURATION;
        if let Some(previous) = self.previous.filter(|_| t < 1.0) {
            self.slides[previous].draw(d, area, 1.0 - t);
        }
        self.slides[self.current].draw(d, area, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn photos(n: usize) -> Vec<PathBuf> {
        (1..=n).map(|i| PathBuf::from(format!("assets/photos/{i}.jpg"))).collect()
    }

    fn assert_single_active(carousel: &Carousel) {
        let dots = carousel.indicators();
        assert_eq!(dots.iter().filter(|a| **a).count(), 1);
        assert!(dots[carousel.active_index().unwrap()]);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(vec![]);
        assert_eq!(carousel.state(), AutoAdvance::Disabled);
        assert_eq!(carousel.active_index(), None);
        assert!(carousel.indicators().is_empty());

        carousel.next();
        carousel.prev();
        carousel.go_to(3);
        carousel.suspend();
        carousel.resume();
        carousel.update(100.0);
        assert_eq!(carousel.active_index(), None);
        assert_eq!(carousel.state(), AutoAdvance::Disabled);
    }

    #[test]
    fn starts_on_first_slide_and_wraps_backwards() {
        let mut carousel = Carousel::new(photos(4));
        assert_eq!(carousel.active_index(), Some(0));
        carousel.prev();
        assert_eq!(carousel.active_index(), Some(3));
        assert_single_active(&carousel);
    }

    #[test]
    fn auto_advances_every_interval() {
        let mut carousel = Carousel::new(photos(3));
        carousel.update(SLIDE_INTERVAL - 0.5);
        assert_eq!(carousel.active_index(), Some(0));
        carousel.update(0.5);
        assert_eq!(carousel.active_index(), Some(1));
        carousel.update(SLIDE_INTERVAL);
        assert_eq!(carousel.active_index(), Some(2));
    }

    #[test]
    fn manual_navigation_restarts_the_timer() {
        let mut carousel = Carousel::new(photos(3));
        carousel.update(SLIDE_INTERVAL - 0.5);
        carousel.next();
        assert_eq!(carousel.active_index(), Some(1));
        // The old slot would have fired here
        carousel.update(1.0);
        assert_eq!(carousel.active_index(), Some(1));
        carousel.update(SLIDE_INTERVAL - 1.0);
        assert_eq!(carousel.active_index(), Some(2));
    }

    #[test]
    fn hover_suspends_without_losing_position() {
        let mut carousel = Carousel::new(photos(3));
        carousel.go_to(2);
        carousel.suspend();
        assert_eq!(carousel.state(), AutoAdvance::Suspended);
        carousel.update(SLIDE_INTERVAL * 5.0);
        assert_eq!(carousel.active_index(), Some(2));

        carousel.resume();
        assert_eq!(carousel.state(), AutoAdvance::Running);
        carousel.update(SLIDE_INTERVAL);
        assert_eq!(carousel.active_index(), Some(0));
    }

    #[test]
    fn navigation_while_suspended_stays_suspended() {
        let mut carousel = Carousel::new(photos(3));
        carousel.suspend();
        carousel.next();
        carousel.update(SLIDE_INTERVAL * 2.0);
        assert_eq!(carousel.active_index(), Some(1));
        assert_eq!(carousel.state(), AutoAdvance::Suspended);
    }

    #[test]
    fn dot_rects_match_slide_count() {
        let carousel = Carousel::new(photos(5));
        let rects = carousel.dot_rects(Rectangle::new(0.0, 0.0, 400.0, 30.0));
        assert_eq!(rects.len(), 5);
        let middle = rects[2];
        assert!((middle.x + middle.width * 0.5 - 200.0).abs() < 1.0e-3);
    }

    proptest! {
        #[test]
        fn go_to_normalises_any_index(n in 1usize..12, i in -1000i64..1000) {
            let mut carousel = Carousel::new(photos(n));
            carousel.go_to(i);
            let expected = ((i % n as i64) + n as i64) % n as i64;
            prop_assert_eq!(carousel.active_index(), Some(expected as usize));
            prop_assert_eq!(carousel.indicators().iter().filter(|a| **a).count(), 1);
        }

        #[test]
        fn n_steps_forward_is_a_full_cycle(n in 1usize..12) {
            let mut carousel = Carousel::new(photos(n));
            for _ in 0..n {
                carousel.next();
            }
            prop_assert_eq!(carousel.active_index(), Some(0));
        }
    }
}
