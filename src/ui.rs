//! Screen anchors, buttons and text helpers shared by the components.

use raylib::prelude::*;

use crate::constants::*;
use crate::ease::{Easing, Keyframe, Track};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    PrevSlide,
    NextSlide,
    PrevMessage,
    NextMessage,
    Reveal,
    Music,
    CloseModal,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::PrevSlide,
        Control::NextSlide,
        Control::PrevMessage,
        Control::NextMessage,
        Control::Reveal,
        Control::Music,
        Control::CloseModal,
    ];

    pub fn label(self, music_playing: bool) -> &'static str {
        match self {
            Control::PrevSlide | Control::PrevMessage => "<",
            Control::NextSlide | Control::NextMessage => ">",
            Control::Reveal => "Open your surprise",
            Control::Music if music_playing => "Pause music",
            Control::Music => "Play music",
            Control::CloseModal => "x",
        }
    }
}

/// Where everything sits for a given window size.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub hero: Rectangle,
    pub slides: Rectangle,
    pub dots: Rectangle,
    pub message: Rectangle,
    pub modal: Rectangle,
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        let margin = 40.0;
        let top = 110.0;
        let left_width = width * 0.55 - margin * 1.5;
        let right_x = width * 0.55 + margin * 0.5;
        let right_width = width - right_x - margin;
        let slides_height = (height - top - 130.0).max(80.0);

        Self {
            width,
            height,
            hero: Rectangle::new(0.0, 24.0, width, 64.0),
            slides: Rectangle::new(margin, top, left_width, slides_height),
            dots: Rectangle::new(margin, top + slides_height + 8.0, left_width, 24.0),
            message: Rectangle::new(right_x, top, right_width, (slides_height * 0.62).max(80.0)),
            modal: Rectangle::new(width * 0.2, height * 0.15, width * 0.6, height * 0.7),
        }
    }

    pub fn viewport(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.width, self.height)
    }

    pub fn control(&self, control: Control) -> Rectangle {
        let button_y = self.dots.y + self.dots.height + 12.0;
        let message_bottom = self.message.y + self.message.height;
        match control {
            Control::PrevSlide => Rectangle::new(self.slides.x, button_y, 56.0, 44.0),
            Control::NextSlide => Rectangle::new(self.slides.x + self.slides.width - 56.0, button_y, 56.0, 44.0),
            Control::PrevMessage => Rectangle::new(self.message.x, message_bottom + 16.0, 56.0, 44.0),
            Control::NextMessage => {
                Rectangle::new(self.message.x + self.message.width - 56.0, message_bottom + 16.0, 56.0, 44.0)
            }
            Control::Reveal => Rectangle::new(self.message.x, message_bottom + 84.0, self.message.width, 56.0),
            Control::Music => Rectangle::new(self.width - 170.0, 20.0, 150.0, 40.0),
            Control::CloseModal => {
                Rectangle::new(self.modal.x + self.modal.width - 52.0, self.modal.y + 12.0, 40.0, 40.0)
            }
        }
    }
}

/// Click feedback: scale 1 -> 1.06 -> 1 over `PULSE_DURATION`.
#[derive(Debug, Clone)]
pub struct Pulse {
    track: Track,
    elapsed: Option<f32>,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            track: Track::new(
                vec![
                    Keyframe::new(0.0, 0.0, 1.0, 1.0),
                    Keyframe::new(0.0, 0.0, 1.06, 1.0),
                    Keyframe::new(0.0, 0.0, 1.0, 1.0),
                ],
                Easing::EASE_OUT,
            ),
            elapsed: None,
        }
    }
}

impl Pulse {
    pub fn trigger(&mut self) {
        self.elapsed = Some(0.0);
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed = self.elapsed.map(|t| t + dt).filter(|t| *t < PULSE_DURATION);
    }

    pub fn is_active(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn scale(&self) -> f32 {
        self.elapsed.map_or(1.0, |t| self.track.sample(t / PULSE_DURATION).scale)
    }
}

pub fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, pulse: &Pulse, primary: bool) {
    let scale = pulse.scale();
    let scaled = Rectangle::new(
        rect.x - rect.width * (scale - 1.0) * 0.5,
        rect.y - rect.height * (scale - 1.0) * 0.5,
        rect.width * scale,
        rect.height * scale,
    );
    let (fill, ink) = if primary { (ACCENT, Color::WHITE) } else { (CARD, INK) };
    d.draw_rectangle_rounded(scaled, 0.5, 8, fill);
    let size = 20;
    d.draw_text(
        label,
        (scaled.x + scaled.width * 0.5) as i32 - measure_text(label, size) / 2,
        (scaled.y + scaled.height * 0.5) as i32 - size / 2,
        size,
        ink,
    );
}

/// Greedy word wrap; explicit newlines always break.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split(' ') {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if measure(&candidate) > max_width {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            } else {
                line = candidate;
            }
        }
        lines.push(line);
    }
    lines
}

/// Draws `text` wrapped inside `area` and returns the pen position after the last glyph.
pub fn draw_wrapped(d: &mut RaylibDrawHandle, text: &str, area: Rectangle, size: i32, color: Color) -> Vector2 {
    let line_height = size as f32 * 1.4;
    let lines = wrap_text(text, area.width as i32, |s| measure_text(s, size));
    let mut pen = Vector2::new(area.x, area.y);
    for (i, line) in lines.iter().enumerate() {
        let y = area.y + i as f32 * line_height;
        d.draw_text(line, area.x as i32, y as i32, size, color);
        pen = Vector2::new(area.x + measure_text(line, size) as f32, y);
    }
    pen
}

/// The built-in raylib font only covers ASCII.
pub fn printable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2014}' | '\u{2013}' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            '\u{2665}' | '\u{2764}' => out.push_str("<3"),
            c => out.push(c),
        }
    }
    out
}
