//! Character-by-character message reveal.
//!
//! Each `show` spawns a fresh [`TypingTask`] and cancels the previous one through
//! its [`CancellationToken`]. A task checks its token before every character it
//! writes, so a superseded reveal can never leak characters into the new one.

use raylib::prelude::*;
use tracing::{debug, trace};

use crate::constants::*;
use crate::engine::{Effect, wrap_index};
use crate::error::{CelebrationError, CelebrationResult};
use crate::timer::{CancellationToken, Interval};
use crate::ui::{draw_wrapped, printable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Typing,
    Completed,
    Cancelled,
}

/// One in-flight reveal. Yields at every cadence boundary.
#[derive(Debug)]
pub struct TypingTask {
    text: String,
    revealed: usize, // bytes of `text` already written
    cadence: Interval,
    token: CancellationToken,
    state: TaskState,
}

impl TypingTask {
    pub fn new(text: impl Into<String>, token: CancellationToken) -> Self {
        let mut cadence = Interval::new(TYPE_CADENCE);
        cadence.start();
        Self { text: text.into(), revealed: 0, cadence, token, state: TaskState::Typing }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Runs one yield point: either writes the next character into `display`,
    /// notices the text is complete, or notices it was cancelled.
    pub fn step(&mut self, display: &mut String) -> TaskState {
        if self.state != TaskState::Typing {
            return self.state;
        }
        if self.token.is_cancelled() {
            self.state = TaskState::Cancelled;
            return self.state;
        }
        match self.text[self.revealed..].chars().next() {
            Some(c) => {
                display.push(c);
                self.revealed += c.len_utf8();
            }
            None => self.state = TaskState::Completed,
        }
        self.state
    }

    /// Advances the cadence by `dt` and runs every yield point that came due.
    pub fn poll(&mut self, dt: f32, display: &mut String) -> TaskState {
        for _ in 0..self.cadence.tick(dt) {
            if self.step(display) != TaskState::Typing {
                break;
            }
        }
        self.state
    }
}

pub struct TypedMessageAnimator {
    messages: Vec<String>,
    index: usize,
    display: String,
    task: Option<TypingTask>,
    token: CancellationToken,
}

impl TypedMessageAnimator {
    pub fn new(messages: Vec<String>) -> CelebrationResult<Self> {
        if messages.is_empty() {
            return Err(CelebrationError::config("the typewriter needs at least one message"));
        }
        let mut animator = Self {
            messages,
            index: 0,
            display: String::new(),
            task: None,
            token: CancellationToken::new(),
        };
        animator.show(0);
        Ok(animator)
    }

    pub fn show(&mut self, n: i64) {
        self.token.cancel();
        self.index = wrap_index(n, self.messages.len());
        self.display.clear();
        self.token = CancellationToken::new();
        self.task = Some(TypingTask::new(self.messages[self.index].clone(), self.token.clone()));
        debug!(message = self.index, "typing");
    }

    pub fn next(&mut self) {
        self.show(self.index as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.show(self.index as i64 - 1);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.display
    }

    pub fn current_message(&self) -> &str {
        &self.messages[self.index]
    }

    pub fn is_typing(&self) -> bool {
        self.task.is_some()
    }
}

impl Effect for TypedMessageAnimator {
    fn update(&mut self, dt: f32) {
        if let Some(task) = self.task.as_mut() {
            let state = task.poll(dt, &mut self.display);
            if state != TaskState::Typing {
                trace!(message = self.index, ?state, "typing finished");
                self.task = None;
            }
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        d.draw_rectangle_rounded(area, 0.08, 8, CARD);
        let inner = Rectangle::new(area.x + 28.0, area.y + 28.0, area.width - 56.0, area.height - 56.0);
        let bottom = draw_wrapped(d, &printable(&self.display), inner, 26, INK);

        // Caret while typing
        if self.is_typing() {
            d.draw_rectangle(bottom.x as i32 + 2, bottom.y as i32, 3, 26, ACCENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(messages: &[&str]) -> TypedMessageAnimator {
        TypedMessageAnimator::new(messages.iter().map(|m| m.to_string()).collect()).unwrap()
    }

    /// Enough frame time for `chars` reveals plus the completion check.
    fn settle(animator: &mut TypedMessageAnimator, chars: usize) {
        for _ in 0..=chars + 1 {
            animator.update(TYPE_CADENCE * 1.5);
        }
    }

    #[test]
    fn empty_message_list_is_rejected() {
        assert!(matches!(TypedMessageAnimator::new(vec![]), Err(CelebrationError::Config(_))));
    }

    #[test]
    fn init_shows_the_first_message() {
        let mut a = animator(&["A", "BC"]);
        assert_eq!(a.index(), 0);
        assert!(a.is_typing());
        assert_eq!(a.text(), "");
        settle(&mut a, 1);
        assert_eq!(a.text(), "A");
        assert!(!a.is_typing());
        a.update(10.0);
        assert_eq!(a.text(), "A");
    }

    #[test]
    fn reveals_one_character_per_cadence() {
        let mut a = animator(&["hello"]);
        a.update(TYPE_CADENCE * 0.5);
        assert_eq!(a.text(), "");
        a.update(TYPE_CADENCE);
        assert_eq!(a.text(), "h");
        a.update(TYPE_CADENCE);
        assert_eq!(a.text(), "he");
        a.update(TYPE_CADENCE * 3.0);
        assert_eq!(a.text(), "hello");
    }

    #[test]
    fn superseding_show_wins() {
        let mut a = animator(&["A", "BC"]);
        a.show(1);
        settle(&mut a, 2);
        assert_eq!(a.text(), "BC");
        assert!(!a.is_typing());
    }

    #[test]
    fn mid_reveal_switch_never_mixes_messages() {
        let mut a = animator(&["aaaaaaaa", "bbbb"]);
        a.update(TYPE_CADENCE * 3.5);
        assert_eq!(a.text(), "aaa");
        a.next();
        assert_eq!(a.text(), "");
        for _ in 0..20 {
            a.update(TYPE_CADENCE);
            assert!(a.text().chars().all(|c| c == 'b'), "stale write in {:?}", a.text());
        }
        assert_eq!(a.text(), "bbbb");
    }

    #[test]
    fn navigation_wraps() {
        let mut a = animator(&["one", "two", "three"]);
        a.prev();
        assert_eq!(a.index(), 2);
        a.next();
        assert_eq!(a.index(), 0);
        a.show(-4);
        assert_eq!(a.index(), 2);
        assert_eq!(a.current_message(), "three");
    }

    #[test]
    fn cancelled_task_never_writes_again() {
        let token = CancellationToken::new();
        let mut task = TypingTask::new("xyz", token.clone());
        let mut display = String::new();
        assert_eq!(task.step(&mut display), TaskState::Typing);
        assert_eq!(display, "x");

        token.cancel();
        assert_eq!(task.step(&mut display), TaskState::Cancelled);
        assert_eq!(task.poll(1.0, &mut display), TaskState::Cancelled);
        assert_eq!(display, "x");
    }

    #[test]
    fn multibyte_text_is_revealed_per_character() {
        let mut task = TypingTask::new("h\u{e9}\u{2665}", CancellationToken::new());
        let mut display = String::new();
        task.step(&mut display);
        task.step(&mut display);
        assert_eq!(display, "h\u{e9}");
        task.step(&mut display);
        assert_eq!(task.step(&mut display), TaskState::Completed);
        assert_eq!(display, "h\u{e9}\u{2665}");
    }
}
