//! The surprise modal: note, optional video reference, and a confetti burst on open.

use std::path::PathBuf;

use rand::Rng;
use raylib::prelude::*;
use tracing::info;

use crate::confetti::ConfettiEngine;
use crate::constants::*;
use crate::ui::{draw_wrapped, printable};

const SIGNATURE: &str = "\n\n\u{2014} \u{2665}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalBody {
    pub video: Option<PathBuf>,
    pub note: String,
}

#[derive(Debug)]
pub struct Surprise {
    note: String,
    video: Option<PathBuf>,
    body: Option<ModalBody>,
    open: bool,
}

impl Surprise {
    pub fn new(note: impl Into<String>, video: Option<PathBuf>) -> Self {
        Self { note: note.into(), video, body: None, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body(&self) -> Option<&ModalBody> {
        self.body.as_ref()
    }

    /// Rebuilds the body, shows the modal and bursts confetti at the top third of the screen.
    pub fn open<R: Rng>(&mut self, confetti: &mut ConfettiEngine, rng: &mut R) {
        self.body = Some(ModalBody {
            video: self.video.clone().filter(|v| !v.as_os_str().is_empty()),
            note: format!("{}{SIGNATURE}", self.note),
        });
        self.open = true;
        info!(video = self.video.is_some(), "surprise revealed");

        let point = confetti.surface().reveal_point();
        confetti.burst(point.x, point.y, DEFAULT_BURST, rng);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, viewport: Rectangle, card: Rectangle) {
        let Some(body) = self.body.as_ref().filter(|_| self.open) else {
            return;
        };
        d.draw_rectangle_rec(viewport, Color { a: 140, ..INK });
        d.draw_rectangle_rounded(card, 0.05, 8, CARD);

        let mut inner = Rectangle::new(card.x + 32.0, card.y + 56.0, card.width - 64.0, card.height - 88.0);
        if let Some(video) = &body.video {
            let label = format!("Video: {}", video.display());
            d.draw_rectangle_rounded(Rectangle::new(inner.x, inner.y, inner.width, 48.0), 0.3, 6, Color { a: 40, ..ACCENT });
            d.draw_text(&printable(&label), inner.x as i32 + 16, inner.y as i32 + 14, 20, INK);
            // 16px gap under the video block
            inner.y += 48.0 + 16.0;
            inner.height -= 48.0 + 16.0;
        }
        draw_wrapped(d, &printable(&body.note), inner, 22, INK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confetti::Surface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn opening_populates_and_bursts_at_the_top_third() {
        let mut confetti = ConfettiEngine::new(Surface::new(900.0, 600.0, 1.0));
        let mut rng = StdRng::seed_from_u64(8);
        let mut surprise = Surprise::new("Forever yours,", None);
        assert!(!surprise.is_open());

        surprise.open(&mut confetti, &mut rng);
        assert!(surprise.is_open());
        assert_eq!(confetti.len(), DEFAULT_BURST);
        assert!(confetti.particles().iter().all(|p| p.x == 450.0 && p.y == 200.0));

        let body = surprise.body().unwrap();
        assert_eq!(body.note, "Forever yours,\n\n\u{2014} \u{2665}");
        assert_eq!(body.video, None);

        surprise.close();
        assert!(!surprise.is_open());
    }

    #[test]
    fn empty_video_reference_is_ignored() {
        let mut confetti = ConfettiEngine::new(Surface::new(900.0, 600.0, 1.0));
        let mut rng = StdRng::seed_from_u64(8);

        let mut surprise = Surprise::new("note", Some(PathBuf::new()));
        surprise.open(&mut confetti, &mut rng);
        assert_eq!(surprise.body().unwrap().video, None);

        let mut surprise = Surprise::new("note", Some(PathBuf::from("assets/video/hb.mp4")));
        surprise.open(&mut confetti, &mut rng);
        assert_eq!(surprise.body().unwrap().video, Some(PathBuf::from("assets/video/hb.mp4")));
        assert_eq!(confetti.len(), DEFAULT_BURST * 2);
    }
}
