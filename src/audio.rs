//! Background music toggle. A refused play is logged and changes nothing.

use raylib::prelude::*;
use tracing::{info, warn};

use crate::error::{CelebrationError, CelebrationResult};

pub trait Playback {
    fn play(&mut self) -> CelebrationResult<()>;
    fn pause(&mut self);

    /// Called every frame; streaming backends refill their buffers here.
    fn update(&mut self) {}
}

/// A raylib music stream that resumes where it was paused.
pub struct Soundtrack<'a> {
    music: Music<'a>,
    started: bool,
}

impl<'a> Soundtrack<'a> {
    pub fn new(music: Music<'a>) -> Self {
        Self { music, started: false }
    }
}

impl Playback for Soundtrack<'_> {
    fn play(&mut self) -> CelebrationResult<()> {
        if self.started {
            self.music.resume_stream();
        } else {
            self.music.play_stream();
            self.started = true;
        }
        if self.music.is_stream_playing() {
            Ok(())
        } else {
            Err(CelebrationError::playback("the audio stream did not start"))
        }
    }

    fn pause(&mut self) {
        self.music.pause_stream();
    }

    fn update(&mut self) {
        self.music.update_stream();
    }
}

#[derive(Debug, Default)]
pub struct MusicToggle {
    playing: bool,
}

impl MusicToggle {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flips between play and pause and returns the new state.
    pub fn toggle<P: Playback + ?Sized>(&mut self, player: Option<&mut P>) -> bool {
        let Some(player) = player else {
            warn!("audio blocked: no music track is available");
            return self.playing;
        };

        if self.playing {
            player.pause();
            self.playing = false;
            info!("music paused");
        } else {
            match player.play() {
                Ok(()) => {
                    self.playing = true;
                    info!("music playing");
                }
                Err(e) => warn!("audio blocked: {e}"),
            }
        }
        self.playing
    }
}
