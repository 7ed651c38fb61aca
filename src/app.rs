//! Wires the effects to the window: routes pointer input, advances every
//! component once per frame and draws them in stacking order.

use std::collections::HashMap;

use rand::rngs::StdRng;
use raylib::prelude::*;
use tracing::{debug, info};

use crate::audio::{MusicToggle, Playback};
use crate::carousel::Carousel;
use crate::config::CelebrationConfig;
use crate::confetti::{ConfettiEngine, Surface};
use crate::constants::*;
use crate::engine::Effect;
use crate::error::CelebrationResult;
use crate::particles::{ParticleLayer, ParticleSpawner};
use crate::reveal::Surprise;
use crate::typewriter::TypedMessageAnimator;
use crate::ui::{Control, Layout, Pulse, draw_button};

/// What the window reported for this frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub pointer: Vector2,
    pub clicked: bool,
    pub surface: Surface,
}

pub struct App<'a> {
    title: String,
    layout: Layout,
    carousel: Carousel,
    typewriter: TypedMessageAnimator,
    spawner: ParticleSpawner,
    particles: ParticleLayer,
    confetti: ConfettiEngine,
    surprise: Surprise,
    music: MusicToggle,
    player: Option<Box<dyn Playback + 'a>>,
    pulses: HashMap<Control, Pulse>,
    hovering_slides: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    pub fn new(config: &CelebrationConfig, surface: Surface, rng: StdRng) -> CelebrationResult<Self> {
        config.validate()?;
        Ok(Self {
            title: config.hero_title(),
            layout: Layout::new(surface.width, surface.height),
            carousel: Carousel::new(config.photos.clone()),
            typewriter: TypedMessageAnimator::new(config.messages.clone())?,
            spawner: ParticleSpawner::new(config.sparkle_chance, config.balloon_chance),
            particles: ParticleLayer::new(),
            confetti: ConfettiEngine::new(surface),
            surprise: Surprise::new(config.note.clone(), config.video.clone()),
            music: MusicToggle::default(),
            player: None,
            pulses: Control::ALL.into_iter().map(|c| (c, Pulse::default())).collect(),
            hovering_slides: false,
            rng,
        })
    }

    pub fn with_player(mut self, player: Box<dyn Playback + 'a>) -> Self {
        self.player = Some(player);
        self
    }

    pub fn preload(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.carousel.preload(rl, thread);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn typewriter(&self) -> &TypedMessageAnimator {
        &self.typewriter
    }

    pub fn particles(&self) -> &ParticleLayer {
        &self.particles
    }

    pub fn confetti(&self) -> &ConfettiEngine {
        &self.confetti
    }

    pub fn surprise(&self) -> &Surprise {
        &self.surprise
    }

    fn controls(&self) -> &'static [Control] {
        if self.surprise.is_open() {
            &[Control::CloseModal]
        } else {
            &[
                Control::PrevSlide,
                Control::NextSlide,
                Control::PrevMessage,
                Control::NextMessage,
                Control::Reveal,
                Control::Music,
            ]
        }
    }

    fn control_at(&self, point: Vector2) -> Option<Control> {
        self.controls()
            .iter()
            .copied()
            .find(|c| self.layout.control(*c).check_collision_point_rec(point))
    }

    pub fn handle_input(&mut self, input: &FrameInput) {
        if input.surface != self.confetti.surface() {
            self.confetti.resize(input.surface);
            self.layout = Layout::new(input.surface.width, input.surface.height);
        }

        let over_slides = !self.surprise.is_open() && self.layout.slides.check_collision_point_rec(input.pointer);
        if over_slides != self.hovering_slides {
            self.hovering_slides = over_slides;
            if over_slides {
                self.carousel.suspend();
            } else {
                self.carousel.resume();
            }
        }

        if !input.clicked {
            return;
        }

        // Every click anywhere leaves a heart, whatever else it hits
        let (x, y) = (input.pointer.x, input.pointer.y);
        self.spawner.on_interaction(&mut self.particles, x, y, self.layout.height, &mut self.rng);

        if let Some(control) = self.control_at(input.pointer) {
            self.activate(control);
        } else if self.surprise.is_open() {
            if !self.layout.modal.check_collision_point_rec(input.pointer) {
                self.surprise.close();
            }
        } else if let Some(dot) = self
            .carousel
            .dot_rects(self.layout.dots)
            .iter()
            .position(|r| r.check_collision_point_rec(input.pointer))
        {
            self.carousel.go_to(dot as i64);
        }
    }

    pub fn activate(&mut self, control: Control) {
        debug!(?control, "control activated");
        if let Some(pulse) = self.pulses.get_mut(&control) {
            pulse.trigger();
        }
        match control {
            Control::PrevSlide => self.carousel.prev(),
            Control::NextSlide => self.carousel.next(),
            Control::PrevMessage => self.typewriter.prev(),
            Control::NextMessage => self.typewriter.next(),
            Control::Reveal => self.surprise.open(&mut self.confetti, &mut self.rng),
            Control::Music => {
                self.music.toggle(self.player.as_deref_mut());
            }
            Control::CloseModal => self.surprise.close(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.carousel.update(dt);
        self.typewriter.update(dt);
        self.particles.update(dt);
        self.confetti.update(dt);
        for pulse in self.pulses.values_mut() {
            pulse.update(dt);
        }
        if let Some(player) = self.player.as_deref_mut() {
            player.update();
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(BACKGROUND);

        let hero = self.layout.hero;
        let size = 44;
        d.draw_text(
            &self.title,
            (hero.x + hero.width * 0.5) as i32 - measure_text(&self.title, size) / 2,
            (hero.y + hero.height * 0.5) as i32 - size / 2,
            size,
            ACCENT,
        );

        self.carousel.draw(d, self.layout.slides);
        self.carousel.draw_indicators(d, self.layout.dots);
        self.typewriter.draw(d, self.layout.message);

        for control in Control::ALL.into_iter().filter(|c| *c != Control::CloseModal) {
            let primary = matches!(control, Control::Reveal) || (control == Control::Music && self.music.is_playing());
            draw_button(d, self.layout.control(control), control.label(self.music.is_playing()), &self.pulses[&control], primary);
        }

        self.particles.draw(d, self.layout.viewport());

        if self.surprise.is_open() {
            self.surprise.draw(d, self.layout.viewport(), self.layout.modal);
            let close = Control::CloseModal;
            draw_button(d, self.layout.control(close), close.label(false), &self.pulses[&close], false);
        }

        // The confetti canvas sits above everything
        self.confetti.draw(d, self.layout.viewport());
    }
}

impl Drop for App<'_> {
    fn drop(&mut self) {
        info!(live_confetti = self.confetti.len(), "closing");
    }
}
