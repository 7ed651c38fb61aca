use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;
use tracing::{info, warn};

mod app;
mod audio;
mod carousel;
mod cli;
mod config;
mod confetti;
mod constants;
mod ease;
mod engine;
mod error;
mod logging;
mod particles;
mod reveal;
mod texture_loader;
mod timer;
mod typewriter;
mod ui;

use crate::app::{App, FrameInput};
use crate::audio::{Playback, Soundtrack};
use crate::cli::Args;
use crate::config::CelebrationConfig;
use crate::confetti::Surface;
use crate::constants::*;
use crate::texture_loader::load_sorted_image_paths;

fn load_config(args: &Args) -> Result<CelebrationConfig> {
    let mut config = match &args.config {
        Some(path) => CelebrationConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => CelebrationConfig::default(),
    };
    if let Some(dir) = &args.photos_dir {
        config.photos = load_sorted_image_paths(dir).with_context(|| format!("scanning {}", dir.display()))?;
    }
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    config.validate()?;
    Ok(config)
}

fn current_surface(rl: &RaylibHandle) -> Surface {
    Surface::new(
        rl.get_screen_width() as f32,
        rl.get_screen_height() as f32,
        rl.get_window_scale_dpi().x,
    )
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose)?;
    let config = load_config(&args)?;
    info!(name = %config.name, photos = config.photos.len(), messages = config.messages.len(), "starting");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&config.hero_title())
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let audio = RaylibAudio::init_audio_device()
        .map_err(|e| warn!("audio device unavailable: {e:?}"))
        .ok();
    let player: Option<Box<dyn Playback + '_>> = match (&audio, &config.music) {
        (Some(audio), Some(path)) => match audio.new_music(&path.to_string_lossy()) {
            Ok(music) => Some(Box::new(Soundtrack::new(music))),
            Err(e) => {
                warn!(path = %path.display(), "could not open music track: {e:?}");
                None
            }
        },
        _ => None,
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut app = App::new(&config, current_surface(&rl), rng)?;
    if let Some(player) = player {
        app = app.with_player(player);
    }
    app.preload(&mut rl, &thread);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let input = FrameInput {
            pointer: rl.get_mouse_position(),
            clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            surface: current_surface(&rl),
        };
        app.handle_input(&input);
        app.update(rl.get_frame_time());

        let mut d = rl.begin_drawing(&thread);
        app.draw(&mut d);
    }

    Ok(())
}
