use std::path::PathBuf;

use clap::Parser;

use crate::constants::*;

/// An interactive birthday card: photo carousel, typed messages, click hearts and a confetti reveal.
#[derive(Debug, Parser)]
#[command(name = "celebration", version, about)]
pub struct Args {
    /// JSON file with name, photos, messages, note and optional video/music
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use every image in this directory (sorted by file name) instead of the configured photos
    #[arg(long)]
    pub photos_dir: Option<PathBuf>,

    /// Override the name shown in the hero banner
    #[arg(long)]
    pub name: Option<String>,

    /// Seed for the effect RNG, for reproducible particle layouts
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
