use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::*;
use crate::error::{CelebrationError, CelebrationResult};

/// Everything the card shows, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CelebrationConfig {
    pub name: String,
    pub photos: Vec<PathBuf>,
    pub messages: Vec<String>,
    pub note: String,
    pub video: Option<PathBuf>,
    pub music: Option<PathBuf>,
    pub sparkle_chance: f64,
    pub balloon_chance: f64,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            name: "Anna".to_string(),
            photos: (1..=4).map(|i| PathBuf::from(format!("assets/photos/{i}.jpg"))).collect(),
            messages: vec![
                "From the moment I met you, the world felt a little softer, the colors a little brighter.".to_string(),
                "Your smile is my favorite sunrise; your laugh, my favorite song.".to_string(),
                "Thank you for your kindness, your strength, and the way you light up every room you walk into.".to_string(),
                "Today is your day - may it be as beautiful and brilliant as your heart.".to_string(),
            ],
            note: [
                "My love,",
                "",
                "Every day with you is a gift I never take for granted. Your heart is where I feel most at home, and your joy is the melody that keeps me dancing through life.",
                "",
                "On your birthday, I want to remind you how loved you are - today, tomorrow, always.",
                "",
                "Forever yours,",
            ]
            .join("\n"),
            video: None,
            music: Some(PathBuf::from("assets/music/song.mp3")),
            sparkle_chance: SPARKLE_CHANCE,
            balloon_chance: BALLOON_CHANCE,
        }
    }
}

impl CelebrationConfig {
    pub fn load(path: &Path) -> CelebrationResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CelebrationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| CelebrationError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), photos = config.photos.len(), messages = config.messages.len(), "loaded config");
        config.validate()?;
        Ok(config)
    }

    /// Photos may be empty (the carousel shows a placeholder); messages may not.
    pub fn validate(&self) -> CelebrationResult<()> {
        if self.messages.is_empty() {
            return Err(CelebrationError::config("`messages` must contain at least one entry"));
        }
        for (key, p) in [("sparkle_chance", self.sparkle_chance), ("balloon_chance", self.balloon_chance)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(CelebrationError::config(format!("`{key}` must be within [0, 1], got {p}")));
            }
        }
        Ok(())
    }

    pub fn hero_title(&self) -> String {
        format!("Happy Birthday, {}!", self.name)
    }
}
