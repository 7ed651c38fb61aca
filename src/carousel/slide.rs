use std::path::PathBuf;

use raylib::prelude::*;
use tracing::{debug, warn};

use crate::constants::*;
use crate::texture_loader::load_texture_with_exif_rotation;

pub struct Slide {
    pub index: usize,
    pub image: PathBuf,
    texture: Option<Texture2D>,
}

impl Slide {
    pub fn new(index: usize, image: PathBuf) -> Self {
        Self { index, image, texture: None }
    }

    pub fn caption(&self) -> String {
        format!("Photo {}", self.index + 1)
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Loads the texture up front. A failure only costs the picture.
    pub fn preload(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        match load_texture_with_exif_rotation(rl, thread, &self.image) {
            Ok(texture) => {
                debug!(slide = self.index, path = %self.image.display(), "preloaded");
                self.texture = Some(texture);
            }
            Err(e) => {
                warn!(slide = self.index, path = %self.image.display(), "could not preload photo: {e}");
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        match &self.texture {
            Some(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;

                // Fit inside the area, keep the aspect ratio
                let scale = (area.width / tex_width).min(area.height / tex_height);
                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(
                        area.x + (area.width - scaled_width) * 0.5,
                        area.y + (area.height - scaled_height) * 0.5,
                        scaled_width,
                        scaled_height,
                    ),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color { a: (alpha * 255.0) as u8, ..Color::WHITE },
                );
            }
            None => {
                d.draw_rectangle_rec(area, Color { a: (alpha * 40.0) as u8, ..MUTED_INK });
                let label = self.caption();
                d.draw_text(
                    &label,
                    (area.x + area.width * 0.5) as i32 - measure_text(&label, 24) / 2,
                    (area.y + area.height * 0.5) as i32 - 12,
                    24,
                    Color { a: (alpha * 255.0) as u8, ..MUTED_INK },
                );
            }
        }
    }
}
