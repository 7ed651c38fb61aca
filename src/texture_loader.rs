use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::{CelebrationError, CelebrationResult};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

pub fn is_image(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Image files directly inside `dir_path`, sorted by file name.
pub fn load_sorted_image_paths(dir_path: &Path) -> CelebrationResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path)
        .map_err(|e| CelebrationError::asset(format!("failed to read directory {}: {e}", dir_path.display())))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| CelebrationError::asset(format!("failed to read directory entry: {e}")))?
            .path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir_path.display(), found = paths.len(), "scanned photo directory");
    Ok(paths)
}

/// How a stored image must be turned to display upright (EXIF tag 0x0112).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90Cw,
    Transverse,
    Rotate90Ccw,
}

impl Orientation {
    pub fn from_exif(value: u16) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90Cw,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate90Ccw,
            _ => Orientation::Normal,
        }
    }

    fn apply(self, image: &mut Image) {
        match self {
            Orientation::Normal => {}
            Orientation::FlipHorizontal => image.flip_horizontal(),
            Orientation::Rotate180 => {
                image.rotate_cw();
                image.rotate_cw();
            }
            Orientation::FlipVertical => image.flip_vertical(),
            Orientation::Transpose => {
                image.rotate_cw();
                image.flip_horizontal();
            }
            Orientation::Rotate90Cw => image.rotate_cw(),
            Orientation::Transverse => {
                image.rotate_cw();
                image.flip_vertical();
            }
            Orientation::Rotate90Ccw => image.rotate_ccw(),
        }
    }
}

/// Reads the orientation tag from JPEG bytes; anything unreadable counts as upright.
pub fn read_orientation(file_bytes: &[u8]) -> CelebrationResult<Orientation> {
    let exif = Reader::new()
        .read_from_container(&mut Cursor::new(file_bytes))
        .map_err(|e| CelebrationError::asset(format!("no EXIF data: {e}")))?;
    let orientation = match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
        Some(Value::Short(values)) => values.first().copied().map_or(Orientation::Normal, Orientation::from_exif),
        _ => Orientation::Normal,
    };
    Ok(orientation)
}

/// Loads an image, turns it upright according to EXIF, and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> CelebrationResult<Texture2D> {
    let file_bytes = fs::read(image_path)
        .map_err(|e| CelebrationError::asset(format!("failed to read {}: {e}", image_path.display())))?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes).unwrap_or_else(|e| {
            warn!(path = %image_path.display(), "{e}");
            Orientation::Normal
        })
    } else {
        Orientation::Normal
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| CelebrationError::asset(format!("failed to decode {}: {e:?}", image_path.display())))?;

    if orientation != Orientation::Normal {
        debug!(path = %image_path.display(), ?orientation, "applying EXIF orientation");
        orientation.apply(&mut image);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| CelebrationError::asset(format!("failed to upload {}: {e:?}", image_path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exif_values_map_to_orientations() {
        assert_eq!(Orientation::from_exif(1), Orientation::Normal);
        assert_eq!(Orientation::from_exif(3), Orientation::Rotate180);
        assert_eq!(Orientation::from_exif(6), Orientation::Rotate90Cw);
        assert_eq!(Orientation::from_exif(8), Orientation::Rotate90Ccw);
        assert_eq!(Orientation::from_exif(42), Orientation::Normal);
    }

    #[test]
    fn garbage_has_no_exif() {
        assert!(read_orientation(b"definitely not a jpeg").is_err());
    }

    #[test]
    fn scans_only_images_in_name_order() {
        let dir = std::env::temp_dir().join(format!("celebration-photos-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.jpeg"] {
            fs::write(dir.join(name), b"x").unwrap();
        }
        fs::create_dir_all(dir.join("nested.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.jpeg"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_asset_error() {
        let err = load_sorted_image_paths(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, CelebrationError::Asset(_)));
    }
}
