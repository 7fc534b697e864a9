//! Image saving utilities.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Save an RGBA image as PNG.
///
/// The output is always PNG, whatever the extension of `path`, since only a
/// format with per-pixel alpha can carry the cleared background.
///
/// # Errors
///
/// Returns [`Error::ImageSave`] if the file cannot be created or encoded.
pub fn save_image<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })
}
