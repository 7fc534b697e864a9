//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk as 8-bit RGBA.
///
/// Accepts PNG, JPEG, BMP, GIF, TIFF, WebP and ICO. The format is guessed
/// from the file content before falling back to the extension, so misnamed
/// files (e.g. a JPEG called `logo.png.jpg`) decode. Animated GIFs yield
/// their first frame. Sources without an alpha channel come back fully opaque.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file does not exist or cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = decode(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(to_rgba(img))
}

fn decode(path: &Path) -> std::result::Result<DynamicImage, ImageError> {
    ImageReader::open(path)
        .map_err(ImageError::IoError)?
        .with_guessed_format()
        .map_err(ImageError::IoError)?
        .decode()
}

/// Convert any decoded image to the RGBA8 working representation.
fn to_rgba(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.to_rgba8(),
    }
}
