//! Test fixtures: small images written into a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;
use whitebg::batch::DEFAULT_JOBS;

/// PNG file signature.
pub const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Scratch directory with a `public/` folder, removed on drop.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(dir.path().join("public")).expect("create public dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write an RGBA image as PNG.
    pub fn write_png(&self, rel: &str, img: &RgbaImage) -> PathBuf {
        let path = self.path(rel);
        img.save_with_format(&path, ImageFormat::Png)
            .expect("write png fixture");
        path
    }

    /// Write a solid RGB image as JPEG.
    pub fn write_jpeg(&self, rel: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
        let path = self.path(rel);
        RgbImage::from_pixel(width, height, Rgb(color))
            .save_with_format(&path, ImageFormat::Jpeg)
            .expect("write jpeg fixture");
        path
    }

    /// Write a solid RGB image in any encodable format.
    pub fn write_rgb(&self, rel: &str, color: [u8; 3], format: ImageFormat) -> PathBuf {
        let path = self.path(rel);
        RgbImage::from_pixel(5, 3, Rgb(color))
            .save_with_format(&path, format)
            .expect("write rgb fixture");
        path
    }

    /// Populate both default inputs with valid images.
    pub fn write_default_inputs(&self) {
        self.write_png(DEFAULT_JOBS[0].input, &white_frame(6, 4));
        self.write_jpeg(DEFAULT_JOBS[1].input, 16, 16, [255, 255, 255]);
    }
}

/// White image with a single black pixel in the middle.
pub fn white_frame(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    img.put_pixel(width / 2, height / 2, Rgba([0, 0, 0, 255]));
    img
}

/// Whether the file at `path` starts with the PNG signature.
pub fn is_png(path: &Path) -> bool {
    fs::read(path).is_ok_and(|bytes| bytes.starts_with(&PNG_MAGIC))
}
