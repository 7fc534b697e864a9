//! Single-image background removal.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::image;

use super::mask::{clear_with_progress, DEFAULT_THRESHOLD};

/// Configuration for background removal.
#[derive(Debug, Clone)]
pub struct Config {
    /// Channels must all be strictly above this value for a pixel to be cleared.
    pub threshold: u8,

    /// Draw a progress bar while scanning rows.
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            show_progress: false,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no pixel could ever pass the threshold.
    pub fn validate(&self) -> Result<()> {
        if self.threshold == u8::MAX {
            return Err(Error::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be below 255".to_string(),
            });
        }

        Ok(())
    }
}

/// Outcome of one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub width: u32,
    pub height: u32,
    /// Pixels made transparent.
    pub cleared: usize,
}

/// Converts near-white pixels of an image to transparency.
#[derive(Debug, Clone, Default)]
pub struct Remover {
    config: Config,
}

impl Remover {
    /// Create a remover with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        tracing::debug!("Remover config: {config:?}");
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load `input_path`, clear its near-white pixels and write PNG to `output_path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageLoad`] if the input cannot be decoded and
    /// [`Error::ImageSave`] if the output cannot be written.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<Summary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let mut img = image::load_image(input_path)?;
        let (width, height) = img.dimensions();

        let pb = self.progress_bar(height);
        let cleared = clear_with_progress(&mut img, self.config.threshold, &pb);
        pb.finish_and_clear();

        tracing::debug!("Cleared {cleared} of {} pixels", u64::from(width) * u64::from(height));

        image::save_image(&img, output_path)?;

        Ok(Summary {
            width,
            height,
            cleared,
        })
    }

    fn progress_bar(&self, rows: u32) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(u64::from(rows));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Scanning [{bar:40.cyan/blue}] {pos}/{len} rows")
                .expect("valid template")
                .progress_chars("#>-"),
        );
        pb
    }
}

/// Convert near-white pixels of `input_path` to transparency and save the
/// result as PNG at `output_path`, using the default threshold of 230.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the input is missing or not a valid image
/// and [`Error::ImageSave`] if the output cannot be written.
pub fn remove_white_bg<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<()> {
    Remover::default().process(input_path, output_path)?;
    Ok(())
}
