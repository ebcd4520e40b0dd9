//! White background removal pipeline.

use std::path::Path;

use crate::error::Result;
use crate::image;

use super::mask::{apply_mask, compute_mask, DEFAULT_THRESHOLD};

/// Configuration for background removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Pixels whose red, green and blue all exceed this value are made
    /// transparent.
    pub threshold: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of pixels made transparent.
    pub cleared: usize,
}

/// Makes near-white pixels of an image transparent.
#[derive(Debug, Clone, Default)]
pub struct BackgroundRemover {
    config: Config,
}

impl BackgroundRemover {
    /// Create a remover with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Remove the white background of `input_path` and write the result to
    /// `output_path` as PNG.
    ///
    /// Any existing file at `output_path` is replaced. On failure it is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be found or decoded, or the
    /// output cannot be written.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<Report> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        tracing::info!("Processing {}...", input_path.display());

        let (mut img, has_alpha) = image::load_rgba(input_path)?;
        if !has_alpha {
            tracing::debug!("Source has no alpha channel, treating it as opaque");
        }

        let mask = compute_mask(&img, self.config.threshold);
        let cleared = apply_mask(&mut img, &mask);
        tracing::debug!(
            "Cleared {cleared} of {} pixels (threshold {})",
            mask.len(),
            self.config.threshold
        );

        image::save_png(&img, output_path)?;

        tracing::info!("Saved transparent image to {}", output_path.display());

        Ok(Report {
            width: img.width(),
            height: img.height(),
            cleared,
        })
    }
}

/// Remove the white background of `input_path` with the default threshold.
///
/// # Errors
///
/// See [`BackgroundRemover::process`].
pub fn remove_white_background<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<Report> {
    BackgroundRemover::default().process(input_path, output_path)
}
