//! Image loading utilities.

use std::io::ErrorKind;
use std::path::Path;

use image::{ImageError, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk and normalize it to RGBA8.
///
/// Any format enabled on the `image` crate is accepted. Sources without an
/// alpha channel get a fully opaque one.
///
/// Returns the pixel buffer and whether the source carried its own alpha.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] if `path` does not exist, and
/// [`Error::ImageLoad`] if it cannot be read or decoded.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<(RgbaImage, bool)> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| match source {
        ImageError::IoError(ref err) if err.kind() == ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        source => Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let has_alpha = img.color().has_alpha();
    tracing::debug!(
        "Decoded {}x{} {:?} image",
        img.width(),
        img.height(),
        img.color()
    );

    Ok((img.to_rgba8(), has_alpha))
}
