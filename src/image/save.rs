//! Image saving utilities.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::RgbaImage;
use tempfile::{Builder, NamedTempFile};

use crate::error::{Error, Result};

/// Save an RGBA image as PNG.
///
/// The image is encoded into a temporary file next to `path` and renamed
/// over it once fully written, so `path` either holds the complete new
/// image or is left exactly as it was. The output is PNG whatever the
/// extension of `path`.
///
/// A replaced file keeps its permissions. A new file gets the same mode
/// `fs::write` would give it.
///
/// # Errors
///
/// Returns [`Error::OutputWrite`] if the directory cannot be written or the
/// rename fails, and [`Error::ImageSave`] if encoding fails.
pub fn save_png<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let output_write = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = temp_file_in(dir).map_err(output_write)?;
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(output_write)?;
    }

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        img.write_with_encoder(PngEncoder::new(&mut writer))
            .map_err(|source| Error::ImageSave {
                path: path.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(output_write)?;
    }

    // Dropping `temp` on any error above removes it.
    temp.persist(path).map_err(|err| output_write(err.error))?;

    Ok(())
}

/// Create a temporary file in `dir` with the regular create mode.
#[cfg_attr(not(unix), allow(unused_mut))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();

    // tempfile defaults to 0600; 0666 is what `File::create` asks for, the
    // umask still applies.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(dir)
}
