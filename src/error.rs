//! Custom error types for whiteout.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the whiteout library.
#[derive(Error, Debug)]
pub enum Error {
    /// The input image does not exist.
    #[error("input image not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Failed to read or decode an image file.
    #[error("failed to load image from {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode the output image.
    #[error("failed to save image to {path}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output location could not be written.
    #[error("failed to write {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for whiteout operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_source_is_chained_not_repeated() {
        let err = Error::OutputWrite {
            path: PathBuf::from("out/brush.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only directory"),
        };

        assert_eq!(err.to_string(), "failed to write out/brush.png");
        assert_eq!(err.source().unwrap().to_string(), "read-only directory");

        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained.matches("read-only directory").count(), 1);
    }

    #[test]
    fn test_load_error_keeps_decoder_message_in_source() {
        let source = image::ImageError::IoError(io::Error::new(
            io::ErrorKind::InvalidData,
            "bad chunk",
        ));
        let err = Error::ImageLoad {
            path: PathBuf::from("in.png"),
            source,
        };

        assert!(!err.to_string().contains("bad chunk"));
        assert!(err.source().unwrap().to_string().contains("bad chunk"));
    }
}
