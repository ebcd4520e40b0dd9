//! # whiteout
//!
//! Make the near-white background of an image transparent.
//!
//! A pixel is background when its red, green and blue channels are all
//! strictly above a threshold (200 by default). Background pixels get an
//! alpha of 0; their color values and every other pixel are left as they
//! were. The result is always written as PNG.
//!
//! ## Example
//!
//! ```no_run
//! use whiteout::{BackgroundRemover, Config};
//!
//! # fn main() -> whiteout::Result<()> {
//! let remover = BackgroundRemover::new(Config { threshold: 200 });
//! let report = remover.process("logo.jpg", "logo.png")?;
//!
//! println!("cleared {} pixels", report.cleared);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{
    remove_white_background, BackgroundRemover, Config, Report, DEFAULT_THRESHOLD,
};
