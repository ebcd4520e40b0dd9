//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_rgba;
pub use save::save_png;

/// Index of the alpha channel in an RGBA pixel.
pub const ALPHA_CHANNEL: usize = 3;

/// Alpha value of a fully transparent pixel.
pub const TRANSPARENT: u8 = 0;

/// Alpha value synthesized for sources without an alpha channel.
pub const OPAQUE: u8 = 255;
