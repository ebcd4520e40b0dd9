//! White background removal pipeline.

mod mask;
mod remover;

pub use mask::{apply_mask, compute_mask, is_background, Mask, DEFAULT_THRESHOLD};
pub use remover::{remove_white_background, BackgroundRemover, Config, Report};
