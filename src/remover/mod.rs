//! Threshold-based white background removal.

mod mask;
mod process;

pub use mask::{clear_near_white, is_near_white, DEFAULT_THRESHOLD, TRANSPARENT_WHITE};
pub use process::{remove_white_bg, Config, Remover, Summary};
