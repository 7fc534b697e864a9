//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_image;
pub use save::save_image;

/// Fully opaque alpha value.
pub const OPAQUE: u8 = u8::MAX;
