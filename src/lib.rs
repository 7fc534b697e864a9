//! # whitebg
//!
//! Turns the near-white background of a raster image into transparency.
//!
//! Every pixel whose red, green and blue channels all exceed a threshold
//! (230 by default) is replaced with fully transparent white; all other
//! pixels are kept as they are. The result is always written as PNG.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> whitebg::Result<()> {
//! whitebg::remove_white_bg("logo.jpg", "logo_transparent.png")?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod error;
pub mod image;
pub mod remover;

pub use error::{Error, Result};
pub use remover::{remove_white_bg, Config, Remover, Summary};
