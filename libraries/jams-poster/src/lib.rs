//! Aux Jams Poster
//!
//! Simulated poster generation from album metadata: a fixed template
//! catalogue, placeholder SVG previews delivered as base64 data URLs, and
//! a format-label export stub. No real rasterization happens anywhere in
//! this crate.

mod error;
mod generator;
mod types;

pub use error::{PosterError, Result};
pub use generator::{PosterConfig, PosterMaker, PosterReceipt};
pub use types::{AlbumInfo, Poster, PosterFormat, PosterTemplate, TemplateInfo};
