#![forbid(unsafe_code)]

//! Deterministic web asset generation: a cover-crop batch resizer/encoder
//! for favicon-style targets and a parametric social-card renderer, both
//! producing encoded blobs a host application persists or bundles.

pub mod batch;
pub mod catalog;
pub mod color;
pub mod crop;
pub mod encode;
pub mod error;
pub mod og;
pub mod raster;
pub mod target;

pub use batch::generate_assets;
pub use color::Rgba8;
pub use crop::{CropRect, cover_crop_rect, crop_cover};
pub use encode::{AssetFormat, Blob, WEBP_QUALITY, encode};
pub use error::{PressError, PressResult};
pub use og::{CardRenderer, CardSurface, OG_HEIGHT, OG_WIDTH, OgConfig, export_card};
pub use raster::Raster;
pub use target::{AssetTarget, Category, GeneratedAsset};
