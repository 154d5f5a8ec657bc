//! Parametric social-card ("OG image") engine: config model, pure layout,
//! rasterization and export against the fixed 1200×630 canvas.

pub mod config;
pub mod export;
pub mod layout;
pub mod presets;
pub mod render;
pub mod text;

pub use config::{OgConfig, OG_HEIGHT, OG_WIDTH};
pub use export::export_card;
pub use render::{CardRenderer, CardSurface};
