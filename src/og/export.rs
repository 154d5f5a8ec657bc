//! On-demand card export: always re-renders before encoding so the bytes
//! match the supplied config exactly, never a stale surface.

use crate::{
    encode::{self, AssetFormat, Blob},
    error::PressResult,
    og::{config::OgConfig, render::CardRenderer},
    raster::Raster,
};

/// Render `config` and encode the result in `format`.
#[tracing::instrument(skip_all, fields(format = ?format))]
pub fn export_card(
    renderer: &mut CardRenderer,
    config: &OgConfig,
    bg_image: Option<&Raster>,
    logo_image: Option<&Raster>,
    format: AssetFormat,
) -> PressResult<Blob> {
    let raster = renderer.render_to_raster(config, bg_image, logo_image)?;
    encode::encode(&raster, format)
}
