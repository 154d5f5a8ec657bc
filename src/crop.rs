use image::imageops::FilterType;

use crate::{
    error::{PressError, PressResult},
    raster::Raster,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Source-space rectangle selected by a cover crop.
pub struct CropRect {
    pub sx: f64,
    pub sy: f64,
    pub sw: f64,
    pub sh: f64,
}

/// Center-anchored "cover" crop: the largest source rectangle with the
/// target's aspect ratio. The wider dimension is cropped; the other is used
/// in full. `src_ratio == dst_ratio` degenerates to the full source.
pub fn cover_crop_rect(src_w: f64, src_h: f64, dst_w: f64, dst_h: f64) -> CropRect {
    let src_ratio = src_w / src_h;
    let dst_ratio = dst_w / dst_h;

    if src_ratio > dst_ratio {
        let sw = src_h * dst_ratio;
        CropRect {
            sx: (src_w - sw) / 2.0,
            sy: 0.0,
            sw,
            sh: src_h,
        }
    } else {
        let sh = src_w / dst_ratio;
        CropRect {
            sx: 0.0,
            sy: (src_h - sh) / 2.0,
            sw: src_w,
            sh,
        }
    }
}

/// Crop `source` to the target aspect ratio and scale the selection to
/// exactly `width`×`height` (Lanczos3). No letterboxing, no distortion;
/// center content is preserved and the longer edges are trimmed.
pub fn crop_cover(source: &Raster, width: u32, height: u32) -> PressResult<Raster> {
    if width == 0 || height == 0 {
        return Err(PressError::validation("crop target dimensions must be > 0"));
    }

    let rect = cover_crop_rect(
        f64::from(source.width()),
        f64::from(source.height()),
        f64::from(width),
        f64::from(height),
    );

    // Snap the fractional source rect to whole pixels, clamped to bounds.
    let sx = (rect.sx.round() as u32).min(source.width().saturating_sub(1));
    let sy = (rect.sy.round() as u32).min(source.height().saturating_sub(1));
    let sw = (rect.sw.round() as u32).clamp(1, source.width() - sx);
    let sh = (rect.sh.round() as u32).clamp(1, source.height() - sy);

    let img = source.as_image()?;
    let cropped = image::imageops::crop_imm(&img, sx, sy, sw, sh).to_image();
    let scaled = image::imageops::resize(&cropped, width, height, FilterType::Lanczos3);
    Raster::new(width, height, scaled.into_raw())
}

/// Plain exact-size scale (Lanczos3), no cropping. Aspect ratio is not
/// preserved; used where the source must fill a square slot as-is.
pub fn resize_exact(source: &Raster, width: u32, height: u32) -> PressResult<Raster> {
    if width == 0 || height == 0 {
        return Err(PressError::validation("resize target dimensions must be > 0"));
    }
    let img = source.as_image()?;
    let scaled = image::imageops::resize(&img, width, height, FilterType::Lanczos3);
    Raster::new(width, height, scaled.into_raw())
}
