use std::sync::Arc;

use crate::error::{PressError, PressResult};

#[derive(Clone, Debug)]
/// Straight-alpha RGBA8 raster, row-major, tightly packed.
///
/// This is the exchange type between the cropper, the card renderer and the
/// encoders. Premultiplication happens only at the vello_cpu boundary.
pub struct Raster {
    width: u32,
    height: u32,
    rgba8: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, rgba8: Vec<u8>) -> PressResult<Self> {
        if width == 0 || height == 0 {
            return Err(PressError::validation("raster dimensions must be > 0"));
        }
        if rgba8.len() != width as usize * height as usize * 4 {
            return Err(PressError::validation("raster byte length mismatch"));
        }
        Ok(Self {
            width,
            height,
            rgba8,
        })
    }

    /// Decode an encoded image (any format the `image` crate reads).
    pub fn decode(bytes: &[u8]) -> PressResult<Self> {
        let dyn_img = image::load_from_memory(bytes)
            .map_err(|e| PressError::decode(format!("decode image from memory: {e}")))?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::new(width, height, rgba.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.rgba8
    }

    pub fn into_image(self) -> PressResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba8)
            .ok_or_else(|| PressError::validation("raster byte length mismatch"))
    }

    pub fn as_image(&self) -> PressResult<image::RgbaImage> {
        self.clone().into_image()
    }

    /// Build a vello_cpu image paint from this raster (premultiplying on the way).
    pub fn to_paint(&self) -> PressResult<vello_cpu::Image> {
        let mut premul = self.rgba8.clone();
        premultiply_rgba8_in_place(&mut premul);
        let pixmap = premul_bytes_to_pixmap(&premul, self.width, self.height)?;
        Ok(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        })
    }

    /// Read a rendered pixmap back into a straight-alpha raster.
    pub fn from_premul_pixmap(pixmap: &vello_cpu::Pixmap, width: u32, height: u32) -> PressResult<Self> {
        let mut rgba8 = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut rgba8);
        Self::new(width, height, rgba8)
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        let un = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
        px[0] = un(px[0]);
        px[1] = un(px[1]);
        px[2] = un(px[2]);
    }
}

pub(crate) fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> PressResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| PressError::validation("raster width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| PressError::validation("raster height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(PressError::validation("raster byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}
