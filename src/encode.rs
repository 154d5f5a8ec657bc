use std::io::Cursor;

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PressError, PressResult},
    raster::Raster,
};

/// Lossy (WebP) encode quality, libwebp scale. Equivalent to 0.92.
pub const WEBP_QUALITY: f32 = 92.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Output container for a generated asset.
pub enum AssetFormat {
    /// Lossless PNG at maximum fidelity.
    Png,
    /// PNG bytes published under an `.ico` name. True multi-resolution ICO
    /// containers are intentionally not built; browsers accept PNG payloads.
    Ico,
    /// Lossy WebP at [`WEBP_QUALITY`].
    Webp,
    /// SVG wrapper embedding the lossless raster as a base64 data URI.
    /// A shim, not a vector trace.
    Svg,
}

impl AssetFormat {
    pub fn mime(self) -> &'static str {
        match self {
            AssetFormat::Png | AssetFormat::Ico => "image/png",
            AssetFormat::Webp => "image/webp",
            AssetFormat::Svg => "image/svg+xml",
        }
    }
}

#[derive(Clone, Debug)]
/// Encoded asset bytes plus their MIME type.
pub struct Blob {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl Blob {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serialize a raster surface to an encoded blob in the requested format.
pub fn encode(surface: &Raster, format: AssetFormat) -> PressResult<Blob> {
    match format {
        AssetFormat::Png | AssetFormat::Ico => Ok(Blob {
            bytes: encode_png(surface)?,
            mime: format.mime(),
        }),
        AssetFormat::Webp => {
            let encoder =
                webp::Encoder::from_rgba(surface.data(), surface.width(), surface.height());
            let mem = encoder.encode(WEBP_QUALITY);
            if mem.is_empty() {
                return Err(PressError::encode("webp encoder produced no data"));
            }
            Ok(Blob {
                bytes: mem.to_vec(),
                mime: format.mime(),
            })
        }
        AssetFormat::Svg => {
            let png = encode_png(surface)?;
            Ok(Blob {
                bytes: svg_wrapper(&png, surface.width(), surface.height()).into_bytes(),
                mime: format.mime(),
            })
        }
    }
}

fn encode_png(surface: &Raster) -> PressResult<Vec<u8>> {
    let img = surface.as_image()?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| PressError::encode(format!("png encode: {e}")))?;
    if buf.is_empty() {
        return Err(PressError::encode("png encoder produced no data"));
    }
    Ok(buf)
}

fn svg_wrapper(png_bytes: &[u8], width: u32, height: u32) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png_bytes);
    [
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" viewBox=\"0 0 {width} {height}\" width=\"{width}\" height=\"{height}\">"
        ),
        format!(
            "  <image width=\"{width}\" height=\"{height}\" xlink:href=\"data:image/png;base64,{b64}\" />"
        ),
        "</svg>".to_string(),
    ]
    .join("\n")
}
