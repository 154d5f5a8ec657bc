//! End-to-end card rendering checks that read pixels back out of the
//! encoded output. Pixel assertions only use chrome-free configs (no text,
//! no badge) so they hold regardless of which system fonts are installed.

use assetpress::{
    og::config::{BackgroundType, GradientDirection, OgConfig},
    AssetFormat, CardRenderer, Raster, Rgba8, OG_HEIGHT, OG_WIDTH,
};

/// Config that draws nothing but the background layer.
fn bare(bg_type: BackgroundType) -> OgConfig {
    OgConfig {
        bg_type,
        title: String::new(),
        subtitle: String::new(),
        author: String::new(),
        show_badge: false,
        show_logo: false,
        accent_bar_height: 0.0,
        ..OgConfig::default()
    }
}

fn pixel(raster: &Raster, x: u32, y: u32) -> [u8; 4] {
    let idx = (y as usize * raster.width() as usize + x as usize) * 4;
    let px = &raster.data()[idx..idx + 4];
    [px[0], px[1], px[2], px[3]]
}

fn png_source(w: u32, h: u32, color: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(color));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn solid_background_fills_the_canvas() {
    let config = OgConfig {
        bg_color: Rgba8::rgb(0x33, 0x66, 0x99),
        ..bare(BackgroundType::Solid)
    };

    let mut renderer = CardRenderer::new();
    let raster = renderer.render_to_raster(&config, None, None).unwrap();

    assert_eq!(raster.width(), OG_WIDTH);
    assert_eq!(raster.height(), OG_HEIGHT);
    for (x, y) in [(0, 0), (OG_WIDTH - 1, 0), (600, 315), (0, OG_HEIGHT - 1)] {
        assert_eq!(pixel(&raster, x, y), [0x33, 0x66, 0x99, 255], "at {x},{y}");
    }
}

#[test]
fn accent_bar_covers_the_bottom_strip_only() {
    let config = OgConfig {
        bg_color: Rgba8::rgb(10, 10, 10),
        accent_bar_height: 40.0,
        accent_bar_color: Rgba8::rgb(0x22, 0xc5, 0x5e),
        ..bare(BackgroundType::Solid)
    };

    let mut renderer = CardRenderer::new();
    let raster = renderer.render_to_raster(&config, None, None).unwrap();

    // inside the bar
    assert_eq!(pixel(&raster, 600, OG_HEIGHT - 10), [0x22, 0xc5, 0x5e, 255]);
    // well above it
    assert_eq!(pixel(&raster, 600, OG_HEIGHT - 100), [10, 10, 10, 255]);
}

#[test]
fn gradient_background_runs_in_the_configured_direction() {
    let config = OgConfig {
        gradient_from: Rgba8::rgb(0, 0, 0),
        gradient_to: Rgba8::rgb(255, 255, 255),
        gradient_direction: GradientDirection::ToRight,
        ..bare(BackgroundType::Gradient)
    };

    let mut renderer = CardRenderer::new();
    let raster = renderer.render_to_raster(&config, None, None).unwrap();

    let left = pixel(&raster, 2, 315);
    let right = pixel(&raster, OG_WIDTH - 3, 315);
    assert!(left[0] < 20, "left edge should be near the start stop: {left:?}");
    assert!(right[0] > 235, "right edge should be near the end stop: {right:?}");

    // to-right must not vary vertically
    assert_eq!(pixel(&raster, 600, 5), pixel(&raster, 600, OG_HEIGHT - 5));
}

#[test]
fn image_background_is_hidden_by_a_full_overlay() {
    let bg = Raster::decode(&png_source(300, 200, [200, 50, 50, 255])).unwrap();
    let config = OgConfig {
        bg_overlay_opacity: 1.0,
        ..bare(BackgroundType::Image)
    };

    let mut renderer = CardRenderer::new();
    let raster = renderer.render_to_raster(&config, Some(&bg), None).unwrap();
    assert_eq!(pixel(&raster, 600, 315), [0, 0, 0, 255]);
}

#[test]
fn image_background_shows_through_without_an_overlay() {
    let bg = Raster::decode(&png_source(300, 200, [200, 50, 50, 255])).unwrap();
    let config = OgConfig {
        bg_overlay_opacity: 0.0,
        ..bare(BackgroundType::Image)
    };

    let mut renderer = CardRenderer::new();
    let raster = renderer.render_to_raster(&config, Some(&bg), None).unwrap();
    let px = pixel(&raster, 600, 315);
    assert!(px[0] > 180 && px[1] < 80 && px[2] < 80, "got {px:?}");
}

#[test]
fn missing_image_handle_leaves_a_blank_background() {
    // bgType "image" with no loaded image draws no background at all.
    let config = bare(BackgroundType::Image);
    let mut renderer = CardRenderer::new();
    let raster = renderer.render_to_raster(&config, None, None).unwrap();
    assert_eq!(pixel(&raster, 600, 315)[3], 0);
}

#[test]
fn identical_configs_render_identical_bytes() {
    let config = OgConfig {
        gradient_direction: GradientDirection::ToBottomRight,
        accent_bar_height: 6.0,
        ..bare(BackgroundType::Gradient)
    };

    let mut renderer = CardRenderer::new();
    let a = assetpress::export_card(&mut renderer, &config, None, None, AssetFormat::Png).unwrap();
    let b = assetpress::export_card(&mut renderer, &config, None, None, AssetFormat::Png).unwrap();
    assert_eq!(a.bytes, b.bytes);
}

#[test]
fn export_formats_map_to_their_mime_types() {
    let config = bare(BackgroundType::Solid);
    let mut renderer = CardRenderer::new();

    let cases = [
        (AssetFormat::Png, "image/png"),
        (AssetFormat::Ico, "image/png"),
        (AssetFormat::Webp, "image/webp"),
        (AssetFormat::Svg, "image/svg+xml"),
    ];
    for (format, mime) in cases {
        let blob =
            assetpress::export_card(&mut renderer, &config, None, None, format).unwrap();
        assert_eq!(blob.mime, mime);
        assert!(!blob.bytes.is_empty());
    }
}

#[test]
fn default_config_renders_without_error() {
    // Full default card: text, badge and accent bar all enabled. Exact
    // glyph output depends on the host fonts, so only shape is asserted.
    let mut renderer = CardRenderer::new();
    let raster = renderer
        .render_to_raster(&OgConfig::default(), None, None)
        .unwrap();
    assert_eq!((raster.width(), raster.height()), (OG_WIDTH, OG_HEIGHT));
}

#[test]
fn logo_is_drawn_into_its_corner() {
    let logo = Raster::decode(&png_source(64, 64, [250, 250, 250, 255])).unwrap();
    let config = OgConfig {
        bg_color: Rgba8::rgb(0, 0, 0),
        show_logo: true,
        logo_size: 64.0,
        logo_border_radius: 0.0,
        ..bare(BackgroundType::Solid)
    };

    let mut renderer = CardRenderer::new();
    let raster = renderer
        .render_to_raster(&config, None, Some(&logo))
        .unwrap();

    // default position is bottom-right; accent bar is off in `bare`
    let cx = OG_WIDTH - 80 - 32;
    let cy = OG_HEIGHT - 80 - 32;
    let px = pixel(&raster, cx, cy);
    assert!(px[0] > 200 && px[1] > 200 && px[2] > 200, "got {px:?}");

    // outside the logo square the background is untouched
    assert_eq!(pixel(&raster, 100, 100), [0, 0, 0, 255]);
}
