//! Card rasterization: orchestrates the pure layout against a vello_cpu
//! render context. Draw order, back to front: background, accent bar,
//! badge, logo, title, subtitle, author. Every call resets the surface to
//! the fixed 1200×630 canvas and is idempotent for identical inputs.

use std::collections::HashMap;

use kurbo::Shape as _;

use crate::{
    color::Rgba8,
    crop,
    error::{PressError, PressResult},
    og::{
        config::{BackgroundType, GradientDirection, OgConfig, TextAlign, OG_HEIGHT, OG_WIDTH},
        layout::{self, TextPlan},
        text::{TextBrushRgba8, TextShaper},
    },
    raster::Raster,
};

/// Logo border stroke: 1px, rgba(255, 255, 255, 0.15).
const LOGO_BORDER_COLOR: Rgba8 = Rgba8::rgba(255, 255, 255, 38);
const LOGO_BORDER_WIDTH: f64 = 1.0;

/// Badge labels are always black over the pill color.
const BADGE_LABEL_BRUSH: TextBrushRgba8 = TextBrushRgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// Reusable 1200×630 target pixmap. Dimensions snap back to the fixed
/// canvas on every render, whatever the surface held before.
pub struct CardSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl Default for CardSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSurface {
    pub fn new() -> Self {
        let (w, h) = (OG_WIDTH as u16, OG_HEIGHT as u16);
        Self {
            width: w,
            height: h,
            pixmap: vello_cpu::Pixmap::new(w, h),
        }
    }

    fn reset(&mut self) {
        let (w, h) = (OG_WIDTH as u16, OG_HEIGHT as u16);
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.pixmap = vello_cpu::Pixmap::new(w, h);
        } else {
            for px in self.pixmap.data_as_u8_slice_mut() {
                *px = 0;
            }
        }
    }

    /// Straight-alpha readback of the last render.
    pub fn to_raster(&self) -> PressResult<Raster> {
        Raster::from_premul_pixmap(&self.pixmap, u32::from(self.width), u32::from(self.height))
    }
}

/// Stateful card renderer: owns the text shaper and a cache of fonts
/// converted for the vello_cpu glyph pipeline.
pub struct CardRenderer {
    shaper: TextShaper,
    font_cache: HashMap<u64, vello_cpu::peniko::FontData>,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer {
    pub fn new() -> Self {
        Self {
            shaper: TextShaper::new(),
            font_cache: HashMap::new(),
        }
    }

    /// Render `config` into `surface`. Pure in its inputs: the config is
    /// never mutated and the optional background/logo handles are read-only.
    pub fn render(
        &mut self,
        surface: &mut CardSurface,
        config: &OgConfig,
        bg_image: Option<&Raster>,
        logo_image: Option<&Raster>,
    ) -> PressResult<()> {
        surface.reset();

        let canvas_w = f64::from(OG_WIDTH);
        let canvas_h = f64::from(OG_HEIGHT);
        let full = vello_cpu::kurbo::Rect::new(0.0, 0.0, canvas_w, canvas_h);

        let mut ctx = vello_cpu::RenderContext::new(surface.width, surface.height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        // Background layer.
        match config.bg_type {
            BackgroundType::Solid => {
                ctx.set_paint(color_paint(config.bg_color));
                ctx.fill_rect(&full);
            }
            BackgroundType::Gradient => {
                let ramp = gradient_raster(
                    config.gradient_from,
                    config.gradient_to,
                    config.gradient_direction,
                    OG_WIDTH,
                    OG_HEIGHT,
                )?;
                ctx.set_paint(ramp.to_paint()?);
                ctx.fill_rect(&full);
            }
            BackgroundType::Image => {
                if let Some(bg) = bg_image {
                    let cover = crop::crop_cover(bg, OG_WIDTH, OG_HEIGHT)?;
                    ctx.set_paint(cover.to_paint()?);
                    ctx.fill_rect(&full);

                    let overlay_a =
                        (config.bg_overlay_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, overlay_a));
                    ctx.fill_rect(&full);
                }
            }
        }

        // Accent bar along the bottom edge.
        if config.accent_bar_height > 0.0 {
            ctx.set_paint(color_paint(config.accent_bar_color));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                canvas_h - config.accent_bar_height,
                canvas_w,
                canvas_h,
            ));
        }

        // Badge pill plus centered label.
        if let Some(geom) = layout::badge_geometry(config, &mut self.shaper) {
            let pill = kurbo::RoundedRect::new(
                geom.x,
                geom.y,
                geom.x + geom.width,
                geom.y + geom.height,
                geom.radius,
            )
            .to_path(0.1);
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_paint(config.badge_color));
            ctx.fill_path(&bezpath_to_cpu(&pill));

            let label = self.shaper.layout_line(
                &config.badge_text,
                &layout::badge_style(config),
                BADGE_LABEL_BRUSH,
            )?;
            let label_x = geom.x + (geom.width - f64::from(label.width())) / 2.0;
            let label_y = geom.y + (geom.height - f64::from(label.height())) / 2.0 + 1.0;
            self.draw_layout(&mut ctx, &label, label_x, label_y)?;
        }

        // Logo, clipped to a rounded rect, with a hairline border.
        if config.show_logo && let Some(logo) = logo_image {
            let origin = layout::logo_origin(config);
            let size = (config.logo_size.round().max(1.0)) as u32;
            let scaled = crop::resize_exact(logo, size, size)?;

            let frame = kurbo::RoundedRect::new(
                origin.x,
                origin.y,
                origin.x + config.logo_size,
                origin.y + config.logo_size,
                config.logo_border_radius,
            )
            .to_path(0.1);

            // Anchor the image paint at the logo origin; filling the rounded
            // path clips the image to it.
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
            ctx.set_paint(scaled.to_paint()?);
            ctx.fill_path(&bezpath_to_cpu(&kurbo::RoundedRect::new(
                0.0,
                0.0,
                config.logo_size,
                config.logo_size,
                config.logo_border_radius,
            )
            .to_path(0.1)));

            let outline = kurbo::stroke(
                frame.iter(),
                &kurbo::Stroke::new(LOGO_BORDER_WIDTH),
                &kurbo::StrokeOpts::default(),
                0.1,
            );
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_paint(LOGO_BORDER_COLOR));
            ctx.fill_path(&bezpath_to_cpu(&outline));
        }

        // Text stack: title, subtitle, author.
        let plan = layout::plan_text(config, &mut self.shaper, logo_image.is_some());
        self.draw_text_plan(&mut ctx, &plan)?;

        ctx.flush();
        ctx.render_to_pixmap(&mut surface.pixmap);
        Ok(())
    }

    /// Render into a fresh surface and hand back the raster.
    pub fn render_to_raster(
        &mut self,
        config: &OgConfig,
        bg_image: Option<&Raster>,
        logo_image: Option<&Raster>,
    ) -> PressResult<Raster> {
        let mut surface = CardSurface::new();
        self.render(&mut surface, config, bg_image, logo_image)?;
        surface.to_raster()
    }

    fn draw_text_plan(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        plan: &TextPlan,
    ) -> PressResult<()> {
        for line in &plan.lines {
            let brush = TextBrushRgba8 {
                r: line.color.r,
                g: line.color.g,
                b: line.color.b,
                a: line.color.a,
            };
            let shaped = self.shaper.layout_line(&line.text, &line.style, brush)?;
            let line_w = f64::from(shaped.width());
            let x = match plan.align {
                TextAlign::Left => plan.anchor_x,
                TextAlign::Center => plan.anchor_x - line_w / 2.0,
                TextAlign::Right => plan.anchor_x - line_w,
            };
            self.draw_layout(ctx, &shaped, x, line.y)?;
        }
        Ok(())
    }

    fn draw_layout(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        shaped: &parley::Layout<TextBrushRgba8>,
        x: f64,
        y: f64,
    ) -> PressResult<()> {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
        for line in shaped.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                // Convert the resolved layout font to the vello_cpu font
                // type once per underlying blob.
                let resolved = run.run().font();
                let font = match self.font_cache.get(&resolved.data.id()) {
                    Some(f) => f.clone(),
                    None => {
                        let f = vello_cpu::peniko::FontData::new(
                            vello_cpu::peniko::Blob::from(resolved.data.as_ref().to_vec()),
                            resolved.index,
                        );
                        self.font_cache.insert(resolved.data.id(), f.clone());
                        f
                    }
                };
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

}

fn color_paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let to_cpu = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(to_cpu(p1), to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(to_cpu(p1), to_cpu(p2), to_cpu(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Rasterize a two-stop linear gradient by projecting each pixel onto the
/// direction's line segment.
fn gradient_raster(
    from: Rgba8,
    to: Rgba8,
    direction: GradientDirection,
    width: u32,
    height: u32,
) -> PressResult<Raster> {
    let (a, b) = layout::gradient_line(direction, f64::from(width), f64::from(height));
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 <= 0.0 {
        return Err(PressError::validation("gradient line is degenerate"));
    }

    let mut bytes = vec![0u8; width as usize * height as usize * 4];
    for y in 0..height {
        for x in 0..width {
            let t = (((f64::from(x) - a.x) * dx + (f64::from(y) - a.y) * dy) / len2)
                .clamp(0.0, 1.0);
            let c = from.lerp(to, t);
            let idx = (y as usize * width as usize + x as usize) * 4;
            bytes[idx..idx + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }
    Raster::new(width, height, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::og::config::GradientDirection;

    #[test]
    fn gradient_raster_endpoints_match_stops() {
        let from = Rgba8::rgb(10, 20, 30);
        let to = Rgba8::rgb(200, 100, 50);
        let g = gradient_raster(from, to, GradientDirection::ToRight, 64, 4).unwrap();

        // first column is the start color, far edge approaches the end color
        assert_eq!(&g.data()[..4], &[10, 20, 30, 255]);
        let last = (4usize * 64 - 1) * 4;
        let px = &g.data()[last..last + 4];
        assert!(px[0] >= 190 && px[1] >= 90);
    }

    #[test]
    fn gradient_to_bottom_varies_only_with_y() {
        let g = gradient_raster(
            Rgba8::rgb(0, 0, 0),
            Rgba8::rgb(255, 255, 255),
            GradientDirection::ToBottom,
            8,
            8,
        )
        .unwrap();
        let px = |x: usize, y: usize| g.data()[(y * 8 + x) * 4];
        for y in 0..8 {
            for x in 1..8 {
                assert_eq!(px(x, y), px(0, y));
            }
        }
        assert!(px(0, 7) > px(0, 0));
    }

    #[test]
    fn surface_resets_to_fixed_dimensions() {
        let mut surface = CardSurface {
            width: 10,
            height: 10,
            pixmap: vello_cpu::Pixmap::new(10, 10),
        };
        surface.reset();
        assert_eq!(surface.width, OG_WIDTH as u16);
        assert_eq!(surface.height, OG_HEIGHT as u16);
    }
}
