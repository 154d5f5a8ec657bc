//! Parley-backed shaping and measurement for card text. One shaper owns the
//! font and layout contexts; the three card families resolve through the
//! system font collection's generic families so identical inputs always
//! shape to identical layouts within a process.

use crate::{
    error::{PressError, PressResult},
    og::{
        config::FontFamily,
        layout::{TextMeasure, TextStyle},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// RGBA8 brush color carried through Parley layouts.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

fn generic_family(family: FontFamily) -> parley::style::GenericFamily {
    match family {
        FontFamily::SansSerif => parley::style::GenericFamily::SansSerif,
        FontFamily::Serif => parley::style::GenericFamily::Serif,
        FontFamily::Monospace => parley::style::GenericFamily::Monospace,
    }
}

impl TextShaper {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape one line of text. No width constraint: wrapping is the layout
    /// engine's job, not the shaper's.
    pub fn layout_line(
        &mut self,
        text: &str,
        style: &TextStyle,
        brush: TextBrushRgba8,
    ) -> PressResult<parley::Layout<TextBrushRgba8>> {
        if !style.size.is_finite() || style.size <= 0.0 {
            return Err(PressError::validation("text size must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Single(parley::style::FontFamily::Generic(
                generic_family(style.family),
            )),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size as f32));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(style.weight),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Measured advance width of `text` in pixels.
    pub fn measure(&mut self, text: &str, style: &TextStyle) -> PressResult<f64> {
        Ok(f64::from(self.layout_line(text, style, TextBrushRgba8::default())?.width()))
    }
}

impl TextMeasure for TextShaper {
    fn text_width(&mut self, text: &str, style: &TextStyle) -> f64 {
        // Measurement failures only arise from invalid sizes, which the
        // config layer never produces; treat them as zero-width.
        self.measure(text, style).unwrap_or(0.0)
    }
}
