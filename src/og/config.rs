use serde::{Deserialize, Serialize};

use crate::color::Rgba8;

/// Fixed social-card canvas width in pixels.
pub const OG_WIDTH: u32 = 1200;
/// Fixed social-card canvas height in pixels.
pub const OG_HEIGHT: u32 = 630;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Solid,
    Gradient,
    Image,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Eight named two-stop gradient directions, CSS-style.
pub enum GradientDirection {
    #[serde(rename = "to-right")]
    ToRight,
    #[serde(rename = "to-left")]
    ToLeft,
    #[serde(rename = "to-bottom")]
    ToBottom,
    #[serde(rename = "to-top")]
    ToTop,
    #[serde(rename = "to-br")]
    ToBottomRight,
    #[serde(rename = "to-bl")]
    ToBottomLeft,
    #[serde(rename = "to-tr")]
    ToTopRight,
    #[serde(rename = "to-tl")]
    ToTopLeft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    #[serde(rename = "sans-serif")]
    SansSerif,
    #[serde(rename = "serif")]
    Serif,
    #[serde(rename = "monospace")]
    Monospace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoPosition {
    #[serde(rename = "top-left")]
    TopLeft,
    #[serde(rename = "top-right")]
    TopRight,
    #[serde(rename = "bottom-left")]
    BottomLeft,
    #[serde(rename = "bottom-right")]
    BottomRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleWeight {
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Caller-owned card style. Every render is a pure function of
/// `(config, background handle, logo handle)`; the renderer never mutates
/// it. Derive variants with struct-update syntax.
pub struct OgConfig {
    // Background
    pub bg_type: BackgroundType,
    pub bg_color: Rgba8,
    pub gradient_from: Rgba8,
    pub gradient_to: Rgba8,
    pub gradient_direction: GradientDirection,
    /// Flat black overlay strength over image backgrounds, 0..=1.
    pub bg_overlay_opacity: f64,

    // Text
    pub title: String,
    pub title_size: f64,
    pub title_color: Rgba8,
    pub title_weight: TitleWeight,
    pub subtitle: String,
    pub subtitle_size: f64,
    pub subtitle_color: Rgba8,
    pub author: String,
    pub author_size: f64,
    pub author_color: Rgba8,
    pub text_align: TextAlign,
    pub text_v_align: TextVAlign,
    pub font_family: FontFamily,

    // Style
    pub padding: f64,
    pub show_badge: bool,
    pub badge_text: String,
    pub badge_color: Rgba8,
    pub accent_bar_height: f64,
    pub accent_bar_color: Rgba8,

    // Logo
    pub show_logo: bool,
    pub logo_position: LogoPosition,
    pub logo_size: f64,
    pub logo_border_radius: f64,
}

impl Default for OgConfig {
    fn default() -> Self {
        Self {
            bg_type: BackgroundType::Gradient,
            bg_color: Rgba8::rgb(0x0a, 0x0a, 0x0a),
            gradient_from: Rgba8::rgb(0x0f, 0x17, 0x2a),
            gradient_to: Rgba8::rgb(0x1e, 0x3a, 0x5f),
            gradient_direction: GradientDirection::ToBottomRight,
            bg_overlay_opacity: 0.6,

            title: "My Blog Post Title".to_string(),
            title_size: 56.0,
            title_color: Rgba8::rgb(0xff, 0xff, 0xff),
            title_weight: TitleWeight::Bold,
            subtitle: "A short description of the blog post".to_string(),
            subtitle_size: 24.0,
            subtitle_color: Rgba8::rgb(0x94, 0xa3, 0xb8),
            author: "Author Name".to_string(),
            author_size: 18.0,
            author_color: Rgba8::rgb(0x64, 0x74, 0x8b),
            text_align: TextAlign::Left,
            text_v_align: TextVAlign::Center,
            font_family: FontFamily::SansSerif,

            padding: 80.0,
            show_badge: true,
            badge_text: "myblog.dev".to_string(),
            badge_color: Rgba8::rgb(0x22, 0xc5, 0x5e),
            accent_bar_height: 6.0,
            accent_bar_color: Rgba8::rgb(0x22, 0xc5, 0x5e),

            show_logo: false,
            logo_position: LogoPosition::BottomRight,
            logo_size: 64.0,
            logo_border_radius: 12.0,
        }
    }
}
