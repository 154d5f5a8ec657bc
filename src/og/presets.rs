//! Named starting-point styles. Each preset is a complete [`OgConfig`]
//! derived from the default via struct update, so applying one never leaks
//! state from a previously edited config.

use crate::{
    color::Rgba8,
    og::config::{
        BackgroundType, FontFamily, GradientDirection, OgConfig, TextAlign, TextVAlign,
        TitleWeight,
    },
};

#[derive(Clone, Debug)]
pub struct OgPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub config: OgConfig,
}

#[derive(Clone, Copy, Debug)]
pub struct GradientPreset {
    pub name: &'static str,
    pub from: Rgba8,
    pub to: Rgba8,
    pub direction: GradientDirection,
}

pub fn og_presets() -> Vec<OgPreset> {
    let base = OgConfig::default;
    vec![
        OgPreset {
            name: "Minimal Dark",
            description: "Clean dark gradient, left-aligned",
            config: OgConfig {
                bg_type: BackgroundType::Gradient,
                gradient_from: Rgba8::rgb(0x0a, 0x0a, 0x0a),
                gradient_to: Rgba8::rgb(0x17, 0x17, 0x17),
                gradient_direction: GradientDirection::ToBottomRight,
                title_size: 56.0,
                title_color: Rgba8::rgb(0xfa, 0xfa, 0xfa),
                title_weight: TitleWeight::Bold,
                subtitle_color: Rgba8::rgb(0x73, 0x73, 0x73),
                author_color: Rgba8::rgb(0x52, 0x52, 0x52),
                show_badge: false,
                accent_bar_height: 0.0,
                ..base()
            },
        },
        OgPreset {
            name: "Tech Blog",
            description: "Bold gradient with accent bar",
            config: OgConfig {
                gradient_from: Rgba8::rgb(0x0f, 0x17, 0x2a),
                gradient_to: Rgba8::rgb(0x1e, 0x3a, 0x5f),
                title_size: 52.0,
                badge_text: "dev.to".to_string(),
                badge_color: Rgba8::rgb(0x3b, 0x82, 0xf6),
                accent_bar_height: 6.0,
                accent_bar_color: Rgba8::rgb(0x3b, 0x82, 0xf6),
                ..base()
            },
        },
        OgPreset {
            name: "Warm Ember",
            description: "Warm tones with serif typography",
            config: OgConfig {
                gradient_from: Rgba8::rgb(0x1a, 0x0a, 0x00),
                gradient_to: Rgba8::rgb(0x7c, 0x2d, 0x12),
                title_size: 54.0,
                title_color: Rgba8::rgb(0xfe, 0xf3, 0xc7),
                subtitle_color: Rgba8::rgb(0xd9, 0x77, 0x06),
                author_color: Rgba8::rgb(0xb4, 0x53, 0x09),
                font_family: FontFamily::Serif,
                badge_text: "blog".to_string(),
                badge_color: Rgba8::rgb(0xf5, 0x9e, 0x0b),
                accent_bar_height: 4.0,
                accent_bar_color: Rgba8::rgb(0xf5, 0x9e, 0x0b),
                ..base()
            },
        },
        OgPreset {
            name: "Forest",
            description: "Green tones, clean & calm",
            config: OgConfig {
                gradient_from: Rgba8::rgb(0x05, 0x2e, 0x16),
                gradient_to: Rgba8::rgb(0x16, 0x65, 0x34),
                title_size: 54.0,
                title_color: Rgba8::rgb(0xec, 0xfd, 0xf5),
                subtitle_color: Rgba8::rgb(0x6e, 0xe7, 0xb7),
                author_color: Rgba8::rgb(0x34, 0xd3, 0x99),
                badge_text: "read".to_string(),
                accent_bar_height: 5.0,
                ..base()
            },
        },
        OgPreset {
            name: "Centered Bold",
            description: "Center-aligned, large type",
            config: OgConfig {
                bg_type: BackgroundType::Solid,
                bg_color: Rgba8::rgb(0x09, 0x09, 0x0b),
                title_size: 64.0,
                title_color: Rgba8::rgb(0xfa, 0xfa, 0xfa),
                subtitle_size: 26.0,
                subtitle_color: Rgba8::rgb(0x71, 0x71, 0x7a),
                author_color: Rgba8::rgb(0x52, 0x52, 0x5b),
                text_align: TextAlign::Center,
                padding: 100.0,
                show_badge: false,
                accent_bar_height: 0.0,
                ..base()
            },
        },
        OgPreset {
            name: "Mono Hacker",
            description: "Monospace, terminal-style look",
            config: OgConfig {
                bg_type: BackgroundType::Solid,
                bg_color: Rgba8::rgb(0x02, 0x06, 0x17),
                title_size: 44.0,
                title_color: Rgba8::rgb(0x22, 0xd3, 0xee),
                subtitle_size: 22.0,
                subtitle_color: Rgba8::rgb(0x47, 0x55, 0x69),
                author_size: 16.0,
                author_color: Rgba8::rgb(0x33, 0x41, 0x55),
                text_v_align: TextVAlign::Bottom,
                font_family: FontFamily::Monospace,
                badge_text: "$ ./blog".to_string(),
                badge_color: Rgba8::rgb(0x22, 0xd3, 0xee),
                accent_bar_height: 3.0,
                accent_bar_color: Rgba8::rgb(0x22, 0xd3, 0xee),
                ..base()
            },
        },
    ]
}

pub fn gradient_presets() -> Vec<GradientPreset> {
    vec![
        GradientPreset {
            name: "Ocean",
            from: Rgba8::rgb(0x0f, 0x17, 0x2a),
            to: Rgba8::rgb(0x1e, 0x3a, 0x5f),
            direction: GradientDirection::ToBottomRight,
        },
        GradientPreset {
            name: "Sunset",
            from: Rgba8::rgb(0x7c, 0x2d, 0x12),
            to: Rgba8::rgb(0xc2, 0x41, 0x0c),
            direction: GradientDirection::ToRight,
        },
        GradientPreset {
            name: "Forest",
            from: Rgba8::rgb(0x05, 0x2e, 0x16),
            to: Rgba8::rgb(0x16, 0x65, 0x34),
            direction: GradientDirection::ToBottomRight,
        },
        GradientPreset {
            name: "Midnight",
            from: Rgba8::rgb(0x0c, 0x0a, 0x09),
            to: Rgba8::rgb(0x1c, 0x19, 0x17),
            direction: GradientDirection::ToBottom,
        },
        GradientPreset {
            name: "Lavender",
            from: Rgba8::rgb(0x1e, 0x1b, 0x4b),
            to: Rgba8::rgb(0x37, 0x30, 0xa3),
            direction: GradientDirection::ToBottomRight,
        },
        GradientPreset {
            name: "Ember",
            from: Rgba8::rgb(0x1a, 0x0a, 0x00),
            to: Rgba8::rgb(0x9a, 0x34, 0x12),
            direction: GradientDirection::ToTopRight,
        },
    ]
}
