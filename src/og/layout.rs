//! Pure layout and measurement for the social card: gradient geometry,
//! greedy word wrap with line-count truncation, vertical block stacking,
//! badge and logo placement. Everything here is a function of the config
//! and the fixed 1200×630 canvas; drawing happens in [`crate::og::render`].

use kurbo::Point;

use crate::{
    color::Rgba8,
    og::config::{
        FontFamily, GradientDirection, LogoPosition, OgConfig, TextAlign, TextVAlign, TitleWeight,
        OG_HEIGHT, OG_WIDTH,
    },
};

/// Line advance as a multiple of font size.
pub const LINE_HEIGHT: f64 = 1.3;
/// Vertical gap between the title and subtitle blocks.
pub const TEXT_GAP: f64 = 20.0;
/// Horizontal width held free for the badge when it is shown.
pub const BADGE_RESERVED_WIDTH: f64 = 200.0;
/// Extra clearance between text and a shown logo.
pub const LOGO_TEXT_GAP: f64 = 24.0;

pub const BADGE_FONT_SIZE: f64 = 16.0;
pub const BADGE_PAD_X: f64 = 16.0;
pub const BADGE_PAD_Y: f64 = 8.0;
pub const BADGE_FONT_WEIGHT: f32 = 600.0;

pub const TITLE_BOLD_WEIGHT: f32 = 700.0;
pub const TITLE_NORMAL_WEIGHT: f32 = 400.0;
pub const SUBTITLE_FONT_WEIGHT: f32 = 400.0;
pub const AUTHOR_FONT_WEIGHT: f32 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Font selection for one measured/drawn run.
pub struct TextStyle {
    pub family: FontFamily,
    pub size: f64,
    pub weight: f32,
}

/// Text width oracle. The renderer implements this with real shaping;
/// layout tests substitute a deterministic fake.
pub trait TextMeasure {
    fn text_width(&mut self, text: &str, style: &TextStyle) -> f64;
}

/// Endpoints of the two-stop gradient line for a canvas of `w`×`h`.
pub fn gradient_line(dir: GradientDirection, w: f64, h: f64) -> (Point, Point) {
    match dir {
        GradientDirection::ToRight => (Point::new(0.0, 0.0), Point::new(w, 0.0)),
        GradientDirection::ToLeft => (Point::new(w, 0.0), Point::new(0.0, 0.0)),
        GradientDirection::ToBottom => (Point::new(0.0, 0.0), Point::new(0.0, h)),
        GradientDirection::ToTop => (Point::new(0.0, h), Point::new(0.0, 0.0)),
        GradientDirection::ToBottomRight => (Point::new(0.0, 0.0), Point::new(w, h)),
        GradientDirection::ToBottomLeft => (Point::new(w, 0.0), Point::new(0.0, h)),
        GradientDirection::ToTopRight => (Point::new(0.0, h), Point::new(w, 0.0)),
        GradientDirection::ToTopLeft => (Point::new(w, h), Point::new(0.0, 0.0)),
    }
}

/// Greedy word wrap: words accumulate onto a line while the measured width
/// stays within `max_width`; an overflowing word starts the next line (a
/// single word wider than `max_width` stays alone on its line). Line count
/// is capped at `floor(canvas_h * 0.5 / (size * LINE_HEIGHT))`; when the cap
/// trims lines, the trailing word of the last kept line becomes `...`.
/// Empty input yields zero lines.
pub fn wrap_text(
    measure: &mut dyn TextMeasure,
    text: &str,
    style: &TextStyle,
    max_width: f64,
    canvas_h: f64,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure.text_width(&candidate, style) > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let max_lines = (canvas_h * 0.5 / (style.size * LINE_HEIGHT)).floor() as usize;
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            truncate_trailing_word(last);
        }
    }

    lines
}

/// Replace the trailing whitespace-plus-word with an ellipsis marker.
/// A line without interior whitespace is left untouched.
fn truncate_trailing_word(line: &mut String) {
    let trimmed = line.trim_end();
    let Some(word_start) = trimmed.rfind(char::is_whitespace) else {
        return;
    };
    let cut = trimmed[..word_start].trim_end().len();
    line.truncate(cut);
    line.push_str("...");
}

/// Width reserved at the text block's far side for overlapping chrome.
pub fn reserved_width(config: &OgConfig, logo_loaded: bool) -> f64 {
    let badge = if config.show_badge {
        BADGE_RESERVED_WIDTH
    } else {
        0.0
    };
    let logo = if config.show_logo && logo_loaded {
        config.logo_size + LOGO_TEXT_GAP
    } else {
        0.0
    };
    badge.max(logo)
}

/// Maximum measured pixel width for wrapped text lines.
pub fn max_text_width(config: &OgConfig, logo_loaded: bool) -> f64 {
    f64::from(OG_WIDTH) - config.padding * 2.0 - reserved_width(config, logo_loaded)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRole {
    Title,
    Subtitle,
    Author,
}

#[derive(Clone, Debug)]
/// One laid-out text line: content plus its top-Y and draw style.
pub struct PlacedLine {
    pub text: String,
    pub y: f64,
    pub style: TextStyle,
    pub color: Rgba8,
    pub role: LineRole,
}

#[derive(Clone, Debug)]
/// Complete text layout for a card: anchor, alignment and placed lines.
pub struct TextPlan {
    pub anchor_x: f64,
    pub align: TextAlign,
    pub lines: Vec<PlacedLine>,
    pub total_height: f64,
}

pub fn title_style(config: &OgConfig) -> TextStyle {
    TextStyle {
        family: config.font_family,
        size: config.title_size,
        weight: match config.title_weight {
            TitleWeight::Bold => TITLE_BOLD_WEIGHT,
            TitleWeight::Normal => TITLE_NORMAL_WEIGHT,
        },
    }
}

pub fn subtitle_style(config: &OgConfig) -> TextStyle {
    TextStyle {
        family: config.font_family,
        size: config.subtitle_size,
        weight: SUBTITLE_FONT_WEIGHT,
    }
}

pub fn author_style(config: &OgConfig) -> TextStyle {
    TextStyle {
        family: config.font_family,
        size: config.author_size,
        weight: AUTHOR_FONT_WEIGHT,
    }
}

/// Wrap all text blocks and stack them vertically on the fixed canvas.
pub fn plan_text(config: &OgConfig, measure: &mut dyn TextMeasure, logo_loaded: bool) -> TextPlan {
    let canvas_w = f64::from(OG_WIDTH);
    let canvas_h = f64::from(OG_HEIGHT);
    let max_width = max_text_width(config, logo_loaded);

    let t_style = title_style(config);
    let s_style = subtitle_style(config);
    let a_style = author_style(config);

    let title_lines = wrap_text(measure, &config.title, &t_style, max_width, canvas_h);
    let subtitle_lines = wrap_text(measure, &config.subtitle, &s_style, max_width, canvas_h);

    let title_h = title_lines.len() as f64 * config.title_size * LINE_HEIGHT;
    let subtitle_h = subtitle_lines.len() as f64 * config.subtitle_size * LINE_HEIGHT;
    let author_h = if config.author.is_empty() {
        0.0
    } else {
        config.author_size * LINE_HEIGHT
    };

    let total_height = title_h
        + if subtitle_h > 0.0 { TEXT_GAP + subtitle_h } else { 0.0 }
        + if author_h > 0.0 {
            TEXT_GAP * 1.5 + author_h
        } else {
            0.0
        };

    let mut y = match config.text_v_align {
        TextVAlign::Top => config.padding,
        TextVAlign::Bottom => canvas_h - config.padding - total_height - config.accent_bar_height,
        TextVAlign::Center => (canvas_h - config.accent_bar_height - total_height) / 2.0,
    };

    let anchor_x = match config.text_align {
        TextAlign::Left => config.padding,
        TextAlign::Right => canvas_w - config.padding,
        TextAlign::Center => canvas_w / 2.0,
    };

    let mut lines = Vec::new();
    for text in title_lines {
        lines.push(PlacedLine {
            text,
            y,
            style: t_style,
            color: config.title_color,
            role: LineRole::Title,
        });
        y += config.title_size * LINE_HEIGHT;
    }

    if subtitle_h > 0.0 {
        y += TEXT_GAP;
        for text in subtitle_lines {
            lines.push(PlacedLine {
                text,
                y,
                style: s_style,
                color: config.subtitle_color,
                role: LineRole::Subtitle,
            });
            y += config.subtitle_size * LINE_HEIGHT;
        }
    }

    if author_h > 0.0 {
        y += TEXT_GAP * 1.5;
        lines.push(PlacedLine {
            text: config.author.clone(),
            y,
            style: a_style,
            color: config.author_color,
            role: LineRole::Author,
        });
    }

    TextPlan {
        anchor_x,
        align: config.text_align,
        lines,
        total_height,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Badge pill geometry, anchored to the canvas top-right.
pub struct BadgeGeom {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

pub fn badge_style(config: &OgConfig) -> TextStyle {
    TextStyle {
        family: config.font_family,
        size: BADGE_FONT_SIZE,
        weight: BADGE_FONT_WEIGHT,
    }
}

/// Pill sized to the measured badge label; `None` when the badge is
/// disabled or its text is empty.
pub fn badge_geometry(config: &OgConfig, measure: &mut dyn TextMeasure) -> Option<BadgeGeom> {
    if !config.show_badge || config.badge_text.is_empty() {
        return None;
    }
    let text_w = measure.text_width(&config.badge_text, &badge_style(config));
    let width = text_w + BADGE_PAD_X * 2.0;
    let height = BADGE_FONT_SIZE + BADGE_PAD_Y * 2.0;
    Some(BadgeGeom {
        x: f64::from(OG_WIDTH) - config.padding - width,
        y: config.padding,
        width,
        height,
        radius: height / 2.0,
    })
}

/// Top-left corner of the logo square. Bottom rows sit above the accent bar.
pub fn logo_origin(config: &OgConfig) -> Point {
    let canvas_w = f64::from(OG_WIDTH);
    let canvas_h = f64::from(OG_HEIGHT);
    let s = config.logo_size;
    let p = config.padding;
    match config.logo_position {
        LogoPosition::TopLeft => Point::new(p, p),
        LogoPosition::TopRight => Point::new(canvas_w - p - s, p),
        LogoPosition::BottomLeft => {
            Point::new(p, canvas_h - p - s - config.accent_bar_height)
        }
        LogoPosition::BottomRight => Point::new(
            canvas_w - p - s,
            canvas_h - p - s - config.accent_bar_height,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::og::config::{OgConfig, OG_HEIGHT, OG_WIDTH};

    /// Deterministic stand-in: every char is 0.6em wide.
    struct FixedAdvance;

    impl TextMeasure for FixedAdvance {
        fn text_width(&mut self, text: &str, style: &TextStyle) -> f64 {
            text.chars().count() as f64 * style.size * 0.6
        }
    }

    fn style(size: f64) -> TextStyle {
        TextStyle {
            family: FontFamily::SansSerif,
            size,
            weight: 400.0,
        }
    }

    #[test]
    fn gradient_lines_hit_the_named_corners_and_edges() {
        let w = f64::from(OG_WIDTH);
        let h = f64::from(OG_HEIGHT);

        let (a, b) = gradient_line(GradientDirection::ToBottomRight, w, h);
        assert_eq!((a, b), (Point::new(0.0, 0.0), Point::new(1200.0, 630.0)));

        let (a, b) = gradient_line(GradientDirection::ToRight, w, h);
        assert_eq!((a, b), (Point::new(0.0, 0.0), Point::new(1200.0, 0.0)));

        let (a, b) = gradient_line(GradientDirection::ToTop, w, h);
        assert_eq!((a, b), (Point::new(0.0, 630.0), Point::new(0.0, 0.0)));

        let (a, b) = gradient_line(GradientDirection::ToTopLeft, w, h);
        assert_eq!((a, b), (Point::new(1200.0, 630.0), Point::new(0.0, 0.0)));
    }

    #[test]
    fn wrap_keeps_every_line_within_max_width() {
        let mut m = FixedAdvance;
        let st = style(20.0);
        let text = "the quick brown fox jumps over the lazy dog again and again";
        let max = 200.0;
        let lines = wrap_text(&mut m, text, &st, max, f64::from(OG_HEIGHT));
        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(m.text_width(line, &st) <= max, "line too wide: {line:?}");
        }
        // No content lost when the cap is not hit.
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        let mut m = FixedAdvance;
        assert!(wrap_text(&mut m, "", &style(20.0), 500.0, 630.0).is_empty());
    }

    #[test]
    fn single_overlong_word_stays_alone() {
        let mut m = FixedAdvance;
        let st = style(20.0);
        let lines = wrap_text(&mut m, "supercalifragilistic a", &st, 60.0, 630.0);
        assert_eq!(lines[0], "supercalifragilistic");
        assert_eq!(lines[1], "a");
    }

    #[test]
    fn line_cap_truncates_with_ellipsis() {
        let mut m = FixedAdvance;
        // size 100: max_lines = floor(315 / 130) = 2
        let st = style(100.0);
        let lines = wrap_text(
            &mut m,
            "one two three four five six seven eight",
            &st,
            400.0,
            f64::from(OG_HEIGHT),
        );
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."), "got {:?}", lines[1]);
    }

    #[test]
    fn ellipsis_replaces_trailing_word_and_space() {
        let mut s = "alpha beta gamma".to_string();
        truncate_trailing_word(&mut s);
        assert_eq!(s, "alpha beta...");

        let mut one = "word".to_string();
        truncate_trailing_word(&mut one);
        assert_eq!(one, "word");
    }

    #[test]
    fn reserved_width_takes_badge_logo_max() {
        let mut cfg = OgConfig {
            show_badge: true,
            show_logo: true,
            logo_size: 64.0,
            ..OgConfig::default()
        };
        // badge 200 vs logo 64+24
        assert_eq!(reserved_width(&cfg, true), 200.0);

        cfg.logo_size = 300.0;
        assert_eq!(reserved_width(&cfg, true), 324.0);

        // logo shown but no image handle: badge only
        assert_eq!(reserved_width(&cfg, false), 200.0);

        cfg.show_badge = false;
        cfg.show_logo = false;
        assert_eq!(reserved_width(&cfg, true), 0.0);
    }

    #[test]
    fn long_headline_with_badge_wraps_within_840px() {
        let cfg = OgConfig {
            title: "A very long headline that will not fit on one line easily".to_string(),
            ..OgConfig::default()
        };
        assert_eq!(max_text_width(&cfg, false), 840.0);

        let mut m = FixedAdvance;
        let plan = plan_text(&cfg, &mut m, false);
        let title: Vec<_> = plan
            .lines
            .iter()
            .filter(|l| l.role == LineRole::Title)
            .collect();
        assert!(title.len() >= 2);
        for l in &title {
            assert!(m.text_width(&l.text, &l.style) <= 840.0);
        }
    }

    #[test]
    fn vertical_stacking_top_bottom_center() {
        let mut m = FixedAdvance;
        let base = OgConfig {
            title: "Short".to_string(),
            subtitle: "Sub".to_string(),
            author: "Me".to_string(),
            ..OgConfig::default()
        };

        let top = plan_text(
            &OgConfig {
                text_v_align: TextVAlign::Top,
                ..base.clone()
            },
            &mut m,
            false,
        );
        assert_eq!(top.lines[0].y, base.padding);

        let bottom = plan_text(
            &OgConfig {
                text_v_align: TextVAlign::Bottom,
                ..base.clone()
            },
            &mut m,
            false,
        );
        assert_eq!(
            bottom.lines[0].y,
            f64::from(OG_HEIGHT) - base.padding - bottom.total_height - base.accent_bar_height
        );

        let center = plan_text(&base, &mut m, false);
        assert_eq!(
            center.lines[0].y,
            (f64::from(OG_HEIGHT) - base.accent_bar_height - center.total_height) / 2.0
        );

        // expected block height: 1 title line + gap + 1 subtitle + 1.5 gap + author
        let expect = 56.0 * LINE_HEIGHT
            + TEXT_GAP
            + 24.0 * LINE_HEIGHT
            + TEXT_GAP * 1.5
            + 18.0 * LINE_HEIGHT;
        assert!((center.total_height - expect).abs() < 1e-9);
    }

    #[test]
    fn blocks_stack_with_gaps_between_roles() {
        let mut m = FixedAdvance;
        let cfg = OgConfig {
            title: "Short".to_string(),
            subtitle: "Sub".to_string(),
            author: "Me".to_string(),
            text_v_align: TextVAlign::Top,
            ..OgConfig::default()
        };
        let plan = plan_text(&cfg, &mut m, false);
        assert_eq!(plan.lines.len(), 3);
        let title_y = plan.lines[0].y;
        let sub_y = plan.lines[1].y;
        let author_y = plan.lines[2].y;
        assert_eq!(sub_y, title_y + 56.0 * LINE_HEIGHT + TEXT_GAP);
        assert_eq!(author_y, sub_y + 24.0 * LINE_HEIGHT + TEXT_GAP * 1.5);
    }

    #[test]
    fn horizontal_anchor_tracks_alignment() {
        let mut m = FixedAdvance;
        let mk = |align| OgConfig {
            text_align: align,
            ..OgConfig::default()
        };
        assert_eq!(plan_text(&mk(TextAlign::Left), &mut m, false).anchor_x, 80.0);
        assert_eq!(
            plan_text(&mk(TextAlign::Right), &mut m, false).anchor_x,
            f64::from(OG_WIDTH) - 80.0
        );
        assert_eq!(
            plan_text(&mk(TextAlign::Center), &mut m, false).anchor_x,
            f64::from(OG_WIDTH) / 2.0
        );
    }

    #[test]
    fn empty_blocks_do_not_contribute_gaps() {
        let mut m = FixedAdvance;
        let cfg = OgConfig {
            title: "Only title".to_string(),
            subtitle: String::new(),
            author: String::new(),
            ..OgConfig::default()
        };
        let plan = plan_text(&cfg, &mut m, false);
        assert_eq!(plan.lines.len(), 1);
        assert!((plan.total_height - 56.0 * LINE_HEIGHT).abs() < 1e-9);
    }

    #[test]
    fn badge_pill_fits_its_label_and_hugs_top_right() {
        let mut m = FixedAdvance;
        let cfg = OgConfig::default();
        let geom = badge_geometry(&cfg, &mut m).unwrap();

        let text_w = m.text_width(&cfg.badge_text, &badge_style(&cfg));
        assert_eq!(geom.width, text_w + 32.0);
        assert_eq!(geom.height, 32.0);
        assert_eq!(geom.radius, 16.0);
        assert_eq!(geom.y, cfg.padding);
        assert_eq!(geom.x, f64::from(OG_WIDTH) - cfg.padding - geom.width);
    }

    #[test]
    fn badge_hidden_or_empty_yields_none() {
        let mut m = FixedAdvance;
        let off = OgConfig {
            show_badge: false,
            ..OgConfig::default()
        };
        assert!(badge_geometry(&off, &mut m).is_none());

        let empty = OgConfig {
            badge_text: String::new(),
            ..OgConfig::default()
        };
        assert!(badge_geometry(&empty, &mut m).is_none());
    }

    #[test]
    fn logo_corners_respect_padding_and_accent_bar() {
        let cfg = |pos| OgConfig {
            logo_position: pos,
            logo_size: 64.0,
            accent_bar_height: 6.0,
            ..OgConfig::default()
        };
        let w = f64::from(OG_WIDTH);
        let h = f64::from(OG_HEIGHT);

        assert_eq!(logo_origin(&cfg(LogoPosition::TopLeft)), Point::new(80.0, 80.0));
        assert_eq!(
            logo_origin(&cfg(LogoPosition::TopRight)),
            Point::new(w - 80.0 - 64.0, 80.0)
        );
        assert_eq!(
            logo_origin(&cfg(LogoPosition::BottomLeft)),
            Point::new(80.0, h - 80.0 - 64.0 - 6.0)
        );
        assert_eq!(
            logo_origin(&cfg(LogoPosition::BottomRight)),
            Point::new(w - 80.0 - 64.0, h - 80.0 - 64.0 - 6.0)
        );
    }
}
