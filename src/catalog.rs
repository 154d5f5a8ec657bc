//! Built-in web asset catalog: the standard favicon / touch-icon / tile /
//! social sizes a site ships. Pure data; callers may pass any subset (or
//! their own list) to the batch pipeline.

use crate::{
    encode::AssetFormat,
    target::{AssetTarget, Category},
};

struct Row(&'static str, u32, u32, AssetFormat, Category, &'static str);

const ROWS: &[Row] = &[
    // Favicons
    Row("favicon-16x16.png", 16, 16, AssetFormat::Png, Category::Favicon, "Standard favicon"),
    Row("favicon-32x32.png", 32, 32, AssetFormat::Png, Category::Favicon, "Standard favicon"),
    Row("favicon-48x48.png", 48, 48, AssetFormat::Png, Category::Favicon, "Standard favicon"),
    Row("favicon.ico", 48, 48, AssetFormat::Ico, Category::Favicon, "ICO favicon"),
    // Apple touch icons
    Row("apple-touch-icon.png", 180, 180, AssetFormat::Png, Category::Apple, "Apple Touch Icon"),
    Row("apple-touch-icon-57x57.png", 57, 57, AssetFormat::Png, Category::Apple, "iPhone (iOS 6)"),
    Row("apple-touch-icon-60x60.png", 60, 60, AssetFormat::Png, Category::Apple, "iPhone (iOS 7+)"),
    Row("apple-touch-icon-72x72.png", 72, 72, AssetFormat::Png, Category::Apple, "iPad (iOS 6)"),
    Row("apple-touch-icon-76x76.png", 76, 76, AssetFormat::Png, Category::Apple, "iPad (iOS 7+)"),
    Row("apple-touch-icon-114x114.png", 114, 114, AssetFormat::Png, Category::Apple, "iPhone Retina (iOS 6)"),
    Row("apple-touch-icon-120x120.png", 120, 120, AssetFormat::Png, Category::Apple, "iPhone Retina (iOS 7+)"),
    Row("apple-touch-icon-144x144.png", 144, 144, AssetFormat::Png, Category::Apple, "iPad Retina (iOS 6)"),
    Row("apple-touch-icon-152x152.png", 152, 152, AssetFormat::Png, Category::Apple, "iPad Retina (iOS 7+)"),
    Row("apple-touch-icon-180x180.png", 180, 180, AssetFormat::Png, Category::Apple, "iPhone 6 Plus"),
    // Android Chrome
    Row("android-chrome-192x192.png", 192, 192, AssetFormat::Png, Category::Android, "Android Chrome"),
    Row("android-chrome-384x384.png", 384, 384, AssetFormat::Png, Category::Android, "Android Chrome HD"),
    Row("android-chrome-512x512.png", 512, 512, AssetFormat::Png, Category::Android, "Android Chrome XHD"),
    // Social / Open Graph
    Row("og-image.png", 1200, 630, AssetFormat::Png, Category::Social, "Open Graph (Facebook/LinkedIn)"),
    Row("twitter-card.png", 1200, 600, AssetFormat::Png, Category::Social, "Twitter Card"),
    // Microsoft tiles
    Row("mstile-70x70.png", 70, 70, AssetFormat::Png, Category::Ms, "MS Tile Small"),
    Row("mstile-144x144.png", 144, 144, AssetFormat::Png, Category::Ms, "MS Tile Medium"),
    Row("mstile-150x150.png", 150, 150, AssetFormat::Png, Category::Ms, "MS Tile Square"),
    Row("mstile-310x150.png", 310, 150, AssetFormat::Png, Category::Ms, "MS Tile Wide"),
    Row("mstile-310x310.png", 310, 310, AssetFormat::Png, Category::Ms, "MS Tile Large"),
    // WebP variants
    Row("favicon-32x32.webp", 32, 32, AssetFormat::Webp, Category::Webp, "WebP Favicon"),
    Row("favicon-96x96.webp", 96, 96, AssetFormat::Webp, Category::Webp, "WebP Favicon HD"),
    Row("icon-192x192.webp", 192, 192, AssetFormat::Webp, Category::Webp, "WebP Icon"),
    Row("icon-384x384.webp", 384, 384, AssetFormat::Webp, Category::Webp, "WebP Icon HD"),
    Row("icon-512x512.webp", 512, 512, AssetFormat::Webp, Category::Webp, "WebP Icon XHD"),
    Row("og-image.webp", 1200, 630, AssetFormat::Webp, Category::Webp, "WebP OG Image"),
    Row("twitter-card.webp", 1200, 600, AssetFormat::Webp, Category::Webp, "WebP Twitter Card"),
    Row("cover-1200x800.webp", 1200, 800, AssetFormat::Webp, Category::Webp, "WebP Blog Cover"),
    Row("thumbnail-480x320.webp", 480, 320, AssetFormat::Webp, Category::Webp, "WebP Thumbnail"),
    // SVG variants
    Row("favicon.svg", 32, 32, AssetFormat::Svg, Category::Svg, "SVG Favicon"),
    Row("icon.svg", 512, 512, AssetFormat::Svg, Category::Svg, "SVG Icon"),
    Row("safari-pinned-tab.svg", 16, 16, AssetFormat::Svg, Category::Svg, "Safari Pinned Tab"),
    Row("logo-mark.svg", 256, 256, AssetFormat::Svg, Category::Svg, "SVG Logo Mark"),
    Row("og-image.svg", 1200, 630, AssetFormat::Svg, Category::Svg, "SVG OG Image"),
];

/// The full default target list, in publication order.
pub fn default_targets() -> Vec<AssetTarget> {
    ROWS.iter()
        .map(|Row(name, width, height, format, category, description)| AssetTarget {
            name: (*name).to_string(),
            width: *width,
            height: *height,
            format: *format,
            category: *category,
            description: (*description).to_string(),
        })
        .collect()
}
