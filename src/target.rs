use serde::{Deserialize, Serialize};

use crate::encode::{AssetFormat, Blob};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Grouping label for catalog/manifest collaborators. Opaque to the
/// generation logic itself.
pub enum Category {
    Favicon,
    Apple,
    Android,
    Social,
    Ms,
    Webp,
    Svg,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Favicon => "Favicon",
            Category::Apple => "Apple Touch Icon",
            Category::Android => "Android Chrome",
            Category::Social => "Social / OG Image",
            Category::Ms => "Microsoft Tile",
            Category::Webp => "WebP",
            Category::Svg => "SVG",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One requested output asset. `name` includes the extension and must be
/// unique across a batch; uniqueness is a caller contract, not enforced here.
pub struct AssetTarget {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub format: AssetFormat,
    pub category: Category,
    pub description: String,
}

#[derive(Clone, Debug)]
/// A produced asset. Owned by the caller once returned; the pipeline keeps
/// no references and every regeneration supersedes prior blobs.
pub struct GeneratedAsset {
    pub target: AssetTarget,
    pub blob: Blob,
}
