//! Public catalog types returned to callers.

use serde::{Deserialize, Serialize};

/// One search hit from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogCandidate {
    /// Catalog app id.
    #[serde(rename = "appId")]
    pub app_id: i64,
    /// Display name.
    pub name: String,
    /// Small icon URL, if the catalog provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Platform availability flags for a catalog entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogPlatforms {
    #[serde(default)]
    pub windows: bool,
    #[serde(default)]
    pub mac: bool,
    #[serde(default)]
    pub linux: bool,
}

/// Full metadata for a single catalog entry, used to prefill library entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogGame {
    /// Catalog app id.
    #[serde(rename = "appId")]
    pub app_id: i64,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Header/cover image URL.
    #[serde(rename = "headerImage")]
    pub header_image: Option<String>,
    /// Developer studios.
    pub developers: Vec<String>,
    /// Publishers.
    pub publishers: Vec<String>,
    /// Genre names.
    pub genres: Vec<String>,
    /// Platform availability.
    pub platforms: CatalogPlatforms,
    /// Human-readable release date, if known.
    #[serde(rename = "releaseDate")]
    pub release_date: Option<String>,
    /// Formatted price, `"Free"` when the catalog reports no price.
    pub price: String,
    /// Up to five screenshot URLs.
    pub screenshots: Vec<String>,
}
