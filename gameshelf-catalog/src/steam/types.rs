//! Steam wire formats and their mapping into public catalog types.

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::{CatalogCandidate, CatalogGame, CatalogPlatforms};

/// One hit from the community `SearchApps` endpoint.
///
/// Steam returns `appid` as a string here, unlike the store API.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub appid: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Envelope of the store `appdetails` endpoint: app id → entry.
pub(crate) type AppDetailsEnvelope = HashMap<String, AppDetailsEntry>;

#[derive(Debug, Deserialize)]
pub(crate) struct AppDetailsEntry {
    pub success: bool,
    pub data: Option<RawAppData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAppData {
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(default)]
    pub developers: Option<Vec<String>>,
    #[serde(default)]
    pub publishers: Option<Vec<String>>,
    #[serde(default)]
    pub genres: Option<Vec<RawGenre>>,
    #[serde(default)]
    pub platforms: Option<CatalogPlatforms>,
    #[serde(default)]
    pub release_date: Option<RawReleaseDate>,
    #[serde(default)]
    pub price_overview: Option<RawPrice>,
    #[serde(default)]
    pub screenshots: Option<Vec<RawScreenshot>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGenre {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawReleaseDate {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPrice {
    pub final_formatted: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawScreenshot {
    pub path_full: String,
}

/// Maximum number of screenshots carried over into `CatalogGame`.
const MAX_SCREENSHOTS: usize = 5;

/// Map search hits into candidates, dropping hits with unparseable app ids.
pub(crate) fn map_search_hits(hits: Vec<SearchHit>) -> Vec<CatalogCandidate> {
    hits.into_iter()
        .filter_map(|hit| match hit.appid.parse::<i64>() {
            Ok(app_id) => Some(CatalogCandidate {
                app_id,
                name: hit.name,
                icon: hit.icon,
            }),
            Err(_) => {
                log::debug!("Skipping search hit with non-numeric appid: {}", hit.appid);
                None
            }
        })
        .collect()
}

/// Map a raw `appdetails` payload into a `CatalogGame`.
pub(crate) fn map_app_data(app_id: i64, data: RawAppData) -> CatalogGame {
    CatalogGame {
        app_id,
        name: data.name,
        description: data.short_description,
        header_image: data.header_image,
        developers: data.developers.unwrap_or_default(),
        publishers: data.publishers.unwrap_or_default(),
        genres: data
            .genres
            .unwrap_or_default()
            .into_iter()
            .map(|g| g.description)
            .collect(),
        platforms: data.platforms.unwrap_or_default(),
        release_date: data.release_date.and_then(|r| r.date),
        price: data
            .price_overview
            .map_or_else(|| "Free".to_string(), |p| p.final_formatted),
        screenshots: data
            .screenshots
            .unwrap_or_default()
            .into_iter()
            .take(MAX_SCREENSHOTS)
            .map(|s| s.path_full)
            .collect(),
    }
}
