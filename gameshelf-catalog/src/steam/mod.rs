//! Steam catalog client.
//!
//! Two read-only endpoints back the lookup feature:
//! - community `SearchApps` for free-text search
//! - store `appdetails` for full metadata on a single app

mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::{CatalogError, Result};
use crate::types::{CatalogCandidate, CatalogGame};

use types::{map_app_data, map_search_hits, AppDetailsEnvelope, SearchHit};

pub(crate) const SEARCH_BASE: &str = "https://steamcommunity.com/actions/SearchApps";
pub(crate) const DETAILS_BASE: &str = "https://store.steampowered.com/api/appdetails";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Steam catalog lookup client.
///
/// All requests are time-bounded by the client-wide timeout and fail closed:
/// a hung upstream surfaces as [`CatalogError::Timeout`], never as a stall.
pub struct SteamCatalog {
    client: Client,
}

impl SteamCatalog {
    /// Create a client with the default timeouts.
    ///
    /// # Errors
    /// Returns `CatalogError::NetworkError` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CatalogError::NetworkError(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Free-text search against the catalog.
    ///
    /// An empty (or whitespace-only) query is rejected before any request is
    /// made. A catalog with no hits yields `Ok(vec![])`.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogCandidate>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CatalogError::InvalidQuery(
                "Search query is required".to_string(),
            ));
        }

        let url = format!("{SEARCH_BASE}/{}", urlencoding::encode(query));
        let body = self.execute(&url).await?;

        let hits: Vec<SearchHit> = serde_json::from_str(&body).map_err(|e| {
            log::error!("[steam] search response parse failed: {e}");
            CatalogError::ParseError(e.to_string())
        })?;

        Ok(map_search_hits(hits))
    }

    /// Full metadata for one app id.
    ///
    /// Missing entries and `success: false` responses both map to
    /// [`CatalogError::AppNotFound`].
    pub async fn app_details(&self, app_id: i64) -> Result<CatalogGame> {
        let url = format!("{DETAILS_BASE}?appids={app_id}");
        let body = self.execute(&url).await?;

        let mut envelope: AppDetailsEnvelope = serde_json::from_str(&body).map_err(|e| {
            log::error!("[steam] appdetails response parse failed: {e}");
            CatalogError::ParseError(e.to_string())
        })?;

        let entry = envelope
            .remove(&app_id.to_string())
            .ok_or(CatalogError::AppNotFound(app_id))?;

        if !entry.success {
            return Err(CatalogError::AppNotFound(app_id));
        }

        let data = entry.data.ok_or(CatalogError::AppNotFound(app_id))?;
        Ok(map_app_data(app_id, data))
    }

    /// Execute a GET request and return the response body.
    async fn execute(&self, url: &str) -> Result<String> {
        log::debug!("[steam] GET {url}");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout(e.to_string())
            } else {
                CatalogError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        log::debug!("[steam] Response Status: {status}");

        if !status.is_success() {
            return Err(CatalogError::NetworkError(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| CatalogError::NetworkError(format!("Failed to read response body: {e}")))
    }
}
