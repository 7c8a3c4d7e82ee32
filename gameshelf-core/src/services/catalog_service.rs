//! External catalog lookup, wrapped for the service boundary.

use std::sync::Arc;

use gameshelf_catalog::SteamCatalog;

use crate::error::{CoreError, CoreResult};
use crate::types::{CatalogCandidate, CatalogGame};

/// Thin service over the catalog client.
///
/// Lookup failures must never take the store layer down: the client is
/// time-bounded and every error arrives here as a typed `CatalogError`,
/// classified by `CoreError::is_expected` for logging.
pub struct CatalogService {
    catalog: Arc<SteamCatalog>,
}

impl CatalogService {
    /// Create a catalog service instance.
    #[must_use]
    pub fn new(catalog: Arc<SteamCatalog>) -> Self {
        Self { catalog }
    }

    /// Free-text catalog search.
    pub async fn search(&self, query: &str) -> CoreResult<Vec<CatalogCandidate>> {
        if query.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Search query is required".to_string(),
            ));
        }
        Ok(self.catalog.search(query).await?)
    }

    /// Full metadata for one catalog app id.
    pub async fn app_details(&self, app_id: i64) -> CoreResult<CatalogGame> {
        Ok(self.catalog.app_details(app_id).await?)
    }
}
