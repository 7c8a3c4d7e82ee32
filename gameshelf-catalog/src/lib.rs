//! # gameshelf-catalog
//!
//! Steam catalog lookup client for Gameshelf.
//!
//! The contract is deliberately small: given a free-text query or a catalog
//! app id, return metadata or not-found. Requests are time-bounded and fail
//! closed: a hung upstream surfaces as an error, never as a stall.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gameshelf_catalog::SteamCatalog;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = SteamCatalog::new()?;
//!
//!     let candidates = catalog.search("celeste").await?;
//!     if let Some(hit) = candidates.first() {
//!         let game = catalog.app_details(hit.app_id).await?;
//!         println!("{}: {}", game.name, game.price);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod steam;
pub mod types;

pub use error::{CatalogError, Result};
pub use steam::SteamCatalog;
pub use types::{CatalogCandidate, CatalogGame, CatalogPlatforms};
