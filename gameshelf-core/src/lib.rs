//! Gameshelf Core Library
//!
//! Core business logic for the Gameshelf game-library tracker:
//! - Registration, login, and session assertions (Auth Service)
//! - Profile display attributes (Profile Service)
//! - Per-identity game library CRUD (Library Service)
//! - External catalog lookup (Catalog Service)
//!
//! The storage layer is abstracted through traits so that a durable SQL
//! backend and an ephemeral in-memory backend expose identical observable
//! behavior; backends live in the platform crate (`gameshelf-app`).

pub mod auth;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use auth::SessionSigner;
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{IdentityRepository, LibraryRepository, ProfileRepository};
