//! Domain type definitions.

mod identity;
mod library;
mod profile;

pub use identity::{AuthOutcome, Identity, NewIdentity, PublicIdentity, SessionToken};
pub use library::{EntryDraft, LibraryEntry, DEFAULT_STATUS};
pub use profile::{Profile, ProfileUpdate, DEFAULT_THEME_COLOR};

// Re-export the catalog library's public types
pub use gameshelf_catalog::{CatalogCandidate, CatalogGame, CatalogPlatforms};
