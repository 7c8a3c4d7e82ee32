//! Storage layer abstraction trait definition

mod identity_repository;
mod library_repository;
mod profile_repository;

pub use identity_repository::IdentityRepository;
pub use library_repository::LibraryRepository;
pub use profile_repository::ProfileRepository;
