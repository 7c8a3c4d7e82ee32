//! Credential hashing and session-token issuing.

pub mod password;
mod token;

pub use token::SessionSigner;
