//! Shared utility modules.

pub mod datetime;
