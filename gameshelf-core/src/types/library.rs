//! Library entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default status for new entries.
pub const DEFAULT_STATUS: &str = "backlog";

/// One tracked game, owned by exactly one identity.
///
/// `status` is free-form by contract: `backlog`/`playing`/`completed` by
/// convention, but the store never validates it. `progress` is expected to
/// be 0–100, also unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Entry id, monotonic per store instance.
    pub id: i64,
    /// Owning identity id.
    #[serde(rename = "identityId")]
    pub identity_id: i64,
    /// External catalog reference (Steam app id), if the entry was prefilled.
    #[serde(rename = "catalogId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<i64>,
    /// Game title. Required, non-empty.
    pub title: String,
    /// Platform the game is owned on. Required, non-empty.
    pub platform: String,
    /// Play status.
    pub status: String,
    /// Completion percentage.
    pub progress: i32,
    /// User rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    /// Cover image reference.
    #[serde(rename = "coverUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Ordered genre list. Encoded as JSON text on the durable backend,
    /// native list on the ephemeral one; callers never see the encoding.
    pub genres: Vec<String>,
    /// Accumulated playtime. The unit is whatever the caller tracks.
    pub playtime: i32,
    /// Date the user started playing, as a free-form date string.
    #[serde(rename = "startedDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_date: Option<String>,
    /// Date the user finished, as a free-form date string.
    #[serde(rename = "completedDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation time.
    #[serde(rename = "createdAt")]
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    #[serde(rename = "updatedAt")]
    #[serde(with = "crate::utils::datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or fully replacing an entry.
///
/// There is no partial-patch mode. On create and update alike, `status`,
/// `progress`, `playtime` and `genres` fall back to their creation defaults
/// (`backlog`, 0, 0, `[]`) when absent; every other field is written
/// literally, `None` overwriting any stored value. The one exception is
/// `catalog_id`, which only applies at creation; updates keep the stored
/// link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDraft {
    /// External catalog reference.
    #[serde(rename = "catalogId")]
    pub catalog_id: Option<i64>,
    /// Title. Validated non-empty at the service boundary, not in the store.
    pub title: String,
    /// Platform. Validated non-empty at the service boundary.
    pub platform: String,
    /// Play status.
    pub status: Option<String>,
    /// Completion percentage.
    pub progress: Option<i32>,
    /// User rating.
    pub rating: Option<i32>,
    /// Cover image reference.
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
    /// Genre list.
    pub genres: Option<Vec<String>>,
    /// Accumulated playtime.
    pub playtime: Option<i32>,
    /// Started date string.
    #[serde(rename = "startedDate")]
    pub started_date: Option<String>,
    /// Completed date string.
    #[serde(rename = "completedDate")]
    pub completed_date: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl EntryDraft {
    /// Resolved status with the creation default applied.
    #[must_use]
    pub fn status_or_default(&self) -> String {
        self.status
            .clone()
            .unwrap_or_else(|| DEFAULT_STATUS.to_string())
    }

    /// Resolved progress with the creation default applied.
    #[must_use]
    pub fn progress_or_default(&self) -> i32 {
        self.progress.unwrap_or(0)
    }

    /// Resolved playtime with the creation default applied.
    #[must_use]
    pub fn playtime_or_default(&self) -> i32 {
        self.playtime.unwrap_or(0)
    }

    /// Resolved genre list with the creation default applied.
    #[must_use]
    pub fn genres_or_default(&self) -> Vec<String> {
        self.genres.clone().unwrap_or_default()
    }
}
