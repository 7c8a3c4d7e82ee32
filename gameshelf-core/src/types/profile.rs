//! Profile types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default theme color applied at profile creation.
pub const DEFAULT_THEME_COLOR: &str = "#6366f1";

/// Display attributes extending an identity, exactly one per identity.
///
/// `username` is joined from the identity on read; it is not stored on the
/// profile row itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Profile row id.
    pub id: i64,
    /// Owning identity id.
    #[serde(rename = "identityId")]
    pub identity_id: i64,
    /// Joined username of the owning identity.
    pub username: String,
    /// Display name, defaults to the username at creation.
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// Free-text bio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar image reference.
    #[serde(rename = "avatarUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Theme color, `#6366f1` by default.
    #[serde(rename = "themeColor")]
    pub theme_color: Option<String>,
    /// Banner image reference.
    #[serde(rename = "bannerUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    /// Creation time.
    #[serde(rename = "createdAt")]
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    #[serde(rename = "updatedAt")]
    #[serde(with = "crate::utils::datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Full-replace payload for the five display fields.
///
/// This is REPLACE, not PATCH: a field left `None` overwrites the stored
/// value with absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// New bio.
    pub bio: Option<String>,
    /// New avatar reference.
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
    /// New theme color.
    #[serde(rename = "themeColor")]
    pub theme_color: Option<String>,
    /// New banner reference.
    #[serde(rename = "bannerUrl")]
    pub banner_url: Option<String>,
}
