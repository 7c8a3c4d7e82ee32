//! Datetime serialization/deserialization helpers.
//!
//! - Serialization: `DateTime<Utc>` -> RFC3339 string
//! - Deserialization: RFC3339 string -> `DateTime<Utc>`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from an RFC3339 string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}")))
}
