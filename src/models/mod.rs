use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalogued video link.
///
/// `video_id` is derived from `url` at write time and is unique across
/// the catalog; it is never user-supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct VideoRecord {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    pub video_id: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a catalog insert.
///
/// `video_id` has already been extracted from `url`; the store persists
/// it as-is and never re-derives it.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    pub video_id: String,
}
