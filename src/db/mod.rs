//! Storage collaborators for the catalog.

mod memory;
mod video_repo;

pub use memory::MemoryVideoStore;
pub use video_repo::PgVideoStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewVideo, VideoRecord};

/// Record store the catalog service is wired against.
///
/// `insert` must be atomic: a write either fully commits a new record or
/// fails with no partial state. A duplicate `video_id` fails with
/// `AppError::Conflict`.
#[async_trait]
pub trait VideoStore: Send + Sync {
    async fn insert(&self, video: NewVideo) -> Result<VideoRecord>;

    /// All records, in insertion order.
    async fn fetch_all(&self) -> Result<Vec<VideoRecord>>;

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<VideoRecord>>;
}
