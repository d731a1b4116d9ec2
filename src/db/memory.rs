use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{NewVideo, VideoRecord};

use super::VideoStore;

/// In-memory video store with the same contract as the Postgres store.
///
/// The write lock serializes inserts, so the duplicate check and the push
/// are atomic. Records stay in insertion order. Used by the test suite;
/// no database required.
#[derive(Debug, Default)]
pub struct MemoryVideoStore {
    records: RwLock<Vec<VideoRecord>>,
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn insert(&self, video: NewVideo) -> Result<VideoRecord> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.video_id == video.video_id) {
            return Err(AppError::Conflict(format!(
                "video {} is already in the catalog",
                video.video_id
            )));
        }

        let record = VideoRecord {
            id: Uuid::new_v4(),
            name: video.name,
            url: video.url,
            notes: video.notes,
            video_id: video.video_id,
            created_at: Utc::now(),
        };
        records.push(record.clone());

        Ok(record)
    }

    async fn fetch_all(&self) -> Result<Vec<VideoRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<VideoRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}
