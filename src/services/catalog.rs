//! Catalog service - validated creation, listing and detail lookup.

use std::sync::Arc;

use uuid::Uuid;

use crate::db::VideoStore;
use crate::error::{AppError, Result};
use crate::models::{NewVideo, VideoRecord};

use super::listing;
use super::watch_link;

/// Longest identifier the catalog will store.
pub const MAX_VIDEO_ID_LEN: usize = 43;

/// Entry points of the catalog, wired against an injected store.
pub struct CatalogService {
    store: Arc<dyn VideoStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self { store }
    }

    /// Validate the submitted URL, extract its identifier and persist
    /// the record. Validation runs on every attempt, before the store is
    /// touched; a validation failure never writes anything.
    pub async fn add_video(
        &self,
        name: String,
        url: String,
        notes: Option<String>,
    ) -> Result<VideoRecord> {
        let video_id = watch_link::validate_and_extract(&url)?;
        if video_id.len() > MAX_VIDEO_ID_LEN {
            return Err(AppError::Validation(format!(
                "video identifier longer than {} characters: {}",
                MAX_VIDEO_ID_LEN, url
            )));
        }

        let notes = notes.filter(|n| !n.trim().is_empty());
        self.store
            .insert(NewVideo {
                name,
                url,
                notes,
                video_id,
            })
            .await
    }

    /// Snapshot the catalog and run the listing engine over it.
    pub async fn list_videos(&self, search_term: Option<&str>) -> Result<Vec<VideoRecord>> {
        let records = self.store.fetch_all().await?;
        Ok(listing::list_videos(records, search_term))
    }

    pub async fn get_video(&self, id: Uuid) -> Result<VideoRecord> {
        self.store
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no video with id {}", id)))
    }
}
