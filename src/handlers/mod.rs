//! HTTP handlers for the video catalog.
//!
//! Thin request-handling layer: field validation and JSON shaping live
//! here, the catalog semantics live in `services`.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::VideoRecord;
use crate::services::{listing, CatalogService};

#[derive(Debug, Deserialize, Validate)]
pub struct AddVideoPayload {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 400, message = "url must be 1-400 characters"))]
    pub url: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListVideosQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<VideoRecord>,
    pub count: usize,
    /// Count phrasing for display ("1 video", "2 videos").
    pub count_label: String,
}

/// Add a video to the catalog
pub async fn add_video(
    service: web::Data<CatalogService>,
    payload: web::Json<AddVideoPayload>,
) -> Result<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let payload = payload.into_inner();
    let video = service
        .add_video(payload.name, payload.url, payload.notes)
        .await?;

    tracing::info!(video_id = %video.video_id, "added video to catalog");

    Ok(HttpResponse::Created().json(video))
}

/// List the catalog, optionally filtered by a search term
pub async fn list_videos(
    service: web::Data<CatalogService>,
    query: web::Query<ListVideosQuery>,
) -> Result<HttpResponse> {
    let videos = service.list_videos(query.search.as_deref()).await?;
    let count = videos.len();

    tracing::debug!(count, search = ?query.search, "listing videos");

    Ok(HttpResponse::Ok().json(VideoListResponse {
        videos,
        count,
        count_label: listing::video_count_label(count),
    }))
}

/// Look up a single video by id
pub async fn get_video(
    service: web::Data<CatalogService>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let video = service.get_video(*id).await?;

    Ok(HttpResponse::Ok().json(video))
}

/// Configure routes for the catalog
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/videos")
            .route("", web::post().to(add_video))
            .route("", web::get().to(list_videos))
            .route("/{id}", web::get().to(get_video)),
    );
}
