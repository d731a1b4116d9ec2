use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{NewVideo, VideoRecord};

use super::VideoStore;

/// Postgres-backed video store.
///
/// Uniqueness of `video_id` is enforced by a unique index, so concurrent
/// submissions of the same video cannot both commit. `seq` is a bigserial
/// column that preserves insertion order for the listing path.
pub struct PgVideoStore {
    pool: PgPool,
}

impl PgVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn insert(&self, video: NewVideo) -> Result<VideoRecord> {
        let record = sqlx::query_as::<_, VideoRecord>(
            r#"
            INSERT INTO videos (name, url, notes, video_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, url, notes, video_id, created_at
            "#,
        )
        .bind(&video.name)
        .bind(&video.url)
        .bind(&video.notes)
        .bind(&video.video_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(e) if e.is_unique_violation() => AppError::Conflict(format!(
                "video {} is already in the catalog",
                video.video_id
            )),
            other => AppError::from(other),
        })?;

        Ok(record)
    }

    async fn fetch_all(&self) -> Result<Vec<VideoRecord>> {
        let records = sqlx::query_as::<_, VideoRecord>(
            r#"
            SELECT id, name, url, notes, video_id, created_at
            FROM videos
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<VideoRecord>> {
        let record = sqlx::query_as::<_, VideoRecord>(
            r#"
            SELECT id, name, url, notes, video_id, created_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
