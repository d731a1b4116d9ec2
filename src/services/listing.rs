//! Listing and search over catalog records.
//!
//! Pure functions over a record snapshot; the storage collaborator hands
//! in records in insertion order and the stable sort preserves that
//! order between equal names.

use crate::models::VideoRecord;

/// Filter and order records for the listing view.
///
/// An absent, empty or whitespace-only search term returns the whole
/// catalog. Matching is a case-insensitive substring check on `name`,
/// and the result is always sorted ascending by lowercased name.
pub fn list_videos(records: Vec<VideoRecord>, search_term: Option<&str>) -> Vec<VideoRecord> {
    let term = search_term
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let mut videos: Vec<VideoRecord> = match term {
        Some(term) => records
            .into_iter()
            .filter(|r| r.name.to_lowercase().contains(&term))
            .collect(),
        None => records,
    };

    videos.sort_by_key(|r| r.name.to_lowercase());
    videos
}

/// Count phrasing for the listing view ("1 video", "2 videos").
pub fn video_count_label(count: usize) -> String {
    if count == 1 {
        "1 video".to_string()
    } else {
        format!("{} videos", count)
    }
}
