use serde::{Deserialize, Serialize};

/// Metadata for a YouTube video, flattened from the Data API's snippet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub description: String,
    pub video_id: String,
    pub channel_name: String,
    pub title: String,
    pub tags: Vec<String>,
    pub channel_id: String,
    pub thumbnail_url: String,
    pub category_id: String,
    pub published_at: String,
    pub video_url: String,
    pub default_audio_language: String,
    pub default_language: String,
}

/// Public watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("http://www.youtube.com/watch?v={}", video_id)
}
