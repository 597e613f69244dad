//! YouTube Data API v3 wrapper.
//!
//! Looks up video metadata and channel titles with an API key
//! (GOOGLE_API_KEY). Only the read-only list endpoints are used.

use crate::config::YouTubeConfig;
use crate::domain::video::{watch_url, VideoMetadata};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("YouTube request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Video not found on YT: {0}")]
    VideoNotFound(String),

    #[error("No items returned")]
    NoItems,
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VideoItem {
    snippet: VideoSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VideoSnippet {
    description: String,
    channel_title: String,
    title: String,
    tags: Vec<String>,
    channel_id: String,
    thumbnails: Thumbnails,
    category_id: String,
    published_at: String,
    default_audio_language: String,
    default_language: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Thumbnails {
    default: Option<Thumbnail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChannelItem {
    snippet: ChannelSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChannelSnippet {
    title: String,
}

/// Client for the YouTube Data API.
#[derive(Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(config: YouTubeConfig) -> Self {
        if config.api_key.is_empty() {
            warn!("GOOGLE_API_KEY is not set, YouTube requests will be rejected");
        }
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key,
            base_url: config.base_url,
        }
    }

    /// Look up snippet metadata for a video id.
    pub async fn lookup_video(&self, video_id: &str) -> Result<VideoMetadata, YouTubeError> {
        debug!(video_id, "Looking up video");
        let response: ListResponse<VideoItem> = self
            .list(
                "videos",
                &[("part", "snippet,contentDetails,statistics"), ("id", video_id)],
            )
            .await?;
        video_metadata(video_id, response)
    }

    /// Title of the channel owned by `username`.
    pub async fn channel_title_by_username(
        &self,
        part: &str,
        username: &str,
    ) -> Result<String, YouTubeError> {
        let response: ListResponse<ChannelItem> = self
            .list("channels", &[("part", part), ("forUsername", username)])
            .await?;
        first_channel_title(response)
    }

    /// Title of the channel with id `channel_id`.
    pub async fn channel_title_by_id(
        &self,
        part: &str,
        channel_id: &str,
    ) -> Result<String, YouTubeError> {
        let response: ListResponse<ChannelItem> = self
            .list("channels", &[("part", part), ("id", channel_id)])
            .await?;
        first_channel_title(response)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<T>, YouTubeError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, resource))
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }
}

fn video_metadata(
    video_id: &str,
    response: ListResponse<VideoItem>,
) -> Result<VideoMetadata, YouTubeError> {
    let item = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| YouTubeError::VideoNotFound(video_id.to_string()))?;
    let snippet = item.snippet;

    Ok(VideoMetadata {
        description: snippet.description,
        video_id: video_id.to_string(),
        channel_name: snippet.channel_title,
        title: snippet.title,
        tags: snippet.tags,
        channel_id: snippet.channel_id,
        thumbnail_url: snippet
            .thumbnails
            .default
            .map(|t| t.url)
            .unwrap_or_default(),
        category_id: snippet.category_id,
        published_at: snippet.published_at,
        video_url: watch_url(video_id),
        default_audio_language: snippet.default_audio_language,
        default_language: snippet.default_language,
    })
}

fn first_channel_title(response: ListResponse<ChannelItem>) -> Result<String, YouTubeError> {
    response
        .items
        .into_iter()
        .next()
        .map(|item| item.snippet.title)
        .ok_or(YouTubeError::NoItems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const VIDEO_RESPONSE: &str = r#"{
        "kind": "youtube#videoListResponse",
        "items": [{
            "id": "abc123",
            "snippet": {
                "publishedAt": "2019-03-01T10:00:00Z",
                "channelId": "UC42",
                "title": "A title",
                "description": "A description",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/vi/abc123/default.jpg", "width": 120, "height": 90 }
                },
                "channelTitle": "Some Channel",
                "tags": ["music", "live"],
                "categoryId": "10",
                "defaultAudioLanguage": "en"
            }
        }]
    }"#;

    /// Serve one canned HTTP response and hand back the request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let request = String::from_utf8_lossy(&request).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });

        (base_url, handle)
    }

    fn client(base_url: String) -> YouTubeClient {
        YouTubeClient::new(YouTubeConfig {
            api_key: "test-key".to_string(),
            base_url,
        })
    }

    #[test]
    fn test_video_metadata_mapping() {
        let response: ListResponse<VideoItem> = serde_json::from_str(VIDEO_RESPONSE).unwrap();
        let meta = video_metadata("abc123", response).unwrap();

        assert_eq!(meta.video_id, "abc123");
        assert_eq!(meta.title, "A title");
        assert_eq!(meta.description, "A description");
        assert_eq!(meta.channel_name, "Some Channel");
        assert_eq!(meta.channel_id, "UC42");
        assert_eq!(meta.tags, vec!["music", "live"]);
        assert_eq!(meta.thumbnail_url, "https://i.ytimg.com/vi/abc123/default.jpg");
        assert_eq!(meta.category_id, "10");
        assert_eq!(meta.published_at, "2019-03-01T10:00:00Z");
        assert_eq!(meta.video_url, "http://www.youtube.com/watch?v=abc123");
        assert_eq!(meta.default_audio_language, "en");
        assert_eq!(meta.default_language, "");
    }

    #[test]
    fn test_empty_video_list_is_not_found() {
        let response: ListResponse<VideoItem> =
            serde_json::from_str(r#"{"kind": "youtube#videoListResponse", "items": []}"#).unwrap();
        assert!(matches!(
            video_metadata("gone", response),
            Err(YouTubeError::VideoNotFound(id)) if id == "gone"
        ));
    }

    #[test]
    fn test_missing_items_decode_for_any_item_type() {
        #[derive(Debug, Deserialize)]
        struct IdOnly {
            #[allow(dead_code)]
            id: String,
        }

        let response: ListResponse<IdOnly> =
            serde_json::from_str(r#"{"kind": "youtube#channelListResponse"}"#).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_channel_without_items() {
        let response: ListResponse<ChannelItem> = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            first_channel_title(response),
            Err(YouTubeError::NoItems)
        ));
    }

    #[tokio::test]
    async fn test_lookup_video_over_http() {
        let (base_url, server) = serve_once("200 OK", VIDEO_RESPONSE).await;

        let meta = client(base_url).lookup_video("abc123").await.unwrap();
        assert_eq!(meta.title, "A title");

        let request_line = server.await.unwrap();
        assert!(request_line.starts_with("GET /videos?"));
        assert!(request_line.contains("id=abc123"));
        assert!(request_line.contains("key=test-key"));
    }

    #[tokio::test]
    async fn test_channel_title_by_id_over_http() {
        let body = r#"{"items": [{"id": "UC42", "snippet": {"title": "Some Channel"}}]}"#;
        let (base_url, server) = serve_once("200 OK", body).await;

        let title = client(base_url)
            .channel_title_by_id("snippet", "UC42")
            .await
            .unwrap();
        assert_eq!(title, "Some Channel");

        let request_line = server.await.unwrap();
        assert!(request_line.starts_with("GET /channels?"));
        assert!(request_line.contains("id=UC42"));
    }

    #[tokio::test]
    async fn test_error_status_is_returned() {
        let body = r#"{"error": {"code": 403, "message": "quota"}}"#;
        let (base_url, server) = serve_once("403 Forbidden", body).await;

        let err = client(base_url)
            .channel_title_by_username("snippet", "someone")
            .await
            .unwrap_err();
        assert!(matches!(err, YouTubeError::Status { status: 403, .. }));

        let request_line = server.await.unwrap();
        assert!(request_line.contains("forUsername=someone"));
    }
}
