// src/services/videos.rs

//! Video platform lookup service.
//!
//! Queries the YouTube Data API v3 search endpoint for preparation videos
//! and one playlist. Disabled entirely when no API key is configured.

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Config, Playlist, Video};
use crate::utils::http;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const PLAYLIST_URL: &str = "https://www.youtube.com/playlist?list=";

/// Search-list response envelope.
#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: ResourceId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    #[serde(default)]
    video_id: Option<String>,
    #[serde(default)]
    playlist_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
}

/// Service for video and playlist suggestions.
pub struct VideoSearch {
    config: Arc<Config>,
    client: Client,
}

impl VideoSearch {
    /// Create a new video search service.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Search for up to `limit` preparation videos. Any failure, or a
    /// missing API key, yields an empty list.
    pub async fn search_videos(&self, query: &str, limit: usize) -> Vec<Video> {
        let Some(key) = self.config.youtube_api_key() else {
            log::debug!("No video API key configured; skipping video lookup");
            return Vec::new();
        };

        let term = format!("{query} preparation");
        match self.search(&term, "video", limit, &key).await {
            Ok(response) => map_videos(response),
            Err(e) => {
                log::warn!("Video search failed for '{query}': {e}");
                Vec::new()
            }
        }
    }

    /// Search for one preparation playlist. Returns None on failure, a
    /// missing API key, or an empty result.
    pub async fn search_playlist(&self, query: &str) -> Option<Playlist> {
        let Some(key) = self.config.youtube_api_key() else {
            log::debug!("No video API key configured; skipping playlist lookup");
            return None;
        };

        let term = format!("{query} preparation playlist");
        match self.search(&term, "playlist", 1, &key).await {
            Ok(response) => map_playlist(response),
            Err(e) => {
                log::warn!("Playlist search failed for '{query}': {e}");
                None
            }
        }
    }

    async fn search(
        &self,
        term: &str,
        kind: &str,
        limit: usize,
        key: &str,
    ) -> Result<SearchListResponse> {
        let max_results = limit.to_string();
        http::get_json(
            &self.client,
            &self.config.endpoints.youtube_search_api,
            &[
                ("part", "snippet"),
                ("q", term),
                ("maxResults", &max_results),
                ("type", kind),
                ("relevanceLanguage", "en"),
                ("key", key),
            ],
        )
        .await
    }
}

fn map_videos(response: SearchListResponse) -> Vec<Video> {
    response
        .items
        .into_iter()
        .filter_map(|item| {
            let id = item.id.video_id?;
            Some(Video {
                title: item.snippet.title,
                url: format!("{WATCH_URL}{id}"),
                id,
            })
        })
        .collect()
}

fn map_playlist(response: SearchListResponse) -> Option<Playlist> {
    response.items.into_iter().find_map(|item| {
        let id = item.id.playlist_id?;
        Some(Playlist {
            title: item.snippet.title,
            url: format!("{PLAYLIST_URL}{id}"),
            id,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_video_items_and_skips_non_videos() {
        let json = r#"{
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "v1"}, "snippet": {"title": "Crash course"}},
                {"id": {"kind": "youtube#channel", "channelId": "c1"}, "snippet": {"title": "A channel"}}
            ]
        }"#;
        let response: SearchListResponse = serde_json::from_str(json).unwrap();
        let videos = map_videos(response);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "v1");
        assert_eq!(videos[0].url, "https://www.youtube.com/watch?v=v1");
        assert_eq!(videos[0].title, "Crash course");
    }

    #[test]
    fn maps_first_playlist_item() {
        let json = r#"{
            "items": [
                {"id": {"playlistId": "pl1"}, "snippet": {"title": "Full prep series"}}
            ]
        }"#;
        let response: SearchListResponse = serde_json::from_str(json).unwrap();
        let playlist = map_playlist(response).unwrap();
        assert_eq!(playlist.id, "pl1");
        assert_eq!(playlist.url, "https://www.youtube.com/playlist?list=pl1");
    }

    #[test]
    fn empty_items_yield_no_playlist() {
        let response: SearchListResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(map_playlist(response).is_none());
    }

    #[tokio::test]
    async fn missing_key_disables_lookup_without_network() {
        let config = Arc::new(Config::default());
        // Guard against ambient credentials leaking into the test
        if config.youtube_api_key().is_some() {
            return;
        }
        let service = VideoSearch::new(config, Client::new());
        assert!(service.search_videos("NEET", 6).await.is_empty());
        assert!(service.search_playlist("NEET").await.is_none());
    }
}
