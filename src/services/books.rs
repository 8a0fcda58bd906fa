// src/services/books.rs

//! Book lookup service.
//!
//! Queries the Google Books volumes endpoint with three OR'd phrasings of
//! the exam name (preparation / syllabus / guide).

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use crate::models::{Book, Config};
use crate::utils::http;

/// Volumes response envelope.
#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    #[serde(default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Option<Vec<String>>,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    info_link: Option<String>,
}

/// Service for book suggestions.
pub struct BookSearch {
    config: Arc<Config>,
    client: Client,
}

impl BookSearch {
    /// Create a new book search service.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Search for up to `limit` exam-prep books. Any failure yields an
    /// empty list.
    pub async fn search_books(&self, query: &str, limit: usize) -> Vec<Book> {
        let term = format!("{query} preparation OR {query} syllabus OR {query} guide");
        let max_results = limit.to_string();

        let response: VolumesResponse = match http::get_json(
            &self.client,
            &self.config.endpoints.books_api,
            &[("q", term.as_str()), ("maxResults", &max_results)],
        )
        .await
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Book search failed for '{query}': {e}");
                return Vec::new();
            }
        };

        map_books(response, limit)
    }
}

fn map_books(response: VolumesResponse, limit: usize) -> Vec<Book> {
    response
        .items
        .into_iter()
        .take(limit)
        .map(|volume| Book {
            title: volume.volume_info.title,
            authors: volume.volume_info.authors.unwrap_or_default(),
            publisher: volume.volume_info.publisher,
            info_link: volume.volume_info.info_link,
        })
        .collect()
}
