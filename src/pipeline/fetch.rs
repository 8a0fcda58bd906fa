// src/pipeline/fetch.rs

//! Aggregate fetch pipeline.
//!
//! Runs each source lookup sequentially and merges the outputs into one
//! `ExamInfo`. Sub-lookups degrade to empty/absent values on failure;
//! only client construction errors propagate.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Config, ExamInfo};
use crate::services::{BookSearch, PaperLinkScraper, VideoSearch, WikiResolver};
use crate::utils::http;

/// Which optional source groups to query.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Query the video platform (videos and one playlist)
    pub include_videos: bool,

    /// Query the books API and the paper archives
    pub include_books: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            include_videos: true,
            include_books: true,
        }
    }
}

/// Fetch and merge exam information from all configured sources.
pub async fn fetch_exam_info(
    config: Arc<Config>,
    query: &str,
    options: FetchOptions,
) -> Result<ExamInfo> {
    let client = http::create_client(&config.http)?;

    log::info!("Looking up encyclopedia info for '{query}'");
    let wikipedia = WikiResolver::new(Arc::clone(&config), client.clone())
        .lookup(query)
        .await;

    let (videos, playlist) = if options.include_videos {
        let service = VideoSearch::new(Arc::clone(&config), client.clone());
        log::info!("Looking up videos for '{query}'");
        let videos = service.search_videos(query, config.lookup.max_videos).await;
        let playlist = service.search_playlist(query).await;
        (videos, playlist)
    } else {
        (Vec::new(), None)
    };

    let (books, pyq_links) = if options.include_books {
        log::info!("Looking up books and paper links for '{query}'");
        let books = BookSearch::new(Arc::clone(&config), client.clone())
            .search_books(query, config.lookup.max_books)
            .await;
        let pyq_links = PaperLinkScraper::new(Arc::clone(&config), client)
            .scrape(query)
            .await;
        (books, pyq_links)
    } else {
        (Vec::new(), Vec::new())
    };

    Ok(ExamInfo {
        query: query.to_string(),
        wikipedia,
        videos,
        playlist,
        books,
        pyq_links,
    })
}
