// src/services/wiki.rs

//! Wikipedia resolver service.
//!
//! Finds the best-matching page for an exam query, fetches its rendered
//! HTML, and assembles a `WikiInfo` via the section heuristics.

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Config, WikiInfo};
use crate::services::sections;
use crate::utils::http;

/// MediaWiki search API response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: SearchQuery,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

/// Service for resolving and extracting encyclopedia page content.
pub struct WikiResolver {
    config: Arc<Config>,
    client: Client,
}

impl WikiResolver {
    /// Create a new resolver with the given configuration and client.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Fetch Wikipedia-derived info for a query. Best-effort: any failure
    /// along the way yields a partially filled (or empty) `WikiInfo`.
    pub async fn lookup(&self, query: &str) -> WikiInfo {
        let mut info = WikiInfo::default();

        let Some(title) = self.resolve_title(query).await else {
            log::warn!("No encyclopedia page found for '{query}'");
            return info;
        };
        info.title = Some(title.clone());

        let Some(html) = self.fetch_rendered_html(&title).await else {
            log::warn!("Could not fetch rendered page for '{title}'");
            return info;
        };

        let sections = match sections::split_into_sections(&html) {
            Ok(sections) => sections,
            Err(e) => {
                log::warn!("Section extraction failed for '{title}': {e}");
                return info;
            }
        };

        info.summary = sections
            .get("summary")
            .filter(|text| !text.is_empty())
            .or_else(|| sections.get("introduction").filter(|text| !text.is_empty()))
            .cloned();
        info.syllabus = sections::syllabus_section(&sections).map(str::to_string);
        info.pattern = sections::pattern_section(&sections).map(str::to_string);
        info.sections = sections;
        info
    }

    /// Resolve the best-matching page title: search with an " exam" suffix
    /// first, then retry with the bare query.
    async fn resolve_title(&self, query: &str) -> Option<String> {
        match self.search_title(&format!("{query} exam")).await {
            Ok(Some(title)) => Some(title),
            Ok(None) => self.search_title(query).await.ok().flatten(),
            Err(e) => {
                log::warn!("Title search failed for '{query} exam': {e}");
                self.search_title(query).await.ok().flatten()
            }
        }
    }

    /// Search the encyclopedia and return the first result's title.
    async fn search_title(&self, term: &str) -> Result<Option<String>> {
        let response: SearchResponse = http::get_json(
            &self.client,
            &self.config.endpoints.wiki_search_api,
            &[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", term),
                ("format", "json"),
                ("srlimit", "5"),
            ],
        )
        .await?;

        Ok(response.query.search.into_iter().next().map(|hit| hit.title))
    }

    /// Fetch rendered HTML for a page title (spaces become underscores).
    /// Returns None on any transport error or non-success status.
    async fn fetch_rendered_html(&self, title: &str) -> Option<String> {
        let slug = title.replace(' ', "_");
        let url = format!(
            "{}/{slug}",
            self.config.endpoints.wiki_page_html.trim_end_matches('/')
        );

        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            log::debug!("Rendered page fetch for '{title}' returned {}", response.status());
            return None;
        }
        response.text().await.ok()
    }
}
