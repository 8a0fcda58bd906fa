// src/services/papers.rs

//! Previous-year question paper link scraper.
//!
//! Archives are registered per site when the query contains their exam
//! keyword; each registered page is fetched and its anchors filtered by
//! href/text heuristics. Queries matching no keyword produce no links
//! (known limitation of the archive registry, preserved deliberately).

use std::sync::Arc;

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ArchiveSite, Config, PyqLink};
use crate::utils::{http, resolve_url};

/// Service for scraping paper links from archive sites.
pub struct PaperLinkScraper {
    config: Arc<Config>,
    client: Client,
}

impl PaperLinkScraper {
    /// Create a new paper link scraper.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Scrape paper links for a query. Pages that fail to fetch are
    /// skipped; the combined result is truncated to the configured
    /// maximum in site-then-page order.
    pub async fn scrape(&self, query: &str) -> Vec<PyqLink> {
        let mut pages = Vec::new();
        for archive in self.registered_archives(query) {
            match http::fetch_page(&self.client, &archive.url).await {
                Ok(document) => pages.push((archive, document)),
                Err(e) => {
                    log::warn!("Archive fetch failed for {} ({}): {e}", archive.site, archive.url);
                }
            }
        }
        self.collect_links(&pages)
    }

    /// Select archives whose keyword appears in the lowercased query.
    /// One entry per site: the first match in registry order wins, so
    /// a query naming several exams still picks a single page per site.
    fn registered_archives(&self, query: &str) -> Vec<&ArchiveSite> {
        let query_lower = query.to_lowercase();
        let mut selected: Vec<&ArchiveSite> = Vec::new();

        for archive in &self.config.archives {
            if selected.iter().any(|chosen| chosen.site == archive.site) {
                continue;
            }
            if query_lower.contains(&archive.exam_keyword) {
                selected.push(archive);
            }
        }
        selected
    }

    /// Extract matching anchors from fetched pages and truncate the
    /// combined list.
    fn collect_links(&self, pages: &[(&ArchiveSite, Html)]) -> Vec<PyqLink> {
        let anchor_sel = match parse_selector("a[href]") {
            Ok(sel) => sel,
            Err(e) => {
                log::warn!("Anchor selector failed to parse: {e}");
                return Vec::new();
            }
        };

        let mut links = Vec::new();
        for (archive, document) in pages {
            let Ok(base) = Url::parse(&archive.url) else {
                log::warn!("Skipping archive with unparsable URL: {}", archive.url);
                continue;
            };

            for anchor in document.select(&anchor_sel) {
                let Some(href) = anchor.value().attr("href") else {
                    continue;
                };
                let text = anchor
                    .text()
                    .flat_map(str::split_whitespace)
                    .collect::<Vec<_>>()
                    .join(" ");

                if keep_anchor(href, &text) {
                    links.push(PyqLink {
                        site: archive.site.clone(),
                        exam: archive.exam_label.clone(),
                        title: text,
                        link: resolve_url(&base, href),
                    });
                }
            }
        }

        links.truncate(self.config.lookup.max_pyq_links);
        links
    }
}

/// Keep an anchor when its href mentions "pdf" or its visible text
/// mentions "previous" or "paper" (all case-insensitive).
fn keep_anchor(href: &str, text: &str) -> bool {
    let href_lower = href.to_lowercase();
    let text_lower = text.to_lowercase();
    href_lower.contains("pdf") || text_lower.contains("previous") || text_lower.contains("paper")
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraper() -> PaperLinkScraper {
        PaperLinkScraper::new(Arc::new(Config::default()), Client::new())
    }

    #[test]
    fn jee_query_selects_jee_archives() {
        let service = scraper();
        let archives = service.registered_archives("JEE Main 2024");
        assert_eq!(archives.len(), 2);
        assert!(archives.iter().all(|a| a.exam_label == "JEE Mains"));
        assert!(archives.iter().all(|a| a.url.contains("jee")));
    }

    #[test]
    fn neet_query_selects_neet_archives() {
        let service = scraper();
        let archives = service.registered_archives("neet ug");
        assert_eq!(archives.len(), 2);
        assert!(archives.iter().all(|a| a.exam_label == "NEET"));
    }

    #[test]
    fn neet_takes_priority_when_both_keywords_match() {
        let service = scraper();
        let archives = service.registered_archives("NEET vs JEE");
        assert_eq!(archives.len(), 2);
        assert!(archives.iter().all(|a| a.exam_label == "NEET"));
    }

    #[test]
    fn unknown_exam_registers_nothing() {
        let service = scraper();
        assert!(service.registered_archives("UPSC CSE").is_empty());
    }

    #[test]
    fn keep_anchor_filters_by_href_and_text() {
        assert!(keep_anchor("papers/2023.PDF", "download"));
        assert!(keep_anchor("/x", "Previous year questions"));
        assert!(keep_anchor("/x", "Solved Paper 2022"));
        assert!(!keep_anchor("/about", "Contact us"));
    }

    #[test]
    fn collect_links_resolves_relative_hrefs() {
        let service = scraper();
        let archive = ArchiveSite {
            site: "Examsnet".to_string(),
            exam_keyword: "neet".to_string(),
            exam_label: "NEET".to_string(),
            url: "https://x/y/".to_string(),
        };
        let document = Html::parse_document(r#"<a href="papers/2023.pdf">NEET 2023</a>"#);

        let links = service.collect_links(&[(&archive, document)]);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].link, "https://x/y/papers/2023.pdf");
        assert_eq!(links[0].site, "Examsnet");
        assert_eq!(links[0].exam, "NEET");
        assert_eq!(links[0].title, "NEET 2023");
    }

    #[test]
    fn combined_links_truncate_to_maximum() {
        let service = scraper();
        let archive = ArchiveSite {
            site: "Examsnet".to_string(),
            exam_keyword: "neet".to_string(),
            exam_label: "NEET".to_string(),
            url: "https://www.examsnet.com/exams/neet".to_string(),
        };
        let anchors: String = (0..12)
            .map(|i| format!(r#"<a href="/p{i}.pdf">Paper {i}</a>"#))
            .collect();
        let document = Html::parse_document(&anchors);

        let links = service.collect_links(&[(&archive, document)]);
        assert_eq!(links.len(), 5);
        // Scrape order preserved
        assert_eq!(links[0].title, "Paper 0");
        assert_eq!(links[4].title, "Paper 4");
    }

    #[test]
    fn non_matching_anchors_are_dropped() {
        let service = scraper();
        let archive = ArchiveSite {
            site: "Selfstudys".to_string(),
            exam_keyword: "jee".to_string(),
            exam_label: "JEE Mains".to_string(),
            url: "https://www.selfstudys.com/books/".to_string(),
        };
        let document = Html::parse_document(
            r#"<a href="/login">Sign in</a><a href="/jee.pdf">JEE set</a>"#,
        );

        let links = service.collect_links(&[(&archive, document)]);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].link, "https://www.selfstudys.com/jee.pdf");
    }
}
