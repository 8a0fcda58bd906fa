//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Result-count limits per lookup
    #[serde(default)]
    pub lookup: LookupConfig,

    /// External service endpoints
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// Paper archive registry, gated by exam keyword
    #[serde(default = "defaults::default_archives")]
    pub archives: Vec<ArchiveSite>,

    /// Video platform API key (falls back to the YOUTUBE_API_KEY env var)
    #[serde(default)]
    pub youtube_api_key: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Resolve the video API key from config or environment.
    pub fn youtube_api_key(&self) -> Option<String> {
        self.youtube_api_key
            .clone()
            .or_else(|| std::env::var("YOUTUBE_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if self.lookup.max_videos == 0 {
            return Err(AppError::config("lookup.max_videos must be > 0"));
        }
        if self.lookup.max_books == 0 {
            return Err(AppError::config("lookup.max_books must be > 0"));
        }
        if self.lookup.max_pyq_links == 0 {
            return Err(AppError::config("lookup.max_pyq_links must be > 0"));
        }
        for archive in &self.archives {
            if archive.exam_keyword.trim().is_empty() {
                return Err(AppError::config(format!(
                    "archive '{}' has an empty exam_keyword",
                    archive.site
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            lookup: LookupConfig::default(),
            endpoints: EndpointConfig::default(),
            archives: defaults::default_archives(),
            youtube_api_key: None,
        }
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Result-count limits per lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Maximum videos to request
    #[serde(default = "defaults::max_videos")]
    pub max_videos: usize,

    /// Maximum books to request
    #[serde(default = "defaults::max_books")]
    pub max_books: usize,

    /// Maximum combined paper links across all archives
    #[serde(default = "defaults::max_pyq_links")]
    pub max_pyq_links: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_videos: defaults::max_videos(),
            max_books: defaults::max_books(),
            max_pyq_links: defaults::max_pyq_links(),
        }
    }
}

/// External service endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Encyclopedia search API
    #[serde(default = "defaults::wiki_search_api")]
    pub wiki_search_api: String,

    /// Encyclopedia rendered-page endpoint (slug appended)
    #[serde(default = "defaults::wiki_page_html")]
    pub wiki_page_html: String,

    /// Video platform search endpoint
    #[serde(default = "defaults::youtube_search_api")]
    pub youtube_search_api: String,

    /// Books metadata search endpoint
    #[serde(default = "defaults::books_api")]
    pub books_api: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            wiki_search_api: defaults::wiki_search_api(),
            wiki_page_html: defaults::wiki_page_html(),
            youtube_search_api: defaults::youtube_search_api(),
            books_api: defaults::books_api(),
        }
    }
}

/// A paper archive page, registered when the query contains its keyword.
///
/// Entries are scanned in order and the first keyword match per site wins,
/// so list higher-priority exams first for each site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveSite {
    /// Archive site display name
    pub site: String,

    /// Lowercase keyword that must appear in the query
    pub exam_keyword: String,

    /// Exam label shown in results
    pub exam_label: String,

    /// Archive page URL to scrape
    pub url: String,
}

mod defaults {
    use super::ArchiveSite;

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; examscout/1.0)".into()
    }
    pub fn timeout() -> u64 {
        12
    }

    // Lookup defaults
    pub fn max_videos() -> usize {
        6
    }
    pub fn max_books() -> usize {
        6
    }
    pub fn max_pyq_links() -> usize {
        5
    }

    // Endpoint defaults
    pub fn wiki_search_api() -> String {
        "https://en.wikipedia.org/w/api.php".into()
    }
    pub fn wiki_page_html() -> String {
        "https://en.wikipedia.org/api/rest_v1/page/html".into()
    }
    pub fn youtube_search_api() -> String {
        "https://www.googleapis.com/youtube/v3/search".into()
    }
    pub fn books_api() -> String {
        "https://www.googleapis.com/books/v1/volumes".into()
    }

    // Archive defaults
    pub fn default_archives() -> Vec<ArchiveSite> {
        vec![
            ArchiveSite {
                site: "Examsnet".to_string(),
                exam_keyword: "neet".to_string(),
                exam_label: "NEET".to_string(),
                url: "https://www.examsnet.com/exams/neet-chapterwise-previous-question-papers-online".to_string(),
            },
            ArchiveSite {
                site: "Examsnet".to_string(),
                exam_keyword: "jee".to_string(),
                exam_label: "JEE Mains".to_string(),
                url: "https://www.examsnet.com/exams/jee-mains-chapterwise-previous-year-questions-online".to_string(),
            },
            ArchiveSite {
                site: "Selfstudys".to_string(),
                exam_keyword: "neet".to_string(),
                exam_label: "NEET".to_string(),
                url: "https://www.selfstudys.com/books/neet-previous-year-paper/page/year-wise".to_string(),
            },
            ArchiveSite {
                site: "Selfstudys".to_string(),
                exam_keyword: "jee".to_string(),
                exam_label: "JEE Mains".to_string(),
                url: "https://www.selfstudys.com/books/jee-main-previous-year-paper/page/year-wise".to_string(),
            },
        ]
    }
}
