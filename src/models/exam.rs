//! Aggregate result data structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Page sections keyed by lowercased heading text, in document order.
///
/// Document order matters: the section classifier's substring fallback takes
/// the first matching heading, and the report lists headings as they appear.
pub type SectionMap = IndexMap<String, String>;

/// Information extracted from the best-matching Wikipedia page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiInfo {
    /// Resolved page title
    pub title: Option<String>,

    /// Lead/summary text
    pub summary: Option<String>,

    /// Syllabus section text, if a heading matched
    pub syllabus: Option<String>,

    /// Exam pattern section text, if a heading matched
    pub pattern: Option<String>,

    /// All extracted sections (lowercased heading -> body text)
    #[serde(default)]
    pub sections: SectionMap,
}

/// A suggested video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Video title
    pub title: String,

    /// Platform video identifier
    pub id: String,

    /// Full watch URL
    pub url: String,
}

/// A suggested playlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist title
    pub title: String,

    /// Platform playlist identifier
    pub id: String,

    /// Full playlist URL
    pub url: String,
}

/// A suggested book from the books metadata API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Book title
    pub title: Option<String>,

    /// Authors in listed order
    #[serde(default)]
    pub authors: Vec<String>,

    /// Publisher name
    pub publisher: Option<String>,

    /// Link to the book's info page
    pub info_link: Option<String>,
}

/// A previous-year question paper link scraped from an archive site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PyqLink {
    /// Archive site display name
    pub site: String,

    /// Exam label the archive page covers
    pub exam: String,

    /// Anchor text
    pub title: String,

    /// Resolved absolute URL
    pub link: String,
}

/// Aggregate exam-preparation record assembled per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExamInfo {
    /// The original user query
    pub query: String,

    /// Wikipedia-derived information
    pub wikipedia: WikiInfo,

    /// Suggested videos (empty when disabled or unavailable)
    pub videos: Vec<Video>,

    /// One suggested playlist, if found
    pub playlist: Option<Playlist>,

    /// Suggested books
    pub books: Vec<Book>,

    /// Previous-year paper links
    pub pyq_links: Vec<PyqLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_exam_info_is_empty() {
        let info = ExamInfo::default();
        assert!(info.wikipedia.title.is_none());
        assert!(info.videos.is_empty());
        assert!(info.playlist.is_none());
        assert!(info.books.is_empty());
        assert!(info.pyq_links.is_empty());
    }

    #[test]
    fn exam_info_json_round_trip() {
        let info = ExamInfo {
            query: "NEET".to_string(),
            wikipedia: WikiInfo {
                title: Some("NEET (UG)".to_string()),
                ..WikiInfo::default()
            },
            videos: vec![Video {
                title: "Crash course".to_string(),
                id: "abc123".to_string(),
                url: "https://www.youtube.com/watch?v=abc123".to_string(),
            }],
            ..ExamInfo::default()
        };

        let json = serde_json::to_string(&info).unwrap();
        let parsed: ExamInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn section_map_preserves_insertion_order() {
        let mut sections = SectionMap::new();
        sections.insert("zebra".to_string(), "z".to_string());
        sections.insert("alpha".to_string(), "a".to_string());
        let keys: Vec<_> = sections.keys().collect();
        assert_eq!(keys, vec!["zebra", "alpha"]);
    }
}
