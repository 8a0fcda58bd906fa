// src/services/sections.rs

//! Heading/section extraction from rendered encyclopedia HTML, and the
//! keyword heuristics that pick syllabus and exam-pattern sections.
//!
//! Splitting walks headings in document order and accumulates the text of
//! the paragraph/list/div siblings that follow each one. Classification is
//! two-tier: exact canonical labels first, then a substring fallback over
//! headings in document order. First match wins, no scoring.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::SectionMap;

/// Canonical syllabus heading labels, in priority order.
const SYLLABUS_LABELS: [&str; 5] = [
    "syllabus",
    "curriculum",
    "exam syllabus",
    "syllabus and exam pattern",
    "syllabus and structure",
];

/// Substring fallback hints for syllabus headings.
const SYLLABUS_HINTS: [&str; 5] = ["syllabus", "curriculum", "subjects", "paper", "exam"];

/// Canonical exam-pattern heading labels, in priority order.
const PATTERN_LABELS: [&str; 5] = ["exam pattern", "pattern", "format", "structure", "scheme"];

/// Substring fallback hints for exam-pattern headings.
const PATTERN_HINTS: [&str; 5] = ["pattern", "structure", "format", "scheme", "paper"];

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];
const CONTENT_TAGS: [&str; 4] = ["p", "ul", "ol", "div"];

/// Split rendered page HTML into a lowercased-heading -> text mapping.
///
/// Tables are dropped up front (infobox noise). For each heading, text is
/// accumulated from immediately following content siblings until the next
/// heading; headings with no content are not stored. If no section is
/// literally named "summary", the document's first paragraph is stored
/// under that key as a fallback.
pub fn split_into_sections(html: &str) -> Result<SectionMap> {
    let mut document = Html::parse_document(html);
    strip_tables(&mut document, &parse_selector("table")?);

    let heading_sel = parse_selector("h1, h2, h3, h4, h5, h6")?;
    let mut sections = SectionMap::new();

    for heading in document.select(&heading_sel) {
        let name = element_text(&heading).to_lowercase();
        if name.is_empty() {
            continue;
        }

        let mut parts = Vec::new();
        for sibling in heading.next_siblings() {
            let Some(element) = ElementRef::wrap(sibling) else {
                continue;
            };
            let tag = element.value().name();
            if HEADING_TAGS.contains(&tag) {
                break;
            }
            if CONTENT_TAGS.contains(&tag) {
                let text = element_text(&element);
                if !text.is_empty() {
                    parts.push(text);
                }
            }
        }

        if !parts.is_empty() {
            sections.insert(name, parts.join("\n\n"));
        }
    }

    if !sections.contains_key("summary") {
        let paragraph_sel = parse_selector("p")?;
        let lead = document
            .select(&paragraph_sel)
            .next()
            .map(|p| element_text(&p))
            .unwrap_or_default();
        sections.insert("summary".to_string(), lead);
    }

    Ok(sections)
}

/// Pick the syllabus section from a section mapping.
pub fn syllabus_section(sections: &SectionMap) -> Option<&str> {
    pick_section(sections, &SYLLABUS_LABELS, &SYLLABUS_HINTS)
}

/// Pick the exam-pattern section from a section mapping.
pub fn pattern_section(sections: &SectionMap) -> Option<&str> {
    pick_section(sections, &PATTERN_LABELS, &PATTERN_HINTS)
}

/// Two-tier section pick: exact labels in priority order, then the first
/// heading (document order) containing any hint substring.
fn pick_section<'a>(sections: &'a SectionMap, labels: &[&str], hints: &[&str]) -> Option<&'a str> {
    for label in labels {
        if let Some(text) = sections.get(*label) {
            return Some(text.as_str());
        }
    }

    sections
        .iter()
        .find(|(name, _)| hints.iter().any(|hint| name.contains(hint)))
        .map(|(_, text)| text.as_str())
}

/// Detach every table node so infobox/markup text never leaks into sections.
fn strip_tables(document: &mut Html, table_sel: &Selector) {
    let ids: Vec<_> = document.select(table_sel).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Collect an element's text with normalized whitespace.
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections_of(html: &str) -> SectionMap {
        split_into_sections(html).unwrap()
    }

    #[test]
    fn splits_headings_with_following_content() {
        let html = r#"
            <h2>Syllabus</h2>
            <p>Physics and Chemistry.</p>
            <ul><li>Biology</li></ul>
            <h2>History</h2>
            <p>Started in 2013.</p>
        "#;
        let sections = sections_of(html);
        assert_eq!(
            sections.get("syllabus").map(String::as_str),
            Some("Physics and Chemistry.\n\nBiology")
        );
        assert_eq!(
            sections.get("history").map(String::as_str),
            Some("Started in 2013.")
        );
    }

    #[test]
    fn accumulation_stops_at_next_heading() {
        let html = r#"
            <h2>First</h2>
            <p>Alpha.</p>
            <h3>Second</h3>
            <p>Beta.</p>
        "#;
        let sections = sections_of(html);
        assert_eq!(sections.get("first").map(String::as_str), Some("Alpha."));
        assert_eq!(sections.get("second").map(String::as_str), Some("Beta."));
    }

    #[test]
    fn tables_are_stripped() {
        let html = r#"
            <h2>Pattern</h2>
            <table><tr><td>Infobox noise</td></tr></table>
            <p>Three hours, pen and paper.</p>
        "#;
        let sections = sections_of(html);
        assert_eq!(
            sections.get("pattern").map(String::as_str),
            Some("Three hours, pen and paper.")
        );
    }

    #[test]
    fn headings_without_content_are_skipped() {
        let html = "<h2>Empty</h2><h2>Full</h2><p>Text.</p>";
        let sections = sections_of(html);
        assert!(!sections.contains_key("empty"));
        assert!(sections.contains_key("full"));
    }

    #[test]
    fn first_paragraph_becomes_summary_fallback() {
        let html = r#"
            <p>The lead paragraph about the exam.</p>
            <h2>Eligibility</h2>
            <p>Anyone.</p>
        "#;
        let sections = sections_of(html);
        assert_eq!(
            sections.get("summary").map(String::as_str),
            Some("The lead paragraph about the exam.")
        );
    }

    #[test]
    fn explicit_summary_section_is_kept() {
        let html = r#"
            <p>Lead text.</p>
            <h2>Summary</h2>
            <p>Authored summary.</p>
        "#;
        let sections = sections_of(html);
        assert_eq!(
            sections.get("summary").map(String::as_str),
            Some("Authored summary.")
        );
    }

    #[test]
    fn exact_label_beats_substring_match() {
        let mut sections = SectionMap::new();
        sections.insert("paper format".to_string(), "substring match".to_string());
        sections.insert("exam pattern".to_string(), "exact match".to_string());
        assert_eq!(pattern_section(&sections), Some("exact match"));
    }

    #[test]
    fn substring_fallback_takes_first_in_document_order() {
        let mut sections = SectionMap::new();
        sections.insert("overview".to_string(), "nothing".to_string());
        sections.insert("subjects covered".to_string(), "first hit".to_string());
        sections.insert("question papers".to_string(), "second hit".to_string());
        assert_eq!(syllabus_section(&sections), Some("first hit"));
    }

    #[test]
    fn no_match_yields_none() {
        let mut sections = SectionMap::new();
        sections.insert("history".to_string(), "text".to_string());
        assert_eq!(pattern_section(&sections), None);
    }
}
