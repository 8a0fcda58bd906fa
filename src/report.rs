// src/report.rs

//! Text report rendering for an aggregate result.

use crate::models::ExamInfo;

/// Longest summary excerpt shown, in characters.
const SUMMARY_EXCERPT_CHARS: usize = 1000;

/// Longest syllabus/pattern excerpt shown, in characters.
const SECTION_EXCERPT_CHARS: usize = 1500;

/// Most section headings listed.
const MAX_HEADINGS: usize = 15;

/// Render the aggregate as a multi-section text report.
pub fn render(info: &ExamInfo) -> String {
    let mut out = String::new();

    out.push_str("=== Result Summary ===\n\n");
    out.push_str(&format!("Query: {}\n", info.query));

    let wiki = &info.wikipedia;
    if let Some(title) = &wiki.title {
        out.push_str(&format!("Wikipedia Page Title: {title}\n"));
    } else {
        out.push_str("Wikipedia page not available.\n");
    }

    match &wiki.summary {
        Some(summary) => out.push_str(&format!(
            "\nSummary (lead):\n{}\n",
            excerpt(summary, SUMMARY_EXCERPT_CHARS)
        )),
        None => out.push_str("\nSummary not available.\n"),
    }

    match &wiki.pattern {
        Some(pattern) => out.push_str(&format!(
            "\nExam Pattern / Format:\n{}\n",
            excerpt(pattern, SECTION_EXCERPT_CHARS)
        )),
        None => out.push_str("\nExam pattern not available.\n"),
    }

    match &wiki.syllabus {
        Some(syllabus) => out.push_str(&format!(
            "\nSyllabus / Curriculum (excerpt):\n{}\n",
            excerpt(syllabus, SECTION_EXCERPT_CHARS)
        )),
        None => out.push_str("\nSyllabus not available.\n"),
    }

    if !wiki.sections.is_empty() {
        out.push_str("\nOther sections found on Wikipedia (headings):\n");
        for heading in wiki.sections.keys().take(MAX_HEADINGS) {
            out.push_str(&format!(" - {heading}\n"));
        }
    }

    if !info.videos.is_empty() {
        out.push_str("\nSuggested Videos:\n");
        for video in &info.videos {
            out.push_str(&format!(" - {}  ({})\n", video.title, video.url));
        }
    } else {
        out.push_str("\nVideo results not available (no API key or no results).\n");
    }

    match &info.playlist {
        Some(playlist) => out.push_str(&format!(
            "\nSuggested Playlist:\n - {} ({})\n",
            playlist.title, playlist.url
        )),
        None => out.push_str("\nPlaylist not available (no API key or no results).\n"),
    }

    if !info.books.is_empty() {
        out.push_str("\nSuggested Books:\n");
        for book in &info.books {
            out.push_str(&format!(
                " - {} | {} - {}\n",
                book.title.as_deref().unwrap_or("(untitled)"),
                book.authors.join(", "),
                book.info_link.as_deref().unwrap_or("no link")
            ));
        }
    } else {
        out.push_str("\nNo book suggestions found.\n");
    }

    if !info.pyq_links.is_empty() {
        out.push_str("\nFree Solved PYQ Links:\n");
        for pyq in &info.pyq_links {
            let title = if pyq.title.is_empty() {
                &pyq.exam
            } else {
                &pyq.title
            };
            out.push_str(&format!(" - {title} | {}: {}\n", pyq.site, pyq.link));
        }
    } else {
        out.push_str("\nNo free PYQ links found.\n");
    }

    out.push_str("\n--- End ---\n");
    out
}

/// Take at most `max_chars` characters, appending an ellipsis marker when
/// the text was cut. Char-based, so multi-byte text never splits.
fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut} ...")
}
