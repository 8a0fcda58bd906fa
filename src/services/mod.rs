//! Service layer for the aggregator.
//!
//! This module contains the per-source lookup logic:
//! - Wikipedia resolution (`WikiResolver`)
//! - Section splitting and classification (`sections`)
//! - Video/playlist lookup (`VideoSearch`)
//! - Book lookup (`BookSearch`)
//! - Paper-link scraping (`PaperLinkScraper`)

mod books;
mod papers;
pub mod sections;
mod videos;
mod wiki;

pub use books::BookSearch;
pub use papers::PaperLinkScraper;
pub use videos::VideoSearch;
pub use wiki::WikiResolver;
