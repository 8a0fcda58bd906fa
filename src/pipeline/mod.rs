//! Pipeline entry points for aggregate fetches.
//!
//! - `fetch_exam_info`: run all source lookups for one query

pub mod fetch;

pub use fetch::{FetchOptions, fetch_exam_info};
