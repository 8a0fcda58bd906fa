// src/models/mod.rs

//! Domain models for the aggregator.

mod config;
mod exam;

// Re-export all public types
pub use config::{ArchiveSite, Config, EndpointConfig, HttpConfig, LookupConfig};
pub use exam::{Book, ExamInfo, Playlist, PyqLink, SectionMap, Video, WikiInfo};
