//! Daily viral-ideas digest pipeline.
//!
//! Pulls candidate topics from Hacker News, Reddit, Google Trends, and
//! Product Hunt concurrently, filters them to AI-related items, dedups and
//! ranks them, optionally attaches hooks and angles via OpenAI, and renders
//! one dated digest document ready for persistence.

pub mod aggregate;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod format;
pub mod pipeline;
pub mod sources;
pub mod types;

pub use error::DigestError;
pub use pipeline::{build_daily_digest, DailyDigest};
pub use types::{Candidate, DigestConfig, Enrichment};
