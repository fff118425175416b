//! Network edge of the marketplace and housing search.
//!
//! Provides the search-index client the controllers in `boiler_core` are
//! driven by, and the HTTP backend used for accounts, reviews and votes.
//!
//! # Design
//!
//! - `SearchClient` is the only seam to the index; it speaks the flattened
//!   `SearchRequest` and returns raw JSON hits.
//! - `SearchEngine` decodes hits into the domain's record type and applies
//!   them to a `SearchState` in one step.
//! - A failed search records a truncated message on the controller and keeps
//!   its previous hits and total.
//! - `HttpBackend` implements both the account `Backend` and the thumbs
//!   `VoteSink`; vote batches are posted fire-and-forget.

mod backend;
mod client;
mod config;
mod engine;
mod meili;

pub use backend::{HttpBackend, UPDATE_THUMBS_PATH};
pub use client::{SearchClient, SearchResponse};
pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use meili::MeiliClient;
