//! # Lexigraph ConceptNet
//!
//! Remote semantic-graph backend: an async HTTP client for a ConceptNet
//! 5-style REST API. The client answers four queries:
//!
//! - edges attached to one concept (`/c/{lang}/{term}`)
//! - edges between two concepts (`/query?node=...&other=...`)
//! - terms related to a concept (`/related/c/{lang}/{term}`)
//! - a numeric relatedness score for a pair (`/relatedness`)
//!
//! Every network failure is an explicit [`ConceptNetError`]; transient
//! failures (429, 5xx) are retried a bounded number of times with
//! exponential backoff, and successful response bodies are kept in a small
//! in-process LRU cache keyed by request path.

mod client;
mod error;
mod types;
mod uri;

pub use client::{ConceptNetClient, ConceptNetClientBuilder, DEFAULT_BASE_URL};
pub use error::{ConceptNetError, Result};
pub use types::{ConceptEdge, RelatedTerm};
pub use uri::concept_uri;
