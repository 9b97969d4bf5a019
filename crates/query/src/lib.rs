//! # Lexigraph Query
//!
//! Query façades over a pluggable semantic backend.
//!
//! ## Architecture
//!
//! ```text
//!              ┌──────────────────┐
//!   term1 ───► │  LexicalFacade   │──► LexicalAnswer (3 parallel lists + score)
//!   term2 ───► │  ConceptFacade   │──► ConceptAnswer (5 fixed fields)
//!              └────────┬─────────┘
//!                       │ SemanticBackend (trait)
//!          ┌────────────┼────────────────┐
//!   WordNetBackend  ConceptNetBackend  FixtureBackend
//!   (local index)   (remote HTTP)      (in-memory, for tests)
//! ```
//!
//! Façades validate inputs, call the backend, and shape results into
//! fixed-arity answer records. Empty required input is never a silent
//! no-op: depending on [`EmptyInputPolicy`] it is either a distinguishable
//! [`QueryOutcome::Skipped`] or a [`QueryError::EmptyInput`].

mod backend;
mod config;
mod error;
mod facade;
mod types;

pub use backend::conceptnet::ConceptNetBackend;
pub use backend::fixture::FixtureBackend;
pub use backend::wordnet::WordNetBackend;
pub use backend::{BackendError, SemanticBackend};
pub use config::{EmptyInputPolicy, FacadeConfig};
pub use error::{QueryError, Result};
pub use facade::{ConceptAnswer, ConceptFacade, LexicalAnswer, LexicalFacade, QueryOutcome};
pub use types::{RelationRecord, ScoredTerm, Sense, Term};
