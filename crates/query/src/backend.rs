//! The capability interface shared by every backend, plus its
//! implementations. The two production backends (local index, remote
//! graph API) expose the same five operations so façades and tests can
//! substitute one for another.

pub mod conceptnet;
pub mod fixture;
pub mod wordnet;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{RelationRecord, ScoredTerm, Sense, Term};

#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend could not be reached or answered abnormally.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend does not implement this capability. Distinct from an
    /// empty result so substitution gaps are testable.
    #[error("operation '{0}' is not supported by this backend")]
    Unsupported(&'static str),

    /// The backend answered but the payload could not be interpreted.
    #[error("invalid backend response: {0}")]
    InvalidResponse(String),
}

/// Resolve senses, relations, and similarity for one or two terms.
///
/// Implementations are read-only and safe to share (`Arc<dyn
/// SemanticBackend>`); no operation mutates backend state observably.
/// Zero matches is an empty collection, never an error.
#[async_trait]
pub trait SemanticBackend: Send + Sync {
    /// All senses of a term, in the backend's deterministic order.
    async fn senses(&self, term: &Term) -> Result<Vec<Sense>, BackendError>;

    /// Similarity of two terms or phrases, higher is closer.
    async fn similarity(&self, a: &Term, b: &Term) -> Result<f64, BackendError>;

    /// Relation edges attached to one term.
    async fn relations(&self, term: &Term) -> Result<Vec<RelationRecord>, BackendError>;

    /// Relation edges connecting two terms.
    async fn relations_between(
        &self,
        a: &Term,
        b: &Term,
    ) -> Result<Vec<RelationRecord>, BackendError>;

    /// Terms related to the supplied term.
    async fn related_terms(&self, term: &Term) -> Result<Vec<ScoredTerm>, BackendError>;
}

#[async_trait]
impl<B: SemanticBackend + ?Sized> SemanticBackend for std::sync::Arc<B> {
    async fn senses(&self, term: &Term) -> Result<Vec<Sense>, BackendError> {
        (**self).senses(term).await
    }

    async fn similarity(&self, a: &Term, b: &Term) -> Result<f64, BackendError> {
        (**self).similarity(a, b).await
    }

    async fn relations(&self, term: &Term) -> Result<Vec<RelationRecord>, BackendError> {
        (**self).relations(term).await
    }

    async fn relations_between(
        &self,
        a: &Term,
        b: &Term,
    ) -> Result<Vec<RelationRecord>, BackendError> {
        (**self).relations_between(a, b).await
    }

    async fn related_terms(&self, term: &Term) -> Result<Vec<ScoredTerm>, BackendError> {
        (**self).related_terms(term).await
    }
}
