//! Remote backend adapter over the semantic-graph HTTP client.

use async_trait::async_trait;
use lexigraph_conceptnet::{ConceptEdge, ConceptNetClient, ConceptNetError};

use crate::backend::{BackendError, SemanticBackend};
use crate::types::{RelationRecord, ScoredTerm, Sense, Term};

/// [`SemanticBackend`] backed by a ConceptNet-style remote API.
///
/// The graph service has no notion of dictionary senses, so [`senses`]
/// reports [`BackendError::Unsupported`] rather than an empty result.
///
/// [`senses`]: SemanticBackend::senses
#[derive(Debug, Clone)]
pub struct ConceptNetBackend {
    client: ConceptNetClient,
}

impl ConceptNetBackend {
    pub fn new(client: ConceptNetClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SemanticBackend for ConceptNetBackend {
    async fn senses(&self, _term: &Term) -> Result<Vec<Sense>, BackendError> {
        Err(BackendError::Unsupported("senses"))
    }

    async fn similarity(&self, a: &Term, b: &Term) -> Result<f64, BackendError> {
        self.client
            .relatedness(a.as_str(), b.as_str())
            .await
            .map_err(into_backend_error)
    }

    async fn relations(&self, term: &Term) -> Result<Vec<RelationRecord>, BackendError> {
        let edges = self
            .client
            .edges_for(term.as_str())
            .await
            .map_err(into_backend_error)?;
        Ok(edges.into_iter().map(edge_to_record).collect())
    }

    async fn relations_between(
        &self,
        a: &Term,
        b: &Term,
    ) -> Result<Vec<RelationRecord>, BackendError> {
        let edges = self
            .client
            .edges_between(a.as_str(), b.as_str())
            .await
            .map_err(into_backend_error)?;
        Ok(edges.into_iter().map(edge_to_record).collect())
    }

    async fn related_terms(&self, term: &Term) -> Result<Vec<ScoredTerm>, BackendError> {
        let related = self
            .client
            .related_terms(term.as_str())
            .await
            .map_err(into_backend_error)?;
        Ok(related
            .into_iter()
            .map(|entry| ScoredTerm {
                term: entry.term,
                weight: entry.weight,
            })
            .collect())
    }
}

fn edge_to_record(edge: ConceptEdge) -> RelationRecord {
    RelationRecord {
        start: edge.start,
        relation: edge.relation,
        end: edge.end,
        score: edge.weight,
        surface_text: edge.surface_text,
    }
}

fn into_backend_error(err: ConceptNetError) -> BackendError {
    match err {
        ConceptNetError::Decode { .. } => BackendError::InvalidResponse(err.to_string()),
        other => BackendError::Unavailable(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn senses_are_unsupported() {
        let backend = ConceptNetBackend::new(ConceptNetClient::new().unwrap());
        let err = backend
            .senses(&Term::new("dog").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Unsupported("senses")));
    }

    #[test]
    fn decode_errors_map_to_invalid_response() {
        let err = into_backend_error(ConceptNetError::Decode {
            path: "/c/en/dog".to_string(),
            message: "bad json".to_string(),
        });
        assert!(matches!(err, BackendError::InvalidResponse(_)));

        let err = into_backend_error(ConceptNetError::RateLimited(10));
        assert!(matches!(err, BackendError::Unavailable(_)));
    }
}
