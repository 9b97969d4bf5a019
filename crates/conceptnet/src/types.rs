//! Wire types for the API responses and the domain records they map into.
//!
//! Only the fields the client consumes are modeled; the schema is owned by
//! the remote service and unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::uri::concept_label;

/// One semantic edge between two concepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptEdge {
    /// Start concept, as a plain label (`tea kettle`, not `/c/en/tea_kettle`).
    pub start: String,
    /// Relation label, e.g. `IsA`, `UsedFor`.
    pub relation: String,
    /// End concept, as a plain label.
    pub end: String,
    /// Edge weight; higher means stronger.
    pub weight: f64,
    /// Human-readable sentence for the edge, when the API provides one.
    pub surface_text: Option<String>,
}

/// A term related to a queried concept, with its relatedness weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedTerm {
    pub term: String,
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// Wire envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct EdgeEnvelope {
    #[serde(default)]
    pub edges: Vec<WireEdge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireEdge {
    pub rel: WireLabel,
    pub start: WireLabel,
    pub end: WireLabel,
    #[serde(default)]
    pub weight: f64,
    #[serde(rename = "surfaceText")]
    pub surface_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLabel {
    pub label: Option<String>,
    #[serde(rename = "@id")]
    pub id: Option<String>,
}

impl WireLabel {
    fn resolve(&self) -> String {
        match (&self.label, &self.id) {
            (Some(label), _) => label.clone(),
            (None, Some(id)) => concept_label(id),
            (None, None) => String::new(),
        }
    }
}

impl From<WireEdge> for ConceptEdge {
    fn from(edge: WireEdge) -> Self {
        ConceptEdge {
            start: edge.start.resolve(),
            relation: edge.rel.resolve(),
            end: edge.end.resolve(),
            weight: edge.weight,
            surface_text: edge.surface_text,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelatedEnvelope {
    #[serde(default)]
    pub related: Vec<WireRelated>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRelated {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(default)]
    pub weight: f64,
}

impl From<WireRelated> for RelatedTerm {
    fn from(related: WireRelated) -> Self {
        RelatedTerm {
            term: concept_label(&related.id),
            weight: related.weight,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelatednessEnvelope {
    pub value: f64,
}
