//! Deterministic in-memory backend for tests and examples.
//!
//! Answers come from tables populated up front; every call is appended to
//! a log so tests can assert which operations ran and with which terms.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{BackendError, SemanticBackend};
use crate::types::{RelationRecord, ScoredTerm, Sense, Term};

#[derive(Debug, Default)]
pub struct FixtureBackend {
    senses: HashMap<String, Vec<Sense>>,
    similarities: HashMap<(String, String), f64>,
    relations: HashMap<String, Vec<RelationRecord>>,
    relations_between: HashMap<(String, String), Vec<RelationRecord>>,
    related: HashMap<String, Vec<ScoredTerm>>,
    /// When set, every operation fails with `Unavailable(message)`.
    outage: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FixtureBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every operation reports `Unavailable(message)`.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            outage: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_sense(mut self, term: &str, words: &[&str], pos: &str, gloss: &str) -> Self {
        self.senses.entry(term.to_string()).or_default().push(Sense {
            words: words.iter().map(|w| w.to_string()).collect(),
            part_of_speech: pos.to_string(),
            gloss: gloss.to_string(),
        });
        self
    }

    /// Symmetric similarity entry.
    pub fn with_similarity(mut self, a: &str, b: &str, score: f64) -> Self {
        self.similarities
            .insert((a.to_string(), b.to_string()), score);
        self.similarities
            .insert((b.to_string(), a.to_string()), score);
        self
    }

    pub fn with_relation(mut self, term: &str, record: RelationRecord) -> Self {
        self.relations
            .entry(term.to_string())
            .or_default()
            .push(record);
        self
    }

    pub fn with_relation_between(mut self, a: &str, b: &str, record: RelationRecord) -> Self {
        self.relations_between
            .entry((a.to_string(), b.to_string()))
            .or_default()
            .push(record);
        self
    }

    pub fn with_related_term(mut self, term: &str, related: &str, weight: f64) -> Self {
        self.related
            .entry(term.to_string())
            .or_default()
            .push(ScoredTerm {
                term: related.to_string(),
                weight,
            });
        self
    }

    /// Every operation performed so far, e.g. `related_terms(dog)`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log mutex poisoned").clone()
    }

    fn record(&self, call: String) -> Result<(), BackendError> {
        self.calls
            .lock()
            .expect("call log mutex poisoned")
            .push(call);
        match &self.outage {
            Some(message) => Err(BackendError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SemanticBackend for FixtureBackend {
    async fn senses(&self, term: &Term) -> Result<Vec<Sense>, BackendError> {
        self.record(format!("senses({term})"))?;
        Ok(self.senses.get(term.as_str()).cloned().unwrap_or_default())
    }

    async fn similarity(&self, a: &Term, b: &Term) -> Result<f64, BackendError> {
        self.record(format!("similarity({a}, {b})"))?;
        Ok(self
            .similarities
            .get(&(a.as_str().to_string(), b.as_str().to_string()))
            .copied()
            .unwrap_or(0.0))
    }

    async fn relations(&self, term: &Term) -> Result<Vec<RelationRecord>, BackendError> {
        self.record(format!("relations({term})"))?;
        Ok(self
            .relations
            .get(term.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn relations_between(
        &self,
        a: &Term,
        b: &Term,
    ) -> Result<Vec<RelationRecord>, BackendError> {
        self.record(format!("relations_between({a}, {b})"))?;
        Ok(self
            .relations_between
            .get(&(a.as_str().to_string(), b.as_str().to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn related_terms(&self, term: &Term) -> Result<Vec<ScoredTerm>, BackendError> {
        self.record(format!("related_terms({term})"))?;
        Ok(self.related.get(term.as_str()).cloned().unwrap_or_default())
    }
}
