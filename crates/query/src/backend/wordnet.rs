//! Local backend adapter over the loaded WordNet database.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use lexigraph_wordnet::{sentence_similarity, WordNet};

use crate::backend::{BackendError, SemanticBackend};
use crate::types::{RelationRecord, ScoredTerm, Sense, Term};

/// Weight reported for direct pointer neighbours in `related_terms`;
/// synset co-members report 1.0.
const NEIGHBOUR_WEIGHT: f64 = 0.5;

/// [`SemanticBackend`] backed by the in-memory lexical index.
///
/// The database is loaded once and shared read-only; cloning the backend
/// is cheap and every clone answers from the same index.
#[derive(Debug, Clone)]
pub struct WordNetBackend {
    db: Arc<WordNet>,
}

impl WordNetBackend {
    pub fn new(db: Arc<WordNet>) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &WordNet {
        &self.db
    }
}

#[async_trait]
impl SemanticBackend for WordNetBackend {
    async fn senses(&self, term: &Term) -> Result<Vec<Sense>, BackendError> {
        Ok(self
            .db
            .synsets(term.as_str())
            .into_iter()
            .map(|synset| Sense {
                words: synset.display_words(),
                part_of_speech: synset.pos.label().to_string(),
                gloss: synset.gloss.clone(),
            })
            .collect())
    }

    async fn similarity(&self, a: &Term, b: &Term) -> Result<f64, BackendError> {
        Ok(sentence_similarity(&self.db, a.as_str(), b.as_str()))
    }

    async fn relations(&self, term: &Term) -> Result<Vec<RelationRecord>, BackendError> {
        let mut records = Vec::new();
        for synset in self.db.synsets(term.as_str()) {
            for pointer in &synset.pointers {
                // Pointer targets outside the loaded database are skipped.
                let Some(target) = self.db.synset(pointer.target) else {
                    continue;
                };
                records.push(RelationRecord {
                    start: term.as_str().to_string(),
                    relation: pointer.relation.label().to_string(),
                    end: target.head_word().replace('_', " "),
                    score: 1.0,
                    surface_text: None,
                });
            }
        }
        Ok(records)
    }

    async fn relations_between(
        &self,
        a: &Term,
        b: &Term,
    ) -> Result<Vec<RelationRecord>, BackendError> {
        let a_synsets = self.db.synsets(a.as_str());
        let b_synsets = self.db.synsets(b.as_str());
        let b_ids: HashSet<_> = b_synsets.iter().map(|s| s.id).collect();
        let a_ids: HashSet<_> = a_synsets.iter().map(|s| s.id).collect();

        let mut records = Vec::new();
        for synset in &a_synsets {
            if b_ids.contains(&synset.id) {
                records.push(RelationRecord {
                    start: a.as_str().to_string(),
                    relation: "Synonym".to_string(),
                    end: b.as_str().to_string(),
                    score: 1.0,
                    surface_text: Some(synset.gloss.clone()),
                });
            }
            for pointer in &synset.pointers {
                if b_ids.contains(&pointer.target) {
                    records.push(RelationRecord {
                        start: a.as_str().to_string(),
                        relation: pointer.relation.label().to_string(),
                        end: b.as_str().to_string(),
                        score: 1.0,
                        surface_text: None,
                    });
                }
            }
        }
        // Pointers may exist only in the reverse direction.
        for synset in &b_synsets {
            for pointer in &synset.pointers {
                if a_ids.contains(&pointer.target) {
                    records.push(RelationRecord {
                        start: b.as_str().to_string(),
                        relation: pointer.relation.label().to_string(),
                        end: a.as_str().to_string(),
                        score: 1.0,
                        surface_text: None,
                    });
                }
            }
        }
        Ok(records)
    }

    async fn related_terms(&self, term: &Term) -> Result<Vec<ScoredTerm>, BackendError> {
        let own = term.as_str().trim().to_lowercase().replace(' ', "_");
        let mut seen: HashSet<String> = HashSet::new();
        let mut related = Vec::new();

        let mut push = |word: &str, weight: f64, related: &mut Vec<ScoredTerm>| {
            let key = word.to_lowercase();
            if key == own || !seen.insert(key) {
                return;
            }
            related.push(ScoredTerm {
                term: word.replace('_', " "),
                weight,
            });
        };

        for synset in self.db.synsets(term.as_str()) {
            for word in &synset.words {
                push(word, 1.0, &mut related);
            }
            for pointer in &synset.pointers {
                if let Some(target) = self.db.synset(pointer.target) {
                    push(target.head_word(), NEIGHBOUR_WEIGHT, &mut related);
                }
            }
        }
        Ok(related)
    }
}
