//! Query façades: validate inputs, call the backend, shape fixed-arity
//! answer records.

use serde::Serialize;

use crate::backend::SemanticBackend;
use crate::config::{EmptyInputPolicy, FacadeConfig};
use crate::error::{QueryError, Result};
use crate::types::{RelationRecord, Term};

/// Result of a façade query: either a shaped answer, or a marker that the
/// query was skipped because a required input was empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOutcome<T> {
    Answer(T),
    Skipped,
}

impl<T> QueryOutcome<T> {
    pub fn answer(self) -> Option<T> {
        match self {
            QueryOutcome::Answer(answer) => Some(answer),
            QueryOutcome::Skipped => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, QueryOutcome::Skipped)
    }
}

/// Three parallel lists plus an optional similarity score.
///
/// Index `i` of `synonyms`, `parts_of_speech`, and `glosses` all describe
/// the same sense; the lists always have equal length. `similarity` is
/// present exactly when a second term was supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalAnswer {
    /// Per sense, the synonym set joined with `", "`.
    pub synonyms: Vec<String>,
    pub parts_of_speech: Vec<String>,
    pub glosses: Vec<String>,
    pub similarity: Option<f64>,
}

/// Five-field concept record for a pair of terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptAnswer {
    /// Relation edges of term1, one rendered edge per line.
    pub relations: String,
    /// Terms related to term1, comma-separated, strongest first.
    pub related_terms: String,
    /// Relation edges connecting term1 and term2, comma-separated.
    pub relations_between: String,
    /// Best explanation of how the two terms relate: the strongest
    /// connecting edge's surface text, or that edge rendered.
    pub how_related: String,
    /// Numeric relatedness of the pair.
    pub relatedness: f64,
}

/// Lexical façade: senses of one term, optionally scored against a second.
pub struct LexicalFacade<B> {
    backend: B,
    config: FacadeConfig,
}

impl<B: SemanticBackend> LexicalFacade<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, FacadeConfig::default())
    }

    pub fn with_config(backend: B, config: FacadeConfig) -> Self {
        Self { backend, config }
    }

    /// Look up the senses of `term1`, and score it against `term2` when one
    /// is supplied. Zero matching senses is an answer with empty lists.
    pub async fn query(
        &self,
        term1: &str,
        term2: Option<&str>,
    ) -> Result<QueryOutcome<LexicalAnswer>> {
        let Some(term) = require(&self.config, "term1", term1)? else {
            return Ok(QueryOutcome::Skipped);
        };

        let senses = self.backend.senses(&term).await?;
        if senses.is_empty() {
            log::info!("no senses found for '{term}'");
        }

        let mut synonyms = Vec::with_capacity(senses.len());
        let mut parts_of_speech = Vec::with_capacity(senses.len());
        let mut glosses = Vec::with_capacity(senses.len());
        for sense in senses {
            synonyms.push(sense.words.join(", "));
            parts_of_speech.push(sense.part_of_speech);
            glosses.push(sense.gloss);
        }

        let similarity = match Term::optional(term2) {
            Some(other) => Some(self.backend.similarity(&term, &other).await?),
            None => None,
        };

        Ok(QueryOutcome::Answer(LexicalAnswer {
            synonyms,
            parts_of_speech,
            glosses,
            similarity,
        }))
    }
}

/// Concept façade: relation edges and relatedness for a pair of terms.
pub struct ConceptFacade<B> {
    backend: B,
    config: FacadeConfig,
}

impl<B: SemanticBackend> ConceptFacade<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, FacadeConfig::default())
    }

    pub fn with_config(backend: B, config: FacadeConfig) -> Self {
        Self { backend, config }
    }

    /// Answer the five-field concept record for `term1` and `term2`.
    /// Both terms are required.
    pub async fn query(&self, term1: &str, term2: &str) -> Result<QueryOutcome<ConceptAnswer>> {
        let Some(a) = require(&self.config, "term1", term1)? else {
            return Ok(QueryOutcome::Skipped);
        };
        let Some(b) = require(&self.config, "term2", term2)? else {
            return Ok(QueryOutcome::Skipped);
        };

        let mut relations = self.backend.relations(&a).await?;
        sort_records(&mut relations);

        let mut related = self.backend.related_terms(&a).await?;
        related.sort_by(|x, y| {
            y.weight
                .total_cmp(&x.weight)
                .then_with(|| x.term.cmp(&y.term))
        });

        let mut between = self.backend.relations_between(&a, &b).await?;
        sort_records(&mut between);

        let relatedness = self.backend.similarity(&a, &b).await?;

        let how_related = match between.first() {
            Some(best) => best
                .surface_text
                .clone()
                .unwrap_or_else(|| best.render()),
            None => {
                log::info!("no connecting edge between '{a}' and '{b}'");
                String::new()
            }
        };

        Ok(QueryOutcome::Answer(ConceptAnswer {
            relations: relations
                .iter()
                .map(RelationRecord::render)
                .collect::<Vec<_>>()
                .join("\n"),
            related_terms: related
                .iter()
                .map(|t| t.term.clone())
                .collect::<Vec<_>>()
                .join(", "),
            relations_between: between
                .iter()
                .map(RelationRecord::render)
                .collect::<Vec<_>>()
                .join(", "),
            how_related,
            relatedness,
        }))
    }
}

fn require(config: &FacadeConfig, name: &'static str, text: &str) -> Result<Option<Term>> {
    match Term::new(text) {
        Some(term) => Ok(Some(term)),
        None => match config.empty_input {
            EmptyInputPolicy::Skip => {
                log::debug!("skipping query: required input '{name}' is empty");
                Ok(None)
            }
            EmptyInputPolicy::Error => Err(QueryError::EmptyInput(name)),
        },
    }
}

/// Strongest edge first; label and endpoint break ties so repeated
/// queries render identically.
fn sort_records(records: &mut [RelationRecord]) {
    records.sort_by(|x, y| {
        y.score
            .total_cmp(&x.score)
            .then_with(|| x.relation.cmp(&y.relation))
            .then_with(|| x.end.cmp(&y.end))
    });
}
