use serde::{Deserialize, Serialize};

/// A validated, non-empty query term. Construction trims surrounding
/// whitespace; a term that trims to nothing does not construct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term(String);

impl Term {
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Term(trimmed.to_string()))
        }
    }

    /// `Some(term)` only when the optional input is present and non-empty.
    pub fn optional(text: Option<&str>) -> Option<Self> {
        text.and_then(Term::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One sense of a term: its synonym set, part-of-speech label, and gloss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub words: Vec<String>,
    pub part_of_speech: String,
    pub gloss: String,
}

/// One semantic relation edge, uniform across backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub start: String,
    pub relation: String,
    pub end: String,
    /// Edge strength; local backends without weights report 1.0.
    pub score: f64,
    /// Human-readable explanation of the edge, when the backend has one.
    pub surface_text: Option<String>,
}

impl RelationRecord {
    /// Render as `start -relation-> end (score)`.
    pub fn render(&self) -> String {
        format!(
            "{} -{}-> {} ({:.2})",
            self.start, self.relation, self.end, self.score
        )
    }
}

/// A related term with its relatedness weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_rejects_empty_and_whitespace() {
        assert!(Term::new("").is_none());
        assert!(Term::new("   ").is_none());
        assert_eq!(Term::new(" dog ").unwrap().as_str(), "dog");
    }

    #[test]
    fn test_optional_term() {
        assert!(Term::optional(None).is_none());
        assert!(Term::optional(Some("")).is_none());
        assert_eq!(Term::optional(Some("cat")).unwrap().as_str(), "cat");
    }

    #[test]
    fn test_relation_record_render() {
        let record = RelationRecord {
            start: "dog".to_string(),
            relation: "IsA".to_string(),
            end: "animal".to_string(),
            score: 2.5,
            surface_text: None,
        };
        assert_eq!(record.render(), "dog -IsA-> animal (2.50)");
    }
}
