use serde::{Deserialize, Serialize};

use crate::pos::PartOfSpeech;

/// Identity of a synset: the file it lives in plus its byte offset within
/// that file. Offsets are the native synset identifiers of the database
/// format; they are unique per file, not globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SynSetId {
    pub pos: PartOfSpeech,
    pub offset: u64,
}

impl SynSetId {
    pub fn new(pos: PartOfSpeech, offset: u64) -> Self {
        Self { pos, offset }
    }
}

impl std::fmt::Display for SynSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:08}", self.pos.label(), self.offset)
    }
}

/// A set of words sharing one sense, tagged with part of speech and a
/// definitional gloss. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynSet {
    pub id: SynSetId,
    /// Member lemmas, in file order. Multi-word lemmas keep their
    /// underscores (`tea_kettle`); display layers decide how to join them.
    pub words: Vec<String>,
    pub pos: PartOfSpeech,
    pub gloss: String,
    /// Outgoing semantic pointers to other synsets.
    pub pointers: Vec<Pointer>,
}

impl SynSet {
    /// Member words with underscores replaced by spaces, for display.
    pub fn display_words(&self) -> Vec<String> {
        self.words.iter().map(|w| w.replace('_', " ")).collect()
    }

    /// First member word, used when a synset must be named by one lemma.
    pub fn head_word(&self) -> &str {
        self.words.first().map(String::as_str).unwrap_or("")
    }
}

/// One semantic pointer from a synset to a target synset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub relation: Relation,
    pub target: SynSetId,
}

/// Semantic relation carried by a pointer, decoded from the pointer symbol
/// in the data files. Symbols that are valid for the format but not named
/// here are preserved as [`Relation::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Antonym,
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelated,
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    SimilarTo,
    ParticipleOfVerb,
    Pertainym,
    TopicDomain,
    TopicMember,
    RegionDomain,
    RegionMember,
    UsageDomain,
    UsageMember,
    Other(String),
}

impl Relation {
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "!" => Relation::Antonym,
            "@" => Relation::Hypernym,
            "@i" => Relation::InstanceHypernym,
            "~" => Relation::Hyponym,
            "~i" => Relation::InstanceHyponym,
            "#m" => Relation::MemberHolonym,
            "#s" => Relation::SubstanceHolonym,
            "#p" => Relation::PartHolonym,
            "%m" => Relation::MemberMeronym,
            "%s" => Relation::SubstanceMeronym,
            "%p" => Relation::PartMeronym,
            "=" => Relation::Attribute,
            "+" => Relation::DerivationallyRelated,
            "*" => Relation::Entailment,
            ">" => Relation::Cause,
            "^" => Relation::AlsoSee,
            "$" => Relation::VerbGroup,
            "&" => Relation::SimilarTo,
            "<" => Relation::ParticipleOfVerb,
            "\\" => Relation::Pertainym,
            ";c" => Relation::TopicDomain,
            "-c" => Relation::TopicMember,
            ";r" => Relation::RegionDomain,
            "-r" => Relation::RegionMember,
            ";u" => Relation::UsageDomain,
            "-u" => Relation::UsageMember,
            other => Relation::Other(other.to_string()),
        }
    }

    /// Human-readable label emitted in query results.
    pub fn label(&self) -> &str {
        match self {
            Relation::Antonym => "Antonym",
            Relation::Hypernym => "Hypernym",
            Relation::InstanceHypernym => "InstanceHypernym",
            Relation::Hyponym => "Hyponym",
            Relation::InstanceHyponym => "InstanceHyponym",
            Relation::MemberHolonym => "MemberHolonym",
            Relation::SubstanceHolonym => "SubstanceHolonym",
            Relation::PartHolonym => "PartHolonym",
            Relation::MemberMeronym => "MemberMeronym",
            Relation::SubstanceMeronym => "SubstanceMeronym",
            Relation::PartMeronym => "PartMeronym",
            Relation::Attribute => "Attribute",
            Relation::DerivationallyRelated => "DerivationallyRelated",
            Relation::Entailment => "Entailment",
            Relation::Cause => "Cause",
            Relation::AlsoSee => "AlsoSee",
            Relation::VerbGroup => "VerbGroup",
            Relation::SimilarTo => "SimilarTo",
            Relation::ParticipleOfVerb => "ParticipleOfVerb",
            Relation::Pertainym => "Pertainym",
            Relation::TopicDomain => "TopicDomain",
            Relation::TopicMember => "TopicMember",
            Relation::RegionDomain => "RegionDomain",
            Relation::RegionMember => "RegionMember",
            Relation::UsageDomain => "UsageDomain",
            Relation::UsageMember => "UsageMember",
            Relation::Other(symbol) => symbol,
        }
    }

    /// True for the upward is-a pointers walked by path similarity.
    pub fn is_hypernym(&self) -> bool {
        matches!(self, Relation::Hypernym | Relation::InstanceHypernym)
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_symbols() {
        assert_eq!(Relation::from_symbol("@"), Relation::Hypernym);
        assert_eq!(Relation::from_symbol("~"), Relation::Hyponym);
        assert_eq!(Relation::from_symbol("!"), Relation::Antonym);
        assert_eq!(Relation::from_symbol(";c"), Relation::TopicDomain);
        assert_eq!(
            Relation::from_symbol("??"),
            Relation::Other("??".to_string())
        );
    }

    #[test]
    fn test_display_words_replace_underscores() {
        let synset = SynSet {
            id: SynSetId::new(PartOfSpeech::Noun, 1),
            words: vec!["tea_kettle".to_string(), "kettle".to_string()],
            pos: PartOfSpeech::Noun,
            gloss: "a kettle for brewing tea".to_string(),
            pointers: vec![],
        };
        assert_eq!(synset.display_words(), vec!["tea kettle", "kettle"]);
        assert_eq!(synset.head_word(), "tea_kettle");
    }
}
