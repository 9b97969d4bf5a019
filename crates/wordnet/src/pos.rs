use serde::{Deserialize, Serialize};

use crate::error::{Result, WordNetError};

/// Grammatical category used to partition lexical entries.
///
/// Each part of speech owns one data file and one index file in the
/// database directory. Satellite adjectives (`s` synsets) live in the
/// adjective files and are folded into [`PartOfSpeech::Adjective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Fixed enumeration order used for deterministic multi-POS results.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Parse a synset type or pointer POS tag (`n`, `v`, `a`, `s`, `r`).
    pub fn from_tag(tag: char) -> Result<Self> {
        match tag {
            'n' => Ok(PartOfSpeech::Noun),
            'v' => Ok(PartOfSpeech::Verb),
            'a' | 's' => Ok(PartOfSpeech::Adjective),
            'r' => Ok(PartOfSpeech::Adverb),
            other => Err(WordNetError::UnknownPartOfSpeech(other)),
        }
    }

    /// File name of the data file for this POS (e.g. `data.noun`).
    pub fn data_file(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "data.noun",
            PartOfSpeech::Verb => "data.verb",
            PartOfSpeech::Adjective => "data.adj",
            PartOfSpeech::Adverb => "data.adv",
        }
    }

    /// File name of the index file for this POS (e.g. `index.noun`).
    pub fn index_file(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "index.noun",
            PartOfSpeech::Verb => "index.verb",
            PartOfSpeech::Adjective => "index.adj",
            PartOfSpeech::Adverb => "index.adv",
        }
    }

    /// Human-readable label emitted in query results.
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
