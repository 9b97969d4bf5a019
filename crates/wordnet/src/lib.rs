//! # Lexigraph WordNet
//!
//! Local lexical backend: loads a WordNet-style database from flat files
//! into in-memory indexes and answers synset and similarity queries.
//!
//! ## Architecture
//!
//! ```text
//! data.{noun,verb,adj,adv}   index.{noun,verb,adj,adv}
//!         │                          │
//!         └────────► WordNet ◄───────┘
//!                      │
//!            ├─ synsets(term)        lemma → ordered synsets
//!            ├─ synset(id)           offset → words / gloss / pointers
//!            └─ sentence_similarity  token-level synset-path scoring
//! ```
//!
//! The load is all-or-nothing: a missing file or a malformed line fails the
//! whole database, so a constructed [`WordNet`] is always queryable.

mod engine;
mod error;
mod parse;
mod pos;
mod similarity;
mod synset;

pub use engine::WordNet;
pub use error::{Result, WordNetError};
pub use parse::{parse_data_line, parse_index_line, IndexEntry};
pub use pos::PartOfSpeech;
pub use similarity::{sentence_similarity, word_similarity};
pub use synset::{Pointer, Relation, SynSet, SynSetId};
