use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{Result, WordNetError};
use crate::parse::{normalize, parse_data_line, parse_index_line};
use crate::pos::PartOfSpeech;
use crate::synset::{SynSet, SynSetId};

/// The loaded lexical database: one lemma index and one synset store,
/// merged across all four parts of speech.
///
/// Loading is the only mutation; afterwards the database is read-only and
/// can be shared freely (`Arc<WordNet>`) across queries.
#[derive(Debug, Default)]
pub struct WordNet {
    /// Normalized lemma -> synset ids, in sense order per POS.
    index: HashMap<String, Vec<SynSetId>>,
    /// Synset id -> full record.
    synsets: HashMap<SynSetId, SynSet>,
}

impl WordNet {
    /// Load the full database from a directory containing the four
    /// data/index file pairs. All-or-nothing: a missing file or malformed
    /// line fails the entire load.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut db = WordNet::default();

        for pos in PartOfSpeech::ALL {
            let index_path = dir.join(pos.index_file());
            let data_path = dir.join(pos.data_file());
            for (path, name) in [(&index_path, pos.index_file()), (&data_path, pos.data_file())] {
                if !path.exists() {
                    return Err(WordNetError::MissingFile(dir.to_path_buf(), name.to_string()));
                }
            }

            let index = BufReader::new(open(&index_path)?);
            let data = BufReader::new(open(&data_path)?);
            db.load_part(pos, index, data)?;
        }

        info!(
            "loaded wordnet database: {} lemmas, {} synsets",
            db.index.len(),
            db.synsets.len()
        );
        Ok(db)
    }

    /// Load one part of speech from arbitrary readers. Lets tests feed
    /// in-memory fixtures instead of files on disk.
    pub fn load_part(
        &mut self,
        pos: PartOfSpeech,
        index: impl BufRead,
        data: impl BufRead,
    ) -> Result<()> {
        let data_file = pos.data_file();
        let mut loaded = 0usize;
        for (lineno, line) in data.lines().enumerate() {
            let line = line.map_err(|source| WordNetError::Io {
                path: data_file.into(),
                source,
            })?;
            // License header lines start with a space.
            if line.starts_with(' ') || line.trim().is_empty() {
                continue;
            }
            let synset = parse_data_line(&line, pos, data_file, lineno + 1)?;
            self.synsets.insert(synset.id, synset);
            loaded += 1;
        }

        let index_file = pos.index_file();
        for (lineno, line) in index.lines().enumerate() {
            let line = line.map_err(|source| WordNetError::Io {
                path: index_file.into(),
                source,
            })?;
            if line.starts_with(' ') || line.trim().is_empty() {
                continue;
            }
            let entry = parse_index_line(&line, index_file, lineno + 1)?;
            let ids = self.index.entry(normalize(&entry.lemma)).or_default();
            for offset in entry.offsets {
                ids.push(SynSetId::new(pos, offset));
            }
        }

        debug!("loaded {loaded} {pos} synsets");
        Ok(())
    }

    /// All synsets for a term, across every part of speech, in
    /// deterministic order: fixed POS order, then sense order from the
    /// index file. Unknown terms yield an empty vec, not an error.
    pub fn synsets(&self, term: &str) -> Vec<&SynSet> {
        let Some(ids) = self.index.get(&normalize(term)) else {
            return Vec::new();
        };

        let mut ordered: Vec<&SynSetId> = Vec::with_capacity(ids.len());
        for pos in PartOfSpeech::ALL {
            ordered.extend(ids.iter().filter(|id| id.pos == pos));
        }
        ordered
            .into_iter()
            .filter_map(|id| self.synsets.get(id))
            .collect()
    }

    /// Synsets for a term restricted to one part of speech.
    pub fn synsets_for_pos(&self, term: &str, pos: PartOfSpeech) -> Vec<&SynSet> {
        self.synsets(term)
            .into_iter()
            .filter(|synset| synset.id.pos == pos)
            .collect()
    }

    /// Resolve a synset id, e.g. a pointer target.
    pub fn synset(&self, id: SynSetId) -> Option<&SynSet> {
        self.synsets.get(&id)
    }

    /// Number of distinct lemmas in the index.
    pub fn lemma_count(&self) -> usize {
        self.index.len()
    }

    /// Number of loaded synsets.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| WordNetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
