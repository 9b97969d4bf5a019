//! Line parsers for the database flat files.
//!
//! Both file kinds are line-oriented, space-delimited text. Data lines
//! describe one synset each; index lines map one lemma to the offsets of
//! its synsets. Header lines start with a space and are skipped by the
//! loader, not here.
//!
//! Data line layout:
//!
//! ```text
//! offset lex_filenum ss_type w_cnt (word lex_id)... p_cnt (sym offset pos st)... [frames] | gloss
//! ```
//!
//! `w_cnt` is two-digit hexadecimal; `p_cnt` is decimal. Verb lines carry
//! trailing frame tokens between the pointers and the gloss separator;
//! those are skipped.
//!
//! Index line layout:
//!
//! ```text
//! lemma pos synset_cnt p_cnt sym... sense_cnt tagsense_cnt offset...
//! ```

use crate::error::{Result, WordNetError};
use crate::pos::PartOfSpeech;
use crate::synset::{Pointer, Relation, SynSet, SynSetId};

/// One parsed index line: a lemma and the offsets of its synsets, in
/// sense order as listed in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub offsets: Vec<u64>,
}

/// Parse one data-file line into a [`SynSet`].
///
/// `file_pos` is the part of speech of the file the line came from; it
/// decides which file pointer offsets of satellite synsets resolve into.
pub fn parse_data_line(line: &str, file_pos: PartOfSpeech, file: &str, lineno: usize) -> Result<SynSet> {
    let (fields, gloss) = match line.split_once(" | ") {
        Some((fields, gloss)) => (fields, gloss.trim().to_string()),
        None => (line, String::new()),
    };

    let mut tokens = fields.split_whitespace();
    let mut next = |what: &str| {
        tokens
            .next()
            .ok_or_else(|| WordNetError::parse(file, lineno, format!("missing {what}")))
    };

    let offset: u64 = parse_num(next("synset offset")?, 10, file, lineno, "synset offset")?;
    let _lex_filenum = next("lex_filenum")?;
    let ss_type = next("ss_type")?;
    let pos = match ss_type.chars().next() {
        Some(tag) => PartOfSpeech::from_tag(tag)
            .map_err(|_| WordNetError::parse(file, lineno, format!("bad ss_type '{ss_type}'")))?,
        None => return Err(WordNetError::parse(file, lineno, "empty ss_type")),
    };

    let word_count = parse_num(next("word count")?, 16, file, lineno, "word count")? as usize;
    let mut words = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        words.push(strip_marker(next("word")?));
        let _lex_id = next("lex_id")?;
    }
    if words.is_empty() {
        return Err(WordNetError::parse(file, lineno, "synset with no words"));
    }

    let pointer_count = parse_num(next("pointer count")?, 10, file, lineno, "pointer count")? as usize;
    let mut pointers = Vec::with_capacity(pointer_count);
    for _ in 0..pointer_count {
        let symbol = next("pointer symbol")?;
        let target_offset: u64 =
            parse_num(next("pointer offset")?, 10, file, lineno, "pointer offset")?;
        let target_pos_tag = next("pointer pos")?;
        let _source_target = next("pointer source/target")?;

        let target_pos = target_pos_tag
            .chars()
            .next()
            .ok_or_else(|| WordNetError::parse(file, lineno, "empty pointer pos"))
            .and_then(|tag| {
                PartOfSpeech::from_tag(tag).map_err(|_| {
                    WordNetError::parse(file, lineno, format!("bad pointer pos '{target_pos_tag}'"))
                })
            })?;

        pointers.push(Pointer {
            relation: Relation::from_symbol(symbol),
            target: SynSetId::new(target_pos, target_offset),
        });
    }
    // Remaining tokens are verb frames; intentionally skipped.

    Ok(SynSet {
        id: SynSetId::new(file_pos, offset),
        words,
        pos,
        gloss,
        pointers,
    })
}

/// Parse one index-file line into an [`IndexEntry`].
pub fn parse_index_line(line: &str, file: &str, lineno: usize) -> Result<IndexEntry> {
    let mut tokens = line.split_whitespace();
    let mut next = |what: &str| {
        tokens
            .next()
            .ok_or_else(|| WordNetError::parse(file, lineno, format!("missing {what}")))
    };

    let lemma = next("lemma")?.to_string();
    let pos_tag = next("pos")?;
    let pos = pos_tag
        .chars()
        .next()
        .ok_or_else(|| WordNetError::parse(file, lineno, "empty pos"))
        .and_then(|tag| {
            PartOfSpeech::from_tag(tag)
                .map_err(|_| WordNetError::parse(file, lineno, format!("bad pos '{pos_tag}'")))
        })?;

    let synset_count = parse_num(next("synset count")?, 10, file, lineno, "synset count")? as usize;
    let pointer_count = parse_num(next("pointer count")?, 10, file, lineno, "pointer count")? as usize;
    for _ in 0..pointer_count {
        let _symbol = next("pointer symbol")?;
    }
    let _sense_cnt = next("sense count")?;
    let _tagsense_cnt = next("tagsense count")?;

    let mut offsets = Vec::with_capacity(synset_count);
    for _ in 0..synset_count {
        offsets.push(parse_num(next("synset offset")?, 10, file, lineno, "synset offset")?);
    }

    Ok(IndexEntry { lemma, pos, offsets })
}

/// Normalize a user-supplied term into an index lemma: trimmed, lowercased,
/// whitespace runs collapsed to single underscores.
pub(crate) fn normalize(term: &str) -> String {
    term.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn parse_num(token: &str, radix: u32, file: &str, lineno: usize, what: &str) -> Result<u64> {
    u64::from_str_radix(token, radix)
        .map_err(|_| WordNetError::parse(file, lineno, format!("bad {what} '{token}'")))
}

/// Adjective words may carry a syntactic position marker, e.g. `galore(ip)`.
fn strip_marker(word: &str) -> String {
    match word.find('(') {
        Some(idx) if word.ends_with(')') => word[..idx].to_string(),
        _ => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOG_DATA: &str = "02084071 05 n 03 dog 0 domestic_dog 0 canis_familiaris 0 02 \
                            @ 02083346 n 0000 ~ 01317541 n 0000 \
                            | a member of the genus Canis";

    #[test]
    fn test_parse_data_line_words_and_gloss() {
        let synset = parse_data_line(DOG_DATA, PartOfSpeech::Noun, "data.noun", 1).unwrap();
        assert_eq!(synset.id, SynSetId::new(PartOfSpeech::Noun, 2084071));
        assert_eq!(synset.words, vec!["dog", "domestic_dog", "canis_familiaris"]);
        assert_eq!(synset.pos, PartOfSpeech::Noun);
        assert_eq!(synset.gloss, "a member of the genus Canis");
    }

    #[test]
    fn test_parse_data_line_pointers() {
        let synset = parse_data_line(DOG_DATA, PartOfSpeech::Noun, "data.noun", 1).unwrap();
        assert_eq!(synset.pointers.len(), 2);
        assert_eq!(synset.pointers[0].relation, Relation::Hypernym);
        assert_eq!(
            synset.pointers[0].target,
            SynSetId::new(PartOfSpeech::Noun, 2083346)
        );
        assert_eq!(synset.pointers[1].relation, Relation::Hyponym);
    }

    #[test]
    fn test_parse_data_line_hex_word_count() {
        // 0x11 = 17 words
        let mut line = String::from("00001740 03 n 11 ");
        for i in 0..17 {
            line.push_str(&format!("w{i} 0 "));
        }
        line.push_str("000 | many words");
        let synset = parse_data_line(&line, PartOfSpeech::Noun, "data.noun", 1).unwrap();
        assert_eq!(synset.words.len(), 17);
    }

    #[test]
    fn test_parse_data_line_skips_verb_frames() {
        let line = "00001740 29 v 01 breathe 0 01 @ 00002325 v 0000 02 + 02 00 + 08 00 \
                    | draw air into, and expel out of, the lungs";
        let synset = parse_data_line(line, PartOfSpeech::Verb, "data.verb", 1).unwrap();
        assert_eq!(synset.words, vec!["breathe"]);
        assert_eq!(synset.pointers.len(), 1);
    }

    #[test]
    fn test_parse_data_line_strips_adjective_marker() {
        let line = "00003131 00 a 01 galore(ip) 0 000 | in great numbers";
        let synset = parse_data_line(line, PartOfSpeech::Adjective, "data.adj", 1).unwrap();
        assert_eq!(synset.words, vec!["galore"]);
    }

    #[test]
    fn test_parse_data_line_satellite_type_folds_into_adjective() {
        let line = "00003500 00 s 01 bally 0 000 | informal intensifier";
        let synset = parse_data_line(line, PartOfSpeech::Adjective, "data.adj", 1).unwrap();
        assert_eq!(synset.pos, PartOfSpeech::Adjective);
    }

    #[test]
    fn test_parse_data_line_rejects_garbage() {
        let err = parse_data_line("zz not a line", PartOfSpeech::Noun, "data.noun", 7);
        let message = err.unwrap_err().to_string();
        assert!(message.contains("data.noun"), "got: {message}");
        assert!(message.contains("line 7"), "got: {message}");
    }

    #[test]
    fn test_parse_index_line() {
        let line = "dog n 2 4 @ ~ #m %m 2 1 02084071 10114209";
        let entry = parse_index_line(line, "index.noun", 3).unwrap();
        assert_eq!(entry.lemma, "dog");
        assert_eq!(entry.pos, PartOfSpeech::Noun);
        assert_eq!(entry.offsets, vec![2084071, 10114209]);
    }

    #[test]
    fn test_parse_index_line_truncated() {
        let line = "dog n 3 0 1 1 02084071";
        assert!(parse_index_line(line, "index.noun", 1).is_err());
    }

    #[test]
    fn test_normalize_terms() {
        assert_eq!(normalize("Dog"), "dog");
        assert_eq!(normalize("  Tea   Kettle "), "tea_kettle");
        assert_eq!(normalize(""), "");
    }
}
