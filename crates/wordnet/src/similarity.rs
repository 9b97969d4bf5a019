//! Sentence and word similarity over the loaded database.
//!
//! Deterministic synset-path similarity. A word pair scores the maximum
//! over its synset pairs of `1 / (1 + d)`, where `d` is the length of the
//! shortest path connecting the two synsets through upward is-a pointers
//! (identical synsets give `d = 0`, a direct pointer of any relation gives
//! `d = 1`). Sentences score the mean of each token's best counterpart
//! score, averaged over both directions so the measure is symmetric.

use std::collections::HashMap;

use crate::engine::WordNet;
use crate::synset::{SynSet, SynSetId};

/// Upward BFS depth cap; hypernym chains in practice stay well below this.
const MAX_HYPERNYM_DEPTH: usize = 12;

/// Similarity of two words in `[0, 1]`.
pub fn word_similarity(db: &WordNet, a: &str, b: &str) -> f64 {
    let a_synsets = db.synsets(a);
    let b_synsets = db.synsets(b);

    if a.trim().eq_ignore_ascii_case(b.trim()) && !a.trim().is_empty() {
        return 1.0;
    }
    if a_synsets.is_empty() || b_synsets.is_empty() {
        return 0.0;
    }

    let mut best = 0.0f64;
    for sa in a_synsets.iter().copied() {
        for sb in b_synsets.iter().copied() {
            best = best.max(synset_similarity(db, sa, sb));
        }
    }
    best
}

/// Similarity of two sentences in `[0, 1]`. Empty input scores 0.
pub fn sentence_similarity(db: &WordNet, a: &str, b: &str) -> f64 {
    let a_tokens = tokenize(a);
    let b_tokens = tokenize(b);
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }

    let forward = directional_score(db, &a_tokens, &b_tokens);
    let backward = directional_score(db, &b_tokens, &a_tokens);
    (forward + backward) / 2.0
}

fn directional_score(db: &WordNet, from: &[String], to: &[String]) -> f64 {
    let total: f64 = from
        .iter()
        .map(|token| {
            to.iter()
                .map(|other| word_similarity(db, token, other))
                .fold(0.0, f64::max)
        })
        .sum();
    total / from.len() as f64
}

fn synset_similarity(db: &WordNet, a: &SynSet, b: &SynSet) -> f64 {
    if a.id == b.id {
        return 1.0;
    }
    // A direct pointer in either direction counts as distance 1.
    if a.pointers.iter().any(|p| p.target == b.id)
        || b.pointers.iter().any(|p| p.target == a.id)
    {
        return 0.5;
    }

    let a_ancestors = hypernym_depths(db, a);
    let b_ancestors = hypernym_depths(db, b);

    let mut shortest: Option<usize> = None;
    for (ancestor, da) in &a_ancestors {
        if let Some(dbp) = b_ancestors.get(ancestor) {
            let dist = da + dbp;
            shortest = Some(shortest.map_or(dist, |cur| cur.min(dist)));
        }
    }

    match shortest {
        Some(dist) => 1.0 / (1.0 + dist as f64),
        None => 0.0,
    }
}

/// Depths of every synset reachable from `start` through is-a pointers,
/// including `start` itself at depth 0.
fn hypernym_depths(db: &WordNet, start: &SynSet) -> HashMap<SynSetId, usize> {
    let mut depths = HashMap::new();
    depths.insert(start.id, 0);
    let mut frontier = vec![start.id];

    for depth in 1..=MAX_HYPERNYM_DEPTH {
        let mut next = Vec::new();
        for id in frontier {
            let Some(synset) = db.synset(id) else { continue };
            for pointer in &synset.pointers {
                if pointer.relation.is_hypernym() && !depths.contains_key(&pointer.target) {
                    depths.insert(pointer.target, depth);
                    next.push(pointer.target);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    depths
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}
