use serde::Serialize;

use crate::wordlist::dictionary::Dictionary;
use crate::wordlist::trie::trie::ImmutableTrie;

/// Outcome of decomposing one candidate word. A candidate only counts as a
/// compound when `is_compound` holds with `parts > 1`; a bare whole-word
/// match reports `parts == 1` and is not a compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    pub is_compound: bool,
    pub parts: usize,
}

/// One reported compound word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compound {
    pub word: String,
    pub parts: usize,
}

impl<'a> ImmutableTrie<'a> {
    /// Can `word` be split into a sequence of dictionary entries?
    ///
    /// Split points are tried shortest-first-part-first and the first split
    /// whose remainder also decomposes wins, so `parts` reflects that split
    /// rather than a minimum or maximum over all decompositions.
    pub fn decompose_word(&self, word: &str) -> Decomposition {
        if word.is_empty() {
            // an empty word is not decomposable, by definition
            return Decomposition {
                is_compound: false,
                parts: 0,
            };
        }
        let bytes = word.as_bytes();
        let (is_compound, parts) = self.decompose(bytes, 0, bytes.len() - 1);
        Decomposition { is_compound, parts }
    }

    // Inclusive range [start, end] of `word`. Walks the trie edge by edge,
    // abandoning the walk at the first absent edge; every terminal node
    // passed before `end` is a split point, tried in increasing order.
    fn decompose(&self, word: &[u8], start: usize, end: usize) -> (bool, usize) {
        if start > end {
            return (false, 0);
        }
        let mut node = self.root;
        for i in start..=end {
            node = match node.get_child(word[i] as char) {
                Some(next) => next,
                None => return (false, 0),
            };
            if i == end {
                // base case: the first part consumes the whole range
                return if node.is_terminal { (true, 1) } else { (false, 0) };
            }
            if node.is_terminal {
                let (rest_ok, rest_parts) = self.decompose(word, i + 1, end);
                if rest_ok {
                    return (true, 1 + rest_parts);
                }
            }
        }
        (false, 0)
    }

    /// Scans the whole dictionary, longest length bucket first and stored
    /// order within a bucket, and returns every word that is a concatenation
    /// of two or more dictionary entries, in that same order.
    ///
    /// The trie is fully built before the first query and never touched
    /// during the scan.
    pub fn find_compound_words(&self, dict: &Dictionary) -> Vec<Compound> {
        let mut found = Vec::new();
        for word in dict.words_longest_first() {
            let result = self.decompose_word(word);
            if result.is_compound && result.parts > 1 {
                found.push(Compound {
                    word: word.to_string(),
                    parts: result.parts,
                });
            }
        }
        found
    }
}
