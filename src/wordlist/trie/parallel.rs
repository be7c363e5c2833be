use rayon::prelude::*;

use crate::wordlist::dictionary::Dictionary;
use crate::wordlist::trie::decompose::Compound;
use crate::wordlist::trie::trie::ImmutableTrie;

impl<'a> ImmutableTrie<'a> {
    /// Same contract and the same output order as
    /// [`find_compound_words`](ImmutableTrie::find_compound_words), with the
    /// per-word queries fanned out over the rayon pool. Workers only read
    /// the frozen trie; the indexed collect keeps the candidates' report
    /// order, and filtering happens after the join.
    pub fn find_compound_words_par(&self, dict: &Dictionary) -> Vec<Compound> {
        let candidates: Vec<&str> = dict.words_longest_first().collect();
        candidates
            .par_iter()
            .map(|word| {
                let result = self.decompose_word(word);
                if result.is_compound && result.parts > 1 {
                    Some(Compound {
                        word: (*word).to_string(),
                        parts: result.parts,
                    })
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use typed_arena::Arena;

    use crate::wordlist::dictionary::Dictionary;
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn parallel_scan_matches_sequential_scan() {
        let words = vec![
            "cat", "dog", "dogcat", "catdogcat", "a", "house", "boat", "houseboat",
            "boathouse", "houseboatdog", "horse", "shoe", "horseshoe", "catcat",
        ];
        let mut dict = Dictionary::new();
        for word in &words {
            dict.push((*word).to_string());
        }
        let trie = Trie::new();
        dict.index_into(&trie).unwrap();
        let arena = Arena::new();
        let index = trie.build(&arena);

        let sequential = index.find_compound_words(&dict);
        let parallel = index.find_compound_words_par(&dict);
        assert!(!sequential.is_empty());
        assert_eq!(parallel, sequential);
    }
}
