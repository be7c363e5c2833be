use std::cell::Cell;
use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::alphabet::get_idx;
use crate::error::Error;
use crate::wordlist::index::Index;
use crate::wordlist::trie::node::{ImmutableTrieNode, TrieNode};

/// Build-phase index: owns the node arena, inserts on a shared borrow.
/// Construction is strictly two-phase: once [`Trie::build`] has produced the
/// query handle, further insertion is a bug.
pub struct Trie<'a> {
    pub(crate) root: TrieNode<'a>,
    arena: Arena<TrieNode<'a>>,
    pub built: Cell<bool>,
}

/// Query-phase handle over a frozen trie. Plain shared references all the
/// way down, so it can be handed to rayon workers as-is.
#[derive(Clone, Copy)]
pub struct ImmutableTrie<'a> {
    pub(crate) root: &'a ImmutableTrieNode<'a>,
}

impl<'a> Trie<'a> {
    pub fn new() -> Trie<'a> {
        Trie {
            root: Default::default(),
            arena: Arena::new(),
            built: Cell::new(false),
        }
    }

    /// Walks from the root creating one node per letter and marks the last
    /// node terminal. Idempotent. A word containing a character outside
    /// `a..=z` is rejected before any terminal mark is set, so membership is
    /// unaffected by the partial path.
    pub fn add(&'a self, word: &str) -> Result<(), Error> {
        assert!(!self.built.get());
        let mut current = &self.root;
        for c in word.chars() {
            let idx = match get_idx(c) {
                Some(idx) => idx,
                None => {
                    return Err(Error::InvalidCharacter {
                        word: word.to_string(),
                        ch: c,
                    })
                }
            };
            current = current.get_or_create_child(idx, c, &self.arena);
        }
        current.is_terminal.set(true);
        Ok(())
    }

    pub fn add_all<'f, I>(&'a self, items: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = &'f str>,
    {
        for word in items {
            self.add(word)?;
        }
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word)
            .map(|node| node.is_terminal.get())
            .unwrap_or(false)
    }

    fn get_node<'f>(&'f self, word: &str) -> Option<&'f TrieNode<'a>> {
        let mut node = &self.root;
        for c in word.chars() {
            node = node.get_child(c)?;
        }
        Some(node)
    }

    /// Freezes the trie into its query form. The returned handle shares
    /// nothing mutable with this builder; dropping `arena` drops the whole
    /// frozen tree in one pass.
    pub fn build<'b>(&self, arena: &'b Arena<ImmutableTrieNode<'b>>) -> ImmutableTrie<'b> {
        self.built.set(true);
        ImmutableTrie {
            root: self.root.make_immutable(arena),
        }
    }
}

impl<'a> Index<'a> for Trie<'a> {
    fn add(&'a self, word: &str) -> Result<(), Error> {
        Trie::add(self, word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

impl<'a> ImmutableTrie<'a> {
    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word).map(|node| node.is_terminal).unwrap_or(false)
    }

    pub(crate) fn get_node(&self, word: &str) -> Option<&'a ImmutableTrieNode<'a>> {
        let mut node = self.root;
        for c in word.chars() {
            node = node.get_child(c)?;
        }
        Some(node)
    }
}

impl<'a> Debug for Trie<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(x);
            for child in x.children.iter().filter_map(|c| c.get()) {
                stack.push(child);
            }
        }
        l.finish()
    }
}

#[cfg(test)]
mod tests {
    use typed_arena::Arena;

    use crate::error::Error;
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let trie = Trie::new();
        trie.add_all(words.iter().copied()).unwrap();
        for word in &words {
            assert!(trie.contains(word));
        }
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let bad_words = vec!["he", "h", "lol", "banana", "helloo"];
        let trie = Trie::new();
        trie.add_all(words.iter().copied()).unwrap();
        for word in &bad_words {
            assert!(!trie.contains(word));
        }
    }

    #[test]
    fn insertion_is_idempotent() {
        let trie = Trie::new();
        trie.add("cat").unwrap();
        trie.add("cat").unwrap();
        assert!(trie.contains("cat"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("catt"));
    }

    #[test]
    fn terminal_marks_survive_later_inserts() {
        let trie = Trie::new();
        trie.add("cat").unwrap();
        assert!(trie.contains("cat"));
        trie.add_all(vec!["catalog", "ca", "c", "dog"]).unwrap();
        assert!(trie.contains("cat"));
        assert!(trie.contains("catalog"));
        assert!(trie.contains("ca"));
        assert!(!trie.contains("cata"));
    }

    #[test]
    fn rejects_out_of_alphabet_characters() {
        let trie = Trie::new();
        let err = trie.add("can't").unwrap_err();
        assert!(matches!(err, Error::InvalidCharacter { ch: '\'', .. }));
        // the partial path left behind carries no terminal mark
        assert!(!trie.contains("can"));
        assert!(!trie.contains("can't"));
    }

    #[test]
    fn probing_with_out_of_alphabet_characters_is_just_a_miss() {
        let trie = Trie::new();
        trie.add("cat").unwrap();
        assert!(!trie.contains("CAT"));
        assert!(!trie.contains("c4t"));
        assert!(!trie.contains("ca t"));
    }

    #[test]
    fn build_preserves_membership() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let trie = Trie::new();
        trie.add_all(words.iter().copied()).unwrap();
        let arena = Arena::new();
        let index = trie.build(&arena);
        for word in &words {
            assert!(index.contains(word));
        }
        assert!(!index.contains("he"));
        assert!(!index.contains("goodby"));
        assert!(!index.contains("CAT"));
    }

    #[test]
    #[should_panic]
    fn adding_after_build_panics() {
        let trie = Trie::new();
        trie.add("cat").unwrap();
        let arena = Arena::new();
        let _index = trie.build(&arena);
        let _ = trie.add("dog");
    }
}
