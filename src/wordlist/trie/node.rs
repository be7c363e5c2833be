use std::cell::Cell;
use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::alphabet::{get_idx, ALPHABET};

/// Build-phase node. Children live in the owning [`Trie`]'s arena and are
/// linked through `Cell`s so insertion works on a shared borrow.
///
/// [`Trie`]: crate::wordlist::trie::trie::Trie
#[derive(Default)]
pub(crate) struct TrieNode<'a> {
    pub(crate) children: [Cell<Option<&'a TrieNode<'a>>>; ALPHABET.len()],
    pub(crate) letter: char,
    pub(crate) is_terminal: Cell<bool>,
}

/// Query-phase node: same shape as [`TrieNode`] with the links frozen.
/// Carries no interior mutability, so a built index is `Sync` and can be
/// shared across scan workers.
pub struct ImmutableTrieNode<'a> {
    pub(crate) children: [Option<&'a ImmutableTrieNode<'a>>; ALPHABET.len()],
    pub(crate) letter: char,
    pub(crate) is_terminal: bool,
}

impl<'a> TrieNode<'a> {
    /// Child for `c`, or `None` when the edge is absent. An out-of-alphabet
    /// character is treated as a missing edge, never as an index.
    pub(crate) fn get_child(&self, c: char) -> Option<&'a TrieNode<'a>> {
        get_idx(c).and_then(|idx| self.children[idx].get())
    }

    fn create_child(&self, idx: usize, c: char, arena: &'a Arena<TrieNode<'a>>) -> &'a TrieNode<'a> {
        let child: &'a TrieNode<'a> = arena.alloc(TrieNode {
            children: Default::default(),
            letter: c,
            is_terminal: Cell::new(false),
        });
        self.children[idx].set(Some(child));
        child
    }

    /// `idx` must be the validated slot for `c`.
    pub(crate) fn get_or_create_child(
        &self,
        idx: usize,
        c: char,
        arena: &'a Arena<TrieNode<'a>>,
    ) -> &'a TrieNode<'a> {
        match self.children[idx].get() {
            Some(child) => child,
            None => self.create_child(idx, c, arena),
        }
    }

    pub(crate) fn make_immutable<'b>(
        &self,
        arena: &'b Arena<ImmutableTrieNode<'b>>,
    ) -> &'b ImmutableTrieNode<'b> {
        let mut children = [None; ALPHABET.len()];
        for (slot, child) in children.iter_mut().zip(self.children.iter()) {
            *slot = child.get().map(|c| c.make_immutable(arena));
        }
        arena.alloc(ImmutableTrieNode {
            children,
            letter: self.letter,
            is_terminal: self.is_terminal.get(),
        })
    }
}

impl<'a> ImmutableTrieNode<'a> {
    pub(crate) fn get_child(&self, c: char) -> Option<&'a ImmutableTrieNode<'a>> {
        get_idx(c).and_then(|idx| self.children[idx])
    }
}

impl Debug for TrieNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field(
                "children",
                &self
                    .children
                    .iter()
                    .filter_map(|x| x.get())
                    .map(|x| x.letter)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Debug for ImmutableTrieNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmutableTrieNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field(
                "children",
                &self
                    .children
                    .iter()
                    .flatten()
                    .map(|x| x.letter)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
