//! Binary prefix trie with overlap classification.
//!
//! Nodes live in a single arena (`Vec<TrieNode>`) and refer to their children
//! by index, so a whole batch is torn down with one deallocation.
//!
//! A failed [`PrefixTrie::insert`] leaves the trie exactly as it found it.
//! Once a walk creates a node, every later node on that path is new as well,
//! so it can neither be terminal nor have children: conflicts are only ever
//! found on paths that already existed.

mod node;

use node::{NodeId, TrieNode, ROOT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an insert was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConflictKind {
    /// The same prefix (same bits, same length) is already registered.
    ExactDuplicate,
    /// A shorter registered prefix already covers the new one.
    ContainedInExisting,
    /// The new prefix covers one or more longer registered prefixes.
    ContainsExisting,
}

impl ConflictKind {
    pub fn message(&self) -> &'static str {
        match self {
            ConflictKind::ExactDuplicate => "The same prefix already exists.",
            ConflictKind::ContainedInExisting => {
                "The specified prefix is included in an existing prefix."
            }
            ConflictKind::ContainsExisting => "The specified prefix contains an existing prefix.",
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ConflictKind {}

/// Binary trie of registered prefixes.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        PrefixTrie {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }
}

impl PrefixTrie {
    /// Create an empty trie holding only the root.
    pub fn new() -> PrefixTrie {
        Self::default()
    }

    /// Number of registered prefixes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Register the first `prefix_len` bits of `bits` as a prefix.
    ///
    /// Returns the [`ConflictKind`] when the prefix overlaps one already
    /// registered; the trie is left unchanged in that case.
    ///
    /// # Panics
    /// If `bits` is shorter than `prefix_len`.
    ///
    /// # Examples
    /// ```
    /// use prefix_overlap::trie::{ConflictKind, PrefixTrie};
    /// let mut trie = PrefixTrie::new();
    /// assert!(trie.insert(&[1, 0, 1], 2).is_ok());
    /// assert_eq!(trie.insert(&[1, 0, 0], 3), Err(ConflictKind::ContainedInExisting));
    /// assert_eq!(trie.insert(&[1, 1, 0], 1), Err(ConflictKind::ContainsExisting));
    /// ```
    pub fn insert(&mut self, bits: &[u8], prefix_len: usize) -> Result<(), ConflictKind> {
        assert!(
            bits.len() >= prefix_len,
            "prefix length {prefix_len} exceeds {} available bits",
            bits.len()
        );

        // A zero-length prefix lives on the root and covers everything.
        if self.nodes[ROOT].terminal {
            return Err(if prefix_len == 0 {
                ConflictKind::ExactDuplicate
            } else {
                ConflictKind::ContainedInExisting
            });
        }

        let arena_len = self.nodes.len();
        let mut current = ROOT;

        for (i, &bit) in bits[..prefix_len].iter().enumerate() {
            current = match self.nodes[current].child(bit) {
                Some(next) => next,
                None => {
                    let id = self.alloc();
                    self.nodes[current].set_child(bit, id);
                    id
                }
            };

            if self.nodes[current].terminal {
                debug_assert_eq!(self.nodes.len(), arena_len, "conflict on a fresh path");
                return Err(if i == prefix_len - 1 {
                    ConflictKind::ExactDuplicate
                } else {
                    ConflictKind::ContainedInExisting
                });
            }
        }

        if self.nodes[current].has_children() {
            debug_assert_eq!(self.nodes.len(), arena_len, "conflict on a fresh path");
            return Err(ConflictKind::ContainsExisting);
        }

        self.nodes[current].terminal = true;
        self.len += 1;
        log::trace!("registered prefix /{prefix_len} at node {current}");
        Ok(())
    }

    /// Whether exactly this prefix (same bits, same length) is registered.
    ///
    /// A covering shorter prefix does not count.
    pub fn search(&self, bits: &[u8], prefix_len: usize) -> bool {
        if bits.len() < prefix_len {
            return false;
        }
        let mut current = ROOT;
        for &bit in &bits[..prefix_len] {
            match self.nodes[current].child(bit) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.nodes[current].terminal
    }

    fn alloc(&mut self) -> NodeId {
        self.nodes.push(TrieNode::default());
        self.nodes.len() - 1
    }
}
