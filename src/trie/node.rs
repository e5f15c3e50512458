//! Arena trie node.

/// Index of a node inside the trie arena.
pub(super) type NodeId = usize;

/// The root always sits at the start of the arena.
pub(super) const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
pub(super) struct TrieNode {
    /// Children indexed by bit value.
    children: [Option<NodeId>; 2],
    /// A registered prefix ends here.
    pub(super) terminal: bool,
}

impl TrieNode {
    pub(super) fn child(&self, bit: u8) -> Option<NodeId> {
        self.children[usize::from(bit & 1)]
    }

    pub(super) fn set_child(&mut self, bit: u8, child: NodeId) {
        self.children[usize::from(bit & 1)] = Some(child);
    }

    pub(super) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}
