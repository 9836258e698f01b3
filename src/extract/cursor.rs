//! Pull-based cursor over the node stream.

use crate::syntax::{Node, NodeKind};

#[derive(Debug)]
pub struct Cursor<'a> {
    nodes: &'a [Node],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self { nodes, pos: 0 }
    }

    /// Node `offset` positions ahead of the current one, if any.
    pub fn peek(&self, offset: usize) -> Option<&'a Node> {
        self.nodes.get(self.pos + offset)
    }

    pub fn current(&self) -> Option<&'a Node> {
        self.peek(0)
    }

    /// Move forward `n` nodes, saturating at the end of the stream.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.nodes.len());
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Segments of the run of `Key` nodes starting `offset` ahead.
    pub fn key_run(&self, offset: usize) -> Vec<&'a str> {
        self.nodes
            .iter()
            .skip(self.pos + offset)
            .take_while(|n| n.kind == NodeKind::Key)
            .map(|n| n.data.as_str())
            .collect()
    }
}
