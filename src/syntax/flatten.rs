//! Preorder flattening of expression trees into the node stream.

use super::{Node, NodeKind};

/// A scanned expression: a node plus the nodes nested under it.
#[derive(Debug)]
pub(crate) struct Expr {
    pub kind: NodeKind,
    pub data: String,
    pub children: Vec<Expr>,
}

impl Expr {
    pub fn leaf(kind: NodeKind, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, data: impl Into<String>, children: Vec<Expr>) -> Self {
        Self {
            kind,
            data: data.into(),
            children,
        }
    }
}

/// Flatten expressions parent-first, children left to right.
///
/// Uses an explicit stack, so nesting depth is bounded only by memory.
pub(crate) fn flatten(exprs: Vec<Expr>) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut stack: Vec<Expr> = exprs.into_iter().rev().collect();

    while let Some(Expr {
        kind,
        data,
        children,
    }) = stack.pop()
    {
        nodes.push(Node { kind, data });
        stack.extend(children.into_iter().rev());
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_before_children_in_order() {
        let exprs = vec![
            Expr::with_children(
                NodeKind::KeyValue,
                "a = 1",
                vec![
                    Expr::leaf(NodeKind::Integer, "1"),
                    Expr::leaf(NodeKind::Key, "a"),
                ],
            ),
            Expr::leaf(NodeKind::Comment, "# c"),
        ];

        let kinds: Vec<NodeKind> = flatten(exprs).into_iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::KeyValue,
                NodeKind::Integer,
                NodeKind::Key,
                NodeKind::Comment
            ]
        );
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let mut expr = Expr::leaf(NodeKind::Integer, "0");
        for _ in 0..100_000 {
            expr = Expr::with_children(NodeKind::Array, "", vec![expr]);
        }
        let nodes = flatten(vec![expr]);
        assert_eq!(nodes.len(), 100_001);
        assert_eq!(nodes.last().map(|n| n.kind), Some(NodeKind::Integer));
    }
}
