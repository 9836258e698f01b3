//! Syntax layer — turn TOML text into a flat, comment-preserving node stream.
//!
//! The document is parsed once with `toml_edit`, which keeps comments as
//! decor. Each header and key/value becomes a small tree, and the trees are
//! flattened in preorder:
//!
//! ```text
//! # Port to bind          Comment  "# Port to bind"
//! port = 8080             KeyValue "port = 8080"
//!                         Integer  "8080"
//!                         Key      "port"
//! [server.tls]            Table    "[server.tls]"
//!                         Key      "server"
//!                         Key      "tls"
//! ```

mod document;
mod flatten;

use crate::error::Result;
use std::fmt;

/// Kind tag of a node in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Comment,
    Key,
    KeyValue,
    Table,
    ArrayTable,
    Array,
    InlineTable,
    String,
    Integer,
    Float,
    Bool,
    DateTime,
    LocalDateTime,
    LocalDate,
    LocalTime,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Comment => "Comment",
            NodeKind::Key => "Key",
            NodeKind::KeyValue => "KeyValue",
            NodeKind::Table => "Table",
            NodeKind::ArrayTable => "ArrayTable",
            NodeKind::Array => "Array",
            NodeKind::InlineTable => "InlineTable",
            NodeKind::String => "String",
            NodeKind::Integer => "Integer",
            NodeKind::Float => "Float",
            NodeKind::Bool => "Bool",
            NodeKind::DateTime => "DateTime",
            NodeKind::LocalDateTime => "LocalDateTime",
            NodeKind::LocalDate => "LocalDate",
            NodeKind::LocalTime => "LocalTime",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of the flattened stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub data: String,
}

impl Node {
    pub fn new(kind: NodeKind, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }
}

/// Parse a TOML document into its preorder node stream.
pub fn parse(input: &str) -> Result<Vec<Node>> {
    let doc: toml_edit::DocumentMut = input.parse()?;

    let nodes = flatten::flatten(document::expressions(&doc));
    tracing::trace!(count = nodes.len(), "flattened node stream");
    Ok(nodes)
}

/// Render the node stream one node per line as `Kind: data`.
pub fn dump(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&format!("{}: {}\n", node.kind, node.data));
    }
    out
}
