//! Item extraction — a single left-to-right pass over the node stream.
//!
//! Each step looks at the node under the cursor and consumes as many nodes as
//! that expression spans:
//!
//! | Node         | Consumes                                   | Emits                   |
//! |--------------|--------------------------------------------|-------------------------|
//! | `Comment`    | 1                                          | nothing (pending)       |
//! | `KeyValue`   | itself, the value (+ array wrapper), keys  | one item                |
//! | `Table`      | itself and its keys                        | one heading             |
//! | `ArrayTable` | itself and its keys                        | heading, per policy     |
//! | `Array`      | 2                                          | nothing                 |
//!
//! Anything else is a structural error and aborts the whole extraction.

pub mod comment;
pub mod cursor;
pub mod key_path;

use crate::error::{Error, Result};
use crate::model::{DocItem, EMPTY_STRING_VALUE, NONE_VALUE, STRING_TYPE};
use crate::options::Options;
use crate::syntax::{Node, NodeKind};
use comment::CommentAggregator;
use cursor::Cursor;
use key_path::KeyPathTracker;
use tracing::{debug, trace};

/// Turn a node stream into documentation items, in source order.
pub fn extract(nodes: &[Node], options: &Options) -> Result<Vec<DocItem>> {
    let mut cursor = Cursor::new(nodes);
    let mut comments = CommentAggregator::new(&options.comment_prefix);
    let mut paths = KeyPathTracker::new(options.array_tables);
    let mut items = Vec::new();

    while let Some(node) = cursor.current() {
        trace!(position = cursor.position(), kind = %node.kind, data = %node.data, "node");

        match node.kind {
            NodeKind::Comment => {
                comments.push(&node.data);
                cursor.advance(1);
            }
            NodeKind::KeyValue => {
                let item = key_value(&mut cursor, &paths, &mut comments)?;
                debug!(key = %item.key, type_tag = %item.type_tag, "documented key");
                items.push(item);
            }
            NodeKind::Table => {
                let segments =
                    KeyPathTracker::read_header_path(&mut cursor).ok_or(Error::MissingTableKey)?;
                let path = paths.enter_table(&segments);
                debug!(path = %path, "documented table");
                items.push(DocItem::heading(path, comments.take()));
            }
            NodeKind::ArrayTable => {
                let segments = KeyPathTracker::read_header_path(&mut cursor)
                    .ok_or(Error::MissingArrayTableKey)?;
                let entry = paths.enter_array_table(&segments);
                if entry.documented {
                    let path = segments.join(".");
                    debug!(path = %path, index = entry.index, "documented array table");
                    items.push(DocItem::heading(format!("[[{}]]", path), comments.take()));
                }
            }
            // Array container with no key context.
            NodeKind::Array => cursor.advance(2),
            kind => return Err(Error::UnexpectedNode(kind)),
        }
    }

    apply_value_overrides(&mut items);
    Ok(items)
}

/// `KeyValue`, value, optional body after an array wrapper, then the key segments.
fn key_value(
    cursor: &mut Cursor<'_>,
    paths: &KeyPathTracker,
    comments: &mut CommentAggregator<'_>,
) -> Result<DocItem> {
    let mut value = cursor.peek(1).ok_or(Error::MissingKeyValue)?;
    let type_tag = value.kind;
    let mut consumed = 2;

    if value.kind == NodeKind::Array {
        value = cursor.peek(2).ok_or(Error::MissingKeyValue)?;
        consumed += 1;
    }

    let segments = cursor.key_run(consumed);
    if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
        return Err(Error::MissingKey);
    }
    let leaf = segments.join(".");
    cursor.advance(consumed + segments.len());

    Ok(DocItem {
        key: paths.qualify(&leaf),
        value: value.data.clone(),
        type_tag: type_tag.to_string(),
        comment: comments.take(),
    })
}

/// Rewrite values that need a visible marker once extraction is complete.
fn apply_value_overrides(items: &mut [DocItem]) {
    for item in items {
        if item.comment.none_default {
            item.value = NONE_VALUE.to_string();
        }
        if item.type_tag == STRING_TYPE && item.value.is_empty() {
            item.value = EMPTY_STRING_VALUE.to_string();
        }
    }
}
