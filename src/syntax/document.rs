//! Expression trees built from a parsed `toml_edit` document.
//!
//! `toml_edit` keeps comments in the decor around keys, values and table
//! headers. This module walks the document in source order and turns every
//! header and key/value into an [`Expr`], emitting the comments attached to it
//! as `Comment` expressions before (prefix decor) or after (suffix decor).

use super::flatten::Expr;
use super::NodeKind;
use toml_edit::{DocumentMut, Item, Key, RawString, Table, Value};

/// A `[table]` or `[[array.table]]` block of the document.
struct Section<'d> {
    kind: NodeKind,
    keys: Vec<&'d Key>,
    table: &'d Table,
}

/// Every top-level expression of `doc`, in source order.
pub(crate) fn expressions(doc: &DocumentMut) -> Vec<Expr> {
    let mut exprs = Vec::new();
    key_values(doc.as_table(), &mut exprs);

    for section in sections(doc.as_table()) {
        comments(section.table.decor().prefix(), &mut exprs);

        let keys: Vec<String> = section.keys.iter().map(|key| key_text(key)).collect();
        let header = match section.kind {
            NodeKind::ArrayTable => format!("[[{}]]", keys.join(".")),
            _ => format!("[{}]", keys.join(".")),
        };
        let children = keys
            .into_iter()
            .map(|key| Expr::leaf(NodeKind::Key, key))
            .collect();
        exprs.push(Expr::with_children(section.kind, header, children));

        comments(section.table.decor().suffix(), &mut exprs);
        key_values(section.table, &mut exprs);
    }

    comments(Some(doc.trailing()), &mut exprs);
    exprs
}

/// Header blocks of the document ordered by their position in the source.
///
/// Implicit tables (`a` in `[a.b]`) have no header of their own and dotted
/// tables (`a` in `a.b = 1`) belong to their parent's key/values.
fn sections(root: &Table) -> Vec<Section<'_>> {
    let mut found = Vec::new();
    let mut stack = vec![(Vec::new(), root)];

    while let Some((path, table)) = stack.pop() {
        for (name, _) in table.iter() {
            let Some((key, item)) = table.get_key_value(name) else {
                continue;
            };
            let mut keys = path.clone();
            keys.push(key);

            match item {
                Item::Table(child) if !child.is_dotted() => {
                    if !child.is_implicit() {
                        found.push(Section {
                            kind: NodeKind::Table,
                            keys: keys.clone(),
                            table: child,
                        });
                    }
                    stack.push((keys, child));
                }
                Item::ArrayOfTables(array) => {
                    for child in array.iter() {
                        found.push(Section {
                            kind: NodeKind::ArrayTable,
                            keys: keys.clone(),
                            table: child,
                        });
                        stack.push((keys.clone(), child));
                    }
                }
                _ => {}
            }
        }
    }

    found.sort_by_key(|section| section.table.position());
    found
}

/// The key/values declared directly under `table`, dotted keys included.
fn key_values(table: &Table, exprs: &mut Vec<Expr>) {
    for (path, value) in table.get_values() {
        if let Some(leaf) = path.last() {
            comments(leaf.leaf_decor().prefix(), exprs);
        }

        let keys: Vec<String> = path.iter().map(|key| key_text(key)).collect();
        let literal = literal(value);
        let data = format!("{} = {}", keys.join("."), literal);

        let mut children = Vec::with_capacity(keys.len() + 1);
        children.push(value_expr(value, literal));
        children.extend(keys.into_iter().map(|key| Expr::leaf(NodeKind::Key, key)));
        exprs.push(Expr::with_children(NodeKind::KeyValue, data, children));

        comments(value.decor().suffix(), exprs);
    }
}

/// Push one `Comment` expression per comment line of a decor string.
fn comments(raw: Option<&RawString>, exprs: &mut Vec<Expr>) {
    let text = raw.and_then(RawString::as_str).unwrap_or_default();
    for line in text.lines().map(str::trim) {
        if line.starts_with('#') {
            exprs.push(Expr::leaf(NodeKind::Comment, line));
        }
    }
}

/// A key segment as it should read in a dotted path: bare when it can be,
/// quoted otherwise (`""`, `"a.b"`).
fn key_text(key: &Key) -> String {
    Key::new(key.get()).display_repr().into_owned()
}

/// The value node of a key/value. Arrays get a wrapper whose single body
/// node carries the whole literal, typed after the first element.
fn value_expr(value: &Value, literal: String) -> Expr {
    match value {
        Value::Array(array) => {
            let body_kind = array.iter().next().map(kind).unwrap_or(NodeKind::Array);
            let body = Expr::leaf(body_kind, literal.as_str());
            Expr::with_children(NodeKind::Array, literal, vec![body])
        }
        Value::String(s) => Expr::leaf(NodeKind::String, s.value().as_str()),
        _ => Expr::leaf(kind(value), literal),
    }
}

fn kind(value: &Value) -> NodeKind {
    match value {
        Value::String(_) => NodeKind::String,
        Value::Integer(_) => NodeKind::Integer,
        Value::Float(_) => NodeKind::Float,
        Value::Boolean(_) => NodeKind::Bool,
        Value::Datetime(dt) => {
            let dt = dt.value();
            match (dt.date.is_some(), dt.time.is_some(), dt.offset.is_some()) {
                (true, true, true) => NodeKind::DateTime,
                (true, true, false) => NodeKind::LocalDateTime,
                (true, false, _) => NodeKind::LocalDate,
                (false, _, _) => NodeKind::LocalTime,
            }
        }
        Value::Array(_) => NodeKind::Array,
        Value::InlineTable(_) => NodeKind::InlineTable,
    }
}

/// Single-line source form of a value, whitespace and comments normalized.
fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.display_repr().into_owned(),
        Value::Integer(i) => i.display_repr().into_owned(),
        Value::Float(f) => f.display_repr().into_owned(),
        Value::Boolean(b) => b.display_repr().into_owned(),
        Value::Datetime(dt) => dt.display_repr().into_owned(),
        Value::Array(array) => {
            let elements: Vec<String> = array.iter().map(literal).collect();
            format!("[{}]", elements.join(", "))
        }
        Value::InlineTable(table) => {
            let entries: Vec<String> = table
                .get_values()
                .into_iter()
                .map(|(path, value)| {
                    let keys: Vec<String> = path.iter().map(|key| key_text(key)).collect();
                    format!("{} = {}", keys.join("."), literal(value))
                })
                .collect();
            if entries.is_empty() {
                "{}".to_string()
            } else {
                format!("{{ {} }}", entries.join(", "))
            }
        }
    }
}
