//! Key path tracking across table and array-table headers.

use super::cursor::Cursor;
use crate::options::ArrayTablePolicy;
use std::collections::HashMap;

/// Outcome of entering an `[[array.table]]` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayTableEntry {
    /// Occurrence of this block under its parent, starting at 0
    pub index: usize,
    /// Whether the block gets a heading item
    pub documented: bool,
}

#[derive(Debug)]
pub struct KeyPathTracker {
    policy: ArrayTablePolicy,
    current: String,
    /// Occurrence counters. Keyed by the plain path under `First` and by the
    /// indexed path under `Every`, so a new parent element restarts its children.
    occurrences: HashMap<String, usize>,
    /// Occurrence currently open for each array-table plain path.
    active: HashMap<String, usize>,
}

impl KeyPathTracker {
    pub fn new(policy: ArrayTablePolicy) -> Self {
        Self {
            policy,
            current: String::new(),
            occurrences: HashMap::new(),
            active: HashMap::new(),
        }
    }

    /// Read the key segments of the header under the cursor.
    ///
    /// Advances past the header node and every `Key` node after it. Returns
    /// `None` when no key follows the header or a segment is empty.
    pub fn read_header_path(cursor: &mut Cursor<'_>) -> Option<Vec<String>> {
        let segments = cursor.key_run(1);
        cursor.advance(1 + segments.len());
        if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(segments.into_iter().map(str::to_string).collect())
    }

    /// `[path]` replaces the current prefix. Returns the path its keys live under.
    pub fn enter_table(&mut self, segments: &[String]) -> String {
        self.current = match self.policy {
            ArrayTablePolicy::First => segments.join("."),
            ArrayTablePolicy::Every => self.indexed(segments),
        };
        self.current.clone()
    }

    /// `[[path]]` replaces the current prefix and bumps the occurrence count.
    pub fn enter_array_table(&mut self, segments: &[String]) -> ArrayTableEntry {
        let plain = segments.join(".");
        let counter = match (self.policy, segments.split_last()) {
            (ArrayTablePolicy::Every, Some((last, parents))) if !parents.is_empty() => {
                format!("{}.{}", self.indexed(parents), last)
            }
            _ => plain.clone(),
        };

        let index = match self.occurrences.get_mut(&counter) {
            Some(index) => {
                *index += 1;
                *index
            }
            None => {
                self.occurrences.insert(counter, 0);
                0
            }
        };

        let nested = format!("{}.", plain);
        self.active.retain(|path, _| !path.starts_with(&nested));
        self.active.insert(plain.clone(), index);

        let documented = match self.policy {
            ArrayTablePolicy::First => {
                self.current = plain;
                index == 0
            }
            ArrayTablePolicy::Every => {
                self.current = self.indexed(segments);
                true
            }
        };

        ArrayTableEntry { index, documented }
    }

    /// Full path of a key/value declared under the current header.
    pub fn qualify(&self, leaf: &str) -> String {
        if self.current.is_empty() {
            leaf.to_string()
        } else {
            format!("{}.{}", self.current, leaf)
        }
    }

    /// Join `segments`, suffixing every open array table with `[n]`.
    fn indexed(&self, segments: &[String]) -> String {
        let mut plain = String::new();
        let mut out = String::new();
        for segment in segments {
            if !plain.is_empty() {
                plain.push('.');
                out.push('.');
            }
            plain.push_str(segment);
            out.push_str(segment);
            if let Some(index) = self.active.get(&plain) {
                out.push_str(&format!("[{}]", index));
            }
        }
        out
    }
}
