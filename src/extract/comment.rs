//! Comment aggregation: filter documentation comments and merge runs of them.

use crate::model::{Comment, NONE_DEFAULT_MARKER};

/// Collects comment lines until the next item takes them.
#[derive(Debug)]
pub struct CommentAggregator<'p> {
    prefix: &'p str,
    pending: Comment,
}

impl<'p> CommentAggregator<'p> {
    pub fn new(prefix: &'p str) -> Self {
        Self {
            prefix,
            pending: Comment::default(),
        }
    }

    /// Feed the raw text of a comment node.
    ///
    /// Comments without the documentation prefix are dropped. The whole run
    /// of leading `#` goes, so `## Title` reads `Title` under any prefix.
    pub fn push(&mut self, raw: &str) {
        let raw = raw.strip_prefix(' ').unwrap_or(raw);
        if !raw.starts_with(self.prefix) {
            tracing::trace!(comment = raw, "skipping comment without doc prefix");
            return;
        }
        let text = raw.trim_start_matches('#');
        let text = text.strip_prefix(' ').unwrap_or(text);

        if text.contains(NONE_DEFAULT_MARKER) {
            self.pending.none_default = true;
        } else {
            self.pending.lines.push(text.to_string());
        }
    }

    /// Hand over the pending comment and start a fresh one.
    pub fn take(&mut self) -> Comment {
        std::mem::take(&mut self.pending)
    }
}
