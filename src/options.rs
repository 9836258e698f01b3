//! Extraction options, passed explicitly to every call.

use clap::ValueEnum;

/// How repeated `[[array.table]]` blocks are documented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ArrayTablePolicy {
    /// Only the first block of a given path gets a heading; keys inside every
    /// block share the plain path.
    #[default]
    First,
    /// Every block gets a heading; keys inside block `n` are prefixed with
    /// `path[n]`.
    Every,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Comments must start with this prefix to count as documentation.
    pub comment_prefix: String,
    pub array_tables: ArrayTablePolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            comment_prefix: "#".to_string(),
            array_tables: ArrayTablePolicy::First,
        }
    }
}

impl Options {
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    pub fn with_array_tables(mut self, policy: ArrayTablePolicy) -> Self {
        self.array_tables = policy;
        self
    }
}
