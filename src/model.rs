//! Data model for extracted documentation — format-agnostic.

/// Reserved annotation marking a key whose default should not be shown.
pub const NONE_DEFAULT_MARKER: &str = "+toml2docs:none-default";

/// Value shown for keys annotated with [`NONE_DEFAULT_MARKER`].
pub const NONE_VALUE: &str = "None";

/// Value shown for string keys whose default is the empty string.
pub const EMPTY_STRING_VALUE: &str = "\"\"";

/// Type tag of string values.
pub const STRING_TYPE: &str = "String";

/// Comment lines collected for the next documentation item.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Cleaned lines, in source order
    pub lines: Vec<String>,
    /// Set when a line carried [`NONE_DEFAULT_MARKER`]
    pub none_default: bool,
}

/// A single documented key or table heading.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocItem {
    /// Dotted key path, `[[path]]` for array-table headings
    pub key: String,
    /// Raw default value, empty for headings
    pub value: String,
    /// Type tag of the value, empty for headings
    pub type_tag: String,
    pub comment: Comment,
}

impl DocItem {
    /// Heading item for a table or array-table declaration.
    pub fn heading(key: impl Into<String>, comment: Comment) -> Self {
        Self {
            key: key.into(),
            comment,
            ..Default::default()
        }
    }
}
