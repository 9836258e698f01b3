//! Output rendering.

pub mod markdown;

use regex::Regex;
use std::sync::LazyLock;

static RE_TRAILING_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+$").unwrap());

/// Collapse any run of trailing newlines to exactly one.
pub fn collapse_trailing_newlines(text: &str) -> String {
    RE_TRAILING_NEWLINES.replace(text, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newlines_collapse() {
        assert_eq!(collapse_trailing_newlines("a\n\n\n"), "a\n");
        assert_eq!(collapse_trailing_newlines("a\n"), "a\n");
        assert_eq!(collapse_trailing_newlines("a"), "a");
        assert_eq!(collapse_trailing_newlines("a\n\nb\n\n"), "a\n\nb\n");
    }
}
