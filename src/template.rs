//! Template expansion: splice generated tables into a larger document.
//!
//! A directive looks like `{{ toml2docs "config/example.toml" }}` and is
//! replaced by the table generated from that file. Everything else in the
//! template is copied through untouched.

use crate::error::Result;
use crate::options::Options;
use crate::render::collapse_trailing_newlines;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static RE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{\s*toml2docs\s+(?:"([^"]*)"|'([^']*)')\s*\}\}"#).unwrap()
});

/// Replace every directive in `template` with its generated table.
pub fn expand(template: &str, options: &Options) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in RE_DIRECTIVE.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        let path = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();

        tracing::debug!(path, "expanding template directive");
        out.push_str(&template[last..whole.start()]);
        out.push_str(&crate::generate_markdown_from_file(Path::new(path), options)?);
        last = whole.end();
    }
    out.push_str(&template[last..]);

    Ok(collapse_trailing_newlines(&out))
}
