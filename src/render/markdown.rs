//! GitHub-flavored markdown table renderer.

use super::collapse_trailing_newlines;
use crate::model::{Comment, DocItem};

/// Shown in any cell with nothing to say.
pub const PLACEHOLDER: &str = "--";

/// Joins the lines of a multi-line description inside one cell.
pub const LINE_BREAK: &str = "<br/>";

const HEADER: &str = "| Key | Type | Default | Descriptions |\n";
const SEPARATOR: &str = "| --- | -----| ------- | ----------- |\n";

/// Render items as a four-column table, one row per item.
pub fn render(items: &[DocItem]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str(SEPARATOR);

    for item in items {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            normalize(&item.key, true),
            normalize(&item.type_tag, false),
            normalize(&item.value, true),
            render_comment(&item.comment),
        ));
    }

    collapse_trailing_newlines(&out)
}

/// Description cell: lines joined with `<br/>`, or the placeholder.
fn render_comment(comment: &Comment) -> String {
    normalize(&comment.lines.join(LINE_BREAK), false)
}

/// Placeholder for empty input, otherwise the escaped text, optionally as a
/// code span.
fn normalize(input: &str, is_code: bool) -> String {
    if input.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let escaped = escape_cell(input);
    if is_code {
        code_span(&escaped)
    } else {
        escaped
    }
}

/// Wrap `text` in a code span whose fence is longer than any backtick run
/// inside it.
fn code_span(text: &str) -> String {
    let longest = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or_default();
    if longest == 0 {
        return format!("`{}`", text);
    }
    let fence = "`".repeat(longest + 1);
    format!("{fence} {text} {fence}")
}

/// Keep cell contents from breaking the table row.
fn escape_cell(input: &str) -> String {
    input
        .replace('|', "\\|")
        .replace("\r\n", LINE_BREAK)
        .replace('\n', LINE_BREAK)
}
