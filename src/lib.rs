//! toml2docs — generate markdown documentation from annotated TOML files.
//!
//! Comments directly above a key become its description:
//!
//! ```
//! use toml2docs::{generate_markdown, Options};
//!
//! let input = "# Port to listen on.\nport = 8080\n";
//! let table = generate_markdown(input, &Options::default()).unwrap();
//! assert!(table.contains("| `port` | Integer | `8080` | Port to listen on. |"));
//! ```
//!
//! The pipeline is syntax → extract → render:
//!
//! - [`syntax`] validates the document and flattens it into a node stream that
//!   keeps comments;
//! - [`extract`] walks the stream once, building [`DocItem`]s;
//! - [`render`] turns the items into a markdown table;
//! - [`template`] splices tables into a larger document.

pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod render;
pub mod syntax;
pub mod template;

pub use error::{Error, Result};
pub use model::{Comment, DocItem};
pub use options::{ArrayTablePolicy, Options};

use std::fs;
use std::path::Path;

/// Extract documentation items from TOML text.
pub fn extract_items(input: &str, options: &Options) -> Result<Vec<DocItem>> {
    let nodes = syntax::parse(input)?;
    extract::extract(&nodes, options)
}

/// Generate the markdown table for TOML text.
pub fn generate_markdown(input: &str, options: &Options) -> Result<String> {
    let items = extract_items(input, options)?;
    Ok(render::markdown::render(&items))
}

/// Generate the markdown table for a TOML file.
pub fn generate_markdown_from_file(path: &Path, options: &Options) -> Result<String> {
    let input = read(path)?;
    generate_markdown(&input, options)
}

/// Expand every `{{ toml2docs "file" }}` directive of a template file.
pub fn generate_markdown_from_template(path: &Path, options: &Options) -> Result<String> {
    let input = read(path)?;
    template::expand(&input, options)
}

/// Dump the node stream of TOML text, one `Kind: data` line per node.
pub fn dump_nodes(input: &str) -> Result<String> {
    let nodes = syntax::parse(input)?;
    Ok(syntax::dump(&nodes))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
