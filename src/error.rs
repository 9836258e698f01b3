//! Error type shared by the syntax layer, the extractor and the template expander.

use crate::syntax::NodeKind;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The document is not valid TOML.
    #[error(transparent)]
    Parse(#[from] toml_edit::TomlError),

    #[error("missing key value")]
    MissingKeyValue,

    #[error("missing key")]
    MissingKey,

    #[error("missing key for table")]
    MissingTableKey,

    #[error("missing key for array table")]
    MissingArrayTableKey,

    #[error("unexpected node kind: {0}")]
    UnexpectedNode(NodeKind),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
