use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating, parsing or building definitions.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no RDFa mapping found for type \"{name}\" (looked for {file_name})")]
    TypeNotFound { name: String, file_name: String },

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed definition {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("unknown child kind <{tag}> in definition of \"{type_name}\"")]
    UnknownChildKind { type_name: String, tag: String },

    #[error("<{tag}> child without identifier in definition of \"{type_name}\"")]
    MissingIdentifier { type_name: String, tag: String },

    #[error("invalid definition file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("cannot scan definition directory: {0}")]
    Scan(#[from] glob::GlobError),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}
