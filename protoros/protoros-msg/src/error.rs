//! Error types for record parsing and corpus validation.

use std::path::PathBuf;

/// Why a path cannot name a `.msg` record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathLayoutError {
    #[error("file {} does not have the .msg extension", path.display())]
    Extension { path: PathBuf },

    #[error("file {} is not contained inside a msg directory", path.display())]
    NotInMsgDir { path: PathBuf },

    #[error("unable to find package name for {}", path.display())]
    NoPackage { path: PathBuf },
}

/// Error returned by the record parser and the corpus validator.
#[derive(Debug, thiserror::Error)]
pub enum MsgError {
    /// A field line does not follow `type[suffix] name[=literal]`.
    #[error("malformed field in '{record}': `{line}` ({detail})")]
    MalformedField {
        record: String,
        line: String,
        detail: String,
    },

    /// Pass 2 found a field whose type is not part of the type universe.
    #[error("unable to find type '{missing_type}' referenced by '{record}'")]
    UnresolvedType {
        record: String,
        missing_type: String,
    },

    /// The corpus root could not be walked at all.
    #[error("corpus root {} is not a directory", path.display())]
    CorpusRoot { path: PathBuf },
}
