use crate::error::ErrorClass;
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Failure opening, decoding, or replacing a table artifact.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum StoreError {
    #[error("could not decode {path:?}: {source}")]
    Codec {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("i/o failure on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("row {row} of {path:?} has {found} fields, schema expects {expected}")]
    RowWidth {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();

        move |source| Self::Io { path, source }
    }

    pub(crate) fn codec(path: impl Into<PathBuf>) -> impl FnOnce(csv::Error) -> Self {
        let path = path.into();

        move |source| Self::Codec { path, source }
    }

    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorClass::NotFound
            }
            Self::Io { .. } => ErrorClass::Internal,
            Self::Codec { source, .. } if source.is_io_error() => ErrorClass::Internal,
            Self::Codec { .. } | Self::RowWidth { .. } => ErrorClass::Corruption,
        }
    }
}
