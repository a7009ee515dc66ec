use crate::{
    db::{identity::TableNameError, store::StoreError},
    error::ErrorClass,
};
use thiserror::Error as ThisError;

///
/// UnknownColumnError
///
/// A predicate, projection, or value record named a column the table's
/// schema does not contain.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown column '{column}' in table '{table}'")]
pub struct UnknownColumnError {
    pub table: String,
    pub column: String,
}

///
/// SchemaLoadError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum SchemaLoadError {
    #[error("schema stream is empty")]
    Empty,

    #[error("schema line {line} has {found} fields, expected 2")]
    Malformed { line: usize, found: usize },

    #[error("schema stream could not be read: {0}")]
    Open(#[source] StoreError),

    #[error("schema line {line} has unknown type tag '{tag}'")]
    UnknownType { line: usize, tag: String },
}

impl SchemaLoadError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Open(err) => err.class(),
            Self::Empty | Self::Malformed { .. } | Self::UnknownType { .. } => {
                ErrorClass::Corruption
            }
        }
    }
}

///
/// TableCreationError
///
/// Either artifact could not be created. The table may be half-created;
/// callers must treat it as unusable.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum TableCreationError {
    #[error("invalid column list: {0}")]
    InvalidColumns(String),

    #[error("table artifact could not be created: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    TableName(#[from] TableNameError),
}

impl TableCreationError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidColumns(_) | Self::TableName(_) => ErrorClass::Unsupported,
            Self::Store(err) => err.class(),
        }
    }
}
