use crate::{
    db::{
        identity::TableNameError,
        schema::{SchemaLoadError, UnknownColumnError},
        store::StoreError,
    },
    error::ErrorClass,
};
use thiserror::Error as ThisError;

///
/// QueryError
///
/// The single error type returned by every table operator.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum QueryError {
    #[error("schema could not be loaded: {0}")]
    SchemaLoad(#[from] SchemaLoadError),

    #[error("table store failure: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    TableName(#[from] TableNameError),

    #[error(transparent)]
    UnknownColumn(#[from] UnknownColumnError),
}

impl QueryError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::SchemaLoad(err) => err.class(),
            Self::Store(err) => err.class(),
            Self::TableName(_) | Self::UnknownColumn(_) => ErrorClass::Unsupported,
        }
    }
}
