//! Module: db::identity
//! Responsibility: validated table identifiers.
//! Boundary: every path built by the store starts from a `TableName`.

use derive_more::Display;
use std::path::{MAIN_SEPARATOR, Path};
use thiserror::Error as ThisError;

/// Maximum length for table identifiers.
pub const MAX_TABLE_NAME_LEN: usize = 128;

///
/// TableNameError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum TableNameError {
    #[error("table name is empty")]
    Empty,

    #[error("table name '{0}' is not a plain file stem")]
    NotPlainStem(String),

    #[error("table name '{name}' exceeds max length {MAX_TABLE_NAME_LEN}")]
    TooLong { name: String },
}

///
/// TableName
///
/// The base name shared by a table's schema and store artifacts.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> Result<Self, TableNameError> {
        let name = name.into();

        if name.is_empty() {
            return Err(TableNameError::Empty);
        }
        if name.len() > MAX_TABLE_NAME_LEN {
            return Err(TableNameError::TooLong { name });
        }
        if name == "."
            || name == ".."
            || name.contains(['/', '\\', MAIN_SEPARATOR, '\0'])
            || Path::new(&name).is_absolute()
        {
            return Err(TableNameError::NotPlainStem(name));
        }

        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
