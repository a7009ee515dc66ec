//! Store configuration.
//!
//! One [`StoreConfig`] describes where table artifacts live and how they are
//! encoded. It is plain data: build it in code, or deserialize it from JSON.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Default directory for table artifacts.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default extension of the persisted schema stream.
pub const DEFAULT_SCHEMA_EXTENSION: &str = "schema";

/// Default extension of the persisted backing store.
pub const DEFAULT_DATA_EXTENSION: &str = "csv";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("{0} extension is empty")]
    EmptyExtension(&'static str),

    #[error("delimiter {0:?} cannot be used as a field delimiter")]
    InvalidDelimiter(char),

    #[error("config could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("schema and data artifacts share the extension '{0}'")]
    SharedExtension(String),
}

///
/// StoreConfig
///
/// Table `t` lives at `<data_dir>/t.<schema_extension>` and
/// `<data_dir>/t.<data_extension>`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding every table's artifacts.
    pub data_dir: PathBuf,

    pub schema_extension: String,
    pub data_extension: String,

    /// Field delimiter used by both artifacts.
    pub delimiter: u8,

    /// Fsync the temporary artifact before it replaces the original.
    pub sync_writes: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            schema_extension: DEFAULT_SCHEMA_EXTENSION.to_string(),
            data_extension: DEFAULT_DATA_EXTENSION.to_string(),
            delimiter: b',',
            sync_writes: true,
        }
    }
}

impl StoreConfig {
    /// Default configuration rooted at `data_dir`.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Parse a JSON document; absent keys keep their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_extension.is_empty() {
            return Err(ConfigError::EmptyExtension("schema"));
        }
        if self.data_extension.is_empty() {
            return Err(ConfigError::EmptyExtension("data"));
        }
        if self.schema_extension == self.data_extension {
            return Err(ConfigError::SharedExtension(self.data_extension.clone()));
        }
        if matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(ConfigError::InvalidDelimiter(char::from(self.delimiter)));
        }

        Ok(())
    }
}
