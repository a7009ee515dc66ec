pub mod executor;
pub mod identity;
pub mod predicate;
pub mod query;
pub mod response;
pub mod schema;
pub mod store;
pub mod value;

use crate::{
    config::{ConfigError, StoreConfig},
    db::{
        identity::{TableName, TableNameError},
        query::{DeleteQuery, InsertQuery, QueryError, Select, UpdateQuery},
        schema::{ColumnDef, TableCreationError, TableSchema},
        store::TableStore,
    },
};
use std::path::PathBuf;

///
/// Db
///
/// Entry point for defining tables and running operators against the
/// tables of one data directory.
///
/// Nothing is cached between calls: every operator reloads the schema and
/// the full row set, and mutating operators rewrite the whole backing
/// store. Calls against the same table are not synchronised; concurrent
/// writers race and the last rewrite wins.
///

#[derive(Clone, Debug)]
pub struct Db {
    config: StoreConfig,
}

impl Db {
    pub fn new(config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Default configuration rooted at `data_dir`.
    #[must_use]
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config: StoreConfig::with_data_dir(data_dir),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ─────────────────────────────────────────────
    // SCHEMA
    // ─────────────────────────────────────────────

    /// Create a table's schema stream and an empty backing store.
    ///
    /// On error the table may be half-created and must be treated as
    /// unusable.
    pub fn define_table(&self, table: &str, columns: &[ColumnDef]) -> Result<(), TableCreationError> {
        let store = self.store(table)?;

        schema::define_table(&store, columns)
    }

    pub fn load_schema(&self, table: &str) -> Result<TableSchema, QueryError> {
        let store = self.store(table)?;

        Ok(schema::load_schema(&store)?)
    }

    // ─────────────────────────────────────────────
    // OPERATORS
    // ─────────────────────────────────────────────

    /// Start a select projecting `fields`. An empty list projects nothing.
    pub fn select<I, S>(&self, fields: I) -> Select<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Select::new(self, fields)
    }

    pub fn insert(&self, table: impl Into<String>) -> InsertQuery<'_> {
        InsertQuery::new(self, table)
    }

    pub fn update(&self, table: impl Into<String>) -> UpdateQuery<'_> {
        UpdateQuery::new(self, table)
    }

    pub fn delete(&self, table: impl Into<String>) -> DeleteQuery<'_> {
        DeleteQuery::new(self, table)
    }

    /// Resolve the artifacts of `table`.
    pub fn store(&self, table: &str) -> Result<TableStore, TableNameError> {
        Ok(TableStore::new(&self.config, TableName::new(table)?))
    }
}
