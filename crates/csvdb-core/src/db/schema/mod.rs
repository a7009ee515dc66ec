//! Module: db::schema
//! Responsibility: the column name → (declared type, ordinal) model of one table,
//! loading it from the persisted schema stream, and defining new tables.
//! Does not own: row encoding or predicate evaluation.

mod define;
mod error;
pub(crate) mod load;
mod model;


pub use error::{SchemaLoadError, TableCreationError, UnknownColumnError};
pub use model::{ColumnDef, FieldType, SchemaField, TableSchema, UnknownFieldType};

pub(crate) use define::define_table;
pub(crate) use load::load_schema;
