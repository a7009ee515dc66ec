use crate::db::{schema::UnknownColumnError, value::Row};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, str::FromStr};
use thiserror::Error as ThisError;
use tracing::warn;

///
/// FieldType
///
/// Declared column type. Rows are untyped at rest; the declared type only
/// decides how the predicate engine compares a field.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum FieldType {
    #[display("int")]
    #[serde(rename = "int")]
    Integer,

    #[display("text")]
    #[serde(rename = "text")]
    Text,
}

impl FieldType {
    /// Tag written to the persisted schema stream.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Text => "text",
        }
    }
}

///
/// UnknownFieldType
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown field type tag '{0}'")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "int" => Ok(Self::Integer),
            "text" => Ok(Self::Text),
            other => Err(UnknownFieldType(other.to_string())),
        }
    }
}

///
/// ColumnDef
///
/// One declared column, as passed to table definition.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnDef {
    pub name: String,
    pub field_type: FieldType,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Integer)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text)
    }
}

///
/// SchemaField
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SchemaField {
    pub field_type: FieldType,
    /// Zero-based position of the column within every row.
    pub ordinal: usize,
}

///
/// TableSchema
///
/// Column name → (declared type, ordinal) for one table.
///
/// Ordinals are positions in the persisted schema stream. `width` is the
/// number of entries in that stream and is the field count of every row.
/// A name that occurs twice keeps the ordinal of its last occurrence; the
/// earlier position becomes an anonymous slot that still occupies a field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableSchema {
    table: String,
    fields: BTreeMap<String, SchemaField>,
    width: usize,
}

impl TableSchema {
    /// Build a schema from columns in ordinal order.
    pub fn new(table: impl Into<String>, columns: impl IntoIterator<Item = ColumnDef>) -> Self {
        let table = table.into();
        let mut fields = BTreeMap::new();
        let mut width = 0;

        for (ordinal, column) in columns.into_iter().enumerate() {
            let field = SchemaField {
                field_type: column.field_type,
                ordinal,
            };

            if let Some(prev) = fields.insert(column.name.clone(), field) {
                warn!(
                    table = %table,
                    column = %column.name,
                    replaced = prev.ordinal,
                    ordinal,
                    "duplicate column in schema; last occurrence wins"
                );
            }
            width = ordinal + 1;
        }

        Self {
            table,
            fields,
            width,
        }
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Field count of every row in the backing store.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of addressable column names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<SchemaField> {
        self.fields.get(column).copied()
    }

    pub fn resolve(&self, column: &str) -> Result<SchemaField, UnknownColumnError> {
        self.get(column).ok_or_else(|| UnknownColumnError {
            table: self.table.clone(),
            column: column.to_string(),
        })
    }

    /// Column names with their fields, in ordinal order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, SchemaField)> {
        let mut columns: Vec<_> = self
            .fields
            .iter()
            .map(|(name, field)| (name.as_str(), *field))
            .collect();
        columns.sort_by_key(|(_, field)| field.ordinal);

        columns.into_iter()
    }

    /// Empty row of the schema's width.
    #[must_use]
    pub fn blank_row(&self) -> Row {
        vec![String::new(); self.width]
    }
}
