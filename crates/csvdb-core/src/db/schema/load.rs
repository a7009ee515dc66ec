use crate::db::{
    schema::{ColumnDef, FieldType, SchemaLoadError, TableSchema},
    store::TableStore,
    value::Row,
};
use tracing::instrument;

/// Read and parse the persisted schema stream of one table.
#[instrument(name = "csvdb::schema::load", level = "trace", skip(store), fields(table = %store.table()))]
pub(crate) fn load_schema(store: &TableStore) -> Result<TableSchema, SchemaLoadError> {
    let rows = store.read_schema_rows().map_err(SchemaLoadError::Open)?;

    parse_schema_rows(store.table().as_str(), rows)
}

/// Each entry is `(columnName, typeTag)`; its position is the ordinal.
pub(crate) fn parse_schema_rows(table: &str, rows: Vec<Row>) -> Result<TableSchema, SchemaLoadError> {
    if rows.is_empty() {
        return Err(SchemaLoadError::Empty);
    }

    let mut columns = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let line = index + 1;

        let [name, tag]: [String; 2] = row
            .try_into()
            .map_err(|row: Row| SchemaLoadError::Malformed {
                line,
                found: row.len(),
            })?;
        let field_type = tag
            .parse::<FieldType>()
            .map_err(|err| SchemaLoadError::UnknownType { line, tag: err.0 })?;

        columns.push(ColumnDef::new(name, field_type));
    }

    Ok(TableSchema::new(table, columns))
}
