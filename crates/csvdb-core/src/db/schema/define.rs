use crate::db::{
    schema::{ColumnDef, TableCreationError},
    store::TableStore,
    value::Row,
};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Persist the column list as the table's schema stream, then create an
/// empty backing store.
///
/// The two artifacts are written one after the other. If the second write
/// fails the schema stream is already in place and the table is unusable.
#[instrument(name = "csvdb::define_table", level = "debug", skip_all, fields(table = %store.table()))]
pub(crate) fn define_table(
    store: &TableStore,
    columns: &[ColumnDef],
) -> Result<(), TableCreationError> {
    validate_columns(columns)?;

    let rows: Vec<Row> = columns
        .iter()
        .map(|column| vec![column.name.clone(), column.field_type.tag().to_string()])
        .collect();

    store.ensure_data_dir()?;
    store.write_schema_rows(&rows)?;
    store.create_empty()?;

    debug!(columns = columns.len(), "table defined");

    Ok(())
}

fn validate_columns(columns: &[ColumnDef]) -> Result<(), TableCreationError> {
    if columns.is_empty() {
        return Err(TableCreationError::InvalidColumns(
            "a table needs at least one column".to_string(),
        ));
    }

    let mut seen = BTreeSet::new();
    for column in columns {
        if column.name.is_empty() {
            return Err(TableCreationError::InvalidColumns(
                "column name is empty".to_string(),
            ));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(TableCreationError::InvalidColumns(format!(
                "duplicate column '{}'",
                column.name
            )));
        }
    }

    Ok(())
}
