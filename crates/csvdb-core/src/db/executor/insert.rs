use crate::{
    db::{
        executor::{Assignments, len_u64},
        query::QueryError,
        schema::{TableSchema, UnknownColumnError, load_schema},
        store::TableStore,
        value::{Row, ValueRecord},
    },
    obs::sink::{ExecKind, Span},
};
use tracing::{debug, instrument};

/// Append one row per record to `rows`, in input order.
///
/// Each new row is schema-wide; columns a record does not name are empty.
/// Every record is resolved before any row is appended, so an unknown
/// column leaves `rows` unchanged.
pub fn insert_rows(
    schema: &TableSchema,
    rows: &mut Vec<Row>,
    records: &[ValueRecord],
) -> Result<usize, UnknownColumnError> {
    let new_rows = records
        .iter()
        .map(|record| {
            let assignments = Assignments::resolve(schema, record)?;
            let mut row = schema.blank_row();
            assignments.apply(&mut row);

            Ok(row)
        })
        .collect::<Result<Vec<_>, UnknownColumnError>>()?;

    let inserted = new_rows.len();
    rows.extend(new_rows);

    Ok(inserted)
}

#[instrument(
    name = "csvdb::insert",
    level = "debug",
    skip_all,
    fields(table = %store.table(), records = records.len())
)]
pub(crate) fn execute(store: &TableStore, records: &[ValueRecord]) -> Result<usize, QueryError> {
    let mut span = Span::new(ExecKind::Insert, store.table().as_str());

    let schema = load_schema(store)?;
    let mut rows = store.read_rows(schema.width())?;
    let existing = rows.len();
    span.scanned(len_u64(existing));

    let inserted = insert_rows(&schema, &mut rows, records)?;
    store.rewrite_rows(&rows)?;
    span.set_rows(len_u64(inserted));

    debug!(existing, inserted, "insert complete");

    Ok(inserted)
}
