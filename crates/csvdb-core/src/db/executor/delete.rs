use crate::{
    db::{
        executor::{compile, len_u64},
        predicate::Predicate,
        query::QueryError,
        schema::{TableSchema, UnknownColumnError, load_schema},
        store::TableStore,
        value::Row,
    },
    obs::sink::{ExecKind, Span},
};
use tracing::{debug, instrument};

/// Drop every row the predicate matches, keeping the rest in order.
///
/// No predicate deletes nothing. Returns the number of rows removed.
pub fn delete_rows(
    schema: &TableSchema,
    rows: &mut Vec<Row>,
    predicate: Option<&Predicate>,
) -> Result<usize, UnknownColumnError> {
    let Some(program) = compile(schema, predicate)? else {
        return Ok(0);
    };

    let before = rows.len();
    rows.retain(|row| !program.eval(row));

    Ok(before - rows.len())
}

#[instrument(
    name = "csvdb::delete",
    level = "debug",
    skip_all,
    fields(table = %store.table())
)]
pub(crate) fn execute(store: &TableStore, predicate: Option<&Predicate>) -> Result<usize, QueryError> {
    let mut span = Span::new(ExecKind::Delete, store.table().as_str());

    let schema = load_schema(store)?;
    let mut rows = store.read_rows(schema.width())?;
    span.scanned(len_u64(rows.len()));

    let deleted = delete_rows(&schema, &mut rows, predicate)?;

    // without a predicate the store is left as it was
    if predicate.is_some() {
        store.rewrite_rows(&rows)?;
    }
    span.set_rows(len_u64(deleted));

    debug!(retained = rows.len(), deleted, "delete complete");

    Ok(deleted)
}
