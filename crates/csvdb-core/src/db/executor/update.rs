use crate::{
    db::{
        executor::{Assignments, compile, len_u64},
        predicate::Predicate,
        query::QueryError,
        schema::{TableSchema, UnknownColumnError, load_schema},
        store::TableStore,
        value::{Row, ValueRecord},
    },
    obs::sink::{ExecKind, Span},
};
use tracing::{debug, instrument};

/// Apply `values` to every row the predicate matches, in place.
///
/// The predicate sees the original row, never the updated one. No
/// predicate updates every row. Row order is preserved and the count of
/// replaced rows is returned.
pub fn update_rows(
    schema: &TableSchema,
    rows: &mut [Row],
    values: &ValueRecord,
    predicate: Option<&Predicate>,
) -> Result<usize, UnknownColumnError> {
    let assignments = Assignments::resolve(schema, values)?;
    let program = compile(schema, predicate)?;

    let mut updated = 0;
    for row in rows.iter_mut() {
        if program.as_ref().is_none_or(|program| program.eval(row)) {
            assignments.apply(row);
            updated += 1;
        }
    }

    Ok(updated)
}

#[instrument(
    name = "csvdb::update",
    level = "debug",
    skip_all,
    fields(table = %store.table())
)]
pub(crate) fn execute(
    store: &TableStore,
    values: &ValueRecord,
    predicate: Option<&Predicate>,
) -> Result<usize, QueryError> {
    let mut span = Span::new(ExecKind::Update, store.table().as_str());

    let schema = load_schema(store)?;
    let mut rows = store.read_rows(schema.width())?;
    span.scanned(len_u64(rows.len()));

    let updated = update_rows(&schema, &mut rows, values, predicate)?;
    store.rewrite_rows(&rows)?;
    span.set_rows(len_u64(updated));

    debug!(scanned = rows.len(), updated, "update complete");

    Ok(updated)
}
