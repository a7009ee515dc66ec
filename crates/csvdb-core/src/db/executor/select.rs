use crate::{
    db::{
        executor::{compile, len_u64},
        predicate::Predicate,
        query::QueryError,
        response::{QueryResult, Record},
        schema::{TableSchema, UnknownColumnError, load_schema},
        store::TableStore,
        value::Row,
    },
    obs::sink::{ExecKind, Span},
};
use tracing::{debug, instrument};

/// Project the rows matching `predicate` onto `fields`.
///
/// Records keep backing-store order and stop at `limit` when it is
/// positive. No predicate matches every row. An empty `fields` yields one
/// empty record per match; repeated names are projected once, in schema
/// order.
pub fn select_rows(
    schema: &TableSchema,
    rows: &[Row],
    fields: &[String],
    predicate: Option<&Predicate>,
    limit: usize,
) -> Result<QueryResult, UnknownColumnError> {
    let projection = resolve_projection(schema, fields)?;
    let program = compile(schema, predicate)?;

    let mut records = Vec::new();
    for row in rows {
        if limit > 0 && records.len() >= limit {
            break;
        }
        if program.as_ref().is_some_and(|program| !program.eval(row)) {
            continue;
        }

        let record = projection
            .iter()
            .map(|&(ordinal, name)| {
                let value = row.get(ordinal).cloned().unwrap_or_default();
                (name.to_string(), value)
            })
            .collect();
        records.push(Record::from_fields(record));
    }

    Ok(QueryResult::new(records))
}

fn resolve_projection<'f>(
    schema: &TableSchema,
    fields: &'f [String],
) -> Result<Vec<(usize, &'f str)>, UnknownColumnError> {
    let mut projection = Vec::with_capacity(fields.len());
    for field in fields {
        let ordinal = schema.resolve(field)?.ordinal;
        if !projection.iter().any(|&(_, name)| name == field.as_str()) {
            projection.push((ordinal, field.as_str()));
        }
    }
    projection.sort_by_key(|&(ordinal, _)| ordinal);

    Ok(projection)
}

#[instrument(
    name = "csvdb::select",
    level = "debug",
    skip_all,
    fields(table = %store.table())
)]
pub(crate) fn execute(
    store: &TableStore,
    fields: &[String],
    predicate: Option<&Predicate>,
    limit: usize,
) -> Result<QueryResult, QueryError> {
    let mut span = Span::new(ExecKind::Select, store.table().as_str());

    let schema = load_schema(store)?;
    let rows = store.read_rows(schema.width())?;
    span.scanned(len_u64(rows.len()));

    let result = select_rows(&schema, &rows, fields, predicate, limit)?;
    span.set_rows(len_u64(result.len()));

    debug!(scanned = rows.len(), selected = result.len(), "select complete");

    Ok(result)
}
