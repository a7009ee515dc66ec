use crate::db::{
    Db,
    executor::select,
    predicate::Predicate,
    query::QueryError,
    response::QueryResult,
};

///
/// Select
///
/// Projection awaiting its table. An empty projection selects no fields.
///

#[must_use = "a projection does nothing until `.from(..)` names a table"]
pub struct Select<'a> {
    db: &'a Db,
    fields: Vec<String>,
}

impl<'a> Select<'a> {
    pub(crate) fn new<I, S>(db: &'a Db, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            db,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from(self, table: impl Into<String>) -> SelectQuery<'a> {
        SelectQuery {
            db: self.db,
            table: table.into(),
            fields: self.fields,
            predicate: None,
            limit: 0,
        }
    }
}

///
/// SelectQuery
///

#[must_use = "queries do nothing until executed"]
pub struct SelectQuery<'a> {
    db: &'a Db,
    table: String,
    fields: Vec<String>,
    predicate: Option<Predicate>,
    limit: usize,
}

impl SelectQuery<'_> {
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Cap the result length; `0` means unbounded.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn execute(self) -> Result<QueryResult, QueryError> {
        let store = self.db.store(&self.table)?;

        select::execute(&store, &self.fields, self.predicate.as_ref(), self.limit)
    }
}
