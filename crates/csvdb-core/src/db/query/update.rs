use crate::db::{
    Db, executor::update, predicate::Predicate, query::QueryError, value::ValueRecord,
};

///
/// UpdateQuery
///
/// Without a filter every row is updated.
///

#[must_use = "queries do nothing until executed"]
pub struct UpdateQuery<'a> {
    db: &'a Db,
    table: String,
    values: ValueRecord,
    predicate: Option<Predicate>,
}

impl<'a> UpdateQuery<'a> {
    pub(crate) fn new(db: &'a Db, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            values: ValueRecord::new(),
            predicate: None,
        }
    }

    /// Merge `values` into the assignments; later values win per column.
    pub fn set(mut self, values: ValueRecord) -> Self {
        for (column, value) in values.iter() {
            self.values.set(column, value);
        }
        self
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Returns the number of rows replaced.
    pub fn execute(self) -> Result<usize, QueryError> {
        let store = self.db.store(&self.table)?;

        update::execute(&store, &self.values, self.predicate.as_ref())
    }
}
