use crate::db::{Db, executor::delete, predicate::Predicate, query::QueryError};

///
/// DeleteQuery
///
/// Without a filter nothing is deleted.
///

#[must_use = "queries do nothing until executed"]
pub struct DeleteQuery<'a> {
    db: &'a Db,
    table: String,
    predicate: Option<Predicate>,
}

impl<'a> DeleteQuery<'a> {
    pub(crate) fn new(db: &'a Db, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            predicate: None,
        }
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Returns the number of rows removed.
    pub fn execute(self) -> Result<usize, QueryError> {
        let store = self.db.store(&self.table)?;

        delete::execute(&store, self.predicate.as_ref())
    }
}
