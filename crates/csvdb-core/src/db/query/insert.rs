use crate::db::{Db, executor::insert, query::QueryError, value::ValueRecord};

///
/// InsertQuery
///
/// Records are appended in the order they were added.
///

#[must_use = "queries do nothing until executed"]
pub struct InsertQuery<'a> {
    db: &'a Db,
    table: String,
    records: Vec<ValueRecord>,
}

impl<'a> InsertQuery<'a> {
    pub(crate) fn new(db: &'a Db, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            records: Vec::new(),
        }
    }

    pub fn values(mut self, record: ValueRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn values_many(mut self, records: impl IntoIterator<Item = ValueRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Returns the number of rows written.
    pub fn execute(self) -> Result<usize, QueryError> {
        let store = self.db.store(&self.table)?;

        insert::execute(&store, &self.records)
    }
}
