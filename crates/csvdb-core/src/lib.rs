//! Core runtime for csvdb: table schemas, the predicate engine, the
//! delimited-text table store, and the four table executors.
#![warn(unreachable_pub)]

pub mod config;
pub mod db;
pub mod error;
pub mod obs;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No executors, stores, or codec helpers are re-exported here.
///

pub mod prelude {
    pub use crate::db::{
        Db,
        predicate::{CompareOp, LogicalOp, Predicate, eq, ge, gt, le, lt, ne},
        response::{QueryResult, Record},
        schema::{ColumnDef, FieldType, TableSchema},
        value::{Row, ValueRecord},
    };
}
