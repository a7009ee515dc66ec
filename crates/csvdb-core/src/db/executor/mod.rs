//! Module: db::executor
//! Responsibility: the four table operators.
//! Boundary: each operator is a pure step over a `TableSchema` and rows in
//! memory, plus an `execute` wrapper that owns all store I/O, logging, and
//! metrics for one call.

pub mod delete;
pub mod insert;
pub mod select;
pub mod update;


pub use delete::delete_rows;
pub use insert::insert_rows;
pub use select::select_rows;
pub use update::update_rows;

use crate::db::{
    predicate::{Predicate, PredicateProgram},
    schema::{TableSchema, UnknownColumnError},
    value::{Row, ValueRecord},
};

///
/// Assignments
///
/// A value record with every column resolved to its ordinal.
///

pub(crate) struct Assignments<'v> {
    slots: Vec<(usize, &'v str)>,
}

impl<'v> Assignments<'v> {
    pub(crate) fn resolve(
        schema: &TableSchema,
        values: &'v ValueRecord,
    ) -> Result<Self, UnknownColumnError> {
        let slots = values
            .iter()
            .map(|(column, value)| Ok((schema.resolve(column)?.ordinal, value)))
            .collect::<Result<_, UnknownColumnError>>()?;

        Ok(Self { slots })
    }

    /// Overwrite the assigned ordinals of `row` in place.
    pub(crate) fn apply(&self, row: &mut Row) {
        for &(ordinal, value) in &self.slots {
            if let Some(field) = row.get_mut(ordinal) {
                value.clone_into(field);
            }
        }
    }
}

// Absent predicate compiles to `None`; callers decide what that means.
pub(crate) fn compile(
    schema: &TableSchema,
    predicate: Option<&Predicate>,
) -> Result<Option<PredicateProgram>, UnknownColumnError> {
    predicate
        .map(|predicate| PredicateProgram::compile(predicate, schema))
        .transpose()
}

pub(crate) const fn len_u64(len: usize) -> u64 {
    len as u64
}
