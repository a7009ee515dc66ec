use crate::db::{
    predicate::{CompareOp, ComparePredicate, Predicate, semantics},
    schema::{FieldType, TableSchema, UnknownColumnError},
};

/// Evaluate `predicate` against one row under `schema`.
///
/// Pure: the result depends only on the three inputs. Both sides of a
/// logical combination are evaluated. Referencing a column the schema does
/// not contain fails; a value that does not parse under the column's
/// declared type makes that comparison `false`.
pub fn evaluate(
    predicate: &Predicate,
    row: &[String],
    schema: &TableSchema,
) -> Result<bool, UnknownColumnError> {
    match predicate {
        Predicate::Compare(cmp) => {
            let field = schema.resolve(&cmp.field)?;

            Ok(compare_at(
                row,
                field.ordinal,
                field.field_type,
                cmp.op,
                &cmp.literal,
            ))
        }
        Predicate::And(left, right) => {
            let left = evaluate(left, row, schema)?;
            let right = evaluate(right, row, schema)?;

            Ok(left & right)
        }
        Predicate::Or(left, right) => {
            let left = evaluate(left, row, schema)?;
            let right = evaluate(right, row, schema)?;

            Ok(left | right)
        }
    }
}

///
/// PredicateProgram
///
/// Ordinal-resolved predicate for scanning many rows.
/// Column names are resolved once when compiled; evaluation is ordinal-only
/// and cannot fail.
///

#[derive(Clone, Debug)]
pub struct PredicateProgram {
    resolved: ResolvedPredicate,
}

impl PredicateProgram {
    /// Bind a predicate to a schema, resolving every column it names.
    pub fn compile(
        predicate: &Predicate,
        schema: &TableSchema,
    ) -> Result<Self, UnknownColumnError> {
        Ok(Self {
            resolved: resolve(predicate, schema)?,
        })
    }

    /// Same result as [`evaluate`] on the predicate this was compiled from.
    #[must_use]
    pub fn eval(&self, row: &[String]) -> bool {
        eval_resolved(&self.resolved, row)
    }
}

///
/// ResolvedPredicate
///

#[derive(Clone, Debug)]
enum ResolvedPredicate {
    Compare {
        ordinal: usize,
        field_type: FieldType,
        op: CompareOp,
        literal: String,
    },
    And(Box<Self>, Box<Self>),
    Or(Box<Self>, Box<Self>),
}

fn resolve(
    predicate: &Predicate,
    schema: &TableSchema,
) -> Result<ResolvedPredicate, UnknownColumnError> {
    Ok(match predicate {
        Predicate::Compare(ComparePredicate { field, op, literal }) => {
            let field = schema.resolve(field)?;

            ResolvedPredicate::Compare {
                ordinal: field.ordinal,
                field_type: field.field_type,
                op: *op,
                literal: literal.clone(),
            }
        }
        Predicate::And(left, right) => ResolvedPredicate::And(
            Box::new(resolve(left, schema)?),
            Box::new(resolve(right, schema)?),
        ),
        Predicate::Or(left, right) => ResolvedPredicate::Or(
            Box::new(resolve(left, schema)?),
            Box::new(resolve(right, schema)?),
        ),
    })
}

fn eval_resolved(predicate: &ResolvedPredicate, row: &[String]) -> bool {
    match predicate {
        ResolvedPredicate::Compare {
            ordinal,
            field_type,
            op,
            literal,
        } => compare_at(row, *ordinal, *field_type, *op, literal),
        ResolvedPredicate::And(left, right) => eval_resolved(left, row) & eval_resolved(right, row),
        ResolvedPredicate::Or(left, right) => eval_resolved(left, row) | eval_resolved(right, row),
    }
}

// A row too short to hold the ordinal has no value to compare.
fn compare_at(
    row: &[String],
    ordinal: usize,
    field_type: FieldType,
    op: CompareOp,
    literal: &str,
) -> bool {
    row.get(ordinal)
        .is_some_and(|actual| semantics::compare(field_type, actual, op, literal))
}
