//! Module: predicate::semantics
//! Responsibility: comparison of one stored field against one literal under
//! the field's declared type.
//! Boundary: runtime evaluation delegates every leaf comparison here.

use crate::db::{predicate::CompareOp, schema::FieldType};
use std::cmp::Ordering;
use thiserror::Error as ThisError;
use tracing::trace;

///
/// ValueParseError
///
/// A field value or literal compared as an integer is not a base-10 integer.
/// Never surfaced to callers: the comparison evaluates to `false`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("'{value}' is not a base-10 integer")]
pub struct ValueParseError {
    pub value: String,
}

pub(crate) fn parse_int(value: &str) -> Result<i64, ValueParseError> {
    value.parse::<i64>().map_err(|_| ValueParseError {
        value: value.to_string(),
    })
}

/// Compare `actual op literal` under `field_type`.
pub(crate) fn compare(field_type: FieldType, actual: &str, op: CompareOp, literal: &str) -> bool {
    match field_type {
        FieldType::Integer => compare_int(actual, op, literal),
        FieldType::Text => compare_text(actual, op, literal),
    }
}

// Numeric comparison; any parse failure makes the comparison false,
// `Ne` included.
fn compare_int(actual: &str, op: CompareOp, literal: &str) -> bool {
    match parse_int(actual).and_then(|a| parse_int(literal).map(|b| (a, b))) {
        Ok((actual, literal)) => apply(op, actual.cmp(&literal)),
        Err(err) => {
            trace!(%err, %op, "integer comparison evaluated false");
            false
        }
    }
}

// Lexicographic comparison over the raw strings.
fn compare_text(actual: &str, op: CompareOp, literal: &str) -> bool {
    apply(op, actual.cmp(literal))
}

const fn apply(op: CompareOp, ordering: Ordering) -> bool {
    match op {
        CompareOp::Eq => ordering.is_eq(),
        CompareOp::Ne => ordering.is_ne(),
        CompareOp::Lt => ordering.is_lt(),
        CompareOp::Gt => ordering.is_gt(),
        CompareOp::Le => ordering.is_le(),
        CompareOp::Ge => ordering.is_ge(),
    }
}
