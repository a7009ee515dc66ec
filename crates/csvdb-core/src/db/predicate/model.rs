use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    ops::{BitAnd, BitOr},
    str::FromStr,
};
use thiserror::Error as ThisError;

///
/// PredicateParseError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum PredicateParseError {
    #[error("unknown comparison operator '{0}'")]
    UnknownCompareOp(String),

    #[error("unknown logical operator '{0}'")]
    UnknownLogicalOp(String),
}

///
/// CompareOp
///
/// Displays as, and parses from, the tokens `=`, `!=`, `<`, `>`, `<=`, `>=`.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum CompareOp {
    #[display("=")]
    Eq,
    #[display("!=")]
    Ne,
    #[display("<")]
    Lt,
    #[display(">")]
    Gt,
    #[display("<=")]
    Le,
    #[display(">=")]
    Ge,
}

impl FromStr for CompareOp {
    type Err = PredicateParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "=" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            "<" => Ok(Self::Lt),
            ">" => Ok(Self::Gt),
            "<=" => Ok(Self::Le),
            ">=" => Ok(Self::Ge),
            other => Err(PredicateParseError::UnknownCompareOp(other.to_string())),
        }
    }
}

///
/// LogicalOp
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum LogicalOp {
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
}

impl FromStr for LogicalOp {
    type Err = PredicateParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            other => Err(PredicateParseError::UnknownLogicalOp(other.to_string())),
        }
    }
}

///
/// ComparePredicate
///
/// Leaf comparison `field op literal`. The literal is kept as text and
/// interpreted by the field's declared type at evaluation time.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub literal: String,
}

impl ComparePredicate {
    pub fn new(field: impl Into<String>, op: CompareOp, literal: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            literal: literal.into(),
        }
    }
}

///
/// Predicate
///
/// Immutable boolean expression tree. Built independently of any table;
/// column names are only checked once it is bound to a schema.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Predicate {
    Compare(ComparePredicate),
    And(Box<Self>, Box<Self>),
    Or(Box<Self>, Box<Self>),
}

impl Predicate {
    pub fn compare(field: impl Into<String>, op: CompareOp, literal: impl Into<String>) -> Self {
        Self::Compare(ComparePredicate::new(field, op, literal))
    }

    #[must_use]
    pub fn logical(op: LogicalOp, left: Self, right: Self) -> Self {
        match op {
            LogicalOp::And => Self::And(Box::new(left), Box::new(right)),
            LogicalOp::Or => Self::Or(Box::new(left), Box::new(right)),
        }
    }

    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::logical(LogicalOp::And, self, other)
    }

    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::logical(LogicalOp::Or, self, other)
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

// ─────────────────────────────────────────────
// LEAF CONSTRUCTORS
// ─────────────────────────────────────────────

pub fn eq(field: impl Into<String>, literal: impl Into<String>) -> Predicate {
    Predicate::compare(field, CompareOp::Eq, literal)
}

pub fn ne(field: impl Into<String>, literal: impl Into<String>) -> Predicate {
    Predicate::compare(field, CompareOp::Ne, literal)
}

pub fn lt(field: impl Into<String>, literal: impl Into<String>) -> Predicate {
    Predicate::compare(field, CompareOp::Lt, literal)
}

pub fn gt(field: impl Into<String>, literal: impl Into<String>) -> Predicate {
    Predicate::compare(field, CompareOp::Gt, literal)
}

pub fn le(field: impl Into<String>, literal: impl Into<String>) -> Predicate {
    Predicate::compare(field, CompareOp::Le, literal)
}

pub fn ge(field: impl Into<String>, literal: impl Into<String>) -> Predicate {
    Predicate::compare(field, CompareOp::Ge, literal)
}
