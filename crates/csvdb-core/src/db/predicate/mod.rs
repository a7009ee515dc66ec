//! Module: db::predicate
//! Responsibility: the predicate expression tree and its evaluation against
//! one row plus a schema.
//! Does not own: row storage or projection.

mod model;
mod runtime;
mod semantics;


pub use model::{
    CompareOp, ComparePredicate, LogicalOp, Predicate, PredicateParseError, eq, ge, gt, le, lt,
    ne,
};
pub use runtime::{PredicateProgram, evaluate};
pub use semantics::ValueParseError;
