//! Module: db::query
//! Responsibility: fluent operator builders bound to a `Db` handle.
//! Does not own: row-level semantics, which live in `db::executor`.

mod delete;
mod error;
mod insert;
mod select;
mod update;

pub use delete::DeleteQuery;
pub use error::QueryError;
pub use insert::InsertQuery;
pub use select::{Select, SelectQuery};
pub use update::UpdateQuery;
