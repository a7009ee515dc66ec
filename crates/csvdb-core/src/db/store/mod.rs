//! Module: db::store
//! Responsibility: the two per-table artifacts on disk and their delimited
//! text encoding.
//! Does not own: schema interpretation; rows leave here as plain strings.

mod codec;
mod error;
mod file;

pub use error::StoreError;
pub use file::TableStore;

pub(crate) use codec::{read_rows, write_rows};
