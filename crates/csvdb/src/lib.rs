//! ## Crate layout
//! - `core`: schema model, predicate engine, table store, executors,
//!   configuration, and observability.
//! - `error`: the unified [`Error`] for hosts that want a single type.
//!
//! The `prelude` module carries the vocabulary needed to define tables,
//! build predicates, and run the four operators.

pub use csvdb_core as core;

mod error;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use csvdb_core::{
    config::StoreConfig,
    db::{Db, query::QueryError},
    error::ErrorClass,
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, StoreConfig,
        core::{
            db::query::QueryError,
            obs::{metrics_report, metrics_reset_all},
            prelude::*,
        },
    };
}
