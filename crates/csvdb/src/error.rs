use csvdb_core::{
    config::ConfigError,
    db::{query::QueryError, schema::TableCreationError},
    error::ErrorClass,
};
use thiserror::Error as ThisError;

///
/// Error
/// Any failure a host can see, with a stable class.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    TableCreation(#[from] TableCreationError),
}

impl Error {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Config(_) => ErrorClass::Unsupported,
            Self::Query(err) => err.class(),
            Self::TableCreation(err) => err.class(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvdb_core::db::Db;
    use tempfile::TempDir;

    #[test]
    fn errors_convert_with_their_class() {
        let dir = TempDir::new().unwrap();
        let db = Db::open(dir.path());

        let err: Error = db.load_schema("ghost").unwrap_err().into();
        assert_eq!(err.class(), ErrorClass::NotFound);

        let err: Error = db.define_table("t", &[]).unwrap_err().into();
        assert_eq!(err.class(), ErrorClass::Unsupported);
    }
}
