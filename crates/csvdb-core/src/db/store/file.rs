use crate::{
    config::StoreConfig,
    db::{
        identity::TableName,
        store::{StoreError, read_rows, write_rows},
        value::Row,
    },
};
use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};
use tracing::{trace, warn};

/// Suffix appended to an artifact's file name while it is being replaced.
const TMP_SUFFIX: &str = ".tmp";

///
/// TableStore
///
/// Resolved artifact paths of one table plus the encoding settings needed
/// to read and replace them. Built per operator call; holds no rows.
///

#[derive(Clone, Debug)]
pub struct TableStore {
    table: TableName,
    data_dir: PathBuf,
    schema_path: PathBuf,
    data_path: PathBuf,
    delimiter: u8,
    sync_writes: bool,
}

impl TableStore {
    #[must_use]
    pub fn new(config: &StoreConfig, table: TableName) -> Self {
        let artifact = |extension: &str| {
            config
                .data_dir
                .join(format!("{}.{extension}", table.as_str()))
        };

        Self {
            schema_path: artifact(&config.schema_extension),
            data_path: artifact(&config.data_extension),
            data_dir: config.data_dir.clone(),
            delimiter: config.delimiter,
            sync_writes: config.sync_writes,
            table,
        }
    }

    #[must_use]
    pub const fn table(&self) -> &TableName {
        &self.table
    }

    #[must_use]
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    #[must_use]
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    // ─────────────────────────────────────────────
    // SCHEMA STREAM
    // ─────────────────────────────────────────────

    pub(crate) fn read_schema_rows(&self) -> Result<Vec<Row>, StoreError> {
        read_artifact(&self.schema_path, self.delimiter)
    }

    pub(crate) fn write_schema_rows(&self, rows: &[Row]) -> Result<(), StoreError> {
        replace_artifact(&self.schema_path, rows, self.delimiter, self.sync_writes)
    }

    // ─────────────────────────────────────────────
    // BACKING STORE
    // ─────────────────────────────────────────────

    /// Read every row, in stored order, rejecting rows whose field count is
    /// not `width`.
    pub(crate) fn read_rows(&self, width: usize) -> Result<Vec<Row>, StoreError> {
        let rows = read_artifact(&self.data_path, self.delimiter)?;

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(StoreError::RowWidth {
                path: self.data_path.clone(),
                row: index + 1,
                expected: width,
                found: row.len(),
            });
        }

        Ok(rows)
    }

    /// Replace the backing store with `rows`. The original artifact is left
    /// untouched unless the new content was fully written.
    pub(crate) fn rewrite_rows(&self, rows: &[Row]) -> Result<(), StoreError> {
        replace_artifact(&self.data_path, rows, self.delimiter, self.sync_writes)
    }

    /// Create (or truncate to) an empty backing store.
    pub(crate) fn create_empty(&self) -> Result<(), StoreError> {
        File::create(&self.data_path).map_err(StoreError::io(&self.data_path))?;

        Ok(())
    }

    pub(crate) fn ensure_data_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(StoreError::io(&self.data_dir))
    }
}

fn read_artifact(path: &Path, delimiter: u8) -> Result<Vec<Row>, StoreError> {
    let file = File::open(path).map_err(StoreError::io(path))?;
    let rows = read_rows(file, delimiter).map_err(StoreError::codec(path))?;

    trace!(path = ?path, rows = rows.len(), "artifact read");

    Ok(rows)
}

// Write to `<path>.tmp`, then rename over `path`.
fn replace_artifact(
    path: &Path,
    rows: &[Row],
    delimiter: u8,
    sync_writes: bool,
) -> Result<(), StoreError> {
    let tmp_path = tmp_path(path);

    let result = write_artifact(&tmp_path, rows, delimiter, sync_writes)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(StoreError::io(path)));

    if result.is_err() {
        // the original artifact is intact; only the partial copy goes
        discard_tmp(&tmp_path);
    } else {
        trace!(path = ?path, rows = rows.len(), "artifact replaced");
    }

    result
}

fn discard_tmp(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => trace!(path = ?tmp_path, "temporary artifact removed"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = ?tmp_path, %err, "temporary artifact left behind"),
    }
}

fn write_artifact(
    path: &Path,
    rows: &[Row],
    delimiter: u8,
    sync_writes: bool,
) -> Result<(), StoreError> {
    let file = File::create(path).map_err(StoreError::io(path))?;
    let writer = write_rows(BufWriter::new(file), delimiter, rows).map_err(StoreError::codec(path))?;
    let file = writer
        .into_inner()
        .map_err(|err| StoreError::io(path)(err.into_error()))?;

    if sync_writes {
        file.sync_all().map_err(StoreError::io(path))?;
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(TMP_SUFFIX);

    PathBuf::from(name)
}
