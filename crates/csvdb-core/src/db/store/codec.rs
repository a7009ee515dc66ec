//! Delimited text codec: RFC 4180 quoting, no header row.

use crate::db::value::Row;
use std::io::{Read, Write};

/// Decode every record of a stream. Records may differ in width; width is
/// checked against the schema by the caller.
pub(crate) fn read_rows<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Row>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    reader
        .records()
        .map(|record| record.map(|record| record.iter().map(str::to_string).collect()))
        .collect()
}

/// Encode rows and flush; returns the underlying writer.
pub(crate) fn write_rows<W: Write>(
    writer: W,
    delimiter: u8,
    rows: &[Row],
) -> Result<W, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_writer(writer);

    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}
