//! Shared in-memory fixtures for unit tests.

use crate::db::{
    schema::{ColumnDef, TableSchema},
    value::Row,
};

/// `index(id int, title text, content text)`, the table used across tests.
pub(crate) fn index_schema() -> TableSchema {
    TableSchema::new(
        "index",
        [
            ColumnDef::int("id"),
            ColumnDef::text("title"),
            ColumnDef::text("content"),
        ],
    )
}

pub(crate) fn row(fields: &[&str]) -> Row {
    fields.iter().map(|field| (*field).to_string()).collect()
}

/// Five rows of `index`, ids 1..=5.
pub(crate) fn index_rows() -> Vec<Row> {
    vec![
        row(&["1", "one", "один"]),
        row(&["2", "two", "два"]),
        row(&["3", "three", "три"]),
        row(&["4", "four", "четыре"]),
        row(&["5", "five", "пять"]),
    ]
}
