//! The flat-file bridge.
//!
//! The persisted format is one record per line, fields joined with `;`
//! and no quoting or escaping: a field containing the delimiter cannot
//! be represented. That is a known limitation of the format, kept as-is.
use crate::store::{Record, RecordStore};

/// Split file contents into rows of fields. Rows are `\n`-separated
/// (a trailing `\r` is tolerated), fields `;`-separated. Empty lines
/// are dropped.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.split(';').map(str::to_string).collect())
        .collect()
}

/// A record type with a flat-file rendition.
pub trait CsvRecord: Record + Sized {
    /// Rows with fewer fields are skipped during bulk load.
    const MIN_FIELDS: usize;

    /// Build a record from one row. Never fails: absent trailing
    /// fields read as empty strings, unparseable integers as 0.
    fn from_row(row: &[String]) -> Self;

    /// One `;`-joined, `\n`-terminated line. Integers render as
    /// decimal, booleans as `1`/`0`.
    fn to_line(&self) -> String;
}

/// Field accessor shared by the `from_row` impls.
pub fn field(row: &[String], at: usize) -> &str {
    row.get(at).map(String::as_str).unwrap_or_default()
}

impl<T: CsvRecord> RecordStore<T> {
    /// Bulk-load a parsed row set. Rows with fewer than
    /// [`CsvRecord::MIN_FIELDS`] fields are skipped silently; duplicate
    /// keys collapse through the get-or-create insert.
    pub fn load_from_rows(rows: &[Vec<String>]) -> Self {
        let mut store = Self::new();
        for row in rows {
            if row.len() < T::MIN_FIELDS {
                continue;
            }
            store.insert(T::from_row(row));
        }
        store
    }

    /// Serialize every record, one line each, in iteration order.
    pub fn save_to_lines(&self) -> String {
        self.iter().map(|record| record.to_line()).collect()
    }
}
