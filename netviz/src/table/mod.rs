//! The tabular row loader. A table is validated once when it is loaded, so
//! the engines can rely on every row having the same width.

pub mod reader;

pub use reader::{DelimitedReader, Delimiter};

use crate::core::error::{Error, Result};
use std::path::Path;

/// One line of the input: an ordered list of trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Returns the field at \p idx, if the row is that wide.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<String> {
        self.fields.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
    width: usize,
}

impl Table {
    /// Reads the file at \p path. Fails if the file does not exist, if it
    /// has no rows or if its rows have different widths.
    pub fn load(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<Table> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents =
            std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let table = Self::parse_named(&contents, delimiter, &path.display().to_string())?;
        log::info!(
            "Rows consumed: {}, columns: {} ({})",
            table.len(),
            table.width(),
            path.display()
        );
        Ok(table)
    }

    /// Parses a table from memory.
    pub fn parse(text: &str, delimiter: Delimiter) -> Result<Table> {
        Self::parse_named(text, delimiter, "<input>")
    }

    fn parse_named(text: &str, delimiter: Delimiter, origin: &str) -> Result<Table> {
        let records = DelimitedReader::new(text, delimiter).read_all()?;
        Self::from_records(records, origin)
    }

    /// Builds a table out of already split records.
    pub fn from_records(records: Vec<Vec<String>>, origin: &str) -> Result<Table> {
        let Some(first) = records.first() else {
            return Err(Error::EmptyTable {
                origin: origin.to_string(),
            });
        };
        let width = first.len();

        let mut rows = Vec::with_capacity(records.len());
        for (idx, fields) in records.into_iter().enumerate() {
            if fields.len() != width {
                return Err(Error::RaggedRow {
                    row: idx + 1,
                    expected: width,
                    found: fields.len(),
                });
            }
            rows.push(Row::new(fields));
        }
        Ok(Table { rows, width })
    }

    /// The number of rows, including the header row.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The number of fields in every row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    /// The first row. For the zone engine this is the column header, for the
    /// port engine it also carries device metadata.
    pub fn header(&self) -> &Row {
        &self.rows[0]
    }

    /// Every row after the header.
    pub fn body(&self) -> &[Row] {
        &self.rows[1..]
    }

    /// Returns the text at (\p row, \p col), or an empty string when the
    /// table does not reach that far.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.row(row).and_then(|r| r.get(col)).unwrap_or("")
    }
}
