//! Core data model: records, headers, and column references.
//!
//! A [`Record`] is one row of tabular data, an ordered sequence of optional
//! string cells. A [`Header`] names the columns of a source, or is empty for
//! positional-only sources. A [`Column`] addresses a cell either by name or
//! by zero-based position.

use std::fmt;

use crate::error::{QueryError, Result};

/// One row of tabular data: an ordered sequence of optional string cells.
///
/// Column order within a record is fixed and shared by all records from the
/// same source. Reads past the end of a record yield `None` rather than
/// failing, so projected records with trailing absent columns behave like
/// any other record.
///
/// # Example
///
/// ```
/// use rowsift::Record;
///
/// let record = Record::from_strs(["alice", "42"]);
/// assert_eq!(record.get(0), Some("alice"));
/// assert_eq!(record.get(1), Some("42"));
/// assert_eq!(record.get(2), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    cells: Vec<Option<String>>,
}

impl Record {
    /// Creates a record from its cells.
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Record { cells }
    }

    /// Creates a record where every cell is present.
    pub fn from_strs<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Record {
            cells: cells.into_iter().map(|c| Some(c.into())).collect(),
        }
    }

    /// Returns the cell at `pos`, or `None` if absent or out of range.
    pub fn get(&self, pos: usize) -> Option<&str> {
        self.cells.get(pos).and_then(|c| c.as_deref())
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the record has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the raw cells.
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    /// Consumes the record, returning its cells.
    pub fn into_cells(self) -> Vec<Option<String>> {
        self.cells
    }
}

impl From<Vec<Option<String>>> for Record {
    fn from(cells: Vec<Option<String>>) -> Self {
        Record::new(cells)
    }
}

impl From<Vec<String>> for Record {
    fn from(cells: Vec<String>) -> Self {
        Record::from_strs(cells)
    }
}

/// The ordered column names of a data source.
///
/// An empty header means no-header mode: columns are addressable only by
/// position. When non-empty, a source's header has as many names as each of
/// its records has cells, and names are expected to be distinct; lookup of a
/// duplicated name resolves to its first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Creates a header from its column names.
    pub fn new(names: Vec<String>) -> Self {
        Header { names }
    }

    /// Creates an empty header (no-header mode).
    pub fn empty() -> Self {
        Header::default()
    }

    /// Creates a header from anything yielding names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Header {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if this is no-header mode.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the column names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the name at `pos`, if any.
    pub fn name(&self, pos: usize) -> Option<&str> {
        self.names.get(pos).map(String::as_str)
    }

    /// Resolves a column name to its position (first occurrence).
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl From<Vec<String>> for Header {
    fn from(names: Vec<String>) -> Self {
        Header::new(names)
    }
}

/// A column reference, by name or by zero-based position.
///
/// Builder methods accept `impl Into<Column>`, so `&str`, `String`, and
/// `usize` all work directly:
///
/// ```
/// use rowsift::{Column, Op, Query};
///
/// assert_eq!(Column::from("city"), Column::Name("city".to_string()));
/// let by_name = Query::new().and_where("city", Op::Eq, "lisbon");
/// let by_pos = Query::new().and_where(2usize, Op::Eq, "lisbon");
/// # let _ = (by_name, by_pos);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Column {
    /// A named column, resolved against the header at apply time.
    Name(String),
    /// A zero-based positional column.
    Index(usize),
}

impl Column {
    /// Resolves this reference to a position against a concrete header.
    ///
    /// Named columns fail with [`QueryError::UnknownColumn`] when the header
    /// is empty or does not contain the name. Positional columns are
    /// bound-checked against a non-empty header
    /// ([`QueryError::ColumnOutOfRange`]); with no header there is nothing to
    /// check against and any position is accepted.
    pub fn resolve(&self, header: &Header) -> Result<usize> {
        match self {
            Column::Name(name) => header
                .resolve(name)
                .ok_or_else(|| QueryError::UnknownColumn(name.clone())),
            Column::Index(index) => {
                if !header.is_empty() && *index >= header.len() {
                    return Err(QueryError::ColumnOutOfRange {
                        index: *index,
                        width: header.len(),
                    });
                }
                Ok(*index)
            }
        }
    }

    /// Reads the referenced cell from a record.
    ///
    /// Returns `None` for absent cells, unresolvable names, and out-of-range
    /// positions. Validation happens separately via [`Column::resolve`]; this
    /// read path never fails.
    pub fn lookup<'a>(&self, record: &'a Record, header: &Header) -> Option<&'a str> {
        match self {
            Column::Name(name) => header.resolve(name).and_then(|pos| record.get(pos)),
            Column::Index(index) => record.get(*index),
        }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::Name(name.to_string())
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column::Name(name)
    }
}

impl From<usize> for Column {
    fn from(index: usize) -> Self {
        Column::Index(index)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Name(name) => write!(f, "{name}"),
            Column::Index(index) => write!(f, "#{index}"),
        }
    }
}
