//! The iteration contract between the query engine and its collaborators.
//!
//! A [`RecordSource`] produces a header and a sequence of records, each
//! paired with its original source index. [`Table`] is the in-memory source
//! used by callers and tests; [`ResultSet`] is what [`crate::Query::apply`]
//! returns, and implements `RecordSource` itself so results can be fed back
//! into another query.

use crate::record::{Header, Record};

/// A source of tabular records.
///
/// `records` is iterated exactly once per `Query::apply` call; producing a
/// fresh iterator for repeated applies is the source's responsibility (both
/// implementations in this crate do).
pub trait RecordSource {
    /// The source's header; empty in no-header mode.
    fn header(&self) -> &Header;

    /// The record sequence, each paired with its original source index.
    fn records(&self) -> Box<dyn Iterator<Item = (usize, Record)> + '_>;
}

/// A simple owned header + rows source.
///
/// # Example
///
/// ```
/// use rowsift::{Header, Record, RecordSource, Table};
///
/// let table = Table::new(
///     Header::from_names(["name", "age"]),
///     vec![Record::from_strs(["ada", "36"])],
/// );
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.records().next(), Some((0, Record::from_strs(["ada", "36"]))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Header,
    rows: Vec<Record>,
}

impl Table {
    /// Creates a table with a header.
    pub fn new(header: Header, rows: Vec<Record>) -> Self {
        Table { header, rows }
    }

    /// Creates a table in no-header mode.
    pub fn headerless(rows: Vec<Record>) -> Self {
        Table {
            header: Header::empty(),
            rows,
        }
    }

    /// Appends a record.
    pub fn push(&mut self, record: Record) {
        self.rows.push(record);
    }

    /// The rows in source order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RecordSource for Table {
    fn header(&self) -> &Header {
        &self.header
    }

    fn records(&self) -> Box<dyn Iterator<Item = (usize, Record)> + '_> {
        Box::new(self.rows.iter().cloned().enumerate())
    }
}

/// The value returned by [`crate::Query::apply`].
///
/// Rows carry the indices attached to them by the pipeline: filtering keeps
/// original source indices (survivors are not renumbered), and sorting and
/// windowing preserve whatever index each record already carried.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    header: Header,
    rows: Vec<(usize, Record)>,
}

impl ResultSet {
    /// Creates a result set.
    pub fn new(header: Header, rows: Vec<(usize, Record)>) -> Self {
        ResultSet { header, rows }
    }

    /// The output header, possibly rewritten by a projection.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The surviving rows, each with its carried index.
    pub fn rows(&self) -> &[(usize, Record)] {
        &self.rows
    }

    /// The record at output position `pos`, if any.
    pub fn record(&self, pos: usize) -> Option<&Record> {
        self.rows.get(pos).map(|(_, record)| record)
    }

    /// Number of surviving records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing survived.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the result set, returning its rows.
    pub fn into_rows(self) -> Vec<(usize, Record)> {
        self.rows
    }
}

impl RecordSource for ResultSet {
    fn header(&self) -> &Header {
        &self.header
    }

    fn records(&self) -> Box<dyn Iterator<Item = (usize, Record)> + '_> {
        Box::new(self.rows.iter().cloned())
    }
}
