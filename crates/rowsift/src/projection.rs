//! Column projection: selection, rename, and reorder of output columns.
//!
//! A [`Projection`] holds the caller's select list. It resolves against the
//! concrete header once per apply, producing a [`ResolvedProjection`] that
//! maps every output column to a source position and carries the rewritten
//! output header.

use crate::error::Result;
use crate::record::{Column, Header, Record};

/// The column selection of a query; empty means identity (keep everything).
#[derive(Debug, Clone, Default)]
pub struct Projection {
    columns: Vec<Column>,
}

impl Projection {
    /// Creates a projection from a select list.
    pub fn new(columns: Vec<Column>) -> Self {
        Projection { columns }
    }

    /// The select list, in caller order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns `true` if this projection keeps records unchanged.
    pub fn is_identity(&self) -> bool {
        self.columns.is_empty()
    }

    /// Resolves the select list against a concrete header.
    ///
    /// Entries are resolved in selection order: names via the header
    /// (`UnknownColumn` if absent), positions bound-checked against a
    /// non-empty header (`ColumnOutOfRange`). With no header, positions are
    /// accepted as-is and the raw position becomes the stand-in output name.
    /// Duplicate positions are legal and produce duplicate output columns.
    pub fn resolve(&self, header: &Header) -> Result<ResolvedProjection> {
        let mut positions = Vec::with_capacity(self.columns.len());
        let mut names = Vec::with_capacity(self.columns.len());

        for column in &self.columns {
            let pos = column.resolve(header)?;
            let name = match header.name(pos) {
                Some(name) => name.to_string(),
                None => pos.to_string(),
            };
            positions.push(pos);
            names.push(name);
        }

        Ok(ResolvedProjection {
            header: Header::new(names),
            positions,
        })
    }
}

/// A projection bound to a concrete header: output names plus the source
/// position behind each of them, in selection order.
#[derive(Debug, Clone)]
pub struct ResolvedProjection {
    header: Header,
    positions: Vec<usize>,
}

impl ResolvedProjection {
    /// The rewritten output header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The source position behind each output column.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Remaps one record into its projected shape.
    ///
    /// Missing or out-of-range source cells become absent cells rather than
    /// failing.
    pub fn project(&self, record: &Record) -> Record {
        let cells = self
            .positions
            .iter()
            .map(|&pos| record.get(pos).map(str::to_string))
            .collect();
        Record::new(cells)
    }
}
