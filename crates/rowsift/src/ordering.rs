//! Sort keys and comparator composition.
//!
//! Provides [`Dir`] for sort direction, [`SortKey`] for per-column or custom
//! comparators, and [`compare_by_keys`] which composes an ordered key list
//! into one total-order comparison, tried in priority order.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::record::{Column, Header, Record};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two cell values with the natural ordering, when one exists.
///
/// Numeric when both sides parse as numbers, else lexical. Returns `None`
/// for an unordered numeric pair (a `NaN` cell); predicate operators treat
/// that as a non-match rather than collapsing it to equality.
pub fn natural_partial_cmp(a: &str, b: &str) -> Option<Ordering> {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y),
        _ => Some(a.cmp(b)),
    }
}

/// Total-order variant of [`natural_partial_cmp`] used for sorting.
///
/// The unordered numeric pair falls back to lexical order, keeping the
/// comparator total and transitive for `NaN` cells.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_partial_cmp(a, b).unwrap_or_else(|| a.cmp(b))
}

/// Compares two optional cells; missing cells sort after present ones.
pub fn compare_cells(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => natural_cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Transform applied to a raw cell value before comparison.
pub type CellTransform = Rc<dyn Fn(&str) -> String>;

/// Comparator over whole records.
pub type RecordComparator = Rc<dyn Fn(&Record, &Record) -> Ordering>;

/// One sort key: either a column with a direction (and optional cell
/// transform), or a caller-supplied record comparator.
#[derive(Clone)]
pub enum SortKey {
    /// Sort by a column's cell value.
    Column {
        /// The column to sort by.
        column: Column,
        /// The sort direction.
        dir: Dir,
        /// Optional transform applied to the raw cell before comparing.
        transform: Option<CellTransform>,
    },
    /// Sort by a caller-supplied three-way comparator.
    Custom(RecordComparator),
}

impl SortKey {
    /// Creates an ascending column key.
    pub fn asc(column: impl Into<Column>) -> Self {
        SortKey::Column {
            column: column.into(),
            dir: Dir::Asc,
            transform: None,
        }
    }

    /// Creates a descending column key.
    pub fn desc(column: impl Into<Column>) -> Self {
        SortKey::Column {
            column: column.into(),
            dir: Dir::Desc,
            transform: None,
        }
    }

    /// Creates a column key with an explicit direction and transform.
    pub fn with_transform(
        column: impl Into<Column>,
        dir: Dir,
        transform: impl Fn(&str) -> String + 'static,
    ) -> Self {
        SortKey::Column {
            column: column.into(),
            dir,
            transform: Some(Rc::new(transform)),
        }
    }

    /// Creates a custom comparator key.
    pub fn custom(cmp: impl Fn(&Record, &Record) -> Ordering + 'static) -> Self {
        SortKey::Custom(Rc::new(cmp))
    }

    /// Validates the key's column reference against a concrete header.
    ///
    /// Custom comparators have nothing to validate.
    pub(crate) fn validate(&self, header: &Header) -> Result<()> {
        if let SortKey::Column { column, .. } = self {
            column.resolve(header)?;
        }
        Ok(())
    }

    /// Compares two records according to this key.
    pub fn compare(&self, a: &Record, b: &Record, header: &Header) -> Ordering {
        match self {
            SortKey::Column {
                column,
                dir,
                transform,
            } => {
                let cell_a = column.lookup(a, header);
                let cell_b = column.lookup(b, header);
                let base = match transform {
                    Some(t) => {
                        let mapped_a = cell_a.map(|c| t(c));
                        let mapped_b = cell_b.map(|c| t(c));
                        compare_cells(mapped_a.as_deref(), mapped_b.as_deref())
                    }
                    None => compare_cells(cell_a, cell_b),
                };
                dir.apply(base)
            }
            SortKey::Custom(cmp) => cmp(a, b),
        }
    }
}

impl fmt::Debug for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Column {
                column,
                dir,
                transform,
            } => f
                .debug_struct("Column")
                .field("column", column)
                .field("dir", dir)
                .field("transform", &transform.as_ref().map(|_| "<fn>"))
                .finish(),
            SortKey::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Compares two records using a list of sort keys.
///
/// The first key is the primary sort, the second breaks ties, and so on.
/// If every key compares equal, returns `Equal`; combined with a stable
/// sort this preserves the filtered input order.
pub fn compare_by_keys(a: &Record, b: &Record, keys: &[SortKey], header: &Header) -> Ordering {
    for key in keys {
        let ordering = key.compare(a, b, header);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
