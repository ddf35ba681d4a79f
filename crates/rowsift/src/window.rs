//! Offset/limit window over an ordered sequence.

use crate::error::{QueryError, Result};

/// An offset/limit slice applied after filtering and sorting.
///
/// The default window passes everything through: offset 0, unbounded limit.
/// Builder inputs are validated once, at construction: a negative offset and
/// a limit below `-1` are rejected, while `-1` itself means unbounded. An
/// offset beyond the end of the sequence yields an empty result, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    offset: usize,
    limit: Option<usize>,
}

impl Window {
    /// Creates the pass-through window.
    pub fn new() -> Self {
        Window::default()
    }

    /// Returns a window with the given offset.
    ///
    /// Fails with [`QueryError::NegativeOffset`] if `offset < 0`.
    pub fn with_offset(self, offset: i64) -> Result<Self> {
        if offset < 0 {
            return Err(QueryError::NegativeOffset(offset));
        }
        Ok(Window {
            offset: offset as usize,
            ..self
        })
    }

    /// Returns a window with the given limit; `-1` means unbounded.
    ///
    /// Fails with [`QueryError::InvalidLimit`] if `limit < -1`.
    pub fn with_limit(self, limit: i64) -> Result<Self> {
        if limit < -1 {
            return Err(QueryError::InvalidLimit(limit));
        }
        Ok(Window {
            limit: if limit == -1 {
                None
            } else {
                Some(limit as usize)
            },
            ..self
        })
    }

    /// The number of leading records to skip.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The maximum number of records to keep, or `None` for unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns `true` if this window passes everything through.
    pub fn is_passthrough(&self) -> bool {
        self.offset == 0 && self.limit.is_none()
    }

    /// Slices an ordered sequence, preserving element order.
    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        if self.is_passthrough() {
            return rows;
        }
        let iter = rows.into_iter().skip(self.offset);
        match self.limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_by_default() {
        let window = Window::new();
        assert!(window.is_passthrough());
        assert_eq!(window.apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn offset_skips() {
        let window = Window::new().with_offset(2).unwrap();
        assert_eq!(window.apply(vec![1, 2, 3, 4]), vec![3, 4]);
    }

    #[test]
    fn limit_truncates() {
        let window = Window::new().with_limit(2).unwrap();
        assert_eq!(window.apply(vec![1, 2, 3, 4]), vec![1, 2]);
    }

    #[test]
    fn offset_and_limit_compose() {
        let window = Window::new()
            .with_offset(1)
            .unwrap()
            .with_limit(2)
            .unwrap();
        assert_eq!(window.apply(vec![1, 2, 3, 4, 5]), vec![2, 3]);
    }

    #[test]
    fn offset_beyond_end_is_empty() {
        let window = Window::new().with_offset(10).unwrap();
        assert_eq!(window.apply(vec![1, 2, 3]), Vec::<i32>::new());
    }

    #[test]
    fn limit_minus_one_is_unbounded() {
        let window = Window::new().with_limit(-1).unwrap();
        assert_eq!(window.limit(), None);
        assert_eq!(window.apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn limit_zero_is_empty() {
        let window = Window::new().with_limit(0).unwrap();
        assert_eq!(window.apply(vec![1, 2, 3]), Vec::<i32>::new());
    }

    #[test]
    fn invalid_bounds_rejected() {
        assert!(matches!(
            Window::new().with_offset(-1),
            Err(QueryError::NegativeOffset(-1))
        ));
        assert!(matches!(
            Window::new().with_limit(-2),
            Err(QueryError::InvalidLimit(-2))
        ));
    }
}
