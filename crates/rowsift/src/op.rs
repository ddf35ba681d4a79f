//! Comparison operators for column predicates.
//!
//! The [`Op`] enum is the closed registry of comparison kinds. Behavior is
//! identical whether the right-hand side is a literal or a second column.

use std::cmp::Ordering;

/// Comparison operator for a column predicate.
///
/// Operators fall into three groups:
/// - **Ordering**: `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte`, compared with the
///   natural ordering (numeric when both sides parse as numbers, else
///   lexical).
/// - **Pattern**: `Contains`, `StartsWith`, `EndsWith`, `Regex`.
/// - **Membership**: `In`, the cell is one of a set of literals. Built via
///   the `*_where_in` query methods rather than a plain literal operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal under the natural ordering.
    Eq,
    /// Not equal under the natural ordering.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Cell contains the operand as a substring.
    Contains,
    /// Cell starts with the operand.
    StartsWith,
    /// Cell ends with the operand.
    EndsWith,
    /// Cell matches a regular expression.
    Regex,
    /// Cell is a member of a set of literals.
    In,
}

impl Op {
    /// Returns `true` if this operator compares via the natural ordering.
    pub fn is_ordering_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Returns `true` if this operator is a string-pattern test.
    pub fn is_pattern_op(self) -> bool {
        matches!(
            self,
            Op::Contains | Op::StartsWith | Op::EndsWith | Op::Regex
        )
    }

    /// Evaluates an ordering-based comparison given an `Ordering` result.
    ///
    /// Returns `false` for operators that are not ordering-based.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::Contains => "contains",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Regex => "regex",
            Op::In => "in",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
