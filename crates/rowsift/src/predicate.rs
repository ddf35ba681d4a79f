//! Filter predicates: atomic column comparisons, user closures, and the
//! boolean combinator.
//!
//! A [`Predicate`] is a pure test over `(record, index)`. Atomic column
//! predicates are built from a `(column, operator, operand)` triple, where
//! the operand is a literal, a literal set, a compiled regex, or a second
//! column of the same record. Composites form a left-leaning binary tree:
//! each new condition combines with the entire running aggregate under a
//! [`Joiner`], and is never re-associated afterwards. This makes chains of
//! XOR and AND-NOT order-sensitive by design.

use std::fmt;
use std::rc::Rc;

use regex::Regex;

use crate::error::{QueryError, Result};
use crate::op::Op;
use crate::ordering::natural_partial_cmp;
use crate::record::{Column, Header, Record};

/// Boolean operator used to fold two predicates into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joiner {
    /// Both sides must match.
    And,
    /// Either side must match.
    Or,
    /// Exactly one side must match.
    Xor,
    /// Left side matches and right side does not (set difference).
    AndNot,
}

impl Joiner {
    /// Returns the display name of this joiner.
    pub fn as_str(self) -> &'static str {
        match self {
            Joiner::And => "and",
            Joiner::Or => "or",
            Joiner::Xor => "xor",
            Joiner::AndNot => "and not",
        }
    }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Right-hand side of an atomic column predicate.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A literal cell value.
    Value(String),
    /// A set of literals, for the `In` operator.
    Set(Vec<String>),
    /// A compiled regular expression, for the `Regex` operator.
    Pattern(Regex),
    /// A second column of the same candidate record.
    Column(Column),
}

/// An atomic predicate: one column compared against an operand.
#[derive(Debug, Clone)]
pub struct ColumnPredicate {
    column: Column,
    op: Op,
    operand: Operand,
}

impl ColumnPredicate {
    /// Creates an atomic column predicate.
    pub fn new(column: impl Into<Column>, op: Op, operand: Operand) -> Self {
        ColumnPredicate {
            column: column.into(),
            op,
            operand,
        }
    }

    /// Literal-comparison variant.
    pub fn value(column: impl Into<Column>, op: Op, value: impl Into<String>) -> Self {
        ColumnPredicate::new(column, op, Operand::Value(value.into()))
    }

    /// Column-to-column variant: both cells come from the candidate record.
    pub fn column(column: impl Into<Column>, op: Op, other: impl Into<Column>) -> Self {
        ColumnPredicate::new(column, op, Operand::Column(other.into()))
    }

    /// Set-membership variant for [`Op::In`].
    pub fn in_set<I, S>(column: impl Into<Column>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = values.into_iter().map(Into::into).collect();
        ColumnPredicate::new(column, Op::In, Operand::Set(set))
    }

    /// Regex variant for [`Op::Regex`]. Fails on an invalid pattern.
    pub fn regex(column: impl Into<Column>, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(ColumnPredicate::new(
            column,
            Op::Regex,
            Operand::Pattern(regex),
        ))
    }

    /// The column this predicate reads.
    pub fn column_ref(&self) -> &Column {
        &self.column
    }

    /// The comparison operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The right-hand operand.
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Validates every column reference against a concrete header, and that
    /// the operator can actually evaluate the operand shape it was paired
    /// with. `In` needs a set, `Regex` a compiled pattern; everything else
    /// needs a literal or a second column. A mismatch would otherwise build a
    /// predicate that silently never matches.
    pub(crate) fn validate(&self, header: &Header) -> Result<()> {
        let shape_ok = match &self.operand {
            Operand::Value(_) | Operand::Column(_) => !matches!(self.op, Op::In | Op::Regex),
            Operand::Set(_) => self.op == Op::In,
            Operand::Pattern(_) => self.op == Op::Regex,
        };
        if !shape_ok {
            return Err(QueryError::OperandMismatch(self.op));
        }
        self.column.resolve(header)?;
        if let Operand::Column(other) = &self.operand {
            other.resolve(header)?;
        }
        Ok(())
    }

    /// Evaluates this predicate against a record.
    ///
    /// A missing cell never matches any operator, including `Ne`.
    pub fn matches(&self, record: &Record, header: &Header) -> bool {
        let Some(lhs) = self.column.lookup(record, header) else {
            return false;
        };
        match &self.operand {
            Operand::Value(value) => eval_cells(self.op, lhs, value),
            Operand::Set(set) => self.op == Op::In && set.iter().any(|v| v == lhs),
            Operand::Pattern(regex) => self.op == Op::Regex && regex.is_match(lhs),
            Operand::Column(other) => match other.lookup(record, header) {
                Some(rhs) => eval_cells(self.op, lhs, rhs),
                None => false,
            },
        }
    }
}

/// Evaluates an operator between two present cell values.
fn eval_cells(op: Op, lhs: &str, rhs: &str) -> bool {
    match op {
        Op::Contains => lhs.contains(rhs),
        Op::StartsWith => lhs.starts_with(rhs),
        Op::EndsWith => lhs.ends_with(rhs),
        // Regex and In need their dedicated operand shapes.
        Op::Regex | Op::In => false,
        // Unordered numeric pairs (a NaN cell) never match.
        ordering_op => match natural_partial_cmp(lhs, rhs) {
            Some(ordering) => ordering_op.eval_ordering(ordering),
            None => false,
        },
    }
}

/// Caller-supplied filter closure over `(record, index)`.
pub type PredicateFn = Rc<dyn Fn(&Record, usize) -> bool>;

/// A filter predicate: atomic, caller-supplied, or a composite tree.
#[derive(Clone)]
pub enum Predicate {
    /// A caller-supplied closure.
    Custom(PredicateFn),
    /// An atomic column comparison.
    Column(ColumnPredicate),
    /// A binary combination of two predicates.
    Composite(Box<Composite>),
}

/// A binary predicate tree node.
#[derive(Debug, Clone)]
pub struct Composite {
    /// The running aggregate at the time the node was built.
    pub left: Predicate,
    /// The boolean operator joining the two sides.
    pub joiner: Joiner,
    /// The condition folded in by the builder call.
    pub right: Predicate,
}

impl Predicate {
    /// Creates a predicate from a `(record, index)` closure.
    pub fn from_fn(f: impl Fn(&Record, usize) -> bool + 'static) -> Self {
        Predicate::Custom(Rc::new(f))
    }

    /// Creates a predicate from a record-only closure, discarding the index.
    pub fn from_record_fn(f: impl Fn(&Record) -> bool + 'static) -> Self {
        Predicate::Custom(Rc::new(move |record, _index| f(record)))
    }

    /// The predicate that matches every record.
    ///
    /// Used as the identity left side when a `where_not` condition starts an
    /// otherwise empty predicate list.
    pub fn always() -> Self {
        Predicate::Custom(Rc::new(|_, _| true))
    }

    /// Folds this predicate with another under a joiner.
    pub fn combine(self, joiner: Joiner, other: Predicate) -> Self {
        Predicate::Composite(Box::new(Composite {
            left: self,
            joiner,
            right: other,
        }))
    }

    /// Validates every column reference in the tree against a header.
    ///
    /// Custom closures have nothing to validate.
    pub(crate) fn validate(&self, header: &Header) -> Result<()> {
        match self {
            Predicate::Custom(_) => Ok(()),
            Predicate::Column(p) => p.validate(header),
            Predicate::Composite(c) => {
                c.left.validate(header)?;
                c.right.validate(header)
            }
        }
    }

    /// Evaluates the predicate against a record and its sequence index.
    ///
    /// Composite evaluation short-circuits where the joiner allows: AND skips
    /// the right side when the left is false, OR when the left is true, and
    /// AND-NOT when the left is false. XOR always evaluates both sides.
    pub fn matches(&self, record: &Record, header: &Header, index: usize) -> bool {
        match self {
            Predicate::Custom(f) => f(record, index),
            Predicate::Column(p) => p.matches(record, header),
            Predicate::Composite(c) => match c.joiner {
                Joiner::And => {
                    c.left.matches(record, header, index) && c.right.matches(record, header, index)
                }
                Joiner::Or => {
                    c.left.matches(record, header, index) || c.right.matches(record, header, index)
                }
                Joiner::Xor => {
                    c.left.matches(record, header, index) != c.right.matches(record, header, index)
                }
                Joiner::AndNot => {
                    c.left.matches(record, header, index) && !c.right.matches(record, header, index)
                }
            },
        }
    }
}

impl From<ColumnPredicate> for Predicate {
    fn from(p: ColumnPredicate) -> Self {
        Predicate::Column(p)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Custom(_) => f.write_str("Custom(..)"),
            Predicate::Column(p) => f.debug_tuple("Column").field(p).finish(),
            Predicate::Composite(c) => f.debug_tuple("Composite").field(c).finish(),
        }
    }
}
