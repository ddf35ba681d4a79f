//! Rowsift - declarative query pipeline for tabular record sequences.
//!
//! Rowsift takes a sequence of flat records (rows of optional string cells,
//! addressable by position and, when a header exists, by name) and applies
//! one composed query to it:
//!
//! 1. a boolean **filter** predicate (AND / OR / XOR / AND-NOT combinators),
//! 2. a multi-key **stable sort**,
//! 3. an **offset/limit** window,
//! 4. a **column projection** (select, rename, reorder).
//!
//! The stages always run in that order; there is no planner, no indexing,
//! and no parallelism. The filter stage streams; sorting materializes the
//! surviving records.
//!
//! # Quick Start
//!
//! ```rust
//! use rowsift::{Header, Op, Query, Record, Table};
//!
//! let table = Table::new(
//!     Header::from_names(["name", "priority", "archived"]),
//!     vec![
//!         Record::from_strs(["write docs", "3", "false"]),
//!         Record::from_strs(["fix bug", "10", "false"]),
//!         Record::from_strs(["old task", "1", "true"]),
//!     ],
//! );
//!
//! let result = Query::new()
//!     .and_where("priority", Op::Gte, "3")
//!     .where_not("archived", Op::Eq, "true")
//!     .order_by_desc("priority")
//!     .select(["name", "priority"])
//!     .apply(&table)?;
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.header().names(), &["name", "priority"]);
//! assert_eq!(result.record(0).unwrap().get(0), Some("fix bug"));
//! # Ok::<(), rowsift::QueryError>(())
//! ```
//!
//! # Filter semantics
//!
//! Conditions fold into a single left-leaning predicate tree in call order:
//! each `and_where` / `or_where` / `xor_where` / `where_not` call combines
//! the *entire* running aggregate with the new condition. The fold is
//! pairwise, never re-associated, which makes chains of XOR (three or more
//! terms) and AND-NOT order-sensitive, deliberately so. `where_not` is set
//! difference: keep what the aggregate matches minus what the new condition
//! matches.
//!
//! # Boundaries
//!
//! Rowsift consumes records through the [`RecordSource`] trait and returns a
//! [`ResultSet`] that implements the same trait, so results can be fed into
//! another query or handed to downstream consumers. Parsing tabular text
//! into records, hydrating records into typed values, and serializing
//! results are deliberately out of scope.

mod error;
mod op;
mod ordering;
mod predicate;
mod projection;
mod query;
mod record;
mod source;
mod window;

// Re-export public API
pub use error::{QueryError, Result};
pub use op::Op;
pub use ordering::{compare_by_keys, compare_cells, natural_cmp, natural_partial_cmp, Dir, SortKey};
pub use predicate::{ColumnPredicate, Composite, Joiner, Operand, Predicate, PredicateFn};
pub use projection::{Projection, ResolvedProjection};
pub use query::Query;
pub use record::{Column, Header, Record};
pub use source::{RecordSource, ResultSet, Table};
pub use window::Window;
