//! Query builder and executor.
//!
//! [`Query`] is an immutable value describing one composed pipeline:
//! filter → sort → window → project, always in that order. Every builder
//! method consumes `self` and returns a new value, so a query can be cloned
//! at any point to branch a pipeline; nothing is mutated after being read.
//! [`Query::apply`] is the single execution entry point.

use std::cmp::Ordering;

use crate::error::Result;
use crate::op::Op;
use crate::ordering::{compare_by_keys, Dir, SortKey};
use crate::predicate::{ColumnPredicate, Joiner, Predicate};
use crate::projection::Projection;
use crate::record::{Column, Header, Record};
use crate::source::{RecordSource, ResultSet};
use crate::window::Window;

/// A composed query over a tabular record sequence.
///
/// # Example
///
/// ```
/// use rowsift::{Header, Op, Query, Record, Table};
///
/// let table = Table::new(
///     Header::from_names(["name", "priority"]),
///     vec![
///         Record::from_strs(["write docs", "3"]),
///         Record::from_strs(["fix bug", "10"]),
///         Record::from_strs(["old task", "1"]),
///     ],
/// );
///
/// let result = Query::new()
///     .and_where("priority", Op::Gte, "3")
///     .order_by_desc("priority")
///     .select(["name"])
///     .apply(&table)?;
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.record(0).unwrap().get(0), Some("fix bug"));
/// # Ok::<(), rowsift::QueryError>(())
/// ```
///
/// # Filter semantics
///
/// Plain [`where_fn`](Query::where_fn) / [`where_record`](Query::where_record)
/// calls accumulate a predicate list applied conjunctively. The first
/// `and_where` / `or_where` / `xor_where` / `where_not` call folds that list
/// into a single composite, and every further call folds the *entire* running
/// aggregate with the new condition under the requested joiner. The fold is
/// pairwise and in call order: chains of XOR with three or more terms, and
/// any chain involving `where_not`, are order-sensitive on purpose:
///
/// ```
/// use rowsift::Query;
///
/// // ((a XOR b) XOR c), not a global three-way XOR.
/// let q = Query::new()
///     .xor_where("k", rowsift::Op::Eq, "a")
///     .xor_where("k", rowsift::Op::Eq, "b")
///     .xor_where("k", rowsift::Op::Eq, "c");
/// # let _ = q;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    wheres: Vec<Predicate>,
    sort: Vec<SortKey>,
    window: Window,
    selects: Vec<Column>,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query applied to a source yields that source unchanged.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Replaces the column selection.
    ///
    /// Columns may be names or positions; an empty selection means identity.
    /// Resolution is deferred to `apply`, since it depends on the concrete
    /// header.
    pub fn select<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.selects = columns.into_iter().map(Into::into).collect();
        self
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Appends a `(record, index)` filter closure.
    ///
    /// All plain `where` predicates must match (conjunctive), until a joiner
    /// method folds them into a composite.
    pub fn where_fn(mut self, pred: impl Fn(&Record, usize) -> bool + 'static) -> Self {
        self.wheres.push(Predicate::from_fn(pred));
        self
    }

    /// Appends a record-only filter closure, discarding the sequence index.
    pub fn where_record(mut self, pred: impl Fn(&Record) -> bool + 'static) -> Self {
        self.wheres.push(Predicate::from_record_fn(pred));
        self
    }

    /// Folds a predicate into the aggregate under a joiner.
    ///
    /// With an empty predicate list, `And`/`Or`/`Xor` store the predicate
    /// as-is (a one-element chain degenerates to the predicate itself), while
    /// `AndNot` stores the complement: a predicate matching when the
    /// candidate does *not* match. With a non-empty list, the conjunction of
    /// the current list becomes the left side of a new composite, growing a
    /// left-leaning tree pairwise in call order.
    pub fn add_condition(mut self, joiner: Joiner, predicate: impl Into<Predicate>) -> Self {
        let predicate = predicate.into();
        let folded = match self.aggregate() {
            None => match joiner {
                Joiner::AndNot => Predicate::always().combine(Joiner::AndNot, predicate),
                _ => predicate,
            },
            Some(aggregate) => aggregate.combine(joiner, predicate),
        };
        self.wheres = vec![folded];
        self
    }

    /// The conjunction of the current predicate list, if any.
    fn aggregate(&mut self) -> Option<Predicate> {
        let mut drained = self.wheres.drain(..);
        let first = drained.next()?;
        Some(drained.fold(first, |acc, p| acc.combine(Joiner::And, p)))
    }

    /// Adds a condition ANDed with the aggregate.
    pub fn and_where(self, column: impl Into<Column>, op: Op, value: impl Into<String>) -> Self {
        self.add_condition(Joiner::And, ColumnPredicate::value(column, op, value))
    }

    /// Adds a condition ORed with the aggregate.
    pub fn or_where(self, column: impl Into<Column>, op: Op, value: impl Into<String>) -> Self {
        self.add_condition(Joiner::Or, ColumnPredicate::value(column, op, value))
    }

    /// Adds a condition XORed with the aggregate (both sides always
    /// evaluated).
    pub fn xor_where(self, column: impl Into<Column>, op: Op, value: impl Into<String>) -> Self {
        self.add_condition(Joiner::Xor, ColumnPredicate::value(column, op, value))
    }

    /// Adds a condition subtracted from the aggregate: keep records the
    /// aggregate matches and this condition does not.
    pub fn where_not(self, column: impl Into<Column>, op: Op, value: impl Into<String>) -> Self {
        self.add_condition(Joiner::AndNot, ColumnPredicate::value(column, op, value))
    }

    /// Column-to-column variant of [`and_where`](Query::and_where).
    pub fn and_where_column(
        self,
        column: impl Into<Column>,
        op: Op,
        other: impl Into<Column>,
    ) -> Self {
        self.add_condition(Joiner::And, ColumnPredicate::column(column, op, other))
    }

    /// Column-to-column variant of [`or_where`](Query::or_where).
    pub fn or_where_column(
        self,
        column: impl Into<Column>,
        op: Op,
        other: impl Into<Column>,
    ) -> Self {
        self.add_condition(Joiner::Or, ColumnPredicate::column(column, op, other))
    }

    /// Column-to-column variant of [`xor_where`](Query::xor_where).
    pub fn xor_where_column(
        self,
        column: impl Into<Column>,
        op: Op,
        other: impl Into<Column>,
    ) -> Self {
        self.add_condition(Joiner::Xor, ColumnPredicate::column(column, op, other))
    }

    /// Column-to-column variant of [`where_not`](Query::where_not).
    pub fn where_not_column(
        self,
        column: impl Into<Column>,
        op: Op,
        other: impl Into<Column>,
    ) -> Self {
        self.add_condition(Joiner::AndNot, ColumnPredicate::column(column, op, other))
    }

    /// Adds a set-membership condition ANDed with the aggregate.
    pub fn and_where_in<I, S>(self, column: impl Into<Column>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_condition(Joiner::And, ColumnPredicate::in_set(column, values))
    }

    /// Adds a set-membership condition ORed with the aggregate.
    pub fn or_where_in<I, S>(self, column: impl Into<Column>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_condition(Joiner::Or, ColumnPredicate::in_set(column, values))
    }

    /// Subtracts a set-membership condition from the aggregate.
    pub fn where_not_in<I, S>(self, column: impl Into<Column>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_condition(Joiner::AndNot, ColumnPredicate::in_set(column, values))
    }

    /// Adds a regex condition ANDed with the aggregate.
    ///
    /// Fails on an invalid pattern.
    pub fn and_where_regex(self, column: impl Into<Column>, pattern: &str) -> Result<Self> {
        let predicate = ColumnPredicate::regex(column, pattern)?;
        Ok(self.add_condition(Joiner::And, predicate))
    }

    /// Adds a regex condition ORed with the aggregate.
    pub fn or_where_regex(self, column: impl Into<Column>, pattern: &str) -> Result<Self> {
        let predicate = ColumnPredicate::regex(column, pattern)?;
        Ok(self.add_condition(Joiner::Or, predicate))
    }

    /// Subtracts a regex condition from the aggregate.
    pub fn where_not_regex(self, column: impl Into<Column>, pattern: &str) -> Result<Self> {
        let predicate = ColumnPredicate::regex(column, pattern)?;
        Ok(self.add_condition(Joiner::AndNot, predicate))
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Appends a custom three-way comparator.
    pub fn order_by(mut self, cmp: impl Fn(&Record, &Record) -> Ordering + 'static) -> Self {
        self.sort.push(SortKey::custom(cmp));
        self
    }

    /// Appends a sort key.
    pub fn order_by_key(mut self, key: SortKey) -> Self {
        self.sort.push(key);
        self
    }

    /// Appends an ascending column sort key.
    pub fn order_by_asc(self, column: impl Into<Column>) -> Self {
        self.order_by_key(SortKey::asc(column))
    }

    /// Appends a descending column sort key.
    pub fn order_by_desc(self, column: impl Into<Column>) -> Self {
        self.order_by_key(SortKey::desc(column))
    }

    /// Appends an ascending column sort key with a cell transform.
    pub fn order_by_asc_with(
        self,
        column: impl Into<Column>,
        transform: impl Fn(&str) -> String + 'static,
    ) -> Self {
        self.order_by_key(SortKey::with_transform(column, Dir::Asc, transform))
    }

    /// Appends a descending column sort key with a cell transform.
    pub fn order_by_desc_with(
        self,
        column: impl Into<Column>,
        transform: impl Fn(&str) -> String + 'static,
    ) -> Self {
        self.order_by_key(SortKey::with_transform(column, Dir::Desc, transform))
    }

    // ========================================================================
    // Window
    // ========================================================================

    /// Sets the number of surviving records to skip.
    ///
    /// Fails with `NegativeOffset` for `n < 0`.
    pub fn offset(mut self, n: i64) -> Result<Self> {
        self.window = self.window.with_offset(n)?;
        Ok(self)
    }

    /// Sets the maximum number of records to return; `-1` means unbounded.
    ///
    /// Fails with `InvalidLimit` for `n < -1`.
    pub fn limit(mut self, n: i64) -> Result<Self> {
        self.window = self.window.with_limit(n)?;
        Ok(self)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// The current predicate list (a single composite once folded).
    pub fn predicates(&self) -> &[Predicate] {
        &self.wheres
    }

    /// The sort keys, in priority order.
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort
    }

    /// The select list.
    pub fn selects(&self) -> &[Column] {
        &self.selects
    }

    /// The configured offset.
    pub fn get_offset(&self) -> usize {
        self.window.offset()
    }

    /// The configured limit, `None` meaning unbounded.
    pub fn get_limit(&self) -> Option<usize> {
        self.window.limit()
    }

    /// Returns `true` if applying this query is the identity transformation.
    pub fn is_empty(&self) -> bool {
        self.wheres.is_empty()
            && self.sort.is_empty()
            && self.window.is_passthrough()
            && self.selects.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests whether a single record matches the query's filter.
    pub fn matches(&self, record: &Record, header: &Header, index: usize) -> bool {
        self.wheres
            .iter()
            .all(|pred| pred.matches(record, header, index))
    }

    /// Applies the query to a source, using the source's own header.
    ///
    /// The pipeline runs filter → sort → window → project. The source is
    /// iterated exactly once. Column references are validated against the
    /// concrete header before any record is read.
    pub fn apply(&self, source: &impl RecordSource) -> Result<ResultSet> {
        self.run(source, source.header().clone())
    }

    /// Applies the query with a header override.
    ///
    /// An empty override falls back to the source's own header.
    pub fn apply_with_header(
        &self,
        source: &impl RecordSource,
        header: Header,
    ) -> Result<ResultSet> {
        let header = if header.is_empty() {
            source.header().clone()
        } else {
            header
        };
        self.run(source, header)
    }

    fn run(&self, source: &impl RecordSource, header: Header) -> Result<ResultSet> {
        for pred in &self.wheres {
            pred.validate(&header)?;
        }
        for key in &self.sort {
            key.validate(&header)?;
        }
        let projection = Projection::new(self.selects.clone());
        let resolved = if projection.is_identity() {
            None
        } else {
            Some(projection.resolve(&header)?)
        };

        // Filter is the one stage that stays lazy; sorting needs the full
        // extent, so survivors are materialized here.
        let mut rows: Vec<(usize, Record)> = source
            .records()
            .filter(|(index, record)| self.matches(record, &header, *index))
            .collect();

        if !self.sort.is_empty() {
            // sort_by is stable: all-keys-equal records keep filtered order.
            rows.sort_by(|(_, a), (_, b)| compare_by_keys(a, b, &self.sort, &header));
        }

        let rows = self.window.apply(rows);

        Ok(match resolved {
            Some(resolved) => {
                let projected = rows
                    .into_iter()
                    .map(|(index, record)| (index, resolved.project(&record)))
                    .collect();
                ResultSet::new(resolved.header().clone(), projected)
            }
            None => ResultSet::new(header, rows),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Table;

    fn tasks() -> Table {
        Table::new(
            Header::from_names(["name", "priority", "status"]),
            vec![
                Record::from_strs(["task a", "1", "open"]),
                Record::from_strs(["task b", "2", "open"]),
                Record::from_strs(["urgent task", "5", "open"]),
                Record::from_strs(["critical task", "5", "done"]),
                Record::from_strs(["done task", "3", "done"]),
            ],
        )
    }

    #[test]
    fn empty_query_is_identity() {
        let table = tasks();
        let result = Query::new().apply(&table).unwrap();

        assert_eq!(result.len(), table.len());
        assert_eq!(result.header(), table.header());
        for (i, (index, record)) in result.rows().iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(record, &table.rows()[i]);
        }
    }

    #[test]
    fn and_where_filters() {
        let result = Query::new()
            .and_where("priority", Op::Eq, "5")
            .and_where("status", Op::Eq, "open")
            .apply(&tasks())
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.record(0).unwrap().get(0), Some("urgent task"));
    }

    #[test]
    fn filter_preserves_source_indices() {
        let result = Query::new()
            .and_where("status", Op::Eq, "done")
            .apply(&tasks())
            .unwrap();

        let indices: Vec<usize> = result.rows().iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![3, 4]);
    }

    #[test]
    fn or_where_widens() {
        let result = Query::new()
            .and_where("priority", Op::Eq, "1")
            .or_where("priority", Op::Eq, "2")
            .apply(&tasks())
            .unwrap();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn where_not_on_empty_list_is_complement() {
        let result = Query::new()
            .where_not("status", Op::Eq, "done")
            .apply(&tasks())
            .unwrap();

        assert_eq!(result.len(), 3);
        for (_, record) in result.rows() {
            assert_eq!(record.get(2), Some("open"));
        }
    }

    #[test]
    fn where_not_after_condition_is_set_difference() {
        let result = Query::new()
            .and_where("priority", Op::Gte, "3")
            .where_not("status", Op::Eq, "done")
            .apply(&tasks())
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.record(0).unwrap().get(0), Some("urgent task"));
    }

    #[test]
    fn xor_fold_is_pairwise_not_one_of_n() {
        // ((p>=1 XOR p>=2) XOR p>=3): a row satisfying all three terms comes
        // out true under the pairwise fold, where an "exactly one of three"
        // reading would exclude it.
        let result = Query::new()
            .xor_where("priority", Op::Gte, "1")
            .xor_where("priority", Op::Gte, "2")
            .xor_where("priority", Op::Gte, "3")
            .apply(&tasks())
            .unwrap();

        let priorities: Vec<_> = result
            .rows()
            .iter()
            .map(|(_, r)| r.get(1).unwrap())
            .collect();
        // p=1: (T,F,F) -> true; p=2: (T,T,F) -> false; p in {3,5}: (T,T,T) -> true.
        assert_eq!(priorities, vec!["1", "5", "5", "3"]);
    }

    #[test]
    fn plain_wheres_are_conjunctive() {
        let result = Query::new()
            .where_record(|rec| rec.get(2) == Some("open"))
            .where_fn(|_, index| index >= 1)
            .apply(&tasks())
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.record(0).unwrap().get(0), Some("task b"));
    }

    #[test]
    fn joiner_folds_plain_wheres_first() {
        // The two plain wheres form a conjunction; or_where folds against
        // that whole aggregate, not just the last predicate.
        let result = Query::new()
            .where_record(|rec| rec.get(1) == Some("5"))
            .where_record(|rec| rec.get(2) == Some("open"))
            .or_where("name", Op::Eq, "done task")
            .apply(&tasks())
            .unwrap();

        assert_eq!(result.len(), 2);
        let names: Vec<_> = result
            .rows()
            .iter()
            .map(|(_, r)| r.get(0).unwrap())
            .collect();
        assert_eq!(names, vec!["urgent task", "done task"]);
    }

    #[test]
    fn repeated_and_where_is_idempotent() {
        let once = Query::new()
            .and_where("status", Op::Eq, "open")
            .apply(&tasks())
            .unwrap();
        let twice = Query::new()
            .and_where("status", Op::Eq, "open")
            .and_where("status", Op::Eq, "open")
            .apply(&tasks())
            .unwrap();

        assert_eq!(once.rows(), twice.rows());
    }

    #[test]
    fn sorting_is_stable() {
        let result = Query::new().order_by_asc("priority").apply(&tasks()).unwrap();

        let names: Vec<_> = result
            .rows()
            .iter()
            .map(|(_, r)| r.get(0).unwrap())
            .collect();
        // Both priority-5 rows keep their source order.
        assert_eq!(
            names,
            vec!["task a", "task b", "done task", "urgent task", "critical task"]
        );
    }

    #[test]
    fn multi_key_sort() {
        let result = Query::new()
            .order_by_desc("priority")
            .order_by_asc("name")
            .apply(&tasks())
            .unwrap();

        let names: Vec<_> = result
            .rows()
            .iter()
            .map(|(_, r)| r.get(0).unwrap())
            .collect();
        assert_eq!(names[0], "critical task");
        assert_eq!(names[1], "urgent task");
    }

    #[test]
    fn numeric_aware_sort() {
        let table = Table::new(
            Header::from_names(["n"]),
            vec![
                Record::from_strs(["10"]),
                Record::from_strs(["2"]),
                Record::from_strs(["1"]),
            ],
        );
        let result = Query::new().order_by_asc("n").apply(&table).unwrap();
        let cells: Vec<_> = result.rows().iter().map(|(_, r)| r.get(0).unwrap()).collect();
        assert_eq!(cells, vec!["1", "2", "10"]);
    }

    #[test]
    fn nan_cell_never_matches_numeric_comparison() {
        let table = Table::new(
            Header::from_names(["v"]),
            vec![Record::from_strs(["NaN"]), Record::from_strs(["5"])],
        );

        let result = Query::new()
            .and_where("v", Op::Eq, "5")
            .apply(&table)
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.record(0).unwrap().get(0), Some("5"));

        for op in [Op::Gte, Op::Lte] {
            let result = Query::new().and_where("v", op, "5").apply(&table).unwrap();
            for (_, record) in result.rows() {
                assert_ne!(record.get(0), Some("NaN"));
            }
        }
    }

    #[test]
    fn custom_comparator() {
        let result = Query::new()
            .order_by(|a, b| {
                a.get(0)
                    .map(str::len)
                    .cmp(&b.get(0).map(str::len))
            })
            .apply(&tasks())
            .unwrap();

        assert_eq!(result.record(0).unwrap().get(0), Some("task a"));
    }

    #[test]
    fn window_applies_after_sort() {
        let result = Query::new()
            .order_by_asc("priority")
            .offset(1)
            .unwrap()
            .limit(2)
            .unwrap()
            .apply(&tasks())
            .unwrap();

        let names: Vec<_> = result
            .rows()
            .iter()
            .map(|(_, r)| r.get(0).unwrap())
            .collect();
        assert_eq!(names, vec!["task b", "done task"]);
    }

    #[test]
    fn offset_past_end_is_empty() {
        let result = Query::new().offset(100).unwrap().apply(&tasks()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn invalid_window_bounds() {
        assert!(Query::new().offset(-1).is_err());
        assert!(Query::new().limit(-2).is_err());
        assert!(Query::new().limit(-1).is_ok());
    }

    #[test]
    fn select_projects_and_renames_header() {
        let result = Query::new()
            .select(["priority", "name"])
            .apply(&tasks())
            .unwrap();

        assert_eq!(result.header().names(), &["priority", "name"]);
        assert_eq!(result.record(0).unwrap().get(0), Some("1"));
        assert_eq!(result.record(0).unwrap().get(1), Some("task a"));
    }

    #[test]
    fn select_unknown_column_fails_at_apply() {
        let query = Query::new().select(["nope"]);
        assert!(query.apply(&tasks()).is_err());
    }

    #[test]
    fn unknown_filter_column_fails_at_apply() {
        let query = Query::new().and_where("nope", Op::Eq, "x");
        assert!(query.apply(&tasks()).is_err());
    }

    #[test]
    fn literal_in_or_regex_operator_fails_at_apply() {
        use crate::error::QueryError;

        assert!(matches!(
            Query::new().and_where("name", Op::In, "x").apply(&tasks()),
            Err(QueryError::OperandMismatch(Op::In))
        ));
        assert!(matches!(
            Query::new().and_where("name", Op::Regex, "x").apply(&tasks()),
            Err(QueryError::OperandMismatch(Op::Regex))
        ));
    }

    #[test]
    fn unknown_sort_column_fails_at_apply() {
        let query = Query::new().order_by_asc("nope");
        assert!(query.apply(&tasks()).is_err());
    }

    #[test]
    fn header_override() {
        let table = Table::headerless(vec![
            Record::from_strs(["x", "1"]),
            Record::from_strs(["y", "2"]),
        ]);

        let result = Query::new()
            .and_where("value", Op::Eq, "2")
            .apply_with_header(&table, Header::from_names(["key", "value"]))
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.record(0).unwrap().get(0), Some("y"));
        assert_eq!(result.header().names(), &["key", "value"]);
    }

    #[test]
    fn empty_override_falls_back_to_source_header() {
        let table = tasks();
        let result = Query::new()
            .apply_with_header(&table, Header::empty())
            .unwrap();
        assert_eq!(result.header(), table.header());
    }

    #[test]
    fn results_can_be_requeried() {
        let first = Query::new()
            .and_where("status", Op::Eq, "open")
            .apply(&tasks())
            .unwrap();

        let second = Query::new()
            .order_by_desc("priority")
            .limit(1)
            .unwrap()
            .apply(&first)
            .unwrap();

        assert_eq!(second.len(), 1);
        assert_eq!(second.record(0).unwrap().get(0), Some("urgent task"));
    }

    #[test]
    fn builder_values_are_independent() {
        let base = Query::new().and_where("status", Op::Eq, "open");
        let narrowed = base.clone().and_where("priority", Op::Gte, "5");

        assert_eq!(base.apply(&tasks()).unwrap().len(), 3);
        assert_eq!(narrowed.apply(&tasks()).unwrap().len(), 1);
    }

    #[test]
    fn introspection() {
        let query = Query::new()
            .and_where("name", Op::Eq, "x")
            .order_by_asc("name")
            .select(["name"])
            .offset(5)
            .unwrap()
            .limit(10)
            .unwrap();

        assert_eq!(query.predicates().len(), 1);
        assert_eq!(query.sort_keys().len(), 1);
        assert_eq!(query.selects().len(), 1);
        assert_eq!(query.get_offset(), 5);
        assert_eq!(query.get_limit(), Some(10));
        assert!(!query.is_empty());
        assert!(Query::new().is_empty());
    }

    #[test]
    fn regex_builder_is_fallible() {
        assert!(Query::new().and_where_regex("name", "^task").is_ok());
        assert!(Query::new().and_where_regex("name", "(broken").is_err());

        let result = Query::new()
            .and_where_regex("name", "^task")
            .unwrap()
            .apply(&tasks())
            .unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn in_set_builders() {
        let result = Query::new()
            .and_where_in("priority", ["1", "3"])
            .apply(&tasks())
            .unwrap();
        assert_eq!(result.len(), 2);

        let result = Query::new()
            .where_not_in("priority", ["1", "3"])
            .apply(&tasks())
            .unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn column_to_column_builders() {
        let table = Table::new(
            Header::from_names(["a", "b"]),
            vec![
                Record::from_strs(["1", "2"]),
                Record::from_strs(["3", "3"]),
                Record::from_strs(["5", "4"]),
            ],
        );

        let result = Query::new()
            .and_where_column("a", Op::Lt, "b")
            .apply(&table)
            .unwrap();
        assert_eq!(result.len(), 1);

        let result = Query::new()
            .where_not_column("a", Op::Eq, "b")
            .apply(&table)
            .unwrap();
        assert_eq!(result.len(), 2);
    }
}
