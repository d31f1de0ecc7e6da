//! Chainable, eager analysis over an owned working set of records.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::Utc;
use indexmap::IndexMap;

use crate::types::{FieldRef, Record, Value};

use super::aggregate::{AggregateOp, aggregate_values};
use super::compare::{SortOrder, compare_values, values_equal};
use super::result::AnalysisResult;

/// Ordered field → operation pairs for [`Analyzer::multi_aggregate`].
///
/// Behaves like a map: configuring a field again replaces its operation in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateConfig<F> {
    entries: Vec<(F, AggregateOp)>,
}

impl<F: FieldRef> AggregateConfig<F> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add (or replace) the operation for `field`.
    pub fn with(mut self, field: F, op: AggregateOp) -> Self {
        self.insert(field, op);
        self
    }

    pub fn insert(&mut self, field: F, op: AggregateOp) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = op,
            None => self.entries.push((field, op)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, AggregateOp)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: FieldRef> Default for AggregateConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldRef> FromIterator<(F, AggregateOp)> for AggregateConfig<F> {
    fn from_iter<I: IntoIterator<Item = (F, AggregateOp)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (field, op) in iter {
            config.insert(field, op);
        }
        config
    }
}

/// Key under which an aggregate is reported, e.g. `price_sum`.
pub fn aggregate_key<F: FieldRef>(field: F, op: AggregateOp) -> String {
    format!("{}_{}", field.name(), op)
}

/// Analysis engine over a working set of `T`.
///
/// Every transformation runs immediately against the current working set and returns the
/// engine for chaining; [`Analyzer::results`] can be inspected between steps. The working set
/// is always a private copy: neither the slice given to [`Analyzer::new`] / [`Analyzer::reset`]
/// nor the vectors handed out afterwards alias it.
///
/// ```rust
/// use data_analyzer::processing::{AggregateConfig, AggregateOp, Analyzer, SortOrder};
/// use data_analyzer::records::{Sale, SaleField};
///
/// let sales = vec![
///     Sale { id: 1, product: "Laptop".into(), category: "Electronics".into(), price: 999.0, quantity: 1, date: "2024-01-15".into() },
///     Sale { id: 2, product: "Novel".into(), category: "Books".into(), price: 15.0, quantity: 3, date: "2024-01-16".into() },
///     Sale { id: 3, product: "Phone".into(), category: "Electronics".into(), price: 599.0, quantity: 2, date: "2024-01-17".into() },
/// ];
///
/// let config = AggregateConfig::new().with(SaleField::Price, AggregateOp::Sum);
/// let result = Analyzer::new(&sales)
///     .filter_by_field(SaleField::Category, "Electronics")
///     .sort_by(SaleField::Price, SortOrder::Descending)
///     .analyze(Some(&config));
///
/// assert_eq!(result.summary().total, 2);
/// assert_eq!(result.aggregate("price_sum"), Some(1598.0));
/// assert_eq!(result.data()[0].id, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Analyzer<T> {
    data: Vec<T>,
}

impl<T: Record> Analyzer<T> {
    /// Create an engine over a copy of `data`.
    pub fn new(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Keep records for which `predicate` returns `true`. Order-preserving.
    pub fn filter<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.data.len();
        self.data.retain(predicate);
        self.trace("filter", before);
        self
    }

    /// Keep records whose `field` equals `value`. Order-preserving.
    pub fn filter_by_field(&mut self, field: T::Field, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        let before = self.data.len();
        self.data.retain(|r| values_equal(&r.value(field), &value));
        self.trace("filter_by_field", before);
        self
    }

    /// Keep records whose numeric `field` lies in `min..=max`. Order-preserving.
    pub fn filter_by_range(&mut self, field: T::NumericField, min: f64, max: f64) -> &mut Self {
        let field: T::Field = field.into();
        let before = self.data.len();
        self.data.retain(|r| {
            r.value(field)
                .as_f64()
                .is_some_and(|v| v >= min && v <= max)
        });
        self.trace("filter_by_range", before);
        self
    }

    /// Stable sort by `field`; see [`compare_values`] for how values are ordered.
    pub fn sort_by(&mut self, field: T::Field, order: SortOrder) -> &mut Self {
        self.data.sort_by(|a, b| {
            let ord = compare_values(&a.value(field), &b.value(field));
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        self.trace("sort_by", self.data.len());
        self
    }

    /// Stable sort with a caller-supplied comparator.
    pub fn sort<C>(&mut self, compare: C) -> &mut Self
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.data.sort_by(compare);
        self.trace("sort", self.data.len());
        self
    }

    /// Partition the working set by the string form of `field`.
    ///
    /// Groups appear in first-seen order and records keep their working-set order within a
    /// group. The working set is not modified.
    pub fn group_by(&self, field: T::Field) -> IndexMap<String, Vec<T>> {
        let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();
        for record in &self.data {
            groups
                .entry(record.value(field).to_string())
                .or_default()
                .push(record.clone());
        }
        groups
    }

    /// Group sizes, keyed and ordered as in [`Analyzer::group_by`].
    pub fn count_by(&self, field: T::Field) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for record in &self.data {
            *counts.entry(record.value(field).to_string()).or_default() += 1;
        }
        counts
    }

    /// Keep at most the first `n` records.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        let before = self.data.len();
        self.data.truncate(n);
        self.trace("limit", before);
        self
    }

    /// Drop the first `n` records.
    pub fn skip(&mut self, n: usize) -> &mut Self {
        let before = self.data.len();
        self.data.drain(..n.min(before));
        self.trace("skip", before);
        self
    }

    /// Drop records equal field-by-field to an earlier record, keeping the first occurrence.
    pub fn distinct(&mut self) -> &mut Self {
        let before = self.data.len();
        let mut seen: HashSet<String> = HashSet::with_capacity(before);
        self.data.retain(|r| match serde_json::to_string(r) {
            Ok(key) => seen.insert(key),
            Err(_) => true,
        });
        self.trace("distinct", before);
        self
    }

    /// Reduce the numeric values of `field` over the working set.
    ///
    /// Non-numeric values are skipped. With no numeric values at all the result is `0.0`.
    pub fn aggregate(&self, field: T::Field, op: AggregateOp) -> f64 {
        let values: Vec<f64> = self
            .data
            .iter()
            .filter_map(|r| r.value(field).as_f64())
            .collect();
        aggregate_values(&values, op)
    }

    /// Apply [`Analyzer::aggregate`] once per configured pair, keyed `"<field>_<op>"`.
    pub fn multi_aggregate(&self, config: &AggregateConfig<T::Field>) -> IndexMap<String, f64> {
        config
            .iter()
            .map(|(field, op)| (aggregate_key(field, op), self.aggregate(field, op)))
            .collect()
    }

    /// Snapshot the working set, its size, the current time and (if configured) aggregates.
    ///
    /// The working set is left as is.
    pub fn analyze(&self, config: Option<&AggregateConfig<T::Field>>) -> AnalysisResult<T> {
        let aggregates = config.map(|c| self.multi_aggregate(c));
        log::debug!(
            "analyze: {} {} record(s), {} aggregate(s)",
            self.data.len(),
            T::SHAPE,
            aggregates.as_ref().map_or(0, IndexMap::len)
        );
        AnalysisResult::new(self.data.clone(), Utc::now(), aggregates)
    }

    /// Replace the working set with a copy of `data`.
    pub fn reset(&mut self, data: &[T]) -> &mut Self {
        let before = self.data.len();
        self.data = data.to_vec();
        self.trace("reset", before);
        self
    }

    /// Copy of the current working set.
    pub fn results(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Borrow the current working set.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn trace(&self, op: &str, before: usize) {
        log::debug!("{op}: {before} -> {} {} record(s)", self.data.len(), T::SHAPE);
    }
}
