//! Comparison Matrix - Sparse pairwise judgment data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value assumed for any pair that has not been judged (equal importance).
pub const NEUTRAL_JUDGMENT: f64 = 1.0;

/// Pairwise comparison matrix keyed by row item id, then column item id.
///
/// `value(row, col)` reads "row is judged this many times more important than col".
/// Entries are optional: any pair without a stored value reads as
/// [`NEUTRAL_JUDGMENT`], including the diagonal. Serializes as a nested map,
/// e.g. `{"A": {"B": 3.0}, "B": {"A": 0.333}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonMatrix {
    rows: HashMap<String, HashMap<String, f64>>,
}

impl ComparisonMatrix {
    /// Creates an empty matrix (every pair neutral).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a comparison matrix.
    pub fn builder() -> ComparisonMatrixBuilder {
        ComparisonMatrixBuilder::new()
    }

    /// Returns the stored value for a pair, if any.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the value for a pair, falling back to [`NEUTRAL_JUDGMENT`].
    pub fn value(&self, row: &str, col: &str) -> f64 {
        self.get(row, col).unwrap_or(NEUTRAL_JUDGMENT)
    }

    /// Stores a single directed entry without touching its reciprocal.
    pub fn set(&mut self, row: impl Into<String>, col: impl Into<String>, value: f64) {
        self.rows
            .entry(row.into())
            .or_default()
            .insert(col.into(), value);
    }

    /// Records a judgment and its reciprocal: `[row][col] = value`, `[col][row] = 1 / value`.
    pub fn set_judgment(&mut self, row: &str, col: &str, value: f64) {
        self.set(row, col, value);
        self.set(col, row, 1.0 / value);
    }

    /// Removes every entry in the row and column of an item.
    pub fn remove_item(&mut self, id: &str) {
        self.rows.remove(id);
        for row in self.rows.values_mut() {
            row.remove(id);
        }
        self.rows.retain(|_, row| !row.is_empty());
    }

    /// Returns true if no entry has been stored.
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(HashMap::is_empty)
    }

    /// Returns the number of stored directed entries.
    pub fn entry_count(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    /// Returns true if every unordered pair of distinct items has a stored value
    /// in at least one direction.
    pub fn is_complete_for<S: AsRef<str>>(&self, items: &[S]) -> bool {
        items.iter().enumerate().all(|(i, a)| {
            items.iter().skip(i + 1).all(|b| {
                self.get(a.as_ref(), b.as_ref()).is_some()
                    || self.get(b.as_ref(), a.as_ref()).is_some()
            })
        })
    }
}

/// Builder for constructing ComparisonMatrix instances.
#[derive(Debug, Default)]
pub struct ComparisonMatrixBuilder {
    matrix: ComparisonMatrix,
}

impl ComparisonMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a judgment together with its reciprocal.
    pub fn judgment(mut self, row: &str, col: &str, value: f64) -> Self {
        self.matrix.set_judgment(row, col, value);
        self
    }

    /// Adds a single directed entry.
    pub fn entry(mut self, row: &str, col: &str, value: f64) -> Self {
        self.matrix.set(row, col, value);
        self
    }

    /// Builds the comparison matrix.
    pub fn build(self) -> ComparisonMatrix {
        self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_matrix_reads_neutral_everywhere() {
        let matrix = ComparisonMatrix::empty();
        assert!(matrix.is_empty());
        assert_eq!(matrix.value("A", "B"), NEUTRAL_JUDGMENT);
        assert_eq!(matrix.value("A", "A"), NEUTRAL_JUDGMENT);
        assert!(matrix.get("A", "B").is_none());
    }

    #[test]
    fn judgment_writes_reciprocal() {
        let matrix = ComparisonMatrix::builder().judgment("A", "B", 4.0).build();
        assert_eq!(matrix.value("A", "B"), 4.0);
        assert_eq!(matrix.value("B", "A"), 0.25);
        assert_eq!(matrix.entry_count(), 2);
    }

    #[test]
    fn entry_writes_one_direction_only() {
        let matrix = ComparisonMatrix::builder().entry("A", "B", 5.0).build();
        assert_eq!(matrix.get("A", "B"), Some(5.0));
        assert!(matrix.get("B", "A").is_none());
        assert_eq!(matrix.value("B", "A"), NEUTRAL_JUDGMENT);
    }

    #[test]
    fn later_judgment_overwrites_earlier() {
        let mut matrix = ComparisonMatrix::builder().judgment("A", "B", 3.0).build();
        matrix.set_judgment("B", "A", 2.0);
        assert_eq!(matrix.value("B", "A"), 2.0);
        assert_eq!(matrix.value("A", "B"), 0.5);
    }

    #[test]
    fn remove_item_clears_row_and_column() {
        let mut matrix = ComparisonMatrix::builder()
            .judgment("A", "B", 3.0)
            .judgment("A", "C", 5.0)
            .judgment("B", "C", 2.0)
            .build();

        matrix.remove_item("C");

        assert!(matrix.get("A", "C").is_none());
        assert!(matrix.get("C", "A").is_none());
        assert!(matrix.get("B", "C").is_none());
        assert_eq!(matrix.value("A", "B"), 3.0);
        assert_eq!(matrix.entry_count(), 2);
    }

    #[test]
    fn remove_last_item_empties_matrix() {
        let mut matrix = ComparisonMatrix::builder().judgment("A", "B", 3.0).build();
        matrix.remove_item("B");
        assert!(matrix.is_empty());
    }

    #[test]
    fn is_complete_for_requires_every_pair() {
        let partial = ComparisonMatrix::builder()
            .judgment("A", "B", 3.0)
            .judgment("B", "C", 2.0)
            .build();
        assert!(!partial.is_complete_for(&["A", "B", "C"]));

        let full = ComparisonMatrix::builder()
            .judgment("A", "B", 3.0)
            .judgment("B", "C", 2.0)
            .entry("C", "A", 0.2)
            .build();
        assert!(full.is_complete_for(&["A", "B", "C"]));
    }

    #[test]
    fn matrix_serializes_as_nested_map() {
        let matrix = ComparisonMatrix::builder().entry("A", "B", 2.0).build();
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, r#"{"A":{"B":2.0}}"#);
    }

    #[test]
    fn matrix_deserializes_from_nested_map() {
        let json = r#"{"A": {"B": 3, "C": 0.5}, "B": {"A": 0.3333}}"#;
        let matrix: ComparisonMatrix = serde_json::from_str(json).unwrap();
        assert_eq!(matrix.value("A", "B"), 3.0);
        assert_eq!(matrix.value("A", "C"), 0.5);
        assert_eq!(matrix.value("C", "A"), NEUTRAL_JUDGMENT);
    }
}
