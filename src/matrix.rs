//! The alternative matrix: a row-indexed table of typed criterion cells.

use std::collections::BTreeMap;

/// A single cell's value. The variant must match its column's criterion
/// kind: [`Cell::Absolute`] for an absolute criterion, [`Cell::Ordinal`]
/// for an ordinal one.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
  /// A numeric value for an absolute criterion.
  Absolute(f64),
  /// A category label for an ordinal criterion.
  Ordinal(String),
}

/// A mapping from alternative identifier to a row providing exactly one
/// cell per declared criterion.
///
/// Rows are stored in a [`BTreeMap`] keyed by criterion name so that a
/// model's iteration order over alternatives is the insertion order of
/// [`AlternativeMatrix::insert`] calls, not row-internal column order.
#[derive(Clone, Debug, Default)]
pub struct AlternativeMatrix {
  order: Vec<String>,
  rows: BTreeMap<String, BTreeMap<String, Cell>>,
}

impl AlternativeMatrix {
  /// Creates an empty matrix.
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts a row for alternative `id`, one cell per criterion name.
  ///
  /// Calling this twice with the same `id` replaces the row in place.
  /// [`DecisionModel::new`](crate::model::DecisionModel::new) rejects
  /// duplicate identifiers itself, before a matrix is ever built, so this
  /// silent-replace behavior is only observed by callers constructing a
  /// matrix directly.
  pub fn insert(
    &mut self,
    id: impl Into<String>,
    row: impl IntoIterator<Item = (String, Cell)>,
  ) {
    let id = id.into();
    if !self.rows.contains_key(&id) {
      self.order.push(id.clone());
    }
    self.rows.insert(id, row.into_iter().collect());
  }

  /// Alternative identifiers in insertion order.
  pub fn ids(&self) -> impl Iterator<Item = &str> {
    self.order.iter().map(String::as_str)
  }

  /// The row for alternative `id`, if present.
  pub fn row(&self, id: &str) -> Option<&BTreeMap<String, Cell>> {
    self.rows.get(id)
  }

  /// The cell for `(id, criterion)`, if both are present.
  pub fn cell(&self, id: &str, criterion: &str) -> Option<&Cell> {
    self.rows.get(id).and_then(|row| row.get(criterion))
  }

  /// Number of alternatives in the matrix.
  pub fn len(&self) -> usize {
    self.order.len()
  }

  /// `true` if the matrix has no alternatives.
  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_insert_and_lookup() {
    let mut m = AlternativeMatrix::new();
    m.insert("A", [("price".to_string(), Cell::Absolute(1.0))]);
    m.insert(
      "B",
      [("price".to_string(), Cell::Ordinal("high".to_string()))],
    );
    assert_eq!(m.len(), 2);
    assert_eq!(m.ids().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(m.cell("A", "price"), Some(&Cell::Absolute(1.0)));
    assert_eq!(m.cell("B", "missing"), None);
    assert_eq!(m.cell("missing", "price"), None);
  }

  #[test]
  fn test_reinsert_preserves_order_position() {
    let mut m = AlternativeMatrix::new();
    m.insert("A", [("x".to_string(), Cell::Absolute(1.0))]);
    m.insert("B", [("x".to_string(), Cell::Absolute(2.0))]);
    m.insert("A", [("x".to_string(), Cell::Absolute(3.0))]);
    assert_eq!(m.ids().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(m.cell("A", "x"), Some(&Cell::Absolute(3.0)));
  }
}
