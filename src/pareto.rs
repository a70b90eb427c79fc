//! Standard Pareto dominance over normalized criterion values.
//!
//! Grounded on the teacher's `ParetoDominance` trait shape
//! (`src/evaluator/pareto.rs`), re-polarized: there, smaller (closer to
//! zero) is better; here, larger (closer to one, post-normalization) is
//! better.

use std::cmp::Ordering;

use crate::normalization::NormalizedMatrix;

/// Describes Pareto dominance for rows of normalized values.
trait ParetoDominance {
  /// Returns `Less` if `self` is dominated by `other`, `Greater` if `self`
  /// dominates `other`, otherwise `Equal` (incomparable or identical).
  fn dominance(&self, other: &Self) -> Ordering;
}

impl ParetoDominance for [f64] {
  fn dominance(&self, other: &Self) -> Ordering {
    let mut ord = Ordering::Equal;
    for (a, b) in self.iter().zip(other) {
      match (ord, a.partial_cmp(b).expect("NaN encountered")) {
        (Ordering::Equal, next) => ord = next,
        (Ordering::Greater, Ordering::Less)
        | (Ordering::Less, Ordering::Greater) => return Ordering::Equal,
        _ => {}
      }
    }
    ord
  }
}

/// Returns the identifiers of alternatives not dominated by any other
/// alternative, preserving `matrix`'s original order.
///
/// Naive `O(n^2 * m)` sweep with early termination on the first dominator
/// found, per SPEC_FULL.md §4.3.
pub(crate) fn pareto_front(
  matrix: &NormalizedMatrix,
  criterion_names: &[String],
) -> Vec<String> {
  let ids: Vec<String> = matrix.ids().map(str::to_string).collect();
  let rows: Vec<Vec<f64>> = ids
    .iter()
    .map(|id| {
      criterion_names
        .iter()
        .map(|c| matrix.value(id, c).expect("validated, normalized matrix"))
        .collect()
    })
    .collect();

  let mut front = Vec::new();
  for (i, row) in rows.iter().enumerate() {
    let dominated = rows
      .iter()
      .enumerate()
      .any(|(j, other)| i != j && other.as_slice().dominance(row.as_slice()) == Ordering::Greater);
    if !dominated {
      front.push(ids[i].clone());
    }
  }

  tracing::debug!(
    input = rows.len(),
    surviving = front.len(),
    "pareto filter applied"
  );
  front
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_dominance_equal() {
    assert_eq!([1.0, 2.0].dominance(&[1.0, 2.0]), Ordering::Equal);
  }

  #[test]
  fn test_dominance_incomparable() {
    assert_eq!([1.0, 2.0].dominance(&[2.0, 1.0]), Ordering::Equal);
  }

  #[test]
  fn test_dominance_strict() {
    assert_eq!([2.0, 2.0].dominance(&[1.0, 2.0]), Ordering::Greater);
    assert_eq!([1.0, 2.0].dominance(&[2.0, 2.0]), Ordering::Less);
  }

  #[test]
  fn test_pareto_front_drops_dominated() {
    use crate::criterion::Criterion;
    use crate::matrix::{AlternativeMatrix, Cell};
    use crate::normalization::normalize;

    let criteria = vec![
      Criterion::absolute("a", true, 0.0, 1.0),
      Criterion::absolute("b", true, 0.0, 1.0),
    ];
    let mut m = AlternativeMatrix::new();
    m.insert(
      "X",
      [
        ("a".to_string(), Cell::Absolute(0.5)),
        ("b".to_string(), Cell::Absolute(0.5)),
      ],
    );
    m.insert(
      "Y",
      [
        ("a".to_string(), Cell::Absolute(0.8)),
        ("b".to_string(), Cell::Absolute(0.8)),
      ],
    );
    let normalized = normalize(&criteria, &m);
    let front = pareto_front(
      &normalized,
      &["a".to_string(), "b".to_string()],
    );
    assert_eq!(front, vec!["Y".to_string()]);
  }
}
