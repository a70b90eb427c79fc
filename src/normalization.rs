//! Maps every cell in a validated alternative matrix to `[0, 1]`, with `1`
//! always meaning "best" regardless of the criterion's original polarity.

use std::collections::BTreeMap;

use crate::{
  criterion::{Criterion, CriterionKind},
  matrix::{AlternativeMatrix, Cell},
};

/// A normalized matrix: `criterion name -> (alternative id -> value in
/// `[0, 1]`)`, plus the original alternative order.
#[derive(Clone, Debug)]
pub struct NormalizedMatrix {
  order: Vec<String>,
  columns: BTreeMap<String, BTreeMap<String, f64>>,
}

impl NormalizedMatrix {
  /// Alternative identifiers in their original order.
  pub fn ids(&self) -> impl Iterator<Item = &str> {
    self.order.iter().map(String::as_str)
  }

  /// The normalized value for `(id, criterion)`, if both are present.
  pub fn value(&self, id: &str, criterion: &str) -> Option<f64> {
    self.columns.get(criterion)?.get(id).copied()
  }

  /// The full normalized row for `id`, one value per criterion, in no
  /// particular column order.
  pub fn row(&self, id: &str) -> BTreeMap<String, f64> {
    self
      .columns
      .iter()
      .filter_map(|(criterion, col)| {
        col.get(id).map(|&v| (criterion.clone(), v))
      })
      .collect()
  }
}

/// Normalizes every declared criterion's column independently, per
/// SPEC_FULL.md §4.2. Assumes `alternatives` has already passed
/// [`validate`](crate::validation::validate).
pub(crate) fn normalize(
  criteria: &[Criterion],
  alternatives: &AlternativeMatrix,
) -> NormalizedMatrix {
  let order: Vec<String> = alternatives.ids().map(str::to_string).collect();
  let mut columns = BTreeMap::new();

  for criterion in criteria {
    let mut column = BTreeMap::new();
    if criterion.kind().is_degenerate() {
      for id in &order {
        column.insert(id.clone(), 1.0);
      }
    } else {
      for id in &order {
        let Some(cell) = alternatives.cell(id, criterion.name()) else {
          continue;
        };
        let raw = match (criterion.kind(), cell) {
          (CriterionKind::Absolute { .. }, Cell::Absolute(v)) => *v,
          (CriterionKind::Ordinal { values }, Cell::Ordinal(v)) => values
            .iter()
            .position(|candidate| candidate == v)
            .expect("validated matrix only contains declared categories")
            as f64,
          _ => unreachable!("validated matrix only contains matching cells"),
        };
        let (lo, hi) = match criterion.kind() {
          CriterionKind::Absolute { min, max } => (*min, *max),
          CriterionKind::Ordinal { values } => (0.0, (values.len() - 1) as f64),
        };
        let normalized = if criterion.maximize() {
          (raw - lo) / (hi - lo)
        } else {
          (hi - raw) / (hi - lo)
        };
        column.insert(id.clone(), normalized);
      }
    }
    columns.insert(criterion.name().to_string(), column);
  }

  NormalizedMatrix { order, columns }
}
