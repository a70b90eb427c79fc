//! `DecisionModel`: ties validation, normalization, Pareto filtering and
//! t-ordering together behind a single construct-once, query-many handle.

use std::{
  cell::RefCell,
  collections::BTreeSet,
};

use rayon::prelude::*;
use typed_builder::TypedBuilder;

use crate::{
  criterion::Criterion,
  dominance::{group_sums, t_dominates},
  error::ModelError,
  grouping::{group_criteria, Groups},
  importance::{build_importance_dag, ImportanceDag},
  matrix::{AlternativeMatrix, Cell},
  normalization::{normalize, NormalizedMatrix},
  preference::Preference,
  validation::validate,
};

/// A raw alternative row, as supplied to [`DecisionModel::new`]: an
/// identifier plus one `(criterion name, cell)` pair per declared
/// criterion.
pub type AlternativeRow = (String, Vec<(String, Cell)>);

/// A validated, normalized multi-criteria decision model.
///
/// Construction runs validation and normalization eagerly; Pareto
/// filtering and t-ordering are computed lazily on first access and
/// memoized for the lifetime of the model (SPEC_FULL.md §3 Lifecycle).
pub struct DecisionModel {
  criteria: Vec<Criterion>,
  preferences: Vec<Preference>,
  normalized: NormalizedMatrix,
  groups: Groups,
  dag: ImportanceDag,
  pareto_cache: RefCell<Option<Vec<String>>>,
  t_ordering_cache: RefCell<Option<Vec<String>>>,
}

impl DecisionModel {
  /// Validates and normalizes `criteria`, `alternatives` and
  /// `preferences`, returning a ready-to-query model or the first
  /// [`ModelError`] encountered.
  #[tracing::instrument(skip_all)]
  pub fn new(
    criteria: Vec<Criterion>,
    alternatives: Vec<AlternativeRow>,
    preferences: Vec<Preference>,
  ) -> Result<Self, ModelError> {
    check_unique_ids(&alternatives)?;

    let mut matrix = AlternativeMatrix::new();
    for (id, row) in alternatives {
      matrix.insert(id, row);
    }

    if let Err(err) = validate(&criteria, &matrix, &preferences) {
      tracing::error!(error = %err, "model construction failed");
      return Err(err);
    }

    let normalized = normalize(&criteria, &matrix);
    let groups = group_criteria(&criteria, &preferences);
    let dag = build_importance_dag(&groups, &preferences);

    tracing::debug!(
      alternatives = normalized.ids().count(),
      criteria = criteria.len(),
      groups = groups.len(),
      "model constructed"
    );

    Ok(Self {
      criteria,
      preferences,
      normalized,
      groups,
      dag,
      pareto_cache: RefCell::new(None),
      t_ordering_cache: RefCell::new(None),
    })
  }

  /// The normalized matrix, for inspection.
  pub fn normalized(&self) -> &NormalizedMatrix {
    &self.normalized
  }

  /// Identifiers of alternatives surviving standard Pareto filtering,
  /// preserving original order. Memoized after the first call.
  pub fn pareto_front(&self) -> Vec<String> {
    if let Some(cached) = self.pareto_cache.borrow().as_ref() {
      return cached.clone();
    }
    let names: Vec<String> =
      self.criteria.iter().map(|c| c.name().to_string()).collect();
    let front = crate::pareto::pareto_front(&self.normalized, &names);
    *self.pareto_cache.borrow_mut() = Some(front.clone());
    front
  }

  /// Identifiers of alternatives surviving t-ordering (implies Pareto).
  /// Preserves the order in which alternatives appear in
  /// [`DecisionModel::pareto_front`]. Memoized after the first call.
  #[tracing::instrument(skip_all)]
  pub fn t_ordering(&self) -> Vec<String> {
    if let Some(cached) = self.t_ordering_cache.borrow().as_ref() {
      return cached.clone();
    }
    let front = self.pareto_front();
    let sums: Vec<Vec<f64>> = front
      .iter()
      .map(|id| {
        group_sums(&self.groups, |c| {
          self.normalized.value(id, c).expect("pareto id is normalized")
        })
      })
      .collect();

    let mut removed: BTreeSet<usize> = BTreeSet::new();
    for i in 0..front.len() {
      if removed.contains(&i) {
        continue;
      }
      for j in 0..front.len() {
        if i == j || removed.contains(&j) {
          continue;
        }
        if t_dominates(&self.dag, &sums[i], &sums[j]) {
          removed.insert(j);
        }
      }
    }

    let survivors: Vec<String> = front
      .iter()
      .enumerate()
      .filter(|(i, _)| !removed.contains(i))
      .map(|(_, id)| id.clone())
      .collect();

    tracing::debug!(
      pareto = front.len(),
      survivors = survivors.len(),
      "t-ordering applied"
    );

    *self.t_ordering_cache.borrow_mut() = Some(survivors.clone());
    survivors
  }

  /// Parallel variant of [`DecisionModel::t_ordering`]: the outer sweep
  /// over candidate dominators `Z` runs on `rayon`'s thread pool. Returns
  /// the same survivor set as the sequential form (SPEC_FULL.md §5);
  /// result order is not memoized or reused by the sequential path.
  pub fn t_ordering_par(&self) -> Vec<String> {
    let front = self.pareto_front();
    let sums: Vec<Vec<f64>> = front
      .iter()
      .map(|id| {
        group_sums(&self.groups, |c| {
          self.normalized.value(id, c).expect("pareto id is normalized")
        })
      })
      .collect();

    let dominated_by: Vec<BTreeSet<usize>> = (0..front.len())
      .into_par_iter()
      .map(|i| {
        (0..front.len())
          .filter(|&j| j != i && t_dominates(&self.dag, &sums[i], &sums[j]))
          .collect()
      })
      .collect();

    let mut removed: BTreeSet<usize> = BTreeSet::new();
    for i in 0..front.len() {
      if removed.contains(&i) {
        continue;
      }
      removed.extend(dominated_by[i].iter().copied());
    }

    front
      .into_iter()
      .enumerate()
      .filter(|(i, _)| !removed.contains(i))
      .map(|(_, id)| id)
      .collect()
  }
}

fn check_unique_ids(alternatives: &[AlternativeRow]) -> Result<(), ModelError> {
  let mut seen = BTreeSet::new();
  for (id, _) in alternatives {
    if !seen.insert(id.clone()) {
      return Err(ModelError::DuplicateAlternative { id: id.clone() });
    }
  }
  Ok(())
}

/// Ergonomic, compile-time-checked assembly of a [`DecisionModel`]'s
/// constructor arguments, mirroring the teacher's `typed-builder` usage on
/// its own optimizer configuration structs.
///
/// ```
/// use tordering::{Criterion, Cell, model::DecisionModelBuilder};
///
/// let model = DecisionModelBuilder::builder()
///   .criteria(vec![Criterion::absolute("f1", true, 0.0, 1.0)])
///   .alternatives(vec![(
///     "Z".to_string(),
///     vec![("f1".to_string(), Cell::Absolute(1.0))],
///   )])
///   .preferences(vec![])
///   .build()
///   .try_build()
///   .unwrap();
/// assert_eq!(model.pareto_front(), vec!["Z".to_string()]);
/// ```
#[derive(TypedBuilder, Debug)]
pub struct DecisionModelBuilder {
  criteria: Vec<Criterion>,
  alternatives: Vec<AlternativeRow>,
  preferences: Vec<Preference>,
}

impl DecisionModelBuilder {
  /// Builds the assembled arguments into a validated, normalized
  /// [`DecisionModel`].
  pub fn try_build(self) -> Result<DecisionModel, ModelError> {
    DecisionModel::new(self.criteria, self.alternatives, self.preferences)
  }
}
