//! The single user-visible failure kind raised by model construction.

use thiserror::Error;

/// Everything that can go wrong while building a [`DecisionModel`].
///
/// All variants except [`ModelError::NotNormalized`] correspond to an
/// `InvalidModel` sub-reason checked eagerly at construction; a validated
/// model never produces a `ModelError` again.
///
/// [`DecisionModel`]: crate::model::DecisionModel
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
  /// A declared criterion has no matching column in the alternative matrix.
  #[error("criterion '{criterion}' is missing from the alternative matrix")]
  MissingColumn {
    /// Name of the criterion missing its column.
    criterion: String,
  },

  /// A cell's value doesn't match the declared criterion kind.
  #[error("criterion '{criterion}' has a value of the wrong type")]
  WrongValueType {
    /// Name of the criterion with the mistyped cell.
    criterion: String,
  },

  /// An absolute criterion's cell falls outside `[min, max]`.
  #[error(
    "values {values:?} for criterion '{criterion}' are out of the declared range"
  )]
  OutOfRange {
    /// Name of the offending absolute criterion.
    criterion: String,
    /// The offending values, rendered for display.
    values: Vec<String>,
  },

  /// An ordinal criterion's cell isn't one of its declared categories.
  #[error(
    "values {values:?} for criterion '{criterion}' aren't declared categories"
  )]
  UnknownCategory {
    /// Name of the offending ordinal criterion.
    criterion: String,
    /// The offending values, rendered for display.
    values: Vec<String>,
  },

  /// A preference references a criterion that was never declared.
  #[error("preference references undeclared criterion '{criterion}'")]
  UndeclaredCriterion {
    /// Name of the undeclared criterion.
    criterion: String,
  },

  /// A preference pairs a criterion with itself.
  #[error("preference relates criterion '{criterion}' to itself")]
  SelfPreference {
    /// Name of the self-paired criterion.
    criterion: String,
  },

  /// Two alternatives share the same identifier.
  #[error("alternative identifier '{id}' is not unique")]
  DuplicateAlternative {
    /// The duplicated identifier.
    id: String,
  },

  /// The same ordered pair of criteria is asserted both strict and
  /// equivalent.
  #[error(
    "preference between '{c1}' and '{c2}' is both strict and equivalent"
  )]
  ContradictoryPreference {
    /// First criterion of the contradictory pair.
    c1: String,
    /// Second criterion of the contradictory pair.
    c2: String,
  },

  /// The preference graph contains a cycle that mixes in at least one
  /// strict edge.
  #[error("cyclic preferences: {rendered_cycle}")]
  CyclicPreferences {
    /// A human-readable rendering of the offending cycle, e.g.
    /// `"a > b -> b = c -> c > a"`.
    rendered_cycle: String,
  },

  /// t-ordering or Pareto filtering was requested before normalization.
  #[error("model has not been normalized yet")]
  NotNormalized,
}
