//! Declarative metadata describing one column of the alternative matrix.

/// The domain of a criterion: a numeric range or a finite ordered sequence
/// of category labels.
#[derive(Clone, Debug, PartialEq)]
pub enum CriterionKind {
  /// A numeric criterion bounded by `[min, max]`.
  Absolute {
    /// Lower bound, inclusive.
    min: f64,
    /// Upper bound, inclusive.
    max: f64,
  },
  /// A categorical criterion whose values are ordered worst-to-best.
  Ordinal {
    /// Valid category labels, earlier entries are worse.
    values: Vec<String>,
  },
}

impl CriterionKind {
  /// Returns `true` if this kind's domain collapses to a single point,
  /// i.e. an absolute criterion with `min == max` or an ordinal criterion
  /// with exactly one declared value.
  pub fn is_degenerate(&self) -> bool {
    match self {
      CriterionKind::Absolute { min, max } => min == max,
      CriterionKind::Ordinal { values } => values.len() == 1,
    }
  }
}

/// A named attribute alternatives are compared on.
///
/// A criterion is either [`Absolute`](CriterionKind::Absolute), with a
/// numeric `[min, max]` domain, or [`Ordinal`](CriterionKind::Ordinal), with
/// a finite ordered sequence of category labels where earlier means worse.
/// `maximize` decides polarity: when `true`, larger (or later-in-sequence)
/// values are better.
#[derive(Clone, Debug, PartialEq)]
pub struct Criterion {
  name: String,
  maximize: bool,
  kind: CriterionKind,
}

impl Criterion {
  /// Creates an absolute criterion bounded by `[min, max]`.
  pub fn absolute(
    name: impl Into<String>,
    maximize: bool,
    min: f64,
    max: f64,
  ) -> Self {
    Self {
      name: name.into(),
      maximize,
      kind: CriterionKind::Absolute { min, max },
    }
  }

  /// Creates an ordinal criterion whose `values` are ordered worst-to-best.
  pub fn ordinal(
    name: impl Into<String>,
    maximize: bool,
    values: Vec<String>,
  ) -> Self {
    Self {
      name: name.into(),
      maximize,
      kind: CriterionKind::Ordinal { values },
    }
  }

  /// This criterion's unique name.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// `true` if larger (or later-in-sequence) values are better.
  pub fn maximize(&self) -> bool {
    self.maximize
  }

  /// This criterion's domain.
  pub fn kind(&self) -> &CriterionKind {
    &self.kind
  }
}
