//! Importance relations declared over pairs of criteria.

/// An ordered pair of criteria asserting either equivalence or strict
/// importance between them.
///
/// When `equivalent` is `true`, the pair asserts `c1 ≡ c2` (symmetric).
/// When `false`, it asserts `c1 ≻ c2`, i.e. `c1` is strictly more important
/// than `c2`.
#[derive(Clone, Debug, PartialEq)]
pub struct Preference {
  criterion1: String,
  criterion2: String,
  equivalent: bool,
}

impl Preference {
  /// Asserts that `c1` is strictly more important than `c2`.
  pub fn strict(c1: impl Into<String>, c2: impl Into<String>) -> Self {
    Self {
      criterion1: c1.into(),
      criterion2: c2.into(),
      equivalent: false,
    }
  }

  /// Asserts that `c1` and `c2` are equally important.
  pub fn equivalent(c1: impl Into<String>, c2: impl Into<String>) -> Self {
    Self {
      criterion1: c1.into(),
      criterion2: c2.into(),
      equivalent: true,
    }
  }

  /// The first criterion of the pair.
  pub fn criterion1(&self) -> &str {
    &self.criterion1
  }

  /// The second criterion of the pair.
  pub fn criterion2(&self) -> &str {
    &self.criterion2
  }

  /// `true` if this preference asserts equivalence rather than strict
  /// importance.
  pub fn is_equivalent(&self) -> bool {
    self.equivalent
  }
}
