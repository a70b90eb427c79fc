//! The partial order over importance groups induced by strict preferences,
//! precomputed as a transitive closure (ancestor set per group).

use std::collections::BTreeSet;

use crate::{grouping::Groups, preference::Preference};

/// Per-group ancestor sets: `ancestors[g]` holds every group strictly more
/// important than `g`, direct and indirect.
#[derive(Clone, Debug)]
pub(crate) struct ImportanceDag {
  ancestors: Vec<BTreeSet<usize>>,
}

impl ImportanceDag {
  /// The more-important groups of `g`, direct and indirect, in ascending
  /// group index (SPEC_FULL.md §9: ancestor iteration order is fixed for
  /// determinism).
  pub(crate) fn ancestors(&self, g: usize) -> impl Iterator<Item = usize> + '_ {
    self.ancestors[g].iter().copied()
  }

  /// `true` if `g` has no strictly-more-important group.
  pub(crate) fn has_no_ancestors(&self, g: usize) -> bool {
    self.ancestors[g].is_empty()
  }

  /// Number of ancestors `g` has; used to order the mass-transfer sweep
  /// so least-important groups (most ancestors) are processed first.
  pub(crate) fn ancestor_count(&self, g: usize) -> usize {
    self.ancestors[g].len()
  }
}

/// Builds direct edges `group(c2) -> group(c1)` for every strict
/// preference with `group(c1) != group(c2)`, then computes the transitive
/// closure.
pub(crate) fn build_importance_dag(
  groups: &Groups,
  preferences: &[Preference],
) -> ImportanceDag {
  let n = groups.len();
  let mut direct: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];

  for pref in preferences {
    if pref.is_equivalent() {
      continue;
    }
    let g1 = groups.group_of(pref.criterion1());
    let g2 = groups.group_of(pref.criterion2());
    if g1 != g2 {
      direct[g2].insert(g1);
    }
  }

  let mut ancestors = direct.clone();
  for g in 0..n {
    let mut visited: BTreeSet<usize> = BTreeSet::new();
    let mut stack: Vec<usize> = direct[g].iter().copied().collect();
    while let Some(h) = stack.pop() {
      if visited.insert(h) {
        stack.extend(direct[h].iter().copied());
      }
    }
    ancestors[g] = visited;
  }

  ImportanceDag { ancestors }
}
