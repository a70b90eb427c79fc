//! The mass-transfer t-dominance test between two Pareto-surviving
//! alternatives, grouped by importance group.

use crate::{grouping::Groups, importance::ImportanceDag};

/// Rounds to 8 decimal places to absorb floating-point drift, per
/// SPEC_FULL.md §4.6. Applied to every sum, capacity, excess, and transfer
/// amount compared in the mass-transfer sweep.
fn round8(v: f64) -> f64 {
  (v * 1e8).round() / 1e8
}

/// Per-group sums of normalized criterion values for one alternative,
/// indexed by group index.
pub(crate) fn group_sums(
  groups: &Groups,
  value_of: impl Fn(&str) -> f64,
) -> Vec<f64> {
  (0..groups.len())
    .map(|g| {
      round8(groups.members(g).iter().map(|c| value_of(c)).sum::<f64>())
    })
    .collect()
}

/// Decides whether `z_sums` t-dominates `w_sums`, per SPEC_FULL.md §4.6.
pub(crate) fn t_dominates(
  dag: &ImportanceDag,
  z_sums: &[f64],
  w_sums: &[f64],
) -> bool {
  if dominates_or_equal(z_sums, w_sums) && strictly_greater_somewhere(z_sums, w_sums) {
    return true;
  }

  let mut w_adjusted = w_sums.to_vec();
  let mut order: Vec<usize> = (0..z_sums.len()).collect();
  order.sort_by_key(|&g| std::cmp::Reverse(dag.ancestor_count(g)));

  let mut transferred = false;

  for g in order {
    if w_adjusted[g] <= z_sums[g] {
      continue;
    }
    let mut excess = round8(w_adjusted[g] - z_sums[g]);
    w_adjusted[g] = z_sums[g];

    if dag.has_no_ancestors(g) {
      return false;
    }

    for h in dag.ancestors(g) {
      let capacity = round8(z_sums[h] - w_adjusted[h]);
      if capacity <= 0.0 {
        continue;
      }
      let transfer = round8(excess.min(capacity));
      w_adjusted[h] = round8(w_adjusted[h] + transfer);
      excess = round8(excess - transfer);
      if excess <= 0.0 {
        transferred = true;
        break;
      }
    }

    if excess > 0.0 {
      return false;
    }
  }

  transferred && dominates_or_equal(z_sums, &w_adjusted)
}

fn dominates_or_equal(z_sums: &[f64], w_sums: &[f64]) -> bool {
  z_sums.iter().zip(w_sums).all(|(&z, &w)| z >= w)
}

fn strictly_greater_somewhere(z_sums: &[f64], w_sums: &[f64]) -> bool {
  z_sums.iter().zip(w_sums).any(|(&z, &w)| z > w)
}
