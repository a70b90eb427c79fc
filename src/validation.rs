//! Construction-time checks: column presence, value ranges/categories,
//! preference well-formedness, and bounded-depth mixed-cycle detection.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::{
  criterion::{Criterion, CriterionKind},
  error::ModelError,
  matrix::{AlternativeMatrix, Cell},
  preference::Preference,
};

/// The DFS stack depth bound used by the mixed-cycle check: cycles of
/// length up to 3 (two intermediate hops) are explicitly checked. Deeper
/// mixed cycles are accepted silently, matching the reference
/// implementation's bound.
const CYCLE_DEPTH_BOUND: usize = 3;

/// Runs every construction-time check in order, short-circuiting on the
/// first failure. Never mutates its inputs.
pub(crate) fn validate(
  criteria: &[Criterion],
  alternatives: &AlternativeMatrix,
  preferences: &[Preference],
) -> Result<(), ModelError> {
  check_columns_and_values(criteria, alternatives)?;
  check_preferences_reference_declared_criteria(criteria, preferences)?;
  check_no_self_preferences(preferences)?;
  check_no_contradictory_preferences(preferences)?;
  check_no_mixed_cycle(criteria, preferences)?;
  Ok(())
}

/// Rejects a preference pairing a criterion with itself; self-pairs are not
/// meaningful (SPEC_FULL.md §3).
fn check_no_self_preferences(preferences: &[Preference]) -> Result<(), ModelError> {
  for pref in preferences {
    if pref.criterion1() == pref.criterion2() {
      return Err(ModelError::SelfPreference {
        criterion: pref.criterion1().to_string(),
      });
    }
  }
  Ok(())
}

fn check_columns_and_values(
  criteria: &[Criterion],
  alternatives: &AlternativeMatrix,
) -> Result<(), ModelError> {
  for criterion in criteria {
    let mut out_of_range = Vec::new();
    let mut unknown_category = Vec::new();
    let mut wrong_type = false;
    let mut missing_for_any_row = false;

    for id in alternatives.ids() {
      let Some(cell) = alternatives.cell(id, criterion.name()) else {
        missing_for_any_row = true;
        continue;
      };
      match (criterion.kind(), cell) {
        (CriterionKind::Absolute { min, max }, Cell::Absolute(v)) => {
          if v < min || v > max {
            out_of_range.push(format!("{v}"));
          }
        }
        (CriterionKind::Ordinal { values }, Cell::Ordinal(v)) => {
          if !values.contains(v) {
            unknown_category.push(v.clone());
          }
        }
        _ => wrong_type = true,
      }
    }

    if alternatives.is_empty() || missing_for_any_row {
      return Err(ModelError::MissingColumn {
        criterion: criterion.name().to_string(),
      });
    }
    if wrong_type {
      return Err(ModelError::WrongValueType {
        criterion: criterion.name().to_string(),
      });
    }
    if !out_of_range.is_empty() {
      return Err(ModelError::OutOfRange {
        criterion: criterion.name().to_string(),
        values: out_of_range,
      });
    }
    if !unknown_category.is_empty() {
      return Err(ModelError::UnknownCategory {
        criterion: criterion.name().to_string(),
        values: unknown_category,
      });
    }
  }
  Ok(())
}

fn check_preferences_reference_declared_criteria(
  criteria: &[Criterion],
  preferences: &[Preference],
) -> Result<(), ModelError> {
  let declared: BTreeSet<&str> = criteria.iter().map(Criterion::name).collect();
  for pref in preferences {
    if !declared.contains(pref.criterion1()) {
      return Err(ModelError::UndeclaredCriterion {
        criterion: pref.criterion1().to_string(),
      });
    }
    if !declared.contains(pref.criterion2()) {
      return Err(ModelError::UndeclaredCriterion {
        criterion: pref.criterion2().to_string(),
      });
    }
  }
  Ok(())
}

/// Rejects a pair asserted both strict and equivalent, in either direction.
fn check_no_contradictory_preferences(
  preferences: &[Preference],
) -> Result<(), ModelError> {
  let mut strict_pairs = BTreeSet::new();
  let mut equivalent_pairs = BTreeSet::new();
  for pref in preferences {
    let key = ordered_pair(pref.criterion1(), pref.criterion2());
    if pref.is_equivalent() {
      equivalent_pairs.insert(key);
    } else {
      strict_pairs.insert(key);
    }
  }
  if let Some((c1, c2)) = strict_pairs.intersection(&equivalent_pairs).next() {
    return Err(ModelError::ContradictoryPreference {
      c1: c1.clone(),
      c2: c2.clone(),
    });
  }
  Ok(())
}

fn ordered_pair(a: &str, b: &str) -> (String, String) {
  if a <= b {
    (a.to_string(), b.to_string())
  } else {
    (b.to_string(), a.to_string())
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Edge<'a> {
  to: &'a str,
  strict: bool,
}

fn check_no_mixed_cycle(
  criteria: &[Criterion],
  preferences: &[Preference],
) -> Result<(), ModelError> {
  let mut graph: BTreeMap<&str, Vec<Edge>> = BTreeMap::new();
  for criterion in criteria {
    graph.entry(criterion.name()).or_default();
  }
  for pref in preferences {
    let c1 = pref.criterion1();
    let c2 = pref.criterion2();
    if pref.is_equivalent() {
      graph.entry(c1).or_default().push(Edge { to: c2, strict: false });
      graph.entry(c2).or_default().push(Edge { to: c1, strict: false });
    } else {
      graph.entry(c1).or_default().push(Edge { to: c2, strict: true });
    }
  }

  for &start in graph.keys() {
    let mut stack: Vec<(&str, bool)> = Vec::new();
    if let Some(cycle) = dfs(&graph, start, &mut stack) {
      return Err(ModelError::CyclicPreferences {
        rendered_cycle: cycle,
      });
    }
  }
  Ok(())
}

/// Depth-bounded DFS looking for a cycle back to `start` that contains at
/// least one strict edge. Returns a rendered cycle path on success.
fn dfs<'a>(
  graph: &BTreeMap<&'a str, Vec<Edge<'a>>>,
  start: &'a str,
  stack: &mut Vec<(&'a str, bool)>,
) -> Option<String> {
  dfs_from(graph, start, start, false, stack)
}

fn dfs_from<'a>(
  graph: &BTreeMap<&'a str, Vec<Edge<'a>>>,
  start: &'a str,
  node: &'a str,
  has_strict_edge: bool,
  stack: &mut Vec<(&'a str, bool)>,
) -> Option<String> {
  stack.push((node, has_strict_edge));
  let edges = graph.get(node).map(Vec::as_slice).unwrap_or_default();
  for edge in edges {
    let path_has_strict_edge = has_strict_edge || edge.strict;
    if edge.to != start && stack.len() < CYCLE_DEPTH_BOUND {
      if let Some(cycle) =
        dfs_from(graph, start, edge.to, path_has_strict_edge, stack)
      {
        return Some(cycle);
      }
    } else if edge.to == start && path_has_strict_edge {
      let rendered = render_cycle(graph, stack, start);
      stack.pop();
      return Some(rendered);
    }
  }
  stack.pop();
  None
}

fn render_cycle<'a>(
  graph: &BTreeMap<&'a str, Vec<Edge<'a>>>,
  stack: &[(&'a str, bool)],
  closing: &'a str,
) -> String {
  let mut nodes: Vec<&str> = stack.iter().map(|&(n, _)| n).collect();
  nodes.push(closing);
  nodes
    .into_iter()
    .tuple_windows()
    .map(|(n1, n2)| {
      let relation = graph
        .get(n1)
        .and_then(|edges| edges.iter().find(|e| e.to == n2))
        .map(|e| if e.strict { ">" } else { "=" })
        .unwrap_or("=");
      format!("{n1} {relation} {n2}")
    })
    .join(" -> ")
}
