//! Collapses criteria connected by equivalence edges into importance
//! groups, identified by stable integer index rather than the reference
//! implementation's object identity (SPEC_FULL.md §9).

use std::collections::BTreeMap;

use crate::{criterion::Criterion, preference::Preference};

/// Criterion-name-to-group-index mapping plus each group's member list.
#[derive(Clone, Debug)]
pub(crate) struct Groups {
  criterion_to_group: BTreeMap<String, usize>,
  members: Vec<Vec<String>>,
}

impl Groups {
  /// The index of the group `criterion` belongs to.
  pub(crate) fn group_of(&self, criterion: &str) -> usize {
    self.criterion_to_group[criterion]
  }

  /// Number of groups.
  pub(crate) fn len(&self) -> usize {
    self.members.len()
  }

  /// The criteria belonging to group `g`.
  pub(crate) fn members(&self, g: usize) -> &[String] {
    &self.members[g]
  }
}

/// Partitions `criteria` into equivalence classes via union-find over
/// `equivalent` preferences. Criteria mentioned by no equivalence
/// preference form their own singleton group.
pub(crate) fn group_criteria(
  criteria: &[Criterion],
  preferences: &[Preference],
) -> Groups {
  let names: Vec<&str> = criteria.iter().map(Criterion::name).collect();
  let mut parent: BTreeMap<&str, &str> =
    names.iter().map(|&n| (n, n)).collect();

  fn find<'a>(parent: &mut BTreeMap<&'a str, &'a str>, x: &'a str) -> &'a str {
    if parent[x] != x {
      let root = find(parent, parent[x]);
      parent.insert(x, root);
    }
    parent[x]
  }

  for pref in preferences {
    if pref.is_equivalent() {
      let r1 = find(&mut parent, pref.criterion1());
      let r2 = find(&mut parent, pref.criterion2());
      if r1 != r2 {
        parent.insert(r1, r2);
      }
    }
  }

  let mut root_to_group: BTreeMap<&str, usize> = BTreeMap::new();
  let mut members: Vec<Vec<String>> = Vec::new();
  let mut criterion_to_group = BTreeMap::new();

  for &name in &names {
    let root = find(&mut parent, name);
    let group = *root_to_group.entry(root).or_insert_with(|| {
      members.push(Vec::new());
      members.len() - 1
    });
    members[group].push(name.to_string());
    criterion_to_group.insert(name.to_string(), group);
  }

  Groups { criterion_to_group, members }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unconnected_criteria_are_singleton_groups() {
    let criteria = vec![
      Criterion::absolute("a", true, 0.0, 1.0),
      Criterion::absolute("b", true, 0.0, 1.0),
    ];
    let groups = group_criteria(&criteria, &[]);
    assert_eq!(groups.len(), 2);
    assert_ne!(groups.group_of("a"), groups.group_of("b"));
  }

  #[test]
  fn test_equivalence_chain_coalesces() {
    let criteria = vec![
      Criterion::absolute("a", true, 0.0, 1.0),
      Criterion::absolute("b", true, 0.0, 1.0),
      Criterion::absolute("c", true, 0.0, 1.0),
    ];
    let prefs =
      vec![Preference::equivalent("a", "b"), Preference::equivalent("b", "c")];
    let groups = group_criteria(&criteria, &prefs);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.group_of("a"), groups.group_of("c"));
    let mut members = groups.members(groups.group_of("a")).to_vec();
    members.sort();
    assert_eq!(members, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
  }

  #[test]
  fn test_group_sums_independent_of_preference_order() {
    let criteria = vec![
      Criterion::absolute("a", true, 0.0, 1.0),
      Criterion::absolute("b", true, 0.0, 1.0),
      Criterion::absolute("c", true, 0.0, 1.0),
    ];
    let forward =
      vec![Preference::equivalent("a", "b"), Preference::equivalent("b", "c")];
    let backward =
      vec![Preference::equivalent("b", "c"), Preference::equivalent("a", "b")];
    let g1 = group_criteria(&criteria, &forward);
    let g2 = group_criteria(&criteria, &backward);
    assert_eq!(g1.len(), g2.len());
    assert_eq!(g1.group_of("a") == g1.group_of("b"), g2.group_of("a") == g2.group_of("b"));
  }
}
