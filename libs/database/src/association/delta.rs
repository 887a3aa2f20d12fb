use std::collections::HashSet;
use std::hash::Hash;

/// Rows to insert and delete to turn the current child set into the desired one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationDelta<Id> {
    pub to_add: Vec<Id>,
    pub to_remove: Vec<Id>,
}

impl<Id> AssociationDelta<Id>
where
    Id: Copy + Eq + Hash,
{
    /// Diffs `current` against `desired`.
    ///
    /// `desired` is deduplicated keeping first-seen order; `to_add` follows that
    /// order and `to_remove` follows the order of `current`.
    pub fn between(current: &[Id], desired: &[Id]) -> Self {
        let current_set: HashSet<Id> = current.iter().copied().collect();
        let desired = dedup(desired);
        let desired_set: HashSet<Id> = desired.iter().copied().collect();

        let to_add = desired
            .into_iter()
            .filter(|id| !current_set.contains(id))
            .collect();

        let mut seen = HashSet::new();
        let to_remove = current
            .iter()
            .copied()
            .filter(|id| !desired_set.contains(id) && seen.insert(*id))
            .collect();

        Self { to_add, to_remove }
    }

    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Applies the delta to `current`, returning the resulting set in storage order.
    pub fn apply(&self, current: &[Id]) -> Vec<Id> {
        let removed: HashSet<Id> = self.to_remove.iter().copied().collect();
        let mut result: Vec<Id> = current
            .iter()
            .copied()
            .filter(|id| !removed.contains(id))
            .collect();
        result.extend(self.to_add.iter().copied());
        result
    }
}

/// Removes duplicates, keeping the first occurrence of each id.
pub fn dedup<Id: Copy + Eq + Hash>(ids: &[Id]) -> Vec<Id> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_between_computes_minimal_delta() {
        let delta = AssociationDelta::between(&[1, 2, 3], &[3, 4, 1]);
        assert_eq!(delta.to_add, vec![4]);
        assert_eq!(delta.to_remove, vec![2]);
    }

    #[test]
    fn test_between_dedups_desired_in_first_seen_order() {
        let delta = AssociationDelta::between(&[], &[7, 5, 7, 5, 9]);
        assert_eq!(delta.to_add, vec![7, 5, 9]);
        assert!(delta.to_remove.is_empty());
    }

    #[test]
    fn test_identical_sets_are_noop() {
        let delta = AssociationDelta::between(&[1, 2], &[2, 1, 2]);
        assert!(delta.is_noop());
    }

    #[test]
    fn test_empty_desired_removes_everything() {
        let delta = AssociationDelta::between(&[1, 2], &[]);
        assert!(delta.to_add.is_empty());
        assert_eq!(delta.to_remove, vec![1, 2]);
    }

    fn sorted(mut ids: Vec<u8>) -> Vec<u8> {
        ids.sort_unstable();
        ids
    }

    proptest! {
        #[test]
        fn applying_delta_yields_desired_set(
            current in prop::collection::hash_set(any::<u8>(), 0..20),
            desired in prop::collection::vec(any::<u8>(), 0..30),
        ) {
            let current: Vec<u8> = current.into_iter().collect();
            let delta = AssociationDelta::between(&current, &desired);
            let result = delta.apply(&current);

            prop_assert_eq!(sorted(result), sorted(dedup(&desired)));
        }

        #[test]
        fn second_reconciliation_is_noop(
            current in prop::collection::hash_set(any::<u8>(), 0..20),
            desired in prop::collection::vec(any::<u8>(), 0..30),
        ) {
            let current: Vec<u8> = current.into_iter().collect();
            let result = AssociationDelta::between(&current, &desired).apply(&current);

            prop_assert!(AssociationDelta::between(&result, &desired).is_noop());
        }

        #[test]
        fn delta_only_touches_what_changes(
            current in prop::collection::hash_set(any::<u8>(), 0..20),
            desired in prop::collection::vec(any::<u8>(), 0..30),
        ) {
            let current_vec: Vec<u8> = current.iter().copied().collect();
            let delta = AssociationDelta::between(&current_vec, &desired);

            prop_assert!(delta.to_add.iter().all(|id| !current.contains(id)));
            prop_assert!(delta.to_remove.iter().all(|id| current.contains(id)));
            prop_assert!(delta.to_remove.iter().all(|id| !desired.contains(id)));
        }
    }
}
