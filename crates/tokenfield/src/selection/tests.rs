use std::collections::HashSet;

use proptest::prelude::*;

use super::*;

fn selection(items: &[&'static str]) -> Selection<&'static str> {
	items.iter().copied().collect()
}

#[test]
fn reconcile_adds_then_removes() {
	let current = selection(&["a", "b"]);
	let next = current.reconciled(["c"], &["a"]);
	assert_eq!(next, selection(&["b", "c"]));
}

#[test]
fn removal_wins_over_addition() {
	let current = selection(&["a"]);
	let next = current.reconciled(["x"], &["x"]);
	assert!(!next.contains(&"x"));
	assert_eq!(next, current);
}

#[test]
fn removing_unselected_item_is_noop() {
	let current = selection(&["a"]);
	assert_eq!(current.reconciled([], &["zzz"]), current);
}

#[test]
fn adding_selected_item_keeps_single_copy() {
	let current = selection(&["a"]);
	let next = current.reconciled(["a"], &[]);
	assert_eq!(next.len(), 1);
}

#[test]
fn equality_ignores_order() {
	assert_eq!(selection(&["a", "b"]), selection(&["b", "a"]));
	assert_ne!(selection(&["a"]), selection(&["a", "b"]));
}

#[test]
fn difference_lists_items_missing_from_other() {
	let old = selection(&["a", "b"]);
	let new = selection(&["b", "c"]);
	assert_eq!(new.difference(&old).copied().collect::<Vec<_>>(), ["c"]);
	assert_eq!(old.difference(&new).copied().collect::<Vec<_>>(), ["a"]);
}

#[test]
fn reconcile_preserves_insertion_order() {
	let current = selection(&["c", "a"]);
	let next = current.reconciled(["b"], &[]);
	assert_eq!(next.iter().copied().collect::<Vec<_>>(), ["c", "a", "b"]);
}

proptest! {
	/// Reconciliation matches the set law `(current ∪ added) − removed`.
	#[test]
	fn prop_reconcile_matches_set_law(
		current in prop::collection::hash_set(0u8..32, 0..16),
		added in prop::collection::hash_set(0u8..32, 0..16),
		removed in prop::collection::hash_set(0u8..32, 0..16),
	) {
		let selection: Selection<u8> = current.iter().copied().collect();
		let next = selection.reconciled(added.iter().copied(), &removed);

		let expected: HashSet<u8> = current.union(&added).copied().filter(|v| !removed.contains(v)).collect();
		let actual: HashSet<u8> = next.iter().copied().collect();
		prop_assert_eq!(actual, expected);
		prop_assert_eq!(next.len(), next.iter().count());
	}
}
