use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
	key: &'static str,
	revision: u32,
}

fn key_of(entry: &Record) -> String {
	entry.key.to_string()
}

fn record(key: &'static str, revision: u32) -> Record {
	Record { key, revision }
}

#[test]
fn rebuild_replaces_previous_items() {
	let mut registry = ItemRegistry::new();
	registry.rebuild(["a", "b", "c"].map(String::from), String::clone);
	registry.rebuild(["d", "e"].map(String::from), String::clone);

	for gone in ["a", "b", "c"] {
		assert!(registry.resolve(gone).is_none(), "{gone} should be gone");
	}
	for kept in ["d", "e"] {
		assert_eq!(registry.resolve(kept).map(String::as_str), Some(kept));
	}
	assert_eq!(registry.len(), 2);
}

#[test]
fn duplicate_identifiers_keep_last_item() {
	let mut registry = ItemRegistry::new();
	registry.rebuild([record("a", 1), record("a", 2)], key_of);

	assert_eq!(registry.len(), 1);
	assert_eq!(registry.resolve("a"), Some(&record("a", 2)));
}

#[test]
fn duplicate_identifier_moves_to_last_occurrence() {
	let mut registry = ItemRegistry::new();
	registry.rebuild([record("a", 1), record("b", 1), record("a", 2)], key_of);

	let order: Vec<_> = registry.items().collect();
	assert_eq!(order, [&record("b", 1), &record("a", 2)]);
}

#[test]
fn insert_if_absent_never_replaces() {
	let mut registry = ItemRegistry::new();
	assert!(registry.insert_if_absent("a".into(), record("a", 1)));
	assert!(!registry.insert_if_absent("a".into(), record("a", 2)));
	assert_eq!(registry.resolve("a"), Some(&record("a", 1)));
}

#[test]
fn remove_reports_removed_item() {
	let mut registry = ItemRegistry::new();
	registry.rebuild([record("a", 1), record("b", 1)], key_of);

	assert_eq!(registry.remove("a"), Some(record("a", 1)));
	assert_eq!(registry.remove("a"), None);
	assert!(!registry.contains_id("a"));
	assert!(registry.contains_id("b"));
}

#[test]
fn removal_keeps_encounter_order() {
	let mut registry = ItemRegistry::new();
	registry.rebuild(["c", "a", "d", "b"].map(String::from), String::clone);
	registry.remove("a");

	let ids: Vec<_> = registry.iter().map(|(id, _)| id).collect();
	assert_eq!(ids, ["c", "d", "b"]);
}

#[test]
fn rekey_applies_new_identifiers() {
	let mut registry = ItemRegistry::new();
	registry.rebuild([record("a", 1), record("b", 2)], key_of);
	registry.rekey(|e| format!("{}#{}", e.key, e.revision));

	assert!(registry.resolve("a").is_none());
	assert_eq!(registry.resolve("b#2"), Some(&record("b", 2)));
}

#[test]
fn empty_registry() {
	let registry = ItemRegistry::<String>::default();
	assert!(registry.is_empty());
	assert_eq!(registry.items().count(), 0);
}
