//! Identifier to item lookup for the selectable items of a field.

use indexmap::IndexMap;
use indexmap::map::Entry;

#[cfg(test)]
mod tests;

/// Maps generated item identifiers to the items offered by a field.
///
/// Holds at most one item per identifier. The registry does not know how
/// identifiers are derived; callers pass the id generator on every write so a
/// single [`TokenFormatter`](crate::TokenFormatter) stays the source of truth.
///
/// Encounter order is kept so that unsorted presentation is deterministic,
/// but it carries no meaning otherwise.
#[derive(Debug, Clone)]
pub struct ItemRegistry<V> {
	items: IndexMap<String, V>,
}

impl<V> Default for ItemRegistry<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> ItemRegistry<V> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self { items: IndexMap::new() }
	}

	/// Replaces the whole registry with `items`.
	///
	/// When two items generate the same identifier the later one wins and
	/// takes the position of its own occurrence, so encounter order is the
	/// order of the surviving items.
	pub fn rebuild(&mut self, items: impl IntoIterator<Item = V>, id_of: impl Fn(&V) -> String) {
		let mut rebuilt: IndexMap<String, V> = IndexMap::new();
		for item in items {
			let id = id_of(&item);
			rebuilt.shift_remove(&id);
			rebuilt.insert(id, item);
		}
		self.items = rebuilt;
	}

	/// Recomputes every key with `id_of`, keeping the current items.
	pub fn rekey(&mut self, id_of: impl Fn(&V) -> String) {
		let items = std::mem::take(&mut self.items).into_values();
		self.rebuild(items, id_of);
	}

	/// Inserts `item` under `id` unless the identifier is already taken.
	///
	/// Returns `true` if the item was inserted. An existing item is never
	/// replaced.
	pub fn insert_if_absent(&mut self, id: String, item: V) -> bool {
		match self.items.entry(id) {
			Entry::Occupied(_) => false,
			Entry::Vacant(slot) => {
				slot.insert(item);
				true
			}
		}
	}

	/// Removes the item registered under `id`.
	pub fn remove(&mut self, id: &str) -> Option<V> {
		self.items.shift_remove(id)
	}

	/// Looks up the item registered under `id`.
	pub fn resolve(&self, id: &str) -> Option<&V> {
		self.items.get(id)
	}

	/// Returns true if an item is registered under `id`.
	pub fn contains_id(&self, id: &str) -> bool {
		self.items.contains_key(id)
	}

	/// Iterates over registered items in encounter order.
	pub fn items(&self) -> impl Iterator<Item = &V> {
		self.items.values()
	}

	/// Iterates over `(identifier, item)` pairs in encounter order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
		self.items.iter().map(|(id, item)| (id.as_str(), item))
	}

	/// Returns the number of registered items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if no items are registered.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
