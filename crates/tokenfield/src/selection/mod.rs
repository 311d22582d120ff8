//! Selection values and their reconciliation.

use std::hash::Hash;

use indexmap::IndexSet;

#[cfg(test)]
mod tests;

/// The set of items a field currently holds as its value.
///
/// Equality is set equality; the retained insertion order only feeds
/// [`ItemOrder::Unsorted`](crate::ItemOrder::Unsorted) presentation.
#[derive(Debug, Clone)]
pub struct Selection<V> {
	items: IndexSet<V>,
}

impl<V> Default for Selection<V> {
	fn default() -> Self {
		Self { items: IndexSet::new() }
	}
}

impl<V: Eq + Hash> PartialEq for Selection<V> {
	fn eq(&self, other: &Self) -> bool {
		self.items == other.items
	}
}

impl<V: Eq + Hash> Eq for Selection<V> {}

impl<V: Eq + Hash> Selection<V> {
	/// Creates an empty selection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Computes `(self ∪ added) − removed` as a new selection.
	///
	/// The union is applied before the subtraction, so an item present in
	/// both `added` and `removed` ends up removed.
	pub fn reconciled<'r>(&self, added: impl IntoIterator<Item = V>, removed: impl IntoIterator<Item = &'r V>) -> Self
	where
		V: Clone + 'r,
	{
		let mut items = self.items.clone();
		items.extend(added);
		for item in removed {
			items.shift_remove(item);
		}
		Self { items }
	}

	/// Items in `self` that are not in `other`.
	pub fn difference<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a V> + 'a {
		self.items.iter().filter(move |item| !other.contains(item))
	}

	/// Returns true if `item` is selected.
	pub fn contains(&self, item: &V) -> bool {
		self.items.contains(item)
	}
}

impl<V> Selection<V> {
	/// Iterates over selected items in insertion order.
	pub fn iter(&self) -> indexmap::set::Iter<'_, V> {
		self.items.iter()
	}

	/// Returns the number of selected items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<V: Eq + Hash> FromIterator<V> for Selection<V> {
	fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

impl<'a, V> IntoIterator for &'a Selection<V> {
	type Item = &'a V;
	type IntoIter = indexmap::set::Iter<'a, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<V> IntoIterator for Selection<V> {
	type Item = V;
	type IntoIter = indexmap::set::IntoIter<V>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}
