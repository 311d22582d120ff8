//! Value-change listener registration.

use std::hash::Hash;

use slab::Slab;

use crate::selection::Selection;

/// Handle returned when a listener is registered; pass it to
/// [`TokenField::remove_listener`](crate::TokenField::remove_listener) to detach.
///
/// Slab keys are reused after removal, so each handle also carries the
/// generation it was issued in. A stale handle never matches a later listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId {
	key: usize,
	generation: u64,
}

/// Notification that the value of a field was replaced.
#[derive(Debug)]
pub struct ValueChangeEvent<'a, V> {
	old_value: &'a Selection<V>,
	value: &'a Selection<V>,
	from_client: bool,
}

impl<'a, V: Eq + Hash> ValueChangeEvent<'a, V> {
	pub(crate) fn new(old_value: &'a Selection<V>, value: &'a Selection<V>, from_client: bool) -> Self {
		Self {
			old_value,
			value,
			from_client,
		}
	}

	/// The value before the change.
	pub fn old_value(&self) -> &'a Selection<V> {
		self.old_value
	}

	/// The value after the change.
	pub fn value(&self) -> &'a Selection<V> {
		self.value
	}

	/// Returns true if the change originated from a client event.
	pub fn is_from_client(&self) -> bool {
		self.from_client
	}

	/// Items selected by this change.
	pub fn added(&self) -> impl Iterator<Item = &'a V> + 'a {
		self.value.difference(self.old_value)
	}

	/// Items deselected by this change.
	pub fn removed(&self) -> impl Iterator<Item = &'a V> + 'a {
		self.old_value.difference(self.value)
	}
}

pub(crate) type ValueChangeListener<V> = Box<dyn FnMut(&ValueChangeEvent<'_, V>)>;

struct Slot<V> {
	generation: u64,
	listener: ValueChangeListener<V>,
}

pub(crate) struct Listeners<V> {
	slots: Slab<Slot<V>>,
	next_generation: u64,
}

impl<V> Default for Listeners<V> {
	fn default() -> Self {
		Self {
			slots: Slab::new(),
			next_generation: 0,
		}
	}
}

impl<V> Listeners<V> {
	pub(crate) fn add(&mut self, listener: ValueChangeListener<V>) -> ListenerId {
		let generation = self.next_generation;
		self.next_generation += 1;
		let key = self.slots.insert(Slot { generation, listener });
		ListenerId { key, generation }
	}

	/// Detaches the listener `id` was issued for. Returns false for stale or
	/// already removed handles.
	pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
		match self.slots.get(id.key) {
			Some(slot) if slot.generation == id.generation => {
				self.slots.remove(id.key);
				true
			}
			_ => false,
		}
	}

	/// Calls every registered listener with `event`.
	pub(crate) fn notify(&mut self, event: &ValueChangeEvent<'_, V>) {
		for (_, slot) in self.slots.iter_mut() {
			(slot.listener)(event);
		}
	}

	pub(crate) fn len(&self) -> usize {
		self.slots.len()
	}
}
