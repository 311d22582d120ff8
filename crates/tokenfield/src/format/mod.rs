//! Presentation of items as ordered token lists.
//!
//! Items never reach the view directly. [`TokenFormatter`] derives an
//! identifier and a label for each item through pluggable generators and
//! orders the result with an [`ItemOrder`], so id/label derivation is the
//! only serialization boundary between host values and the client.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use crate::token::Token;

#[cfg(test)]
mod tests;

/// Derives the identifier of an item.
pub type ItemIdGenerator<V> = Box<dyn Fn(&V) -> String>;
/// Derives the display label of an item.
pub type ItemLabelGenerator<V> = Box<dyn Fn(&V) -> String>;
/// Total order over items, used only for presentation.
pub type ItemComparator<V> = Box<dyn Fn(&V, &V) -> Ordering>;

/// How rendered token lists are ordered.
///
/// Ordering never affects set membership or equality of the selection.
pub enum ItemOrder<V> {
	/// Natural string order of the generated labels.
	ByLabel,
	/// A host-supplied comparator.
	Custom(ItemComparator<V>),
	/// No sorting; items keep their encounter order.
	Unsorted,
}

impl<V> ItemOrder<V> {
	/// Wraps a comparator closure.
	pub fn custom(cmp: impl Fn(&V, &V) -> Ordering + 'static) -> Self {
		Self::Custom(Box::new(cmp))
	}
}

impl<V> Default for ItemOrder<V> {
	fn default() -> Self {
		Self::ByLabel
	}
}

impl<V> fmt::Debug for ItemOrder<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ByLabel => f.write_str("ByLabel"),
			Self::Custom(_) => f.write_str("Custom(..)"),
			Self::Unsorted => f.write_str("Unsorted"),
		}
	}
}

/// Turns collections of items into ordered `{id, label}` lists.
pub struct TokenFormatter<V> {
	id_generator: ItemIdGenerator<V>,
	label_generator: ItemLabelGenerator<V>,
	order: ItemOrder<V>,
}

impl<V: Display + 'static> Default for TokenFormatter<V> {
	/// Uses the `Display` form of an item as both its identifier and label.
	fn default() -> Self {
		Self::new(|item: &V| item.to_string(), |item: &V| item.to_string())
	}
}

impl<V> TokenFormatter<V> {
	/// Creates a formatter with explicit generators and label ordering.
	pub fn new(id_generator: impl Fn(&V) -> String + 'static, label_generator: impl Fn(&V) -> String + 'static) -> Self {
		Self {
			id_generator: Box::new(id_generator),
			label_generator: Box::new(label_generator),
			order: ItemOrder::ByLabel,
		}
	}

	/// Returns the formatter with `order` in place of the current ordering.
	pub fn with_order(mut self, order: ItemOrder<V>) -> Self {
		self.order = order;
		self
	}

	/// Generates the identifier of `item`.
	pub fn id(&self, item: &V) -> String {
		(self.id_generator)(item)
	}

	/// Generates the label of `item`.
	pub fn label(&self, item: &V) -> String {
		(self.label_generator)(item)
	}

	/// Builds the token for a single item.
	pub fn token(&self, item: &V) -> Token {
		Token::new(self.id(item), self.label(item))
	}

	/// Returns the current ordering.
	pub fn order(&self) -> &ItemOrder<V> {
		&self.order
	}

	pub fn set_id_generator(&mut self, id_generator: impl Fn(&V) -> String + 'static) {
		self.id_generator = Box::new(id_generator);
	}

	pub fn set_label_generator(&mut self, label_generator: impl Fn(&V) -> String + 'static) {
		self.label_generator = Box::new(label_generator);
	}

	pub fn set_order(&mut self, order: ItemOrder<V>) {
		self.order = order;
	}

	/// Copies `items` into a list and stable-sorts it by the current order.
	pub fn sort<'a>(&self, items: impl IntoIterator<Item = &'a V>) -> Vec<&'a V>
	where
		V: 'a,
	{
		let mut sorted: Vec<&V> = items.into_iter().collect();
		match &self.order {
			// Labels are generated once per item rather than once per comparison.
			ItemOrder::ByLabel => sorted.sort_by_cached_key(|item| self.label(item)),
			ItemOrder::Custom(cmp) => sorted.sort_by(|a, b| cmp(*a, *b)),
			ItemOrder::Unsorted => {}
		}
		sorted
	}

	/// Sorts `items` and maps each one to its token.
	pub fn format<'a>(&self, items: impl IntoIterator<Item = &'a V>) -> Vec<Token>
	where
		V: 'a,
	{
		self.sort(items).into_iter().map(|item| self.token(item)).collect()
	}
}

impl<V> fmt::Debug for TokenFormatter<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TokenFormatter").field("order", &self.order).finish_non_exhaustive()
	}
}
