//! TOML settings for string-valued fields.
//!
//! ```toml
//! label = "Tags"
//! token_separator = ","
//! order = "unsorted"
//! items = ["rust", "java", "kotlin"]
//! selected = ["rust"]
//! allow_new_items = true
//! ```
//!
//! Every key is optional. `order` is `"label"` (default) or `"unsorted"`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FieldError, Result};
use crate::field::TokenField;
use crate::format::ItemOrder;
use crate::token::TokenSeparator;
use crate::view::TokenView;

#[cfg(test)]
mod tests;

/// Presentation order selectable from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSetting {
	/// Sort by generated label.
	#[default]
	Label,
	/// Keep encounter order.
	Unsorted,
}

impl OrderSetting {
	pub fn to_item_order<V>(self) -> ItemOrder<V> {
		match self {
			Self::Label => ItemOrder::ByLabel,
			Self::Unsorted => ItemOrder::Unsorted,
		}
	}
}

/// Declarative configuration of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldSettings {
	/// Caption shown above the field.
	pub label: String,
	/// Key that commits typed text.
	pub token_separator: TokenSeparator,
	/// Presentation order of both token lists.
	pub order: OrderSetting,
	/// Selectable items, identified and labeled by their text.
	pub items: Vec<String>,
	/// Identifiers selected initially. Unknown ones are ignored.
	pub selected: Vec<String>,
	/// Register typed text that matches no item as a new item.
	pub allow_new_items: bool,
}

impl FieldSettings {
	/// Parses settings from a TOML string.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Loads settings from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| FieldError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}

	/// Applies the presentation settings (label, separator, order) to any field.
	pub fn apply_to<V, W>(&self, field: &mut TokenField<V, W>)
	where
		V: Clone + Eq + std::hash::Hash,
		W: TokenView,
	{
		field.set_label(self.label.clone());
		field.set_token_separator(self.token_separator);
		field.set_item_order(self.order.to_item_order());
	}

	/// Builds a string field from these settings.
	///
	/// With `allow_new_items`, typed text that matches no item is registered
	/// and selected.
	pub fn build<W: TokenView>(&self, view: W) -> TokenField<String, W> {
		let mut field = TokenField::new(view);
		self.apply_to(&mut field);
		field.set_items(self.items.iter().cloned());
		let selected: Vec<String> = self.selected.iter().filter_map(|id| field.resolve(id).cloned()).collect();
		field.select(selected);
		if self.allow_new_items {
			field.set_new_item_handler(|field, token| {
				let item = token.to_string();
				field.add_item(item.clone());
				field.select([item]);
			});
		}
		field
	}
}
