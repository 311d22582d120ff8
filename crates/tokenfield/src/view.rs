//! Outbound interface between a field and whatever renders it.

use crate::token::Token;

/// Receives the state a field wants displayed.
///
/// Every call is a full "set current state" push, never a delta, so
/// implementations can simply overwrite what they show.
pub trait TokenView {
	/// Replaces the rendered tokens of the current selection.
	fn render_tokens(&mut self, tokens: &[Token]);

	/// Replaces the list of items the user can pick from.
	fn render_available_items(&mut self, items: &[Token]);

	/// Replaces the field's caption.
	fn render_label(&mut self, label: &str);

	/// Replaces the key that commits typed text as a token.
	fn render_token_separator(&mut self, _separator: char) {}
}

/// A headless view that discards everything.
impl TokenView for () {
	fn render_tokens(&mut self, _tokens: &[Token]) {}

	fn render_available_items(&mut self, _items: &[Token]) {}

	fn render_label(&mut self, _label: &str) {}
}

/// Keeps the last pushed state and counts pushes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingView {
	pub tokens: Vec<Token>,
	pub available_items: Vec<Token>,
	pub label: String,
	pub token_separator: Option<char>,
	/// Number of `render_tokens` calls.
	pub token_renders: usize,
	/// Number of `render_available_items` calls.
	pub item_renders: usize,
}

impl RecordingView {
	/// Identifiers of the rendered selection, in rendered order.
	pub fn token_ids(&self) -> Vec<&str> {
		self.tokens.iter().map(|t| t.id.as_str()).collect()
	}

	/// Identifiers of the rendered available items, in rendered order.
	pub fn item_ids(&self) -> Vec<&str> {
		self.available_items.iter().map(|t| t.id.as_str()).collect()
	}
}

impl TokenView for RecordingView {
	fn render_tokens(&mut self, tokens: &[Token]) {
		self.tokens = tokens.to_vec();
		self.token_renders += 1;
	}

	fn render_available_items(&mut self, items: &[Token]) {
		self.available_items = items.to_vec();
		self.item_renders += 1;
	}

	fn render_label(&mut self, label: &str) {
		self.label = label.to_string();
	}

	fn render_token_separator(&mut self, separator: char) {
		self.token_separator = Some(separator);
	}
}
