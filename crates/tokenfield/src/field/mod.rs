//! The token field: registry, selection and view wired together.
//!
//! [`TokenField`] owns the registry of selectable items and the current
//! value. Host code mutates it through the registry and selection methods;
//! the client reaches it through [`TokenField::handle_client_event`] or the
//! individual `on_*` methods. Every state change is pushed to the field's
//! [`TokenView`] as a complete, ordered token list.
//!
//! The field is single-threaded. Every operation runs to completion before
//! returning; hosts that share a field between threads must wrap it in a lock.

use std::fmt::{self, Display};
use std::hash::Hash;

use crate::client::ClientEvent;
use crate::diagnostics::{Diagnostics, FieldEvent, TracingDiagnostics};
use crate::format::{ItemOrder, TokenFormatter};
use crate::registry::ItemRegistry;
use crate::selection::Selection;
use crate::token::{Token, TokenSeparator};
use crate::view::TokenView;

mod listeners;

pub use listeners::{ListenerId, ValueChangeEvent};
use listeners::Listeners;

/// Called with the raw token text when the client adds a token the registry
/// does not know.
///
/// The handler decides what the text means. It may register a new item with
/// [`TokenField::add_item`] and select it with [`TokenField::select`]; the
/// field never selects handler-created items on its own.
///
/// The handler is detached from the field while it runs. A nested
/// [`TokenField::on_token_added`] with another unknown token from inside the
/// handler is therefore reported as [`FieldEvent::UnknownTokenAdded`], as if
/// no handler were configured.
pub type NewItemHandler<V, W> = Box<dyn FnMut(&mut TokenField<V, W>, &str)>;

/// Lifecycle of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
	/// No items have been provided yet.
	#[default]
	Uninitialized,
	/// The registry has been populated at least once.
	Ready,
}

/// A multi-select field presenting its value as tokens.
pub struct TokenField<V, W> {
	registry: ItemRegistry<V>,
	value: Selection<V>,
	formatter: TokenFormatter<V>,
	new_item_handler: Option<NewItemHandler<V, W>>,
	listeners: Listeners<V>,
	diagnostics: Box<dyn Diagnostics>,
	label: String,
	token_separator: TokenSeparator,
	state: FieldState,
	view: W,
}

impl<V, W> TokenField<V, W>
where
	V: Clone + Eq + Hash + Display + 'static,
	W: TokenView,
{
	/// Creates a field that identifies and labels items by their `Display` form.
	pub fn new(view: W) -> Self {
		Self::with_formatter(view, TokenFormatter::default())
	}
}

impl<V, W> TokenField<V, W>
where
	V: Clone + Eq + Hash,
	W: TokenView,
{
	/// Creates a field with explicit id/label generators and ordering.
	///
	/// Nothing is pushed to the view until the first state change or an
	/// explicit [`refresh`](Self::refresh).
	pub fn with_formatter(view: W, formatter: TokenFormatter<V>) -> Self {
		Self {
			registry: ItemRegistry::new(),
			value: Selection::new(),
			formatter,
			new_item_handler: None,
			listeners: Listeners::default(),
			diagnostics: Box::new(TracingDiagnostics),
			label: String::new(),
			token_separator: TokenSeparator::default(),
			state: FieldState::Uninitialized,
			view,
		}
	}

	/// Pushes the complete current state to the view.
	pub fn refresh(&mut self) {
		self.view.render_label(&self.label);
		self.view.render_token_separator(self.token_separator.as_char());
		self.render_items();
		self.render_tokens();
	}

	pub fn state(&self) -> FieldState {
		self.state
	}

	pub fn view(&self) -> &W {
		&self.view
	}

	pub fn view_mut(&mut self) -> &mut W {
		&mut self.view
	}

	/// Replaces the sink that receives client-handling events.
	pub fn set_diagnostics(&mut self, diagnostics: impl Diagnostics + 'static) {
		self.diagnostics = Box::new(diagnostics);
	}

	pub fn formatter(&self) -> &TokenFormatter<V> {
		&self.formatter
	}

	/// Replaces the id generator.
	///
	/// Registered items are re-keyed under their new identifiers (last
	/// duplicate wins) and both token lists are re-rendered.
	pub fn set_item_id_generator(&mut self, id_generator: impl Fn(&V) -> String + 'static) {
		self.formatter.set_id_generator(id_generator);
		let formatter = &self.formatter;
		self.registry.rekey(|item| formatter.id(item));
		self.render_items();
		self.render_tokens();
	}

	/// Replaces the label generator and re-renders both token lists.
	pub fn set_item_label_generator(&mut self, label_generator: impl Fn(&V) -> String + 'static) {
		self.formatter.set_label_generator(label_generator);
		self.render_items();
		self.render_tokens();
	}

	/// Replaces the presentation order and re-renders both token lists.
	pub fn set_item_order(&mut self, order: ItemOrder<V>) {
		self.formatter.set_order(order);
		self.render_items();
		self.render_tokens();
	}

	pub fn set_new_item_handler(&mut self, handler: impl FnMut(&mut Self, &str) + 'static) {
		self.new_item_handler = Some(Box::new(handler));
	}

	/// Removes the new-item handler; unknown added tokens are dropped afterwards.
	pub fn clear_new_item_handler(&mut self) -> Option<NewItemHandler<V, W>> {
		self.new_item_handler.take()
	}

	pub fn has_new_item_handler(&self) -> bool {
		self.new_item_handler.is_some()
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn set_label(&mut self, label: impl Into<String>) {
		self.label = label.into();
		self.view.render_label(&self.label);
	}

	pub fn token_separator(&self) -> TokenSeparator {
		self.token_separator
	}

	pub fn set_token_separator(&mut self, separator: TokenSeparator) {
		self.token_separator = separator;
		self.view.render_token_separator(separator.as_char());
	}

	/// Replaces the selectable items.
	///
	/// The registry is rebuilt from scratch; on duplicate identifiers the
	/// later item wins. The current value is kept as is, including items that
	/// are no longer registered.
	pub fn set_items(&mut self, items: impl IntoIterator<Item = V>) {
		let formatter = &self.formatter;
		self.registry.rebuild(items, |item| formatter.id(item));
		self.state = FieldState::Ready;
		self.render_items();
	}

	/// Registers `item` unless its identifier is already taken.
	///
	/// Returns `true` and re-renders the available items if it was inserted.
	/// An existing item under the same identifier is never replaced.
	pub fn add_item(&mut self, item: V) -> bool {
		let id = self.formatter.id(&item);
		if !self.registry.insert_if_absent(id, item) {
			return false;
		}
		self.state = FieldState::Ready;
		self.render_items();
		true
	}

	/// Unregisters the item with the same identifier as `item`.
	///
	/// Re-renders the available items only if something was removed. The
	/// value is left untouched.
	pub fn remove_item(&mut self, item: &V) -> Option<V> {
		let removed = self.registry.remove(&self.formatter.id(item))?;
		self.render_items();
		Some(removed)
	}

	/// Looks up a registered item by identifier.
	pub fn resolve(&self, id: &str) -> Option<&V> {
		self.registry.resolve(id)
	}

	pub fn registry(&self) -> &ItemRegistry<V> {
		&self.registry
	}

	/// Iterates over registered items in encounter order.
	pub fn items(&self) -> impl Iterator<Item = &V> {
		self.registry.items()
	}

	/// The current value.
	pub fn value(&self) -> &Selection<V> {
		&self.value
	}

	/// Same as [`value`](Self::value).
	pub fn selected_items(&self) -> &Selection<V> {
		&self.value
	}

	pub fn is_selected(&self, item: &V) -> bool {
		self.value.contains(item)
	}

	/// Replaces the value.
	///
	/// A value equal to the current one changes nothing: no re-render and no
	/// notification.
	pub fn set_value(&mut self, items: impl IntoIterator<Item = V>) {
		self.replace_value(items.into_iter().collect(), false);
	}

	/// Sets the value to `(value ∪ added) − removed` in one step.
	///
	/// Listeners observe a single change. An item in both `added` and
	/// `removed` ends up deselected.
	pub fn update_selection(&mut self, added: impl IntoIterator<Item = V>, removed: impl IntoIterator<Item = V>) {
		self.reconcile(added, removed, false);
	}

	pub fn select(&mut self, items: impl IntoIterator<Item = V>) {
		self.update_selection(items, [])
	}

	pub fn deselect(&mut self, items: impl IntoIterator<Item = V>) {
		self.update_selection([], items)
	}

	pub fn deselect_all(&mut self) {
		self.replace_value(Selection::new(), false);
	}

	/// Registers a listener called after every value change.
	pub fn add_value_change_listener(&mut self, listener: impl FnMut(&ValueChangeEvent<'_, V>) + 'static) -> ListenerId {
		self.listeners.add(Box::new(listener))
	}

	/// Detaches a listener. Returns `false` if it was not registered.
	pub fn remove_listener(&mut self, id: ListenerId) -> bool {
		self.listeners.remove(id)
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	/// The current value as rendered tokens.
	pub fn tokens(&self) -> Vec<Token> {
		self.formatter.format(&self.value)
	}

	/// All registered items as rendered tokens.
	pub fn available_tokens(&self) -> Vec<Token> {
		self.formatter.format(self.registry.items())
	}

	/// Registered items that are not selected, as rendered tokens.
	pub fn unselected_tokens(&self) -> Vec<Token> {
		self.formatter.format(self.registry.items().filter(|item| !self.value.contains(item)))
	}

	/// Dispatches a client intent to the matching `on_*` method.
	pub fn handle_client_event(&mut self, event: ClientEvent) {
		match event {
			ClientEvent::TokenAdded { token } => self.on_token_added(&token),
			ClientEvent::TokenRemoved { token } => self.on_token_removed(&token),
			ClientEvent::ValueChanged { tokens } => self.on_value_changed(tokens),
		}
	}

	/// The client committed `token`.
	///
	/// A registered token is selected. An unknown one goes to the new-item
	/// handler if there is one and is dropped with a warning otherwise.
	pub fn on_token_added(&mut self, token: &str) {
		if let Some(item) = self.registry.resolve(token).cloned() {
			self.diagnostics.record(FieldEvent::TokenAdded { token: token.to_string() });
			self.reconcile([item], [], true);
		} else if let Some(mut handler) = self.new_item_handler.take() {
			self.diagnostics.record(FieldEvent::NewItemRequested { token: token.to_string() });
			handler(self, token);
			// The handler may have installed a replacement for itself.
			if self.new_item_handler.is_none() {
				self.new_item_handler = Some(handler);
			}
		} else {
			self.diagnostics.record(FieldEvent::UnknownTokenAdded { token: token.to_string() });
		}
	}

	/// The client removed `token`.
	///
	/// Only registered tokens are resolved. Anything else, including a
	/// selected item no longer in the registry, is a desync between client and
	/// server and is dropped with a warning; hosts clear orphaned items with
	/// [`TokenField::deselect`].
	pub fn on_token_removed(&mut self, token: &str) {
		match self.registry.resolve(token).cloned() {
			Some(item) => {
				self.diagnostics.record(FieldEvent::TokenRemoved { token: token.to_string() });
				self.reconcile([], [item], true);
			}
			None => self.diagnostics.record(FieldEvent::UnknownTokenRemoved { token: token.to_string() }),
		}
	}

	/// The client replaced its whole value with `tokens`.
	///
	/// Each identifier is resolved through the registry on its own; unknown
	/// ones are skipped with a warning and the rest become the new value.
	pub fn on_value_changed(&mut self, tokens: impl IntoIterator<Item = impl AsRef<str>>) {
		let mut value = Vec::new();
		for token in tokens {
			let token = token.as_ref();
			match self.registry.resolve(token) {
				Some(item) => value.push(item.clone()),
				None => self.diagnostics.record(FieldEvent::UnknownValueToken { token: token.to_string() }),
			}
		}
		self.replace_value(value.into_iter().collect(), true);
	}

	fn reconcile(&mut self, added: impl IntoIterator<Item = V>, removed: impl IntoIterator<Item = V>, from_client: bool) {
		let removed: Vec<V> = removed.into_iter().collect();
		let next = self.value.reconciled(added, &removed);
		self.replace_value(next, from_client);
	}

	fn replace_value(&mut self, next: Selection<V>, from_client: bool) {
		if next == self.value {
			return;
		}
		let old = std::mem::replace(&mut self.value, next);
		self.render_tokens();
		let event = ValueChangeEvent::new(&old, &self.value, from_client);
		self.listeners.notify(&event);
	}

	fn render_items(&mut self) {
		let items = self.formatter.format(self.registry.items());
		self.view.render_available_items(&items);
	}

	fn render_tokens(&mut self) {
		let tokens = self.formatter.format(&self.value);
		self.view.render_tokens(&tokens);
	}
}

impl<V, W: fmt::Debug> fmt::Debug for TokenField<V, W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TokenField")
			.field("state", &self.state)
			.field("items", &self.registry.len())
			.field("selected", &self.value.len())
			.field("label", &self.label)
			.field("token_separator", &self.token_separator)
			.field("listeners", &self.listeners.len())
			.field("view", &self.view)
			.finish_non_exhaustive()
	}
}
