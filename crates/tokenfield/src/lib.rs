//! Multi-select token field.
//!
//! A token field renders the selected items of a host application as
//! removable tokens and lets the user type new ones. This crate holds the
//! server-side half of the widget: it identifies and labels items, keeps the
//! registry of selectable items, reconciles the selection against the intents
//! reported by the client, and pushes ordered `{id, label}` lists back to a
//! [`TokenView`].
//!
//! ```
//! use tokenfield::{RecordingView, TokenField};
//!
//! let mut field = TokenField::<String, _>::new(RecordingView::default());
//! field.set_items(["TokenA", "TokenB", "TokenC"].map(String::from));
//! field.on_token_added("TokenC");
//!
//! assert!(field.is_selected(&"TokenC".to_string()));
//! assert_eq!(field.view().tokens[0].id, "TokenC");
//! ```
//!
//! Rendering, keyboard handling and the transport between browser and server
//! belong to the host; the field only sees [`ClientEvent`]s coming in and
//! [`TokenView`] calls going out.

/// Typed client events and their JSON form.
pub mod client;
/// Injected logging sink.
pub mod diagnostics;
/// Error types.
pub mod error;
/// The token field itself.
pub mod field;
/// Item ordering and id/label derivation.
pub mod format;
/// Identifier to item lookup.
pub mod registry;
/// Selection values and reconciliation.
pub mod selection;
/// TOML-backed field settings.
pub mod settings;
/// Rendered token records.
pub mod token;
/// Outbound view interface.
pub mod view;

pub use client::ClientEvent;
pub use diagnostics::{Diagnostics, FieldEvent, RecordingDiagnostics, TracingDiagnostics};
pub use error::{FieldError, Result};
pub use field::{FieldState, ListenerId, NewItemHandler, TokenField, ValueChangeEvent};
pub use format::{ItemComparator, ItemIdGenerator, ItemLabelGenerator, ItemOrder, TokenFormatter};
pub use registry::ItemRegistry;
pub use selection::Selection;
pub use settings::{FieldSettings, OrderSetting};
pub use token::{Token, TokenSeparator};
pub use view::{RecordingView, TokenView};
