//! Logging sink injected into a field.
//!
//! The field never logs directly. It reports [`FieldEvent`]s to a
//! [`Diagnostics`] implementation; [`TracingDiagnostics`] forwards them to
//! `tracing`, [`RecordingDiagnostics`] keeps them for inspection.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{Level, debug, warn};

/// Something noteworthy that happened while handling client input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
	/// A client-added token resolved and was selected.
	TokenAdded { token: String },
	/// A client-removed token resolved and was deselected.
	TokenRemoved { token: String },
	/// An unknown token was handed to the new-item handler.
	NewItemRequested { token: String },
	/// The client added a token the registry does not know and no handler is set.
	UnknownTokenAdded { token: String },
	/// The client removed a token the registry does not know.
	UnknownTokenRemoved { token: String },
	/// A client value replacement referenced a token the registry does not know.
	UnknownValueToken { token: String },
}

impl FieldEvent {
	/// Severity of the event. Unknown tokens indicate a client/server desync
	/// and are warnings; everything else is debug output.
	pub fn level(&self) -> Level {
		match self {
			Self::TokenAdded { .. } | Self::TokenRemoved { .. } | Self::NewItemRequested { .. } => Level::DEBUG,
			Self::UnknownTokenAdded { .. } | Self::UnknownTokenRemoved { .. } | Self::UnknownValueToken { .. } => Level::WARN,
		}
	}

	/// The raw token the event refers to.
	pub fn token(&self) -> &str {
		match self {
			Self::TokenAdded { token }
			| Self::TokenRemoved { token }
			| Self::NewItemRequested { token }
			| Self::UnknownTokenAdded { token }
			| Self::UnknownTokenRemoved { token }
			| Self::UnknownValueToken { token } => token,
		}
	}

	/// Returns true for events at warning level.
	pub fn is_warning(&self) -> bool {
		self.level() == Level::WARN
	}
}

impl fmt::Display for FieldEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::TokenAdded { token } => write!(f, "adding token '{token}'"),
			Self::TokenRemoved { token } => write!(f, "removing token '{token}'"),
			Self::NewItemRequested { token } => write!(f, "invoking new-item handler with token '{token}'"),
			Self::UnknownTokenAdded { token } => write!(f, "tried to add token '{token}' that does not exist in the item registry"),
			Self::UnknownTokenRemoved { token } => {
				write!(f, "tried to remove token '{token}' that does not exist in the item registry")
			}
			Self::UnknownValueToken { token } => write!(f, "client value contains token '{token}' that does not exist in the item registry"),
		}
	}
}

/// Receives the events a field reports.
pub trait Diagnostics {
	fn record(&self, event: FieldEvent);
}

/// Forwards field events to `tracing` at their [`FieldEvent::level`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
	fn record(&self, event: FieldEvent) {
		if event.is_warning() {
			warn!(token = event.token(), "{event}");
		} else {
			debug!(token = event.token(), "{event}");
		}
	}
}

/// Keeps every reported event in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the field
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
	events: Rc<RefCell<Vec<FieldEvent>>>,
}

impl RecordingDiagnostics {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns all recorded events in order.
	pub fn events(&self) -> Vec<FieldEvent> {
		self.events.borrow().clone()
	}

	/// Returns the recorded warnings in order.
	pub fn warnings(&self) -> Vec<FieldEvent> {
		self.events.borrow().iter().filter(|e| e.is_warning()).cloned().collect()
	}

	/// Discards everything recorded so far.
	pub fn clear(&self) {
		self.events.borrow_mut().clear();
	}
}

impl Diagnostics for RecordingDiagnostics {
	fn record(&self, event: FieldEvent) {
		self.events.borrow_mut().push(event);
	}
}
