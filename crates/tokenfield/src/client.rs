//! Intents reported by the client-side element.
//!
//! The element fires one event per discrete user action. Hosts decode the
//! payload into a [`ClientEvent`] and pass it to
//! [`TokenField::handle_client_event`](crate::TokenField::handle_client_event).
//!
//! The JSON form is tagged by `event`:
//!
//! ```json
//! {"event": "added-token", "token": "TokenC"}
//! {"event": "removed-token", "token": "TokenC"}
//! {"event": "value-changed", "tokens": ["TokenA", "TokenC"]}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A user intent reported by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientEvent {
	/// The user committed a token, either picked from the item list or typed.
	#[serde(rename = "added-token")]
	TokenAdded { token: String },
	/// The user removed a token.
	#[serde(rename = "removed-token")]
	TokenRemoved { token: String },
	/// The element replaced its whole value (bubble-style fields).
	ValueChanged { tokens: Vec<String> },
}

impl ClientEvent {
	/// Decodes an event from its JSON payload.
	pub fn from_json(payload: &str) -> Result<Self> {
		Ok(serde_json::from_str(payload)?)
	}

	/// Encodes the event as JSON.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::FieldError;

	#[test]
	fn decodes_added_token() {
		let event = ClientEvent::from_json(r#"{"event":"added-token","token":"TokenC"}"#).unwrap();
		assert_eq!(event, ClientEvent::TokenAdded { token: "TokenC".into() });
	}

	#[test]
	fn decodes_value_change() {
		let event = ClientEvent::from_json(r#"{"event":"value-changed","tokens":["a","b"]}"#).unwrap();
		assert_eq!(
			event,
			ClientEvent::ValueChanged {
				tokens: vec!["a".into(), "b".into()]
			}
		);
	}

	#[test]
	fn encodes_removed_token() {
		let json = ClientEvent::TokenRemoved { token: "x".into() }.to_json().unwrap();
		assert_eq!(json, r#"{"event":"removed-token","token":"x"}"#);
	}

	#[test]
	fn rejects_unknown_event() {
		let err = ClientEvent::from_json(r#"{"event":"focused"}"#).unwrap_err();
		assert!(matches!(err, FieldError::ClientEvent(_)));
	}
}
