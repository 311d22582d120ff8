//! Error types for field configuration and client event decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring a field or decoding client input.
///
/// Unknown tokens reported by the client are not errors; they are recorded
/// through [`Diagnostics`](crate::Diagnostics) and ignored.
#[derive(Debug, Error)]
pub enum FieldError {
	/// A token separator that the client could not use to commit typed text.
	#[error("invalid token separator {0:?} (expected a single non-alphanumeric character)")]
	InvalidTokenSeparator(String),

	/// A client event payload that is not valid JSON or has an unknown shape.
	#[error("malformed client event: {0}")]
	ClientEvent(#[from] serde_json::Error),

	/// Error parsing TOML settings.
	#[error("settings parse error: {0}")]
	Settings(#[from] toml::de::Error),

	/// Error reading a settings file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for field operations.
pub type Result<T, E = FieldError> = std::result::Result<T, E>;
