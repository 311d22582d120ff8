use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// A rendered token: the only shape in which items ever reach the view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
	/// Identifier used by the client to refer back to the item.
	pub id: String,
	/// Text displayed on the token.
	pub label: String,
}

impl Token {
	/// Creates a token from an identifier and a label.
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
		}
	}
}

/// Keystroke that commits the text typed into the editor as a new token.
///
/// Enter always commits; the separator is the additional key. It must be a
/// single character that cannot be part of a token, so letters, digits and
/// non-whitespace control characters are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenSeparator(char);

impl TokenSeparator {
	/// A single space, the default.
	pub const SPACE: Self = Self(' ');

	/// Validates `c` as a separator.
	pub fn new(c: char) -> Result<Self, FieldError> {
		if c.is_alphanumeric() || (c.is_control() && !c.is_whitespace()) {
			return Err(FieldError::InvalidTokenSeparator(c.to_string()));
		}
		Ok(Self(c))
	}

	/// Returns the separator character.
	pub fn as_char(self) -> char {
		self.0
	}
}

impl Default for TokenSeparator {
	fn default() -> Self {
		Self::SPACE
	}
}

impl fmt::Display for TokenSeparator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for TokenSeparator {
	type Err = FieldError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Self::new(c),
			_ => Err(FieldError::InvalidTokenSeparator(s.to_string())),
		}
	}
}

impl TryFrom<String> for TokenSeparator {
	type Error = FieldError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<TokenSeparator> for String {
	fn from(separator: TokenSeparator) -> Self {
		separator.0.to_string()
	}
}
