//! Parsing of client events typed or scripted one per line.
//!
//! ```text
//! +TokenC            token added
//! -TokenC            token removed
//! =TokenA TokenB     whole value replaced
//! {"event": ...}     JSON client event
//! # comment
//! ```

use anyhow::{Context, bail};
use tokenfield::ClientEvent;

/// Parses one line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<ClientEvent>> {
	let line = line.trim();
	let Some(first) = line.chars().next() else {
		return Ok(None);
	};
	let rest = line[first.len_utf8()..].trim();
	let event = match first {
		'#' => return Ok(None),
		'+' | '-' if rest.is_empty() => bail!("missing token after '{first}'"),
		'+' => ClientEvent::TokenAdded { token: rest.to_string() },
		'-' => ClientEvent::TokenRemoved { token: rest.to_string() },
		'=' => ClientEvent::ValueChanged {
			tokens: rest.split_whitespace().map(str::to_string).collect(),
		},
		'{' => ClientEvent::from_json(line).context("invalid JSON client event")?,
		_ => bail!("unrecognized line {line:?} (expected +token, -token, =tokens or JSON)"),
	};
	Ok(Some(event))
}
