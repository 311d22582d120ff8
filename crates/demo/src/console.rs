//! Line-oriented view printing every pushed state.

use std::io::Write;

use tokenfield::{Token, TokenView};
use tracing::warn;

/// Writes each render call as one line to `out`.
pub struct ConsoleView<W> {
	out: W,
}

impl<W: Write> ConsoleView<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	#[cfg(test)]
	pub fn into_inner(self) -> W {
		self.out
	}

	fn line(&mut self, kind: &str, body: &str) {
		if let Err(error) = writeln!(self.out, "{kind}: {body}") {
			warn!(%error, kind, "failed to write view output");
		}
	}
}

/// Formats tokens as `[label, label]`, adding the id where it differs from the label.
pub fn format_tokens(tokens: &[Token]) -> String {
	let parts: Vec<String> = tokens
		.iter()
		.map(|t| if t.id == t.label { t.label.clone() } else { format!("{} <{}>", t.label, t.id) })
		.collect();
	format!("[{}]", parts.join(", "))
}

impl<W: Write> TokenView for ConsoleView<W> {
	fn render_tokens(&mut self, tokens: &[Token]) {
		self.line("tokens", &format_tokens(tokens));
	}

	fn render_available_items(&mut self, items: &[Token]) {
		self.line("items", &format_tokens(items));
	}

	fn render_label(&mut self, label: &str) {
		self.line("label", label);
	}

	fn render_token_separator(&mut self, separator: char) {
		self.line("separator", &format!("{separator:?}"));
	}
}
