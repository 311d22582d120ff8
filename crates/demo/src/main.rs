//! Token field demo.
//!
//! Builds a field from settings, prints everything it pushes to its view, and
//! feeds it client events read line by line from a script or stdin.

mod cli;
mod console;
mod script;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use console::ConsoleView;
use tokenfield::{FieldSettings, TokenField};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// The stock demo page field: four string tokens, typed text
/// becomes a new token.
const DEMO_SETTINGS: &str = r#"
label = "Token Field"
items = ["TokenA", "TokenB", "TokenC", "TokenD"]
allow_new_items = true
"#;

type ConsoleField = TokenField<String, ConsoleView<io::Stdout>>;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let default_level = if cli.verbose { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

	let settings = match &cli.settings {
		Some(path) => FieldSettings::load(path).with_context(|| format!("loading settings from {}", path.display()))?,
		None => FieldSettings::parse(DEMO_SETTINGS)?,
	};

	let mut field = settings.build(ConsoleView::new(io::stdout()));
	field.add_value_change_listener(|event| {
		let added: Vec<&String> = event.added().collect();
		let removed: Vec<&String> = event.removed().collect();
		info!(?added, ?removed, from_client = event.is_from_client(), "value changed");
	});
	field.refresh();

	match &cli.script {
		Some(path) => {
			let file = File::open(path).with_context(|| format!("opening script {}", path.display()))?;
			run_session(&mut field, BufReader::new(file))
		}
		None => run_session(&mut field, io::stdin().lock()),
	}
}

/// Feeds every line of `input` to the field. Malformed lines are reported and skipped.
fn run_session(field: &mut ConsoleField, input: impl BufRead) -> anyhow::Result<()> {
	for (index, line) in input.lines().enumerate() {
		let line = line.context("reading client events")?;
		match script::parse_line(&line) {
			Ok(Some(event)) => field.handle_client_event(event),
			Ok(None) => {}
			Err(error) => warn!(line = index + 1, "{error:#}"),
		}
	}
	info!(selected = field.value().len(), "session finished");
	Ok(())
}
