use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tokenfield-demo")]
#[command(about = "Drive a token field with client events read line by line")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// TOML settings for the field (uses the built-in demo field if omitted)
	#[arg(long, short = 's', value_name = "PATH")]
	pub settings: Option<PathBuf>,

	/// File with one client event per line (reads stdin if omitted)
	#[arg(long, value_name = "PATH")]
	pub script: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
