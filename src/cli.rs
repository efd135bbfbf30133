use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "monkey", after_long_help = "A tree-walking interpreter for the Monkey programming language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a source file
	File { path: PathBuf },
	/// Start the interactive prompt
	Repl,
	/// Evaluate a snippet and print its value
	Eval { source: String },
}
