pub mod interpreter;
pub mod parser;

use interpreter::RuntimeError;
use parser::ParseError;

/// MonkeyError is the top-level error type for the Monkey interpreter.
#[derive(thiserror::Error, Debug)]
pub enum MonkeyError {
	/// Internal error, e.g. a source file that cannot be read
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Parser errors encountered during parsing
	#[error("ParserErrors:\n{}", display_parse_errors(.0))]
	ParserErrors(Vec<ParseError>),
	/// Runtime error the program evaluated to
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] RuntimeError),
	/// Failed reading input or writing output
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

fn display_parse_errors(errors: &[ParseError]) -> String {
	errors.iter().map(|e| format!("\t{e}")).collect::<Vec<String>>().join("\n")
}
