/// A specific parse error with line number and type.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}: {type}")]
pub struct ParseError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of parse error.
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn r#type(&self) -> &ParseErrorType { &self.r#type }
}

/// Types of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// The next token was not the one the grammar requires.
	UnexpectedToken { expected: String, found: String },
	/// No expression can start with this token.
	NoPrefixParse(String),
	/// An integer literal that does not fit in 64 bits.
	InvalidInteger(String),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken { expected, found } => {
				write!(f, "expected next token to be {expected}, got {found} instead")
			}
			NoPrefixParse(token) => {
				write!(f, "no prefix parse function for {token} found")
			}
			InvalidInteger(literal) => {
				write!(f, "could not parse {literal} as integer")
			}
		}
	}
}
