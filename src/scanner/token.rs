/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType<'a>,
	pub lexeme: &'a str,
	pub line:   usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType<'a>, lexeme: &'a str, line: usize) -> Self { Self { r#type, lexeme, line } }
}

/// The different types of tokens in Monkey, The copying is lightweight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType<'a> {
	/// A character the language has no use for.
	Illegal,
	/// End of input.
	Eof,
	/// Identifier, e.g. variable or function name.
	Identifier(&'a str),
	/// Integer literal, e.g. `123`. The lexeme holds the digits.
	Int,
	/// String literal, e.g. `"hello"`, without the quotes.
	StringLiteral(&'a str),
	/// Assignment `=`.
	Assign,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Bang `!`.
	Bang,
	/// Asterisk `*`.
	Asterisk,
	/// Slash `/`.
	Slash,
	/// Less than `<`.
	Less,
	/// Greater than `>`.
	Greater,
	/// Equal equal `==`.
	EqualEqual,
	/// Bang equal `!=`.
	BangEqual,
	/// Comma `,`.
	Comma,
	/// Semicolon `;`.
	Semicolon,
	/// Colon `:`.
	Colon,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Left bracket `[`.
	LeftBracket,
	/// Right bracket `]`.
	RightBracket,
	/// Function keyword.
	Function,
	/// Binding keyword.
	Let,
	/// Boolean literal `true`.
	True,
	/// Boolean literal `false`.
	False,
	/// If keyword.
	If,
	/// Else keyword.
	Else,
	/// Return statement keyword.
	Return,
}

impl<'a> TokenType<'a> {
	pub fn keyword_or_identifier(value: &'a str) -> Self {
		match value {
			"fn" => TokenType::Function,
			"let" => TokenType::Let,
			"true" => TokenType::True,
			"false" => TokenType::False,
			"if" => TokenType::If,
			"else" => TokenType::Else,
			"return" => TokenType::Return,
			_ => TokenType::Identifier(value),
		}
	}
}

impl std::fmt::Display for TokenType<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenType::*;
		let name = match self {
			Illegal => "ILLEGAL",
			Eof => "EOF",
			Identifier(_) => "IDENT",
			Int => "INT",
			StringLiteral(_) => "STRING",
			Assign => "=",
			Plus => "+",
			Minus => "-",
			Bang => "!",
			Asterisk => "*",
			Slash => "/",
			Less => "<",
			Greater => ">",
			EqualEqual => "==",
			BangEqual => "!=",
			Comma => ",",
			Semicolon => ";",
			Colon => ":",
			LeftParen => "(",
			RightParen => ")",
			LeftBrace => "{",
			RightBrace => "}",
			LeftBracket => "[",
			RightBracket => "]",
			Function => "FUNCTION",
			Let => "LET",
			True => "TRUE",
			False => "FALSE",
			If => "IF",
			Else => "ELSE",
			Return => "RETURN",
		};
		write!(f, "{name}")
	}
}
