//! Turns Monkey source text into tokens.
//!
//! The parser wants to know not just that it has a lexeme for some identifier,
//! but whether it is a reserved word and which keyword it is. So at the point
//! the scanner recognizes a lexeme it also remembers which kind of lexeme it
//! represents.
//!
//! The scanner never fails. Characters the language has no use for become
//! `Illegal` tokens and the parser reports them.
//!
//! We can't easily detect a `reserved word` until we've reached the end of what
//! might instead be an identifier, this is `maximal munch`.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;

/// A scanner for Monkey source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Tracks what source line `current` is on so we can produce tokens that know
	/// their location.
	line:        usize,
	/// Set once the iterator has handed out `Eof`.
	finished:    bool,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, finished: false }
	}

	/// Scan the next token. Keeps returning `Eof` once the source is exhausted.
	pub fn next_token(&mut self) -> Token<'a> {
		self.skip_whitespace();

		// We are at the beginning of the next lexeme.
		self.start = self.source_iter.peek().map_or(self.source.len(), |&(index, _)| index);
		self.cursor = self.start;

		let Some(next_char) = self.advance() else {
			return Token::new(Eof, "", self.line);
		};

		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			'[' => LeftBracket,
			']' => RightBracket,
			',' => Comma,
			';' => Semicolon,
			':' => Colon,
			'+' => Plus,
			'-' => Minus,
			'*' => Asterisk,
			'/' => Slash,
			'<' => Less,
			'>' => Greater,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Assign },
			'"' => self.string(),
			c if c.is_ascii_digit() => self.number(),
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			_ => Illegal,
		};

		Token::new(r#type, &self.source[self.start..self.cursor], self.line)
	}

	/// Scan every token up to and including `Eof`.
	pub fn scan_tokens(self) -> Vec<Token<'a>> { self.collect() }

	fn skip_whitespace(&mut self) {
		while let Some(c) = self.peek() {
			match c {
				' ' | '\t' | '\r' => {}
				'\n' => self.line += 1,
				_ => break,
			}
			self.advance();
		}
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan a string literal. An unterminated string runs to the end of input.
	fn string(&mut self) -> TokenType<'a> {
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		let content_end = self.cursor;
		self.advance(); // The closing "
		StringLiteral(&self.source[self.start + 1..content_end])
	}

	/// Scan an integer literal
	fn number(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
		Int
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}

impl<'a> Iterator for Scanner<'a> {
	type Item = Token<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}
		let token = self.next_token();
		self.finished = token.r#type == Eof;
		Some(token)
	}
}
