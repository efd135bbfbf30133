//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Expression`
//!
//! Expressions are parsed top down by operator precedence (Pratt parsing).
//! Every token type may have a prefix rule, used when it starts an expression,
//! and an infix rule, used when it follows a complete left operand. The loop in
//! [`Parser::parse_expression`] keeps folding infix rules into the left operand
//! while the next operator binds tighter than the caller's precedence.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Equals|== !=|Left
//! LessGreater|< >|Left
//! Sum|+ -|Left
//! Product|* /|Left
//! Prefix|! -|Right
//! Call|f(x)|Left
//! Index|a\[i\]|Left
//!
//! Statement grammar:
//!
//! ``` BNF
//! program        → statement* EOF ;
//! statement      → letStmt | returnStmt | exprStmt ;
//! letStmt        → "let" IDENT "=" expression ";"? ;
//! returnStmt     → "return" expression? ";"? ;
//! exprStmt       → expression ";"? ;
//! block          → "{" statement* "}" ;
//! ```
//!
//! Errors don't stop the parse. Each one is recorded, the parser skips to the
//! end of the broken statement and carries on, so a single input reports all
//! its problems.

pub mod expression;

use TokenType::*;
use tracing::debug;

use crate::{
	MonkeyError,
	error::parser::{ParseError, ParseErrorType},
	parser::expression::{Expression, InfixOperator, PrefixOperator},
	scanner::{Scanner, Token, TokenType},
	statement::{BlockStatement, Program, Statement},
};

/// Binding strength of operators, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Lowest,
	/// `==` `!=`
	Equals,
	/// `<` `>`
	LessGreater,
	/// `+` `-`
	Sum,
	/// `*` `/`
	Product,
	/// `-x` `!x`
	Prefix,
	/// `f(x)`
	Call,
	/// `a[i]`
	Index,
}

impl Precedence {
	pub fn of(r#type: &TokenType) -> Self {
		match r#type {
			EqualEqual | BangEqual => Precedence::Equals,
			Less | Greater => Precedence::LessGreater,
			Plus | Minus => Precedence::Sum,
			Asterisk | Slash => Precedence::Product,
			LeftParen => Precedence::Call,
			LeftBracket => Precedence::Index,
			_ => Precedence::Lowest,
		}
	}
}

/// Pulls tokens from a scanner and builds a [`Program`].
pub struct Parser<'a> {
	scanner: Scanner<'a>,
	current: Token<'a>,
	peek:    Token<'a>,
	errors:  Vec<ParseError>,
}

impl<'a> Parser<'a> {
	pub fn new(mut scanner: Scanner<'a>) -> Self {
		let current = scanner.next_token();
		let peek = scanner.next_token();
		Self { scanner, current, peek, errors: Vec::new() }
	}

	pub fn from_source(source: &'a str) -> Self { Self::new(Scanner::new(source)) }

	/// Parse the whole input. Always returns a program, statements that failed
	/// to parse are left out and reported through [`Parser::errors`].
	pub fn parse_program(&mut self) -> Program {
		let mut program = Program::default();
		while self.current.r#type != Eof {
			match self.parse_statement() {
				Ok(statement) => program.statements.push(statement),
				Err(error) => {
					self.errors.push(error);
					self.synchronize(false);
					continue;
				}
			}
			self.next_token();
		}
		debug!(statements = program.statements.len(), errors = self.errors.len(), "parsed program");
		program
	}

	/// Parse the whole input, failing with every recorded error if there are
	/// any.
	pub fn parse(mut self) -> Result<Program, MonkeyError> {
		let program = self.parse_program();
		if self.errors.is_empty() { Ok(program) } else { Err(MonkeyError::ParserErrors(self.errors)) }
	}

	pub fn errors(&self) -> &[ParseError] { &self.errors }

	fn parse_statement(&mut self) -> Result<Statement, ParseError> {
		match self.current.r#type {
			Let => self.parse_let_statement(),
			Return => self.parse_return_statement(),
			_ => self.parse_expression_statement(),
		}
	}

	fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
		let name = self.expect_peek_identifier()?;
		self.expect_peek(Assign)?;
		self.next_token();
		let value = self.parse_expression(Precedence::Lowest)?;
		self.skip_semicolon();
		Ok(Statement::Let { name, value })
	}

	fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
		match self.peek.r#type {
			Semicolon => {
				self.next_token();
				Ok(Statement::Return(None))
			}
			RightBrace | Eof => Ok(Statement::Return(None)),
			_ => {
				self.next_token();
				let value = self.parse_expression(Precedence::Lowest)?;
				self.skip_semicolon();
				Ok(Statement::Return(Some(value)))
			}
		}
	}

	fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
		let expression = self.parse_expression(Precedence::Lowest)?;
		self.skip_semicolon();
		Ok(Statement::Expression(expression))
	}

	/// Parse an expression whose operators all bind tighter than `precedence`.
	fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
		let mut left = self.parse_prefix()?;
		while self.peek.r#type != Semicolon && precedence < Precedence::of(&self.peek.r#type) {
			self.next_token();
			left = self.parse_infix(left)?;
		}
		Ok(left)
	}

	fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
		match self.current.r#type {
			Identifier(name) => Ok(Expression::Identifier(name.to_string())),
			Int => self.parse_integer_literal(),
			StringLiteral(value) => Ok(Expression::StringLiteral(value.to_string())),
			True => Ok(Expression::Boolean(true)),
			False => Ok(Expression::Boolean(false)),
			Bang | Minus => self.parse_prefix_expression(),
			LeftParen => self.parse_grouped_expression(),
			If => self.parse_if_expression(),
			Function => self.parse_function_literal(),
			LeftBracket => Ok(Expression::ArrayLiteral(self.parse_expression_list(RightBracket)?)),
			LeftBrace => self.parse_hash_literal(),
			other => Err(self.error(self.current.line, ParseErrorType::NoPrefixParse(other.to_string()))),
		}
	}

	fn parse_infix(&mut self, left: Expression) -> Result<Expression, ParseError> {
		match self.current.r#type {
			LeftParen => Ok(Expression::call(left, self.parse_expression_list(RightParen)?)),
			LeftBracket => {
				self.next_token();
				let index = self.parse_expression(Precedence::Lowest)?;
				self.expect_peek(RightBracket)?;
				Ok(Expression::index(left, index))
			}
			other => match InfixOperator::from_token(&other) {
				Some(operator) => {
					let precedence = Precedence::of(&other);
					self.next_token();
					let right = self.parse_expression(precedence)?;
					Ok(Expression::infix(left, operator, right))
				}
				None => Ok(left),
			},
		}
	}

	fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
		let literal = self.current.lexeme;
		literal
			.parse::<i64>()
			.map(Expression::IntegerLiteral)
			.map_err(|_| self.error(self.current.line, ParseErrorType::InvalidInteger(literal.to_string())))
	}

	fn parse_prefix_expression(&mut self) -> Result<Expression, ParseError> {
		let operator = match PrefixOperator::from_token(&self.current.r#type) {
			Some(operator) => operator,
			None => {
				return Err(self.error(self.current.line, ParseErrorType::NoPrefixParse(self.current.r#type.to_string())));
			}
		};
		self.next_token();
		let right = self.parse_expression(Precedence::Prefix)?;
		Ok(Expression::prefix(operator, right))
	}

	fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
		self.next_token(); // consume '('
		let expression = self.parse_expression(Precedence::Lowest)?;
		self.expect_peek(RightParen)?;
		Ok(expression)
	}

	/// `if (<condition>) { ... } else { ... }`
	fn parse_if_expression(&mut self) -> Result<Expression, ParseError> {
		self.expect_peek(LeftParen)?;
		self.next_token();
		let condition = self.parse_expression(Precedence::Lowest)?;
		self.expect_peek(RightParen)?;
		self.expect_peek(LeftBrace)?;
		let consequence = self.parse_block_statement()?;

		let alternative = if self.peek.r#type == Else {
			self.next_token();
			self.expect_peek(LeftBrace)?;
			Some(self.parse_block_statement()?)
		} else {
			None
		};

		Ok(Expression::If { condition: Box::new(condition), consequence, alternative })
	}

	/// `fn(<parameters>) { ... }`
	fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
		self.expect_peek(LeftParen)?;
		let parameters = self.parse_function_parameters()?;
		self.expect_peek(LeftBrace)?;
		let body = self.parse_block_statement()?;
		Ok(Expression::function(parameters, body))
	}

	fn parse_function_parameters(&mut self) -> Result<Vec<String>, ParseError> {
		let mut parameters = Vec::new();
		if self.peek.r#type == RightParen {
			self.next_token();
			return Ok(parameters);
		}

		parameters.push(self.expect_peek_identifier()?);
		while self.peek.r#type == Comma {
			self.next_token();
			parameters.push(self.expect_peek_identifier()?);
		}
		self.expect_peek(RightParen)?;
		Ok(parameters)
	}

	/// Comma separated expressions up to `end`, used by call arguments and
	/// array literals. The current token is the opening delimiter.
	fn parse_expression_list(&mut self, end: TokenType<'a>) -> Result<Vec<Expression>, ParseError> {
		let mut list = Vec::new();
		if self.peek.r#type == end {
			self.next_token();
			return Ok(list);
		}

		self.next_token();
		list.push(self.parse_expression(Precedence::Lowest)?);
		while self.peek.r#type == Comma {
			self.next_token();
			self.next_token();
			list.push(self.parse_expression(Precedence::Lowest)?);
		}
		self.expect_peek(end)?;
		Ok(list)
	}

	/// `{<key>: <value>, ...}`
	fn parse_hash_literal(&mut self) -> Result<Expression, ParseError> {
		let mut pairs = Vec::new();
		while self.peek.r#type != RightBrace {
			self.next_token();
			let key = self.parse_expression(Precedence::Lowest)?;
			self.expect_peek(Colon)?;
			self.next_token();
			let value = self.parse_expression(Precedence::Lowest)?;
			pairs.push((key, value));

			if self.peek.r#type != RightBrace {
				self.expect_peek(Comma)?;
			}
		}
		self.expect_peek(RightBrace)?;
		Ok(Expression::HashLiteral(pairs))
	}

	/// The current token is the opening brace. Statements that fail inside the
	/// block are reported and skipped without abandoning the block.
	fn parse_block_statement(&mut self) -> Result<BlockStatement, ParseError> {
		let mut block = BlockStatement::default();
		self.next_token(); // consume '{'

		while !matches!(self.current.r#type, RightBrace | Eof) {
			match self.parse_statement() {
				Ok(statement) => block.statements.push(statement),
				Err(error) => {
					self.errors.push(error);
					if self.current.r#type != RightBrace {
						self.synchronize(true);
					}
					continue;
				}
			}
			self.next_token();
		}

		if self.current.r#type == Eof {
			return Err(self.error(self.current.line, ParseErrorType::UnexpectedToken {
				expected: RightBrace.to_string(),
				found:    Eof.to_string(),
			}));
		}
		Ok(block)
	}

	/// Advance to the next token.
	fn next_token(&mut self) { self.current = std::mem::replace(&mut self.peek, self.scanner.next_token()); }

	fn skip_semicolon(&mut self) {
		if self.peek.r#type == Semicolon {
			self.next_token();
		}
	}

	/// Advance only if the next token is `expected`.
	fn expect_peek(&mut self, expected: TokenType<'a>) -> Result<(), ParseError> {
		if self.peek.r#type == expected {
			self.next_token();
			Ok(())
		} else {
			Err(self.peek_error(expected))
		}
	}

	fn expect_peek_identifier(&mut self) -> Result<String, ParseError> {
		match self.peek.r#type {
			Identifier(name) => {
				self.next_token();
				Ok(name.to_string())
			}
			_ => Err(self.peek_error(Identifier(""))),
		}
	}

	fn peek_error(&self, expected: TokenType) -> ParseError {
		self.error(self.peek.line, ParseErrorType::UnexpectedToken {
			expected: expected.to_string(),
			found:    self.peek.r#type.to_string(),
		})
	}

	fn error(&self, line: usize, r#type: ParseErrorType) -> ParseError {
		let error = ParseError::new(line, r#type);
		debug!(%error, "parse error");
		error
	}

	/// Skip the rest of a broken statement. Stops after a `;` or before a `let`
	/// or `return`, and inside a block also before a `}`. Always consumes at
	/// least one token unless the input is exhausted.
	fn synchronize(&mut self, in_block: bool) {
		while self.current.r#type != Eof {
			let at_semicolon = self.current.r#type == Semicolon;
			self.next_token();
			if at_semicolon || matches!(self.current.r#type, Let | Return) {
				return;
			}
			if in_block && self.current.r#type == RightBrace {
				return;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn parse_ok(input: &str) -> Program {
		let mut parser = Parser::from_source(input);
		let program = parser.parse_program();
		assert!(parser.errors().is_empty(), "unexpected parse errors for {input:?}: {:?}", parser.errors());
		program
	}

	fn parse(input: &str, equals: &str) { assert_eq!(parse_ok(input).to_string(), equals); }

	fn parse_errors(input: &str) -> Vec<String> {
		let mut parser = Parser::from_source(input);
		parser.parse_program();
		parser.errors().iter().map(ToString::to_string).collect()
	}

	fn single_expression(input: &str) -> Expression {
		let mut program = parse_ok(input);
		assert_eq!(program.statements.len(), 1);
		match program.statements.remove(0) {
			Statement::Expression(expression) => expression,
			other => panic!("expected an expression statement, got {other:?}"),
		}
	}

	#[test]
	fn parse_let_statements() {
		let program = parse_ok("let x = 5; let y = true; let foobar = y;");
		let expected = [
			("x", Expression::IntegerLiteral(5)),
			("y", Expression::Boolean(true)),
			("foobar", Expression::Identifier("y".to_string())),
		];
		assert_eq!(program.statements.len(), expected.len());
		for (statement, (name, value)) in program.statements.into_iter().zip(expected) {
			assert_eq!(statement, Statement::Let { name: name.to_string(), value });
		}
	}

	#[test]
	fn parse_return_statements() {
		let program = parse_ok("return 5; return 10; return; return x + y;");
		assert_eq!(program.to_string(), "return 5;return 10;return;return (x + y);");
	}

	#[test]
	fn parse_literals() {
		parse("foobar;", "foobar");
		parse("5;", "5");
		parse("\"hello world\"", "\"hello world\"");
		parse("true", "true");
		parse("false;", "false");
		assert_eq!(single_expression("9223372036854775807"), Expression::IntegerLiteral(i64::MAX));
	}

	#[test]
	fn parse_prefix_and_infix() {
		parse("!5;", "(!5)");
		parse("-15;", "(-15)");
		parse("!true", "(!true)");
		parse("5 + 5;", "(5 + 5)");
		parse("5 - 5;", "(5 - 5)");
		parse("5 * 5;", "(5 * 5)");
		parse("5 / 5;", "(5 / 5)");
		parse("5 > 5;", "(5 > 5)");
		parse("5 < 5;", "(5 < 5)");
		parse("5 == 5;", "(5 == 5)");
		parse("5 != 5;", "(5 != 5)");
		parse("true != false", "(true != false)");
	}

	#[test]
	fn parse_operator_precedence() {
		parse("1 + 2 * 3", "(1 + (2 * 3))");
		parse("2 + 3 * 4 - 1", "((2 + (3 * 4)) - 1)");
		parse("-a * b", "((-a) * b)");
		parse("!-a", "(!(-a))");
		parse("a + b + c", "((a + b) + c)");
		parse("a + b - c", "((a + b) - c)");
		parse("a * b * c", "((a * b) * c)");
		parse("a * b / c", "((a * b) / c)");
		parse("a + b / c", "(a + (b / c))");
		parse("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)");
		parse("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)");
		parse("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))");
		parse("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))");
		parse("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))");
		parse("3 > 5 == false", "((3 > 5) == false)");
		parse("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)");
		parse("(5 + 5) * 2", "((5 + 5) * 2)");
		parse("2 / (5 + 5)", "(2 / (5 + 5))");
		parse("-(5 + 5)", "(-(5 + 5))");
		parse("!(true == true)", "(!(true == true))");
		parse("a + add(b * c) + d", "((a + add((b * c))) + d)");
		parse("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))", "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))");
		parse("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))");
		parse("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)");
		parse("add(a * b[2], b[1], 2 * [1, 2][1])", "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))");
	}

	#[test]
	fn parse_if_expressions() {
		let expression = single_expression("if (x < y) { x }");
		let Expression::If { condition, consequence, alternative } = expression else {
			panic!("expected an if expression");
		};
		assert_eq!(condition.to_string(), "(x < y)");
		assert_eq!(consequence.to_string(), "x");
		assert!(alternative.is_none());

		parse("if (x < y) { x } else { y }", "if (x < y) x else y");
		parse("if (true) { let a = 1; a }", "if true let a = 1;a");
	}

	#[test]
	fn parse_function_literals() {
		let expression = single_expression("fn(x, y) { x + y; }");
		let Expression::FunctionLiteral { parameters, body } = expression else {
			panic!("expected a function literal");
		};
		assert_eq!(*parameters, vec!["x".to_string(), "y".to_string()]);
		assert_eq!(body.to_string(), "(x + y)");

		parse("fn() {};", "fn() ");
		parse("fn(x) {};", "fn(x) ");
		parse("fn(x, y, z) { return x; };", "fn(x, y, z) return x;");
		parse("fn() { return }", "fn() return;");
		parse("fn(x) { x }(5)", "fn(x) x(5)");
	}

	#[test]
	fn parse_call_expressions() {
		let expression = single_expression("add(1, 2 * 3, 4 + 5);");
		let Expression::Call { function, arguments } = expression else {
			panic!("expected a call expression");
		};
		assert_eq!(*function, Expression::Identifier("add".to_string()));
		assert_eq!(arguments.len(), 3);
		assert_eq!(arguments[1].to_string(), "(2 * 3)");
		parse("add()", "add()");
	}

	#[test]
	fn parse_arrays_and_indexes() {
		parse("[1, 2 * 2, 3 + 3]", "[1, (2 * 2), (3 + 3)]");
		parse("[]", "[]");
		parse("myArray[1 + 1]", "(myArray[(1 + 1)])");
	}

	#[test]
	fn parse_hash_literals() {
		parse("{}", "{}");
		parse(r#"{"one": 1, "two": 2, "three": 3}"#, r#"{"one": 1, "two": 2, "three": 3}"#);
		parse(r#"{"one": 0 + 1, "two": 10 - 8}"#, r#"{"one": (0 + 1), "two": (10 - 8)}"#);
		parse("{1: true, false: 2}", "{1: true, false: 2}");

		let expression = single_expression(r#"{"a": 1, "a": 2}"#);
		let Expression::HashLiteral(pairs) = expression else {
			panic!("expected a hash literal");
		};
		assert_eq!(pairs.len(), 2);
	}

	#[test]
	fn parse_let_errors() {
		assert_eq!(parse_errors("let x 5; let = 10; let 838383;"), vec![
			"line 1: expected next token to be =, got INT instead",
			"line 1: expected next token to be IDENT, got = instead",
			"line 1: expected next token to be IDENT, got INT instead",
		]);
	}

	#[test]
	fn parse_prefix_errors() {
		assert_eq!(parse_errors("+5;"), vec!["line 1: no prefix parse function for + found"]);
		assert_eq!(parse_errors("let a = @;"), vec!["line 1: no prefix parse function for ILLEGAL found"]);
		assert_eq!(parse_errors("1;\n\n99999999999999999999"), vec![
			"line 3: could not parse 99999999999999999999 as integer"
		]);
	}

	#[test]
	fn parse_unterminated_constructs() {
		assert_eq!(parse_errors("(1 + 2"), vec!["line 1: expected next token to be ), got EOF instead"]);
		assert_eq!(parse_errors("[1, 2"), vec!["line 1: expected next token to be ], got EOF instead"]);
		assert_eq!(parse_errors("{1: 2"), vec!["line 1: expected next token to be ,, got EOF instead"]);
		assert_eq!(parse_errors("fn(x) { x"), vec!["line 1: expected next token to be }, got EOF instead"]);
		assert_eq!(parse_errors("if x { 1 }"), vec!["line 1: expected next token to be (, got IDENT instead"]);
	}

	#[test]
	fn parse_recovers_between_statements() {
		let mut parser = Parser::from_source("let x = 1; let = 2; x + 1; fn(a, 1) { a };");
		let program = parser.parse_program();
		assert_eq!(parser.errors().len(), 2);
		assert_eq!(program.to_string(), "let x = 1;(x + 1)");
	}

	#[test]
	fn parse_recovers_inside_blocks() {
		let mut parser = Parser::from_source("fn() { let = 1; x }; 5");
		let program = parser.parse_program();
		assert_eq!(parser.errors().len(), 1);
		assert_eq!(program.to_string(), "fn() x5");
	}

	#[test]
	fn parse_reports_all_errors() {
		let error = Parser::from_source("let = 1; +").parse().unwrap_err();
		match error {
			MonkeyError::ParserErrors(errors) => assert_eq!(errors.len(), 2),
			other => panic!("expected parser errors, got {other:?}"),
		}
	}
}
