//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 * (45 +
//! x)` as nested nodes. `Display` renders the fully parenthesized form, which is
//! what the parser tests compare against.

use std::{fmt::Display, rc::Rc};

use Expression::*;

use crate::{scanner::TokenType, statement::BlockStatement};

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Identifier(String),
	IntegerLiteral(i64),
	StringLiteral(String),
	Boolean(bool),
	Prefix { operator: PrefixOperator, right: Box<Expression> },
	Infix { left: Box<Expression>, operator: InfixOperator, right: Box<Expression> },
	If { condition: Box<Expression>, consequence: BlockStatement, alternative: Option<BlockStatement> },
	/// Parameters and body are shared with every function object created from
	/// this literal.
	FunctionLiteral { parameters: Rc<Vec<String>>, body: Rc<BlockStatement> },
	Call { function: Box<Expression>, arguments: Vec<Expression> },
	ArrayLiteral(Vec<Expression>),
	Index { left: Box<Expression>, index: Box<Expression> },
	/// Key/value pairs in source order.
	HashLiteral(Vec<(Expression, Expression)>),
}

impl Expression {
	pub fn prefix(operator: PrefixOperator, right: Self) -> Self { Prefix { operator, right: Box::new(right) } }

	pub fn infix(left: Self, operator: InfixOperator, right: Self) -> Self {
		Infix { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn call(function: Self, arguments: Vec<Self>) -> Self { Call { function: Box::new(function), arguments } }

	pub fn index(left: Self, index: Self) -> Self { Index { left: Box::new(left), index: Box::new(index) } }

	pub fn function(parameters: Vec<String>, body: BlockStatement) -> Self {
		FunctionLiteral { parameters: Rc::new(parameters), body: Rc::new(body) }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
	Bang,
	Minus,
}

impl PrefixOperator {
	pub fn from_token(r#type: &TokenType) -> Option<Self> {
		Some(match r#type {
			TokenType::Bang => Self::Bang,
			TokenType::Minus => Self::Minus,
			_ => return None,
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
	Plus,
	Minus,
	Asterisk,
	Slash,
	Less,
	Greater,
	Equal,
	NotEqual,
}

impl InfixOperator {
	pub fn from_token(r#type: &TokenType) -> Option<Self> {
		Some(match r#type {
			TokenType::Plus => Self::Plus,
			TokenType::Minus => Self::Minus,
			TokenType::Asterisk => Self::Asterisk,
			TokenType::Slash => Self::Slash,
			TokenType::Less => Self::Less,
			TokenType::Greater => Self::Greater,
			TokenType::EqualEqual => Self::Equal,
			TokenType::BangEqual => Self::NotEqual,
			_ => return None,
		})
	}
}

impl Display for PrefixOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bang => write!(f, "!"),
			Self::Minus => write!(f, "-"),
		}
	}
}

impl Display for InfixOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let symbol = match self {
			Self::Plus => "+",
			Self::Minus => "-",
			Self::Asterisk => "*",
			Self::Slash => "/",
			Self::Less => "<",
			Self::Greater => ">",
			Self::Equal => "==",
			Self::NotEqual => "!=",
		};
		write!(f, "{symbol}")
	}
}

pub(crate) fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
	items.into_iter().map(|item| item.to_string()).collect::<Vec<String>>().join(", ")
}

impl Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Identifier(name) => write!(f, "{name}"),
			IntegerLiteral(value) => write!(f, "{value}"),
			StringLiteral(value) => write!(f, "\"{value}\""),
			Boolean(value) => write!(f, "{value}"),
			Prefix { operator, right } => write!(f, "({operator}{right})"),
			Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
			If { condition, consequence, alternative } => {
				write!(f, "if {condition} {consequence}")?;
				if let Some(alternative) = alternative {
					write!(f, " else {alternative}")?;
				}
				Ok(())
			}
			FunctionLiteral { parameters, body } => write!(f, "fn({}) {body}", parameters.join(", ")),
			Call { function, arguments } => write!(f, "{function}({})", join(arguments)),
			ArrayLiteral(elements) => write!(f, "[{}]", join(elements)),
			Index { left, index } => write!(f, "({left}[{index}])"),
			HashLiteral(pairs) => {
				write!(f, "{{{}}}", join(pairs.iter().map(|(key, value)| format!("{key}: {value}"))))
			}
		}
	}
}
