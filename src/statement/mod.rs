//! Statements are what a program is made of. Everything that produces a value
//! is an expression, so a Monkey statement either binds a name, returns from a
//! function or wraps an expression.

use std::fmt::Display;

use crate::parser::expression::Expression;

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// `let <name> = <value>;`
	Let { name: String, value: Expression },
	/// A return statement, `return;` returns null.
	Return(Option<Expression>),
	/// An expression used as a statement.
	Expression(Expression),
}

/// A `{ ... }` sequence of statements, used by function bodies and `if`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStatement {
	pub statements: Vec<Statement>,
}

/// The root of every parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
	pub statements: Vec<Statement>,
}

impl Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Let { name, value } => write!(f, "let {name} = {value};"),
			Statement::Return(Some(value)) => write!(f, "return {value};"),
			Statement::Return(None) => write!(f, "return;"),
			Statement::Expression(expression) => write!(f, "{expression}"),
		}
	}
}

impl Display for BlockStatement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
	}
}

impl Display for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn program_display() {
		let program = Program {
			statements: vec![
				Statement::Let {
					name:  "myVar".to_string(),
					value: Expression::Identifier("anotherVar".to_string()),
				},
				Statement::Return(None),
			],
		};
		assert_eq!(program.to_string(), "let myVar = anotherVar;return;");
	}
}
