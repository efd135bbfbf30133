use crate::{
	interpreter::value::ObjectType,
	parser::expression::{InfixOperator, PrefixOperator},
};

/// Errors that can occur during evaluation. They surface to the user as
/// `ERROR: <message>` values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
	/// Operands of an infix expression have different types
	#[error("type mismatch: {left} {operator} {right}")]
	TypeMismatch { left: ObjectType, operator: InfixOperator, right: ObjectType },
	/// Prefix operator applied to an operand it does not support
	#[error("unknown operator: {operator}{right}")]
	UnknownPrefixOperator { operator: PrefixOperator, right: ObjectType },
	/// Infix operator that the operand type does not support
	#[error("unknown operator: {left} {operator} {right}")]
	UnknownInfixOperator { left: ObjectType, operator: InfixOperator, right: ObjectType },
	#[error("division by zero")]
	DivisionByZero,
	#[error("identifier not found: {0}")]
	IdentifierNotFound(String),
	#[error("not a function: {0}")]
	NotAFunction(ObjectType),
	#[error("unusable as hash key: {0}")]
	UnusableHashKey(ObjectType),
	#[error("index operator not supported: {0}")]
	IndexNotSupported(ObjectType),
	/// Builtin called with the wrong number of arguments
	#[error("wrong number of arguments. got={got}, want={want}")]
	WrongArgumentCount { got: usize, want: usize },
	#[error("argument to `{function}` not supported, got {got}")]
	UnsupportedArgument { function: &'static str, got: ObjectType },
	#[error("argument to `{function}` must be ARRAY, got {got}")]
	ExpectedArray { function: &'static str, got: ObjectType },
	/// `puts` could not write to its output
	#[error("failed to write output: {0}")]
	Output(String),
}
