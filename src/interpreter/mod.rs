//! Monkey tree-walking interpreter.
//!
//! The interpreter walks the abstract syntax tree (AST) produced by the parser,
//! recursively evaluating each node against an [`Environment`] and computing
//! its runtime value.
//!
//! # Expression Types
//!
//! - **Literals**: integers, booleans, strings, arrays, hashes
//! - **Prefix**: `-` (negation), `!` (logical NOT)
//! - **Infix**: `+`, `-`, `*`, `/`, `<`, `>`, `==`, `!=`
//! - **If**: conditional expression yielding the value of the taken branch
//! - **Functions**: closures over their defining environment, and calls
//! - **Index**: `array[i]` and `hash[key]`
//!
//! Every step returns `Result<_, Signal>`. A `return` statement or a runtime
//! error unwinds through `?` until it reaches the enclosing function call (for
//! returns) or the top of the program.

pub mod builtins;
pub mod callable;
pub mod value;

use std::{
	collections::HashMap,
	io::{Stdout, Write},
	rc::Rc,
};

use Expression::*;
use tracing::{debug, trace};
use value::{HashPair, Object};

use crate::{
	environment::Environment,
	error::interpreter::RuntimeError,
	interpreter::{builtins::Builtins, callable::Function},
	parser::expression::{Expression, InfixOperator, PrefixOperator},
	statement::{BlockStatement, Program, Statement},
};

/// Why evaluation stopped before producing a value.
#[derive(Debug)]
enum Signal {
	/// A `return` statement, unwrapped at the function boundary.
	Return(Object),
	/// A runtime error, never caught.
	Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
	fn from(error: RuntimeError) -> Self { Signal::Error(error) }
}

/// Interpreter that evaluates Monkey programs. `puts` writes to `output`.
pub struct Interpreter<W: Write = Stdout> {
	builtins: Builtins,
	output:   W,
}

impl Interpreter {
	pub fn new() -> Self { Self::with_output(std::io::stdout()) }
}

impl Default for Interpreter {
	fn default() -> Self { Self::new() }
}

impl<W: Write> Interpreter<W> {
	pub fn with_output(output: W) -> Self { Self { builtins: Builtins::new(), output } }

	pub fn output(&mut self) -> &mut W { &mut self.output }

	pub fn into_output(self) -> W { self.output }

	/// Evaluate a program. `None` means there is nothing to show, e.g. the
	/// program ended with a `let`. Runtime errors come back as
	/// [`Object::Error`].
	pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Option<Object> {
		match self.eval_statements(&program.statements, env) {
			Ok(value) => value,
			Err(Signal::Return(value)) => Some(value),
			Err(Signal::Error(error)) => {
				debug!(%error, "evaluation failed");
				Some(Object::Error(error))
			}
		}
	}

	fn eval_statements(&mut self, statements: &[Statement], env: &Environment) -> Result<Option<Object>, Signal> {
		let mut result = None;
		for statement in statements {
			result = self.eval_statement(statement, env)?;
		}
		Ok(result)
	}

	fn eval_statement(&mut self, statement: &Statement, env: &Environment) -> Result<Option<Object>, Signal> {
		match statement {
			Statement::Let { name, value } => {
				let value = self.evaluate(value, env)?;
				env.set(name.as_str(), value);
				Ok(None)
			}
			Statement::Return(value) => {
				let value = match value {
					Some(expression) => self.evaluate(expression, env)?,
					None => Object::Null,
				};
				Err(Signal::Return(value))
			}
			Statement::Expression(expression) => self.evaluate(expression, env).map(Some),
		}
	}

	/// A block that yields nothing is `null` in expression position.
	fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> Result<Object, Signal> {
		Ok(self.eval_statements(&block.statements, env)?.unwrap_or(Object::Null))
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&mut self, expr: &Expression, env: &Environment) -> Result<Object, Signal> {
		Ok(match expr {
			Identifier(name) => self.lookup(name, env)?,
			IntegerLiteral(value) => Object::Integer(*value),
			StringLiteral(value) => Object::Str(value.clone()),
			Boolean(value) => Object::Boolean(*value),
			Prefix { operator, right } => {
				let right = self.evaluate(right, env)?;
				eval_prefix(*operator, &right)?
			}
			Infix { left, operator, right } => {
				let left = self.evaluate(left, env)?;
				let right = self.evaluate(right, env)?;
				eval_infix(*operator, &left, &right)?
			}
			If { condition, consequence, alternative } => {
				if self.evaluate(condition, env)?.is_truthy() {
					self.eval_block(consequence, env)?
				} else if let Some(alternative) = alternative {
					self.eval_block(alternative, env)?
				} else {
					Object::Null
				}
			}
			FunctionLiteral { parameters, body } => {
				Object::Function(Rc::new(Function { parameters: parameters.clone(), body: body.clone(), env: env.clone() }))
			}
			Call { function, arguments } => {
				let callee = self.evaluate(function, env)?;
				let arguments = self.evaluate_all(arguments, env)?;
				self.apply(callee, arguments)?
			}
			ArrayLiteral(elements) => Object::Array(Rc::new(self.evaluate_all(elements, env)?)),
			Index { left, index } => {
				let left = self.evaluate(left, env)?;
				let index = self.evaluate(index, env)?;
				eval_index(&left, &index)?
			}
			HashLiteral(pairs) => self.eval_hash_literal(pairs, env)?,
		})
	}

	/// Evaluate left to right, stopping at the first error.
	fn evaluate_all(&mut self, expressions: &[Expression], env: &Environment) -> Result<Vec<Object>, Signal> {
		expressions.iter().map(|expression| self.evaluate(expression, env)).collect()
	}

	/// The environment chain first, then the builtins.
	fn lookup(&self, name: &str, env: &Environment) -> Result<Object, RuntimeError> {
		env.get(name)
			.or_else(|| self.builtins.get(name).map(Object::Builtin))
			.ok_or_else(|| RuntimeError::IdentifierNotFound(name.to_string()))
	}

	fn apply(&mut self, callee: Object, arguments: Vec<Object>) -> Result<Object, Signal> {
		match callee {
			Object::Function(function) => {
				trace!(parameters = ?function.parameters, arguments = arguments.len(), "calling function");
				// Arity is not checked: extra arguments are dropped and missing
				// parameters stay unbound.
				let env = Environment::enclosed(&function.env);
				for (parameter, argument) in function.parameters.iter().zip(arguments) {
					env.set(parameter.as_str(), argument);
				}
				match self.eval_block(&function.body, &env) {
					Err(Signal::Return(value)) => Ok(value),
					result => result,
				}
			}
			Object::Builtin(builtin) => {
				trace!(name = builtin.name, arguments = arguments.len(), "calling builtin");
				Ok(builtin.call(&arguments, &mut self.output)?)
			}
			other => Err(RuntimeError::NotAFunction(other.r#type()).into()),
		}
	}

	/// Duplicate keys keep the last value.
	fn eval_hash_literal(&mut self, pairs: &[(Expression, Expression)], env: &Environment) -> Result<Object, Signal> {
		let mut hash = HashMap::with_capacity(pairs.len());
		for (key, value) in pairs {
			let key = self.evaluate(key, env)?;
			let hash_key = key.hash_key()?;
			let value = self.evaluate(value, env)?;
			hash.insert(hash_key, HashPair { key, value });
		}
		Ok(Object::Hash(Rc::new(hash)))
	}
}

fn eval_prefix(operator: PrefixOperator, right: &Object) -> Result<Object, RuntimeError> {
	match (operator, right) {
		(PrefixOperator::Bang, right) => Ok(Object::Boolean(!right.is_truthy())),
		(PrefixOperator::Minus, Object::Integer(value)) => Ok(Object::Integer(value.wrapping_neg())),
		(PrefixOperator::Minus, right) => Err(RuntimeError::UnknownPrefixOperator { operator, right: right.r#type() }),
	}
}

fn eval_infix(operator: InfixOperator, left: &Object, right: &Object) -> Result<Object, RuntimeError> {
	use InfixOperator::*;

	let unknown_operator =
		|| RuntimeError::UnknownInfixOperator { left: left.r#type(), operator, right: right.r#type() };

	match (left, right) {
		(Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
		(Object::Str(l), Object::Str(r)) => match operator {
			Plus => Ok(Object::Str(format!("{l}{r}"))),
			Equal => Ok(Object::Boolean(l == r)),
			NotEqual => Ok(Object::Boolean(l != r)),
			_ => Err(unknown_operator()),
		},
		(Object::Boolean(l), Object::Boolean(r)) => match operator {
			Equal => Ok(Object::Boolean(l == r)),
			NotEqual => Ok(Object::Boolean(l != r)),
			_ => Err(unknown_operator()),
		},
		_ if left.r#type() != right.r#type() => {
			Err(RuntimeError::TypeMismatch { left: left.r#type(), operator, right: right.r#type() })
		}
		_ => match operator {
			Equal => Ok(Object::Boolean(left.is_same_object(right))),
			NotEqual => Ok(Object::Boolean(!left.is_same_object(right))),
			_ => Err(unknown_operator()),
		},
	}
}

/// Two's-complement wrapping arithmetic. Division truncates toward zero.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Result<Object, RuntimeError> {
	use InfixOperator::*;

	Ok(match operator {
		Plus => Object::Integer(left.wrapping_add(right)),
		Minus => Object::Integer(left.wrapping_sub(right)),
		Asterisk => Object::Integer(left.wrapping_mul(right)),
		Slash => {
			if right == 0 {
				return Err(RuntimeError::DivisionByZero);
			}
			Object::Integer(left.wrapping_div(right))
		}
		Less => Object::Boolean(left < right),
		Greater => Object::Boolean(left > right),
		Equal => Object::Boolean(left == right),
		NotEqual => Object::Boolean(left != right),
	})
}

/// Out of range array indexes and missing hash keys give `null`.
fn eval_index(left: &Object, index: &Object) -> Result<Object, RuntimeError> {
	match (left, index) {
		(Object::Array(elements), Object::Integer(i)) => {
			Ok(usize::try_from(*i).ok().and_then(|i| elements.get(i)).cloned().unwrap_or(Object::Null))
		}
		(Object::Hash(pairs), key) => {
			Ok(pairs.get(&key.hash_key()?).map(|pair| pair.value.clone()).unwrap_or(Object::Null))
		}
		_ => Err(RuntimeError::IndexNotSupported(left.r#type())),
	}
}
