use std::{fmt::Debug, io::Write, rc::Rc};

use crate::{environment::Environment, error::interpreter::RuntimeError, interpreter::value::Object, statement::BlockStatement};

/// A native function. It gets the evaluated arguments and the interpreter's
/// output sink, and reports misuse through [`RuntimeError`].
pub type BuiltinFunction = fn(&[Object], &mut dyn Write) -> Result<Object, RuntimeError>;

/// A user function: the literal's parameters and body plus the environment it
/// was defined in.
pub struct Function {
	pub parameters: Rc<Vec<String>>,
	pub body:       Rc<BlockStatement>,
	pub env:        Environment,
}

// The captured environment can hold this very function, so it stays out of the
// debug output.
impl Debug for Function {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Function").field("parameters", &self.parameters).field("body", &self.body).finish()
	}
}

#[derive(Clone, Copy)]
pub struct Builtin {
	pub name:     &'static str,
	pub function: BuiltinFunction,
}

impl Debug for Builtin {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Builtin").field(&self.name).finish()
	}
}

impl Builtin {
	pub fn call(&self, arguments: &[Object], output: &mut dyn Write) -> Result<Object, RuntimeError> {
		(self.function)(arguments, output)
	}
}
