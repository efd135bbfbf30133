//! Native functions available to every program.
//!
//! They are looked up only after the environment chain, so a user binding with
//! the same name hides the builtin.

use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
	error::interpreter::RuntimeError,
	interpreter::{
		callable::{Builtin, BuiltinFunction},
		value::Object,
	},
};

/// The builtin registry owned by an interpreter.
#[derive(Debug, Clone)]
pub struct Builtins {
	table: HashMap<&'static str, Builtin>,
}

impl Default for Builtins {
	fn default() -> Self { Self::new() }
}

impl Builtins {
	pub fn new() -> Self {
		const TABLE: [(&str, BuiltinFunction); 6] =
			[("len", len), ("first", first), ("last", last), ("rest", rest), ("push", push), ("puts", puts)];

		Self { table: TABLE.into_iter().map(|(name, function)| (name, Builtin { name, function })).collect() }
	}

	pub fn get(&self, name: &str) -> Option<Builtin> { self.table.get(name).copied() }
}

fn check_arity(arguments: &[Object], want: usize) -> Result<(), RuntimeError> {
	if arguments.len() == want {
		Ok(())
	} else {
		Err(RuntimeError::WrongArgumentCount { got: arguments.len(), want })
	}
}

/// The single argument of an array builtin.
fn array_argument<'o>(function: &'static str, arguments: &'o [Object]) -> Result<&'o Rc<Vec<Object>>, RuntimeError> {
	match &arguments[0] {
		Object::Array(elements) => Ok(elements),
		other => Err(RuntimeError::ExpectedArray { function, got: other.r#type() }),
	}
}

fn len(arguments: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
	check_arity(arguments, 1)?;
	let length = match &arguments[0] {
		Object::Str(s) => s.len(),
		Object::Array(elements) => elements.len(),
		other => return Err(RuntimeError::UnsupportedArgument { function: "len", got: other.r#type() }),
	};
	Ok(Object::Integer(length as i64))
}

fn first(arguments: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
	check_arity(arguments, 1)?;
	let elements = array_argument("first", arguments)?;
	Ok(elements.first().cloned().unwrap_or(Object::Null))
}

fn last(arguments: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
	check_arity(arguments, 1)?;
	let elements = array_argument("last", arguments)?;
	Ok(elements.last().cloned().unwrap_or(Object::Null))
}

/// Everything but the first element, as a new array.
fn rest(arguments: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
	check_arity(arguments, 1)?;
	let elements = array_argument("rest", arguments)?;
	Ok(match elements.split_first() {
		Some((_, tail)) => Object::Array(Rc::new(tail.to_vec())),
		None => Object::Null,
	})
}

/// A new array with the element appended, the argument is left untouched.
fn push(arguments: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
	check_arity(arguments, 2)?;
	let elements = array_argument("push", arguments)?;
	let mut pushed = Vec::with_capacity(elements.len() + 1);
	pushed.extend_from_slice(elements);
	pushed.push(arguments[1].clone());
	Ok(Object::Array(Rc::new(pushed)))
}

fn puts(arguments: &[Object], output: &mut dyn Write) -> Result<Object, RuntimeError> {
	for argument in arguments {
		writeln!(output, "{argument}").map_err(|e| RuntimeError::Output(e.to_string()))?;
	}
	Ok(Object::Null)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interpreter::value::ObjectType;

	fn call(name: &str, arguments: &[Object]) -> Result<Object, RuntimeError> {
		let builtin = Builtins::new().get(name).unwrap();
		builtin.call(arguments, &mut Vec::new())
	}

	fn array(elements: &[i64]) -> Object { Object::Array(Rc::new(elements.iter().copied().map(Object::Integer).collect())) }

	#[test]
	fn registry_contents() {
		let builtins = Builtins::new();
		for name in ["len", "first", "last", "rest", "push", "puts"] {
			assert_eq!(builtins.get(name).map(|builtin| builtin.name), Some(name));
		}
		assert!(builtins.get("print").is_none());
	}

	#[test]
	fn len_builtin() {
		assert_eq!(call("len", &[Object::Str("hello".to_string())]), Ok(Object::Integer(5)));
		assert_eq!(call("len", &[Object::Str(String::new())]), Ok(Object::Integer(0)));
		assert_eq!(call("len", &[array(&[1, 2, 3])]), Ok(Object::Integer(3)));
		assert_eq!(
			call("len", &[Object::Integer(1)]),
			Err(RuntimeError::UnsupportedArgument { function: "len", got: ObjectType::Integer })
		);
		assert_eq!(
			call("len", &[Object::Null, Object::Null]).map_err(|e| e.to_string()),
			Err("wrong number of arguments. got=2, want=1".to_string())
		);
	}

	#[test]
	fn array_builtins() {
		assert_eq!(call("first", &[array(&[1, 2, 3])]), Ok(Object::Integer(1)));
		assert_eq!(call("first", &[array(&[])]), Ok(Object::Null));
		assert_eq!(call("last", &[array(&[1, 2, 3])]), Ok(Object::Integer(3)));
		assert_eq!(call("last", &[array(&[])]), Ok(Object::Null));
		assert_eq!(call("rest", &[array(&[1, 2, 3])]), Ok(array(&[2, 3])));
		assert_eq!(call("rest", &[array(&[1])]), Ok(array(&[])));
		assert_eq!(call("rest", &[array(&[])]), Ok(Object::Null));
		assert_eq!(call("push", &[array(&[]), Object::Integer(1)]), Ok(array(&[1])));
		assert_eq!(
			call("first", &[Object::Integer(1)]).map_err(|e| e.to_string()),
			Err("argument to `first` must be ARRAY, got INTEGER".to_string())
		);
		assert_eq!(
			call("push", &[Object::Integer(1), Object::Integer(1)]),
			Err(RuntimeError::ExpectedArray { function: "push", got: ObjectType::Integer })
		);
		assert_eq!(call("push", &[array(&[])]), Err(RuntimeError::WrongArgumentCount { got: 1, want: 2 }));
	}

	#[test]
	fn push_leaves_argument_untouched() {
		let original = array(&[1, 2]);
		let pushed = call("push", &[original.clone(), Object::Integer(3)]);
		assert_eq!(pushed, Ok(array(&[1, 2, 3])));
		assert_eq!(original, array(&[1, 2]));
	}

	#[test]
	fn puts_writes_each_argument() {
		let mut output = Vec::new();
		let builtin = Builtins::new().get("puts").unwrap();
		let result = builtin.call(&[Object::Str("hello".to_string()), array(&[1, 2])], &mut output);
		assert_eq!(result, Ok(Object::Null));
		assert_eq!(String::from_utf8(output).unwrap(), "hello\n[1, 2]\n");
	}
}
