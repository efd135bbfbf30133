use std::{collections::HashMap, fmt::Display, rc::Rc};

use Object::*;

use crate::{
	error::interpreter::RuntimeError,
	interpreter::callable,
	parser::expression::join,
};

/// Object represents a runtime value in Monkey.
///
/// Arrays and hashes are never mutated once built, so they sit behind `Rc` and
/// cloning an object is cheap for everything but strings.
#[derive(Debug, Clone)]
pub enum Object {
	Integer(i64),
	Boolean(bool),
	Str(String),
	Null,
	Array(Rc<Vec<Object>>),
	Hash(Rc<HashMap<HashKey, HashPair>>),
	Function(Rc<callable::Function>),
	Builtin(callable::Builtin),
	/// The result of a failed evaluation.
	Error(RuntimeError),
}

/// The type tag of an [`Object`], as shown in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
	Integer,
	Boolean,
	String,
	Null,
	Array,
	Hash,
	Function,
	Builtin,
	Error,
}

/// Key of a hash entry. Equal values always produce equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
	pub r#type: ObjectType,
	pub value:  u64,
}

/// A hash entry keeps the original key object so it can be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
	pub key:   Object,
	pub value: Object,
}

impl Object {
	pub fn r#type(&self) -> ObjectType {
		match self {
			Integer(_) => ObjectType::Integer,
			Boolean(_) => ObjectType::Boolean,
			Str(_) => ObjectType::String,
			Null => ObjectType::Null,
			Array(_) => ObjectType::Array,
			Hash(_) => ObjectType::Hash,
			Function(_) => ObjectType::Function,
			Builtin(_) => ObjectType::Builtin,
			Error(_) => ObjectType::Error,
		}
	}

	/// Only `false` and `null` are falsy, `0` and `""` are truthy.
	pub fn is_truthy(&self) -> bool { !matches!(self, Null | Boolean(false)) }

	/// Integers, booleans and strings can key a hash.
	pub fn hash_key(&self) -> Result<HashKey, RuntimeError> {
		let value = match self {
			Integer(i) => *i as u64,
			Boolean(b) => u64::from(*b),
			Str(s) => fnv1a(s.as_bytes()),
			_ => return Err(RuntimeError::UnusableHashKey(self.r#type())),
		};
		Ok(HashKey { r#type: self.r#type(), value })
	}

	/// Identity comparison for values that have no structural `==`.
	pub fn is_same_object(&self, other: &Self) -> bool {
		match (self, other) {
			(Null, Null) => true,
			(Array(l), Array(r)) => Rc::ptr_eq(l, r),
			(Hash(l), Hash(r)) => Rc::ptr_eq(l, r),
			(Function(l), Function(r)) => Rc::ptr_eq(l, r),
			(Builtin(l), Builtin(r)) => l.name == r.name,
			_ => false,
		}
	}
}

/// 64-bit FNV-1a.
fn fnv1a(bytes: &[u8]) -> u64 {
	const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
	const PRIME: u64 = 0x0100_0000_01b3;

	bytes.iter().fold(OFFSET_BASIS, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(PRIME))
}

/// Structural equality, used by tests and by hash pair comparison. The
/// language's own `==` lives in the evaluator.
impl PartialEq for Object {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Integer(l), Integer(r)) => l == r,
			(Boolean(l), Boolean(r)) => l == r,
			(Str(l), Str(r)) => l == r,
			(Array(l), Array(r)) => l == r,
			(Hash(l), Hash(r)) => l == r,
			(Error(l), Error(r)) => l == r,
			_ => self.is_same_object(other),
		}
	}
}

impl Display for ObjectType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			ObjectType::Integer => "INTEGER",
			ObjectType::Boolean => "BOOLEAN",
			ObjectType::String => "STRING",
			ObjectType::Null => "NULL",
			ObjectType::Array => "ARRAY",
			ObjectType::Hash => "HASH",
			ObjectType::Function => "FUNCTION",
			ObjectType::Builtin => "BUILTIN",
			ObjectType::Error => "ERROR",
		};
		write!(f, "{name}")
	}
}

/// The `inspect` form printed by the REPL.
impl Display for Object {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Integer(i) => write!(f, "{i}"),
			Boolean(b) => write!(f, "{b}"),
			Str(s) => write!(f, "{s}"),
			Null => write!(f, "null"),
			Array(elements) => write!(f, "[{}]", join(elements.iter())),
			Hash(pairs) => {
				write!(f, "{{{}}}", join(pairs.values().map(|pair| format!("{}: {}", pair.key, pair.value))))
			}
			Function(function) => write!(f, "fn({}) {{\n{}\n}}", function.parameters.join(", "), function.body),
			Builtin(_) => write!(f, "builtin function"),
			Error(error) => write!(f, "ERROR: {error}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn string(value: &str) -> Object { Str(value.to_string()) }

	#[test]
	fn string_hash_keys() {
		let hello1 = string("Hello World");
		let hello2 = string("Hello World");
		let diff1 = string("My name is johnny");
		let diff2 = string("My name is johnny");

		assert_eq!(hello1.hash_key(), hello2.hash_key());
		assert_eq!(diff1.hash_key(), diff2.hash_key());
		assert_ne!(hello1.hash_key(), diff1.hash_key());
	}

	#[test]
	fn fnv1a_reference_values() {
		assert_eq!(fnv1a(b""), 0xcbf29ce484222325);
		assert_eq!(fnv1a(b"a"), 0xaf63dc4c8601ec8c);
	}

	#[test]
	fn hash_keys_are_type_tagged() {
		assert_eq!(Integer(1).hash_key(), Ok(HashKey { r#type: ObjectType::Integer, value: 1 }));
		assert_eq!(Boolean(true).hash_key(), Ok(HashKey { r#type: ObjectType::Boolean, value: 1 }));
		assert_ne!(Integer(1).hash_key(), Boolean(true).hash_key());
		assert_eq!(Integer(-1).hash_key().map(|key| key.value), Ok(u64::MAX));
	}

	#[test]
	fn unhashable_objects() {
		assert_eq!(Null.hash_key(), Err(RuntimeError::UnusableHashKey(ObjectType::Null)));
		assert_eq!(
			Array(Rc::new(vec![])).hash_key(),
			Err(RuntimeError::UnusableHashKey(ObjectType::Array))
		);
	}

	#[test]
	fn truthiness() {
		assert!(!Null.is_truthy());
		assert!(!Boolean(false).is_truthy());
		assert!(Boolean(true).is_truthy());
		assert!(Integer(0).is_truthy());
		assert!(string("").is_truthy());
		assert!(Array(Rc::new(vec![])).is_truthy());
	}

	#[test]
	fn inspect() {
		assert_eq!(Integer(-42).to_string(), "-42");
		assert_eq!(Boolean(false).to_string(), "false");
		assert_eq!(Null.to_string(), "null");
		assert_eq!(string("hi there").to_string(), "hi there");
		assert_eq!(Array(Rc::new(vec![Integer(1), string("two"), Null])).to_string(), "[1, two, null]");
		assert_eq!(Array(Rc::new(vec![])).to_string(), "[]");
		assert_eq!(Error(RuntimeError::IdentifierNotFound("x".to_string())).to_string(), "ERROR: identifier not found: x");

		let key = string("a");
		let pairs = HashMap::from([(key.hash_key().unwrap(), HashPair { key, value: Integer(1) })]);
		assert_eq!(Hash(Rc::new(pairs)).to_string(), "{a: 1}");
	}

	#[test]
	fn type_names() {
		assert_eq!(Integer(1).r#type().to_string(), "INTEGER");
		assert_eq!(string("").r#type().to_string(), "STRING");
		assert_eq!(Hash(Rc::new(HashMap::new())).r#type().to_string(), "HASH");
	}
}
