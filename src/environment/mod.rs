use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Object;

#[derive(Debug, Default)]
struct Scope {
	bindings: HashMap<String, Object>,
	outer:    Option<Environment>,
}

/// A chain of scopes. Clone the Environment, it's shallow copy: every clone
/// sees the same bindings, which is how closures share the scope they were
/// defined in.
#[derive(Debug, Clone, Default)]
pub struct Environment {
	inner: Rc<RefCell<Scope>>,
}

impl Environment {
	pub fn new() -> Self { Self::default() }

	/// A fresh scope whose lookups fall back to `outer`.
	pub fn enclosed(outer: &Environment) -> Self {
		Self { inner: Rc::new(RefCell::new(Scope { bindings: HashMap::new(), outer: Some(outer.clone()) })) }
	}

	/// Look `name` up in this scope, then outward.
	pub fn get(&self, name: &str) -> Option<Object> {
		let scope = self.inner.borrow();
		scope.bindings.get(name).cloned().or_else(|| scope.outer.as_ref().and_then(|outer| outer.get(name)))
	}

	/// Bind `name` in this scope only. A binding can also be used to redefine
	/// or shadow an existing name, outer scopes are never touched.
	pub fn set(&self, name: impl Into<String>, value: Object) -> Object {
		self.inner.borrow_mut().bindings.insert(name.into(), value.clone());
		value
	}
}
