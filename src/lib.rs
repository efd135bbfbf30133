//! # Monkey
//!
//! A tree-walking interpreter for the Monkey programming language.
//!
//! ``` monkey
//! let newAdder = fn(x) { fn(y) { x + y } };
//! let addTwo = newAdder(2);
//! addTwo(3);
//! ```

//! ## Scanning
//!
//! The [`Scanner`] turns characters into tokens. Single characters `(`, `,`,
//! numbers `123`, string literals `"hi!"`, identifiers `addTwo` and keywords
//! `fn` `let` are all tokens. Whitespace is skipped, characters the language
//! doesn't know become `ILLEGAL` tokens and are left for the parser to reject.

//! ## Parsing
//!
//! The [`Parser`] builds the abstract syntax tree with top down operator
//! precedence, also known as Pratt parsing. `1 + 2 * 3` becomes
//!
//! ``` markdown
//! (1 + (2 * 3)) (Expression::Infix)
//! ├── 1 (Expression::IntegerLiteral)
//! └── * (Expression::Infix)
//!     ├── 2 (Expression::IntegerLiteral)
//!     └── 3 (Expression::IntegerLiteral)
//! ```
//!
//! Syntax errors are collected, not thrown: a program with errors is never
//! evaluated, but every error in it is reported.

//! ## Evaluation
//!
//! The [`Interpreter`] walks the tree right after parsing, there is no
//! bytecode. Names are resolved at runtime through a chain of
//! [`Environment`]s, and a function value keeps the environment it was created
//! in, which is what makes closures work.
//!
//! Runtime errors are values too, an [`Object::Error`] ends the program and is
//! what it evaluates to.

pub mod cli;
pub mod environment;
pub mod error;
pub mod interpreter;
mod monkey;
pub mod parser;
pub mod scanner;
pub mod statement;

pub use environment::Environment;
pub use error::{
	MonkeyError,
	interpreter::RuntimeError,
	parser::{ParseError, ParseErrorType},
};
pub use interpreter::{Interpreter, value::Object};
pub use monkey::Monkey;
pub use parser::Parser;
pub use scanner::Scanner;
