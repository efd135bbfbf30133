use std::{
	fs::read_to_string,
	io::{BufRead, Write},
	path::Path,
};

use anyhow::Context;
use tracing::debug;

use crate::{
	MonkeyError,
	environment::Environment,
	error::parser::ParseError,
	interpreter::{Interpreter, value::Object},
	parser::Parser,
};

const PROMPT: &str = ">> ";

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Monkey is the entry point that drives source through the parser and the
/// interpreter.
pub struct Monkey;

impl Monkey {
	/// Run a whole source file. `puts` output goes to stdout.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MonkeyError> {
		let path = path.as_ref();
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		self.run_with_output(&source, std::io::stdout()).map(|_| ())
	}

	/// Evaluate one piece of source and hand back its value.
	pub fn run_source(&self, source: &str) -> Result<Option<Object>, MonkeyError> {
		self.run_with_output(source, std::io::stdout())
	}

	/// Like [`Monkey::run_source`], with `puts` writing to `output`. A runtime
	/// error is returned as [`MonkeyError::RuntimeError`].
	pub fn run_with_output<W: Write>(&self, source: &str, output: W) -> Result<Option<Object>, MonkeyError> {
		let program = Parser::from_source(source).parse()?;
		let mut interpreter = Interpreter::with_output(output);
		match interpreter.eval_program(&program, &Environment::new()) {
			Some(Object::Error(error)) => Err(error.into()),
			result => {
				interpreter.output().flush()?;
				Ok(result)
			}
		}
	}

	/// Run the REPL on stdin and stdout.
	pub fn run_prompt(&self) {
		let stdin = std::io::stdin();
		let mut stdout = std::io::stdout();
		println!("Hello! This is the Monkey programming language!");
		println!("Feel free to type in commands");
		if let Err(e) = self.start(stdin.lock(), &mut stdout) {
			eprintln!("Failed run prompt: {e}");
		}
		println!("\nExited monkey repl");
	}

	/// The read-eval-print loop. Every line is parsed on its own and evaluated
	/// against one environment, so bindings carry over from line to line.
	/// Returns at end of input.
	pub fn start<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<(), MonkeyError> {
		let env = Environment::new();
		let mut interpreter = Interpreter::with_output(output);
		let mut lines = input.lines();
		loop {
			write!(interpreter.output(), "{PROMPT}")?;
			interpreter.output().flush()?;
			let Some(line) = lines.next().transpose()? else {
				return Ok(());
			};

			let mut parser = Parser::from_source(&line);
			let program = parser.parse_program();
			if !parser.errors().is_empty() {
				debug!(errors = parser.errors().len(), "skipping evaluation");
				print_parser_errors(interpreter.output(), parser.errors())?;
				continue;
			}

			if let Some(value) = interpreter.eval_program(&program, &env) {
				writeln!(interpreter.output(), "{value}")?;
			}
		}
	}
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> std::io::Result<()> {
	write!(output, "{MONKEY_FACE}")?;
	writeln!(output, "Woops! We ran into some monkey business here!")?;
	writeln!(output, " parser errors:")?;
	for error in errors {
		writeln!(output, "\t{error}")?;
	}
	Ok(())
}
