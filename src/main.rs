use monkey::cli::*;
use palc::Parser;

/// Logs go to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
	use tracing_subscriber::{EnvFilter, fmt, prelude::*};

	if std::env::var("RUST_LOG").is_ok() {
		tracing_subscriber::registry()
			.with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
			.with(EnvFilter::from_default_env())
			.init();
	}
}

fn main() {
	init_tracing();
	let monkey = monkey::Monkey;

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = monkey.run_file(&path) {
				eprintln!("Failed run file: {e}");
				std::process::exit(1);
			}
		}
		Mode::Repl => monkey.run_prompt(),
		Mode::Eval { source } => match monkey.run_source(&source) {
			Ok(Some(value)) => println!("{value}"),
			Ok(None) => {}
			Err(e) => {
				eprintln!("Failed eval: {e}");
				std::process::exit(1);
			}
		},
	}
}
