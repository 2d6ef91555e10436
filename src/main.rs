#[macro_use]
extern crate serde_derive;

use anyhow::{Context, Result};
use docopt::Docopt;
use std::fs::File;
use std::io::{Read, stdin};
use std::process::exit;
use tracing_subscriber::{EnvFilter, fmt};

use tapevm::{Config, Machine, Program, Runnable, compile};

const USAGE: &str = "
Tapevm

Usage:
  tapevm [--tape-size=<n>] <program>
  tapevm --dump <program>
  tapevm (-h | --help)

Options:
  -h --help          Show this screen.
  --dump             Display the compiled program instead of running it.
  --tape-size=<n>    Number of tape cells (overrides MEMORY_SIZE).
";

#[derive(Debug, Deserialize)]
struct Args {
    arg_program: String,
    flag_dump: bool,
    flag_tape_size: Option<usize>,
}

fn main() {
    init_logging();

    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let program = load_source(&args.arg_program)
        .and_then(|source| compile(&source).map_err(anyhow::Error::from))
        .unwrap_or_else(|e| {
            eprintln!("Error occurred while loading program: {e:#}");
            exit(1)
        });

    if args.flag_dump {
        print!("{program:?}");
        return;
    }

    if let Err(e) = run(&args, program) {
        eprintln!("Error occurred while running program: {e:#}");
        exit(1)
    }
}

/// Log to stderr so the program's own output on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args, program: Program) -> Result<()> {
    let config = match args.flag_tape_size {
        Some(length) => Config::with_tape_length(length),
        None => Config::from_env(),
    }
    .context("Invalid configuration")?;

    let mut machine = Machine::new(config);
    machine.load(program);
    machine.run()?;

    Ok(())
}

/// Read a program's source code.
///
/// When path is "-" this will read from stdin.
fn load_source(path: &str) -> Result<String> {
    let mut buffer = String::new();
    let mut source: Box<dyn Read> = if path == "-" {
        Box::new(stdin())
    } else {
        Box::new(File::open(path).with_context(|| format!("Could not open file: {path}"))?)
    };

    source
        .read_to_string(&mut buffer)
        .context("Could not read file")?;

    Ok(buffer)
}
