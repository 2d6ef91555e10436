//! Tape-and-pointer virtual machine.
//!
//! Source text made of the eight symbols `> < + - , . [ ]` is compiled into a
//! flat [`Program`] whose loop markers carry the index of their partner, then
//! executed by a [`Machine`] against a wrapping byte tape.
//!
//! ```
//! let mut output = Vec::new();
//! tapevm::execute("++++++[>++++++++++<-]>+++++.", std::io::empty(), &mut output).unwrap();
//! assert_eq!(output, b"A");
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod runnable;

use std::io::{Read, Write};

pub use config::Config;
pub use error::{Error, Result};
pub use parser::{Op, Opcode, Program, compile};
pub use runnable::{Machine, Runnable, Tape};

/// Compile `source` on a fresh machine and run it.
///
/// The tape length comes from `MEMORY_SIZE` when set, 30000 otherwise. An
/// invalid value fails with [`Error::InvalidTapeLength`] before compiling.
pub fn execute(source: &str, input: impl Read, output: impl Write) -> Result<()> {
    execute_with_config(Config::from_env()?, source, input, output)
}

/// Like [`execute`], with the configuration given explicitly instead of read
/// from the environment.
pub fn execute_with_config(
    config: Config,
    source: &str,
    input: impl Read,
    output: impl Write,
) -> Result<()> {
    let mut machine = Machine::with_io(config, input, output);
    machine.compile(source)?;
    machine.run()
}
