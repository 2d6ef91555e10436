//! Errors raised while compiling or running a program.

use std::io;

use thiserror::Error;

/// Library result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A `]` was found with no open `[` pending.
    #[error("unmatched ] at source offset {offset}")]
    UnmatchedClose { offset: usize },

    /// The source ended with `count` loops still open. `offset` points at the
    /// innermost one.
    #[error("{count} unmatched [, innermost at source offset {offset}")]
    UnmatchedOpen { offset: usize, count: usize },

    /// A `,` executed after the input stream ran dry.
    #[error("input exhausted at pc 0x{pc:04X}")]
    InputExhausted { pc: usize },

    #[error("invalid tape length {value:?}: must be a positive integer")]
    InvalidTapeLength { value: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this is one of the compile-time loop balancing failures.
    pub fn is_unbalanced_loop(&self) -> bool {
        matches!(self, Error::UnmatchedClose { .. } | Error::UnmatchedOpen { .. })
    }
}
