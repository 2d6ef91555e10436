use tracing::debug;

use super::{Op, Opcode, Program};
use crate::error::{Error, Result};

/// A `[` waiting for its `]`.
struct PendingOpen {
    /// Position of the `LoopOpen` in the emitted program.
    index: usize,
    /// Character offset of the `[` in the source, kept for diagnostics.
    offset: usize,
}

/// Convert source text into a program with every loop jump resolved.
///
/// Characters outside the instruction set are ignored and take no slot in the
/// program.
pub fn compile(source: &str) -> Result<Program> {
    let mut output: Vec<Opcode> = Vec::new();
    let mut loops: Vec<PendingOpen> = Vec::new();

    for (offset, character) in source.chars().enumerate() {
        let Some(op) = Op::from_symbol(character) else {
            continue;
        };
        let index = output.len();

        match op {
            Op::LoopOpen(_) => {
                loops.push(PendingOpen { index, offset });
                // Target is patched once the matching ] shows up.
                output.push(Opcode::new(index, Op::LoopOpen(index)));
            }
            Op::LoopClose(_) => {
                let open = loops.pop().ok_or(Error::UnmatchedClose { offset })?;

                output[open.index].op = Op::LoopOpen(index);
                output.push(Opcode::new(index, Op::LoopClose(open.index)));
            }
            _ => output.push(Opcode::new(index, op)),
        }
    }

    if let Some(innermost) = loops.last() {
        // Example program that will cause this error:
        //
        // [[]
        return Err(Error::UnmatchedOpen {
            offset: innermost.offset,
            count: loops.len(),
        });
    }

    debug!(opcodes = output.len(), "compiled program");
    Ok(Program::new(output))
}
