use std::io::{self, Read, Write};

use tracing::debug;

use super::{Runnable, Tape};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::parser::{self, Op, Program};

/// Tape machine: a byte tape, the compiled program and the program counter.
///
/// The I/O streams live as long as `'io`, so a machine can borrow them from
/// its caller for a single run or own them (`'static`) across many.
pub struct Machine<'io> {
    program: Program,
    tape: Tape,
    /// Program counter
    pc: usize,
    /// Reader used by the , instruction
    io_read: Box<dyn Read + 'io>,
    /// Writer used by the . instruction
    io_write: Box<dyn Write + 'io>,
}

impl Machine<'static> {
    /// Fresh machine wired to the process's stdin and stdout.
    pub fn new(config: Config) -> Self {
        Machine::with_io(config, io::stdin(), io::stdout())
    }
}

impl<'io> Machine<'io> {
    pub fn with_io(config: Config, input: impl Read + 'io, output: impl Write + 'io) -> Self {
        Machine {
            program: Program::default(),
            tape: Tape::new(config),
            pc: 0,
            io_read: Box::new(input),
            io_write: Box::new(output),
        }
    }

    /// Clear the machine and load a freshly compiled program.
    ///
    /// On failure the machine is left cleared with an empty program.
    pub fn compile(&mut self, source: &str) -> Result<()> {
        self.clear();
        self.program = parser::compile(source)?;
        Ok(())
    }

    /// Load an already compiled program, clearing prior state first.
    pub fn load(&mut self, program: Program) {
        self.clear();
        self.program = program;
    }

    /// Zero the tape and return the data pointer and program counter to 0.
    pub fn reset(&mut self) {
        self.tape.reset();
        self.pc = 0;
    }

    /// Reset and discard the loaded program.
    pub fn clear(&mut self) {
        self.reset();
        self.program = Program::default();
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Execute a single instruction on the machine.
    ///
    /// Returns Ok(true) to continue execution, Ok(false) once the program
    /// counter has left the program, or Err(_) on I/O failure.
    pub fn step(&mut self) -> Result<bool> {
        // Terminate if the program counter is outside of the program.
        let Some(&opcode) = self.program.get(self.pc) else {
            return Ok(false);
        };
        let current = self.tape.current();

        self.pc = match opcode.op {
            Op::MoveRight => {
                self.tape.move_right();
                opcode.index + 1
            }
            Op::MoveLeft => {
                self.tape.move_left();
                opcode.index + 1
            }
            Op::Increment => {
                self.tape.increment();
                opcode.index + 1
            }
            Op::Decrement => {
                self.tape.decrement();
                opcode.index + 1
            }
            Op::Read => {
                let mut buf = [0u8; 1];
                match self.io_read.read_exact(&mut buf) {
                    Ok(()) => self.tape.set(buf[0]),
                    Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                        debug!(pc = opcode.index, "read past end of input");
                        return Err(Error::InputExhausted { pc: opcode.index });
                    }
                    Err(error) => return Err(error.into()),
                }
                opcode.index + 1
            }
            Op::Write => {
                self.io_write.write_all(&[current])?;
                opcode.index + 1
            }
            Op::LoopOpen(target) => {
                if current == 0 {
                    target
                } else {
                    opcode.index + 1
                }
            }
            Op::LoopClose(target) => {
                if current == 0 {
                    opcode.index + 1
                } else {
                    target
                }
            }
        };

        Ok(self.pc < self.program.len())
    }
}

impl Runnable for Machine<'_> {
    fn run(&mut self) -> Result<()> {
        debug!(opcodes = self.program.len(), tape = self.tape.len(), "run started");
        self.pc = 0;

        let result = loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(error) => break Err(error),
            }
        };

        // Output written before a failure still reaches the sink.
        self.io_write.flush()?;
        debug!(tape = ?self.tape, "run finished");
        result
    }
}
