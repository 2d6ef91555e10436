use std::fmt;

/// Tape machine operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Shift the data pointer to the right.
    MoveRight,
    /// Shift the data pointer to the left.
    MoveLeft,
    /// Add one to the current memory cell.
    Increment,
    /// Remove one from the current memory cell.
    Decrement,
    /// Read one byte from the input stream into the current cell.
    Read,
    /// Write the current memory cell to the output stream.
    Write,
    /// If the current memory cell is 0, jump to the matching `LoopClose`.
    LoopOpen(usize),
    /// If the current memory cell is not 0, jump back to the matching `LoopOpen`.
    LoopClose(usize),
}

impl Op {
    /// Map a source character to its operation. Loop targets are left at 0
    /// and must be patched by the compiler.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '>' => Some(Op::MoveRight),
            '<' => Some(Op::MoveLeft),
            '+' => Some(Op::Increment),
            '-' => Some(Op::Decrement),
            ',' => Some(Op::Read),
            '.' => Some(Op::Write),
            '[' => Some(Op::LoopOpen(0)),
            ']' => Some(Op::LoopClose(0)),
            // All other characters are comments
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::MoveRight => '>',
            Op::MoveLeft => '<',
            Op::Increment => '+',
            Op::Decrement => '-',
            Op::Read => ',',
            Op::Write => '.',
            Op::LoopOpen(_) => '[',
            Op::LoopClose(_) => ']',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operation together with its own position in the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub index: usize,
    pub op: Op,
}

impl Opcode {
    pub fn new(index: usize, op: Op) -> Self {
        Opcode { index, op }
    }

    /// Jump target for loop markers.
    pub fn target(&self) -> Option<usize> {
        match self.op {
            Op::LoopOpen(target) | Op::LoopClose(target) => Some(target),
            _ => None,
        }
    }
}
