mod compiler;
mod instr;
mod program;

pub use self::compiler::compile;
pub use self::instr::{Op, Opcode};
pub use self::program::Program;
