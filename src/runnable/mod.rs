use crate::error::Result;

/// Simple interface for a type that can be invoked without any arguments and
/// with no return value beyond success or failure.
pub trait Runnable {
    /// Invoke this type.
    fn run(&mut self) -> Result<()>;
}

mod machine;
mod tape;
#[cfg(test)]
mod test_buffer;
#[cfg(test)]
pub use self::test_buffer::SharedBuffer;

pub use self::machine::Machine;
pub use self::tape::Tape;
