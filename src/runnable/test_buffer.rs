use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Writeable buffer that tracks what was written to it. Clones share the same
/// storage, so a test can hand one to a machine and read from the other.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_content(&self) -> Vec<u8> {
        self.inner.borrow().clone()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        self.inner.borrow_mut().flush()
    }
}
