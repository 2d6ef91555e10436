use std::fmt;
use std::ops::Index;
use std::slice;

use super::Opcode;

/// Compiled instruction sequence. Loop markers address their partners by
/// index into this sequence.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Program {
    data: Vec<Opcode>,
}

impl Program {
    pub(super) fn new(data: Vec<Opcode>) -> Self {
        Program { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Opcode> {
        self.data.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Opcode> {
        self.data.iter()
    }
}

impl Index<usize> for Program {
    type Output = Opcode;

    fn index(&self, index: usize) -> &Opcode {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Opcode;
    type IntoIter = slice::Iter<'a, Opcode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Addr\tInstr\tOperands")?;

        for opcode in &self.data {
            match opcode.target() {
                Some(target) => writeln!(f, "0x{:04X}\t{}\t0x{:04X}", opcode.index, opcode.op, target)?,
                None => writeln!(f, "0x{:04X}\t{}", opcode.index, opcode.op)?,
            }
        }

        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::super::compile;

    #[test]
    fn listing_shows_jump_targets() {
        let program = compile("+[-]").unwrap();
        let listing = format!("{program:?}");

        assert!(listing.starts_with("Addr\tInstr\tOperands\n"));
        assert!(listing.contains("0x0001\t[\t0x0003\n"));
        assert!(listing.contains("0x0003\t]\t0x0001\n"));
        assert!(listing.contains("0x0000\t+\n"));
    }
}
