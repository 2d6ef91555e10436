use crate::config::Config;

/// Fixed-length, zero-initialized byte memory with a data pointer.
///
/// Both the cell values and the pointer wrap: cells modulo 256, the pointer
/// modulo the tape length. Neither ever faults.
#[derive(Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    /// Data pointer
    dp: usize,
}

impl Tape {
    /// Zeroed tape sized by `config`, which guarantees a non-zero length.
    pub fn new(config: Config) -> Self {
        Tape {
            cells: vec![0u8; config.tape_length()],
            dp: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn pointer(&self) -> usize {
        self.dp
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn current(&self) -> u8 {
        self.cells[self.dp]
    }

    pub fn set(&mut self, value: u8) {
        self.cells[self.dp] = value;
    }

    pub fn increment(&mut self) {
        self.cells[self.dp] = self.cells[self.dp].wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.cells[self.dp] = self.cells[self.dp].wrapping_sub(1);
    }

    pub fn move_right(&mut self) {
        self.dp = if self.dp + 1 == self.cells.len() {
            0
        } else {
            self.dp + 1
        };
    }

    pub fn move_left(&mut self) {
        self.dp = match self.dp.checked_sub(1) {
            Some(dp) => dp,
            None => self.cells.len() - 1,
        };
    }

    /// Zero every cell and return the pointer to cell 0.
    pub fn reset(&mut self) {
        self.cells.fill(0);
        self.dp = 0;
    }
}

impl std::fmt::Debug for Tape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // Skip the long run of zeroes at the end of the tape.
        let used = self
            .cells
            .iter()
            .rposition(|&cell| cell != 0)
            .map_or(0, |last| last + 1);

        f.debug_struct("Tape")
            .field("len", &self.cells.len())
            .field("dp", &self.dp)
            .field("cells", &&self.cells[..used])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tape_of(length: usize) -> Tape {
        Tape::new(Config::with_tape_length(length).unwrap())
    }

    #[test]
    fn starts_zeroed() {
        let tape = tape_of(16);
        assert_eq!(tape.len(), 16);
        assert_eq!(tape.pointer(), 0);
        assert!(tape.cells().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn default_config_gives_full_tape() {
        let tape = Tape::new(Config::default());
        assert_eq!(tape.len(), 30_000);
        assert_eq!(tape.current(), 0);
    }

    #[test]
    fn zero_length_tape_cannot_be_configured() {
        assert!(Config::with_tape_length(0).is_err());
    }

    #[test]
    fn decrement_from_zero_wraps_to_255() {
        let mut tape = tape_of(4);
        tape.decrement();
        assert_eq!(tape.current(), 255);
    }

    #[test]
    fn increment_256_times_is_identity() {
        let mut tape = tape_of(4);
        tape.set(42);

        for _ in 0..256 {
            tape.increment();
        }

        assert_eq!(tape.current(), 42);
    }

    #[test]
    fn move_right_from_last_cell_wraps() {
        let mut tape = tape_of(3);
        tape.move_right();
        tape.move_right();
        assert_eq!(tape.pointer(), 2);

        tape.move_right();
        assert_eq!(tape.pointer(), 0);
    }

    #[test]
    fn move_left_from_first_cell_wraps() {
        let mut tape = tape_of(3);
        tape.move_left();
        assert_eq!(tape.pointer(), 2);
    }

    #[test]
    fn single_cell_tape_stays_put() {
        let mut tape = tape_of(1);
        tape.move_right();
        assert_eq!(tape.pointer(), 0);
        tape.move_left();
        assert_eq!(tape.pointer(), 0);
    }

    #[test]
    fn reset_clears_cells_and_pointer() {
        let mut tape = tape_of(8);
        tape.increment();
        tape.move_right();
        tape.set(9);

        tape.reset();

        assert_eq!(tape, tape_of(8));
    }

    #[test]
    fn debug_trims_trailing_zeroes() {
        let mut tape = tape_of(30_000);
        tape.move_right();
        tape.increment();

        assert_eq!(format!("{tape:?}"), "Tape { len: 30000, dp: 1, cells: [0, 1] }");
    }
}
