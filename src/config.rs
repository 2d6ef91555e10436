use std::env;

use crate::error::{Error, Result};

/// Number of cells on a tape unless configured otherwise.
pub const DEFAULT_TAPE_LENGTH: usize = 30_000;

/// Environment variable consulted by [`Config::from_env`].
pub const TAPE_LENGTH_VAR: &str = "MEMORY_SIZE";

/// Settings fixed at machine construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    tape_length: usize,
}

impl Config {
    pub fn with_tape_length(tape_length: usize) -> Result<Self> {
        if tape_length == 0 {
            return Err(Error::InvalidTapeLength {
                value: tape_length.to_string(),
            });
        }

        Ok(Self { tape_length })
    }

    /// Build a config from the process environment.
    ///
    /// Falls back to [`DEFAULT_TAPE_LENGTH`] when `MEMORY_SIZE` is unset.
    pub fn from_env() -> Result<Self> {
        match env::var(TAPE_LENGTH_VAR) {
            Ok(value) => Self::parse_tape_length(&value),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(raw)) => Err(Error::InvalidTapeLength {
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    fn parse_tape_length(value: &str) -> Result<Self> {
        let tape_length = value
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidTapeLength {
                value: value.to_owned(),
            })?;

        Self::with_tape_length(tape_length)
    }

    pub fn tape_length(&self) -> usize {
        self.tape_length
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tape_length: DEFAULT_TAPE_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_thirty_thousand() {
        assert_eq!(Config::default().tape_length(), 30_000);
    }

    #[test]
    fn zero_length_rejected() {
        let err = Config::with_tape_length(0).unwrap_err();
        assert!(matches!(err, Error::InvalidTapeLength { .. }));
    }

    #[test]
    fn parses_padded_numbers() {
        let config = Config::parse_tape_length(" 512\n").unwrap();
        assert_eq!(config.tape_length(), 512);
    }

    #[test]
    fn rejects_garbage_and_negatives() {
        assert!(Config::parse_tape_length("lots").is_err());
        assert!(Config::parse_tape_length("-4").is_err());
        assert!(Config::parse_tape_length("0").is_err());
    }
}
