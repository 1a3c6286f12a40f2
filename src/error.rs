use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty digit sequence")]
    Empty,
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
    #[error("digit value {value} at position {index} is not in 0..=9")]
    DigitOutOfRange { index: usize, value: u8 },
}

/// Which side of `a * b` an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => f.write_str("left"),
            Operand::Right => f.write_str("right"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Parse Error: {0}")]
    Parse(#[from] ParseError),
    #[error("Negative Operand: {operand} operand must be non-negative")]
    NegativeOperand { operand: Operand },
}
