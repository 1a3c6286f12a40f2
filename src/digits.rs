use crate::error::ParseError;
use crate::low_level::RADIX;
use crate::BigInt;
use std::fmt;

/// Decimal digits, most significant first. Never empty; leading zeros are
/// kept because they carry width during the recursion.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct DigitSeq {
    digits: Vec<u8>,
}

impl DigitSeq {
    pub fn zero() -> Self {
        DigitSeq { digits: vec![0] }
    }

    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_digits(s, 0).map(DigitSeq::from_digits)
    }

    /// Checks raw digit values, most significant first.
    pub fn from_slice(digits: &[u8]) -> Result<Self, ParseError> {
        if digits.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some(index) = digits.iter().position(|&d| d >= RADIX) {
            return Err(ParseError::DigitOutOfRange {
                index,
                value: digits[index],
            });
        }
        Ok(DigitSeq::from_digits(digits.to_vec()))
    }

    // Callers guarantee a non-empty vector of values in 0..=9.
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| d < RADIX));
        DigitSeq { digits }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    pub fn to_bigint(&self) -> BigInt {
        BigInt::from_digit_seq(&self.digits)
    }
}

impl fmt::Display for DigitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DigitStr(&self.digits), f)
    }
}

impl fmt::Debug for DigitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSeq({})", self)
    }
}

/// Displays a most-significant-first digit slice verbatim, leading zeros
/// included. Only built over digits the crate has already validated.
pub(crate) struct DigitStr<'a>(pub(crate) &'a [u8]);

impl fmt::Display for DigitStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|&d| char::from(b'0' + d)).collect();
        f.pad(&s)
    }
}

/// Parses ASCII digits. `offset` is added to reported error positions so
/// callers that strip a sign prefix still point into their own input.
pub(crate) fn parse_digits(s: &str, offset: usize) -> Result<Vec<u8>, ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    s.char_indices()
        .map(|(index, c)| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(ParseError::InvalidDigit {
                index: index + offset,
                found: c,
            }),
        })
        .collect()
}

/// Left-pads `digits` with zeros up to `width`.
pub fn pad_to(digits: &[u8], width: usize) -> Vec<u8> {
    let mut out = vec![0; width.saturating_sub(digits.len())];
    out.extend_from_slice(digits);
    out
}

/// Numeric sum of two digit slices, without redundant leading zeros.
pub fn add_digit_seqs(a: &[u8], b: &[u8]) -> DigitSeq {
    let width = std::cmp::max(a.len(), b.len()) + 1;
    let mut sum = vec![0; width];
    let mut carry = 0;
    // Walk both inputs from the least significant end.
    let mut a_iter = a.iter().rev();
    let mut b_iter = b.iter().rev();
    for out in sum.iter_mut().rev() {
        let a_digit = a_iter.next().copied().unwrap_or(0);
        let b_digit = b_iter.next().copied().unwrap_or(0);
        let total = a_digit + b_digit + carry;
        *out = total % RADIX;
        carry = total / RADIX;
    }
    let first_nonzero = sum.iter().position(|&d| d != 0).unwrap_or(width - 1);
    sum.drain(..first_nonzero);
    DigitSeq::from_digits(sum)
}
