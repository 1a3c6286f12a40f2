//! Exact multiplication of arbitrary-precision non-negative integers using
//! Karatsuba's divide-and-conquer algorithm over decimal digit sequences.

#[cfg(test)]
extern crate proptest;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub mod addsub;
pub mod digits;
pub mod error;
pub mod karatsuba;
pub mod low_level;
pub mod observer;
pub mod schoolbook_mul;
pub mod split;
#[cfg(test)]
mod test_utils;
pub mod zeros;

pub use digits::DigitSeq;
pub use error::{Error, Operand, ParseError};
pub use karatsuba::{karatsuba_mul, karatsuba_mul_digits};
pub use observer::{NoopObserver, Observer, TracingObserver};
pub use schoolbook_mul::schoolbook_mul;

/// Signed integer stored as little-endian decimal digits.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct BigInt {
    negative: bool,
    digits: Vec<u8>,
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.negative)
            .field("digits", &self.to_digit_seq().to_string())
            .finish()
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign_cmp = other.negative.cmp(&self.negative);
        if sign_cmp != Ordering::Equal {
            return sign_cmp;
        }
        if self.negative {
            other.cmp_abs(self)
        } else {
            self.cmp_abs(other)
        }
    }
}

impl BigInt {
    pub const ZERO: BigInt = BigInt {
        digits: Vec::new(),
        negative: false,
    };

    fn cmp_abs(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
    fn normalize_in_place(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.negative = false;
        }
    }
    fn normalize(mut self) -> Self {
        self.normalize_in_place();
        self
    }
    fn neg_in_place(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    pub fn from_u64(x: u64) -> Self {
        BigInt::from(x as u128)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of decimal digits in the magnitude; zero has one digit.
    pub fn digit_count(&self) -> usize {
        std::cmp::max(self.digits.len(), 1)
    }

    /// `self * 10^k`.
    pub fn shifted(&self, k: usize) -> BigInt {
        BigInt {
            digits: low_level::shifted_digits(&self.digits, k),
            negative: self.negative,
        }
    }

    /// Builds a non-negative value from most-significant-first digits.
    /// Leading zeros are accepted and dropped.
    pub fn from_digit_seq(seq: &[u8]) -> BigInt {
        BigInt {
            digits: seq.iter().rev().copied().collect(),
            negative: false,
        }
        .normalize()
    }

    /// Most-significant-first digits of the magnitude, `"0"` for zero.
    pub fn to_digit_seq(&self) -> DigitSeq {
        if self.is_zero() {
            return DigitSeq::zero();
        }
        DigitSeq::from_digits(self.digits.iter().rev().copied().collect())
    }
}

impl From<u128> for BigInt {
    fn from(mut x: u128) -> Self {
        let mut digits = Vec::new();
        while x != 0 {
            digits.push((x % low_level::RADIX as u128) as u8);
            x /= low_level::RADIX as u128;
        }
        BigInt {
            digits,
            negative: false,
        }
    }
}

impl From<u64> for BigInt {
    fn from(x: u64) -> Self {
        BigInt::from_u64(x)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        fmt::Display::fmt(&self.to_digit_seq(), f)
    }
}

impl FromStr for BigInt {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let offset = s.len() - body.len();
        let seq = digits::parse_digits(body, offset)?;
        let mut out = BigInt::from_digit_seq(&seq);
        if negative {
            out.neg_in_place();
        }
        Ok(out)
    }
}

/// Multiplies two non-negative integers, reporting intermediate values as
/// `tracing` events.
pub fn multiply(a: &BigInt, b: &BigInt) -> Result<BigInt, Error> {
    multiply_with(a, b, &TracingObserver)
}

#[tracing::instrument(skip_all, name = "karatsuba.multiply", fields(a_len = a.digit_count(), b_len = b.digit_count()))]
pub fn multiply_with<O: Observer>(a: &BigInt, b: &BigInt, observer: &O) -> Result<BigInt, Error> {
    if a.is_negative() {
        return Err(Error::NegativeOperand {
            operand: Operand::Left,
        });
    }
    if b.is_negative() {
        return Err(Error::NegativeOperand {
            operand: Operand::Right,
        });
    }
    let a = a.to_digit_seq();
    let b = b.to_digit_seq();
    Ok(karatsuba_mul_digits(&a, &b, observer))
}

/// Parses both operands as decimal integers, then multiplies them.
pub fn multiply_str(a: &str, b: &str) -> Result<BigInt, Error> {
    let a: BigInt = a.parse()?;
    let b: BigInt = b.parse()?;
    multiply(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    const PI_DIGITS: &str = "3141592653589793238462643383279502884197169399375105820974944592";
    const E_DIGITS: &str = "2718281828459045235360287471352662497757247093699959574966967627";
    const PI_TIMES_E: &str = "8539734222673567065463550869546574495034888535765114961879601127067743044893204848617875072216249073013374895871952806582723184";

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn hardcoded() {
        let cases = [
            ("1200", "340", "408000"),
            ("7", "123", "861"),
            ("9", "9", "81"),
            ("234500", "2423203", "568241103500"),
            ("0", "0", "0"),
            ("1000", "0", "0"),
        ];
        for &(a, b, expected) in cases.iter() {
            assert_eq!(multiply_str(a, b).unwrap(), big(expected), "{} * {}", a, b);
        }
    }

    #[test]
    fn large_operands() {
        let product = multiply(&big(PI_DIGITS), &big(E_DIGITS)).unwrap();
        assert_eq!(product.to_string(), PI_TIMES_E);

        let expected = PI_DIGITS.parse::<BigUint>().unwrap() * E_DIGITS.parse::<BigUint>().unwrap();
        assert_eq!(product.to_string(), expected.to_string());
    }

    #[test]
    fn rejects_negative_operands() {
        let err = multiply(&big("-3"), &big("4")).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeOperand {
                operand: Operand::Left
            }
        );
        let err = multiply_str("3", "-4").unwrap_err();
        assert_eq!(
            err,
            Error::NegativeOperand {
                operand: Operand::Right
            }
        );
        // Negative zero is just zero.
        assert_eq!(multiply_str("-0", "5").unwrap(), BigInt::ZERO);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            multiply_str("12a4", "3").unwrap_err(),
            Error::Parse(ParseError::InvalidDigit {
                index: 2,
                found: 'a'
            })
        );
        assert_eq!(
            multiply_str("-", "3").unwrap_err(),
            Error::Parse(ParseError::Empty)
        );
        assert_eq!(
            multiply_str("", "3").unwrap_err(),
            Error::Parse(ParseError::Empty)
        );
        assert_eq!(
            "-1x".parse::<BigInt>().unwrap_err(),
            ParseError::InvalidDigit {
                index: 2,
                found: 'x'
            }
        );
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(big("000120").to_string(), "120");
        assert_eq!(big("+7").to_string(), "7");
        assert_eq!(big("-0042").to_string(), "-42");
        assert_eq!(big("-0"), BigInt::ZERO);
        assert_eq!(BigInt::ZERO.to_string(), "0");
        assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
    }

    #[test]
    fn digit_count() {
        assert_eq!(BigInt::ZERO.digit_count(), 1);
        assert_eq!(big("-120").digit_count(), 3);
        assert_eq!(big(PI_DIGITS).digit_count(), 64);
    }

    #[test]
    fn ordering() {
        assert!(big("-10") < big("-9"));
        assert!(big("-1") < BigInt::ZERO);
        assert!(big("99") < big("100"));
        assert!(big("123") > big("122"));
    }

    proptest! {
        #[test]
        fn matches_native(a in any::<u64>(), b in any::<u64>()) {
            let product = multiply(&BigInt::from_u64(a), &BigInt::from_u64(b)).unwrap();
            assert_eq!(product, BigInt::from(a as u128 * b as u128));
        }
    }
    proptest! {
        #[test]
        fn matches_num_bigint(a in nonnegative_bigint(0..80), b in nonnegative_bigint(0..80)) {
            let product = multiply(&a, &b).unwrap();
            let expected = a.to_string().parse::<BigUint>().unwrap()
                * b.to_string().parse::<BigUint>().unwrap();
            assert_eq!(product.to_string(), expected.to_string());
        }
    }
    proptest! {
        #[test]
        fn zero_annihilates(a in nonnegative_bigint(0..40)) {
            assert_eq!(multiply(&a, &BigInt::ZERO).unwrap(), BigInt::ZERO);
            assert_eq!(multiply(&BigInt::ZERO, &a).unwrap(), BigInt::ZERO);
        }
    }
    proptest! {
        #[test]
        fn one_is_identity(a in nonnegative_bigint(0..40)) {
            assert_eq!(multiply(&a, &BigInt::from_u64(1)).unwrap(), a);
        }
    }
    proptest! {
        #[test]
        fn commutative(a in nonnegative_bigint(0..40), b in nonnegative_bigint(0..40)) {
            assert_eq!(multiply(&a, &b).unwrap(), multiply(&b, &a).unwrap());
        }
    }
    proptest! {
        #[test]
        fn display_round_trip(
            a in any_bigint(0..40),
            b in nonnegative_bigint(0..40),
            c in nonnegative_bigint(0..40),
            ) {
            assert_eq!(a.to_string().parse::<BigInt>().unwrap(), a);
            let product = multiply(&b, &c).unwrap();
            assert_eq!(product.to_string().parse::<BigInt>().unwrap(), product);
        }
    }
}
