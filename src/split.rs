use crate::digits::{pad_to, DigitSeq};

/// Splits `digits` at boundary `m`, returning `(high, low)` where `low` is
/// the last `m` digits and `high` everything before it. Either half may be
/// empty when `m` is `0` or `digits.len()`.
pub fn split_digits(digits: &[u8], m: usize) -> (&[u8], &[u8]) {
    if m > digits.len() {
        panic!(
            "Attempted to split {} digits at boundary {}",
            digits.len(),
            m
        );
    }
    digits.split_at(digits.len() - m)
}

/// Splits at the midpoint. Odd-length sequences are left-padded with one
/// zero first, so both halves have the same length.
pub fn split_halves(seq: &DigitSeq) -> (DigitSeq, DigitSeq) {
    let digits = seq.as_slice();
    let width = digits.len() + digits.len() % 2;
    let padded = pad_to(digits, width);
    let (high, low) = split_digits(&padded, width / 2);
    (
        DigitSeq::from_digits(high.to_vec()),
        DigitSeq::from_digits(low.to_vec()),
    )
}
