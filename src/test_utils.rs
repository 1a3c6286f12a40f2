use crate::BigInt;
use proptest::prelude::*;

/// `digits` is the range of decimal digit counts, before normalization.
pub fn any_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    (
        proptest::collection::vec(0u8..10, range),
        any::<bool>(),
    )
        .prop_map(|(digits, negative)| BigInt { digits, negative }.normalize())
}
pub fn nonnegative_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    proptest::collection::vec(0u8..10, range).prop_map(|digits| {
        BigInt {
            digits,
            negative: false,
        }
        .normalize()
    })
}
/// Non-negative values whose lowest digits are mostly zero, to drive the
/// trailing-zero path.
pub fn round_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    (nonnegative_bigint(range), 0usize..12).prop_map(|(num, zeros)| num.shifted(zeros))
}
/// Most-significant-first digit sequences, leading zeros allowed.
pub fn any_digit_seq(range: std::ops::Range<usize>) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..10, range)
}
pub fn from_i128(x: i128) -> BigInt {
    let magnitude = BigInt::from(x.unsigned_abs());
    if x < 0 {
        -magnitude
    } else {
        magnitude
    }
}
