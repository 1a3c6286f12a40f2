use crate::low_level::add_mul_digit_to_digits;
use crate::BigInt;

pub fn schoolbook_mul(l: &BigInt, r: &BigInt) -> BigInt {
    if l.is_zero() || r.is_zero() {
        return BigInt::ZERO;
    }
    let mut digits = vec![0; l.digits.len() + r.digits.len() + 1];
    for (i, &l_digit) in l.digits.iter().enumerate() {
        add_mul_digit_to_digits(l_digit, &r.digits, &mut digits[i..]);
    }
    let negative = l.negative ^ r.negative;
    BigInt { digits, negative }.normalize()
}
