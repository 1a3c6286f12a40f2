//! Carry/borrow primitives over little-endian decimal digit vectors.

pub const RADIX: u8 = 10;

fn add_digits_with_carry(x: u8, y: u8, carry: bool) -> (u8, bool) {
    let sum = x + y + carry as u8;
    if sum >= RADIX {
        (sum - RADIX, true)
    } else {
        (sum, false)
    }
}

fn sub_digits_with_borrow(x: u8, y: u8, borrow: bool) -> (u8, bool) {
    let sub = y + borrow as u8;
    if x >= sub {
        (x - sub, false)
    } else {
        (x + RADIX - sub, true)
    }
}

pub fn add_to_digits(x: u8, digits: &mut [u8]) {
    let (res, carry) = add_digits_with_carry(digits[0], x, false);
    digits[0] = res;
    if carry {
        add_to_digits(1, &mut digits[1..]);
    }
}

pub fn sub_from_digits(x: u8, digits: &mut [u8]) {
    let (res, borrow) = sub_digits_with_borrow(digits[0], x, false);
    digits[0] = res;
    if borrow {
        sub_from_digits(1, &mut digits[1..]);
    }
}

pub fn add_assign_digits(target: &mut Vec<u8>, other: &[u8]) {
    let target_len = std::cmp::max(target.len(), other.len()) + 1;
    target.resize(target_len, 0);
    add_assign_digits_slice(&mut *target, other);
}

pub fn add_assign_digits_slice(target: &mut [u8], other: &[u8]) {
    let mut carry = false;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let (res, c) = add_digits_with_carry(*target_digit, other_digit, carry);
        *target_digit = res;
        carry = c;
    }
    if carry {
        add_to_digits(1, &mut target[other.len()..]);
    }
}

// Precondition: target >= other
pub fn sub_assign_digits(target: &mut [u8], other: &[u8]) {
    let mut borrow = false;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let (res, b) = sub_digits_with_borrow(*target_digit, other_digit, borrow);
        *target_digit = res;
        borrow = b;
    }
    if borrow {
        sub_from_digits(1, &mut target[other.len()..]);
    }
}

// Precondition: target <= other
pub fn sub_assign_digits_reverse(target: &mut Vec<u8>, other: &[u8]) {
    target.resize(other.len(), 0);
    let mut borrow = false;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let (res, b) = sub_digits_with_borrow(other_digit, *target_digit, borrow);
        *target_digit = res;
        borrow = b;
    }
    assert!(!borrow);
}

/// Adds `x * other` into `target`, which must have room for the carry out.
pub fn add_mul_digit_to_digits(x: u8, other: &[u8], target: &mut [u8]) {
    if x == 0 {
        return;
    }
    let mut carry = 0u8;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let prod = x * other_digit + *target_digit + carry;
        *target_digit = prod % RADIX;
        carry = prod / RADIX;
    }
    if carry != 0 {
        add_to_digits(carry, &mut target[other.len()..]);
    }
}

/// Little-endian digits of `digits * 10^shift`.
pub fn shifted_digits(digits: &[u8], shift: usize) -> Vec<u8> {
    if digits.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0; shift + digits.len()];
    out[shift..].copy_from_slice(digits);
    out
}
