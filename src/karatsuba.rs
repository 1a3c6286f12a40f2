use crate::digits::{add_digit_seqs, pad_to, DigitSeq};
use crate::low_level::add_assign_digits_slice;
use crate::observer::{NoopObserver, Observer};
use crate::schoolbook_mul::schoolbook_mul;
use crate::split::split_digits;
use crate::zeros::strip_trailing_zeros;
use crate::BigInt;
use std::borrow::Cow;

/// Operands shorter than this (after stripping trailing zeros) are
/// multiplied directly.
pub const MINIMUM_LENGTH: usize = 2;

/// Width, in digits, from which the three sub-products are computed on the
/// rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 64;

/// Multiplies the magnitudes of `l` and `r`; the sign follows the usual
/// rule.
pub fn karatsuba_mul(l: &BigInt, r: &BigInt) -> BigInt {
    let l_digits = l.to_digit_seq();
    let r_digits = r.to_digit_seq();
    let mut prod = karatsuba_mul_digits(&l_digits, &r_digits, &NoopObserver);
    if l.negative ^ r.negative {
        prod.neg_in_place();
    }
    prod
}

/// Multiplies two decimal digit sequences. Leading zeros are fine; raw
/// digit buffers go through [`DigitSeq::from_slice`] first.
pub fn karatsuba_mul_digits<O: Observer>(a: &DigitSeq, b: &DigitSeq, observer: &O) -> BigInt {
    karatsuba_rec(a.as_slice(), b.as_slice(), 0, observer)
}

fn strip_operand<'a, O: Observer>(
    digits: &'a [u8],
    zeros: &mut usize,
    depth: usize,
    observer: &O,
) -> &'a [u8] {
    if digits.last() != Some(&0) {
        return digits;
    }
    let (stripped, removed) = strip_trailing_zeros(digits);
    *zeros += removed;
    observer.stripped_zeros(depth, digits, stripped, removed, *zeros);
    stripped
}

fn karatsuba_rec<O: Observer>(a: &[u8], b: &[u8], depth: usize, observer: &O) -> BigInt {
    let mut zeros = 0;
    let a = strip_operand(a, &mut zeros, depth, observer);
    let b = strip_operand(b, &mut zeros, depth, observer);

    if std::cmp::min(a.len(), b.len()) < MINIMUM_LENGTH {
        let product =
            schoolbook_mul(&BigInt::from_digit_seq(a), &BigInt::from_digit_seq(b)).shifted(zeros);
        observer.base_case(depth, a, b, zeros, &product);
        return product;
    }

    let mut n = std::cmp::max(a.len(), b.len());
    let (a, b): (Cow<[u8]>, Cow<[u8]>) = if a.len() != b.len() || n % 2 != 0 {
        n += n % 2;
        let (a, b) = (pad_to(a, n), pad_to(b, n));
        observer.padded(depth, n, &a, &b);
        (Cow::Owned(a), Cow::Owned(b))
    } else {
        (Cow::Borrowed(a), Cow::Borrowed(b))
    };

    let m = n / 2;
    let (a1, a2) = split_digits(&a, m);
    let (b1, b2) = split_digits(&b, m);
    let a_sum = add_digit_seqs(a1, a2);
    let b_sum = add_digit_seqs(b1, b2);
    let [x, y, z] = sub_products(
        n,
        [(a1, b1), (a_sum.as_slice(), b_sum.as_slice()), (a2, b2)],
        depth + 1,
        observer,
    );

    // y - x - z = a1 * b2 + a2 * b1, never negative.
    let middle = &y - &x - &z;
    debug_assert!(!middle.is_negative());
    let mut digits = vec![0; zeros + 2 * n + 2];
    add_assign_digits_slice(&mut digits[zeros..], &z.digits);
    add_assign_digits_slice(&mut digits[zeros + m..], &middle.digits);
    add_assign_digits_slice(&mut digits[zeros + 2 * m..], &x.digits);
    let result = BigInt {
        digits,
        negative: false,
    }
    .normalize();
    observer.recombined(depth, m, &x, &y, &z, zeros, &result);
    result
}

#[cfg(not(feature = "parallel"))]
fn sub_products<O: Observer>(
    _width: usize,
    operands: [(&[u8], &[u8]); 3],
    depth: usize,
    observer: &O,
) -> [BigInt; 3] {
    let [(x_l, x_r), (y_l, y_r), (z_l, z_r)] = operands;
    [
        karatsuba_rec(x_l, x_r, depth, observer),
        karatsuba_rec(y_l, y_r, depth, observer),
        karatsuba_rec(z_l, z_r, depth, observer),
    ]
}

#[cfg(feature = "parallel")]
fn sub_products<O: Observer>(
    width: usize,
    operands: [(&[u8], &[u8]); 3],
    depth: usize,
    observer: &O,
) -> [BigInt; 3] {
    let [(x_l, x_r), (y_l, y_r), (z_l, z_r)] = operands;
    if width < PARALLEL_THRESHOLD {
        return [
            karatsuba_rec(x_l, x_r, depth, observer),
            karatsuba_rec(y_l, y_r, depth, observer),
            karatsuba_rec(z_l, z_r, depth, observer),
        ];
    }
    let (x, (y, z)) = rayon::join(
        || karatsuba_rec(x_l, x_r, depth, observer),
        || {
            rayon::join(
                || karatsuba_rec(y_l, y_r, depth, observer),
                || karatsuba_rec(z_l, z_r, depth, observer),
            )
        },
    );
    [x, y, z]
}
