use crate::low_level::{add_assign_digits, sub_assign_digits, sub_assign_digits_reverse};
use crate::BigInt;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, other: &'a Self) {
        if self.negative == other.negative {
            add_assign_digits(&mut self.digits, &other.digits);
        } else {
            match self.cmp_abs(other) {
                Ordering::Greater => sub_assign_digits(&mut self.digits, &other.digits),
                Ordering::Equal => {
                    *self = BigInt::ZERO;
                    return;
                }
                Ordering::Less => {
                    sub_assign_digits_reverse(&mut self.digits, &other.digits);
                    self.negative = !self.negative;
                }
            }
        }
        self.normalize_in_place();
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, mut other: Self) {
        // Accumulate into whichever side already owns the longer buffer.
        if self.digits.len() < other.digits.len() {
            std::mem::swap(self, &mut other);
        }
        *self += &other;
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, other: &'a Self) {
        self.neg_in_place();
        *self += other;
        self.neg_in_place();
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, other: Self) {
        *self += -other;
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.neg_in_place();
        self
    }
}

// Every owned/borrowed operand combination funnels into the `*Assign` impls
// above, reusing an owned buffer when there is one.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign:ident) => {
        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(mut self, other: BigInt) -> BigInt {
                self.$assign(other);
                self
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, other: &'a BigInt) -> BigInt {
                self.$assign(other);
                self
            }
        }

        impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $method(self, other: &'b BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign(other);
                out
            }
        }
    };
}

forward_binop!(Add, add, add_assign);
forward_binop!(Sub, sub, sub_assign);

impl<'a> Add<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, mut other: BigInt) -> BigInt {
        other += self;
        other
    }
}

impl<'a> Sub<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, mut other: BigInt) -> BigInt {
        other -= self;
        -other
    }
}
