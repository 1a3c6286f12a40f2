//! Hooks for watching the recursion without changing its result.
//!
//! Digit slices passed to the hooks are most-significant-first, exactly as
//! the recursion sees them (padding zeros included). `depth` is 0 for the
//! top-level call.

use crate::digits::DigitStr;
use crate::BigInt;
use tracing::{debug, trace};

/// Receives intermediate values of a Karatsuba multiplication. Every hook
/// defaults to doing nothing.
///
/// With the `parallel` feature the hooks of sibling sub-products may run
/// concurrently, hence `Sync`.
pub trait Observer: Sync {
    /// Trailing zeros were removed from one operand. `total` is the running
    /// count for this call, including the other operand's zeros.
    fn stripped_zeros(
        &self,
        _depth: usize,
        _before: &[u8],
        _after: &[u8],
        _removed: usize,
        _total: usize,
    ) {
    }

    fn base_case(&self, _depth: usize, _a: &[u8], _b: &[u8], _zeros: usize, _product: &BigInt) {}

    /// Both operands were left-padded to `width`.
    fn padded(&self, _depth: usize, _width: usize, _a: &[u8], _b: &[u8]) {}

    /// `result = (10^2m * x + 10^m * (y - x - z) + z) * 10^zeros`
    #[allow(clippy::too_many_arguments)]
    fn recombined(
        &self,
        _depth: usize,
        _m: usize,
        _x: &BigInt,
        _y: &BigInt,
        _z: &BigInt,
        _zeros: usize,
        _result: &BigInt,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Emits every hook as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn stripped_zeros(&self, depth: usize, before: &[u8], after: &[u8], removed: usize, total: usize) {
        debug!(
            depth,
            before = %DigitStr(before),
            after = %DigitStr(after),
            removed,
            total,
            "stripped trailing zeros"
        );
    }

    fn base_case(&self, depth: usize, a: &[u8], b: &[u8], zeros: usize, product: &BigInt) {
        trace!(
            depth,
            a = %DigitStr(a),
            b = %DigitStr(b),
            zeros,
            %product,
            "base case"
        );
    }

    fn padded(&self, depth: usize, width: usize, a: &[u8], b: &[u8]) {
        debug!(depth, width, a = %DigitStr(a), b = %DigitStr(b), "padded operands");
    }

    fn recombined(
        &self,
        depth: usize,
        m: usize,
        x: &BigInt,
        y: &BigInt,
        z: &BigInt,
        zeros: usize,
        result: &BigInt,
    ) {
        trace!(depth, m, %x, %y, %z, zeros, %result, "recombined");
    }
}
