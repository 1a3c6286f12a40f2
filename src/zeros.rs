const ZERO: &[u8] = &[0];

/// Removes trailing zero digits, returning what is left and how many were
/// removed. An all-zero input yields `[0]` rather than an empty slice.
pub fn strip_trailing_zeros(digits: &[u8]) -> (&[u8], usize) {
    let kept = digits
        .iter()
        .rposition(|&d| d != 0)
        .map_or(0, |last_nonzero| last_nonzero + 1);
    let removed = digits.len() - kept;
    if kept == 0 {
        (ZERO, removed)
    } else {
        (&digits[..kept], removed)
    }
}
