//! Changing lines.
//!
//! A line is "old" and changes into its opposite when the digit that cast it
//! is `6` or `9`. All other lines are carried over unchanged.

use crate::lines::LineSequence;

/// Digits that mark a changing line.
pub const CHANGING_DIGITS: [u8; 2] = [b'6', b'9'];

fn is_changing(digit: u8) -> bool {
    CHANGING_DIGITS.contains(&digit)
}

/// Derive the changed line sequence.
///
/// `digits` must be the string the lines were cast from; positions are
/// matched one to one.
pub fn mutate(lines: &LineSequence, digits: &str) -> LineSequence {
    let mut changed = *lines;
    for (line, d) in changed.iter_mut().zip(digits.bytes()) {
        if is_changing(d) {
            *line = line.flipped();
        }
    }
    changed
}

/// Zero-based positions of the changing lines.
pub fn changing_positions(digits: &str) -> Vec<usize> {
    digits
        .bytes()
        .enumerate()
        .filter(|(_, d)| is_changing(*d))
        .map(|(i, _)| i)
        .collect()
}
