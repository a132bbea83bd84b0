//! Boundary detection within a single line
//!
//! Whether a character stops a scan can depend on its neighbours: `>` is
//! part of an arrow after `=`, and a quote only stops a scan when it closes
//! a quote opened earlier on the same line.

use super::classify::{classify_char, CharClass};
use crate::constants::movement::ARROW_PREFIX;

/// Check whether the character at `index` forces a stop before it
///
/// # Arguments
/// * `line` - The characters of the line being scanned
/// * `index` - Column of the candidate character
///
/// # Returns
/// `true` for hard boundaries, for `>` outside an arrow, and for closing
/// quotes. `false` for everything else, including an `index` past the end.
///
/// # Examples
/// ```
/// use smartjump::movement::boundaries::is_boundary;
///
/// let line: Vec<char> = "x => f(y)".chars().collect();
/// assert!(!is_boundary(&line, 3)); // `>` of `=>`
/// assert!(is_boundary(&line, 8)); // `)`
/// ```
pub fn is_boundary(line: &[char], index: usize) -> bool {
    let Some(&c) = line.get(index) else {
        return false;
    };

    match classify_char(c) {
        CharClass::HardBoundary => true,
        CharClass::AngleClose => !is_arrow_head(line, index),
        CharClass::Quote => closes_quote(line, index),
        _ => false,
    }
}

/// Check if the `>` at `index` completes an arrow `=>`
pub fn is_arrow_head(line: &[char], index: usize) -> bool {
    index > 0 && line.get(index - 1) == Some(&ARROW_PREFIX)
}

/// Check if the quote at `index` closes a quote of the same kind
///
/// Counts the same quote character earlier on the line: an odd count means a
/// quote is open, so this one closes it.
pub fn closes_quote(line: &[char], index: usize) -> bool {
    let Some(&quote) = line.get(index) else {
        return false;
    };
    let seen = line[..index].iter().filter(|&&c| c == quote).count();
    seen % 2 == 1
}
