//! Document-level jumps
//!
//! A jump is one raw scan step followed by empty-gap coalescing: a stop
//! reached only across whitespace (including blank lines) is skipped and
//! scanning continues from it.

use log::trace;

use super::boundaries::is_boundary;
use super::classify::{is_blank, is_word_char};
use crate::document::{Document, Position};
use crate::error::Result;

/// Find the next stop after `pos`
///
/// Words are crossed in one step and the stop lands right after them.
/// Punctuation and whitespace are skipped, except that the scan halts before
/// a boundary character (see [`is_boundary`]). Line ends are stops. At the end
/// of the document the result is `pos` itself.
///
/// # Errors
/// Fails when `pos` is not a valid position in `doc`.
///
/// # Examples
/// ```
/// use smartjump::{jump_forward, LineDocument, Position};
///
/// let doc = LineDocument::new("const foo = (bar: string) => {}");
/// assert_eq!(jump_forward(&doc, Position::new(0, 0)).unwrap(), Position::new(0, 5));
/// assert_eq!(jump_forward(&doc, Position::new(0, 24)).unwrap(), Position::new(0, 30));
/// ```
pub fn jump_forward<D: Document + ?Sized>(doc: &D, pos: Position) -> Result<Position> {
    doc.check_position(pos)?;

    let mut previous = pos;
    let mut next = step_forward(doc, pos)?;
    while next != previous && is_blank(&doc.text_between(previous, next)?) {
        let after = step_forward(doc, next)?;
        if after == next {
            break;
        }
        trace!("forward: skipping blank gap {} -> {}", previous, next);
        previous = next;
        next = after;
    }

    trace!("forward: {} -> {}", pos, next);
    Ok(next)
}

/// Find the previous stop before `pos`
///
/// Mirror image of [`jump_forward`]: the stop lands right after the previous
/// word or right before a boundary character. Reaching the start of a line
/// falls back to the end of the line above. At `(0, 0)` the result is `pos`.
///
/// A candidate whose own predecessor is separated from it by whitespace only
/// is passed over, so backward traversal skips the stops forward traversal
/// skips. A candidate on a blank line moves up to the end of the nearest line
/// with text.
///
/// # Errors
/// Fails when `pos` is not a valid position in `doc`.
pub fn jump_backward<D: Document + ?Sized>(doc: &D, pos: Position) -> Result<Position> {
    doc.check_position(pos)?;

    let mut next = step_backward(doc, pos)?;
    loop {
        let before = if is_blank_line(doc, next.line)? {
            end_of_text_above(doc, next.line)?
        } else {
            let before = step_backward(doc, next)?;
            if !is_blank(&doc.text_between(before, next)?) {
                break;
            }
            before
        };
        if before == next {
            break;
        }
        trace!("backward: skipping blank gap {} -> {}", before, next);
        next = before;
    }

    trace!("backward: {} -> {}", pos, next);
    Ok(next)
}

/// [`jump_forward`] taking a line and column
pub fn jump_forward_at<D: Document + ?Sized>(
    doc: &D,
    line: usize,
    column: usize,
) -> Result<Position> {
    jump_forward(doc, Position::new(line, column))
}

/// [`jump_backward`] taking a line and column
pub fn jump_backward_at<D: Document + ?Sized>(
    doc: &D,
    line: usize,
    column: usize,
) -> Result<Position> {
    jump_backward(doc, Position::new(line, column))
}

fn is_blank_line<D: Document + ?Sized>(doc: &D, line: usize) -> Result<bool> {
    Ok(doc.line(line)?.chars().all(char::is_whitespace))
}

/// End of the closest line above `line` that is not blank, or the document start
fn end_of_text_above<D: Document + ?Sized>(doc: &D, line: usize) -> Result<Position> {
    for above in (0..line).rev() {
        if !is_blank_line(doc, above)? {
            return Ok(Position::new(above, doc.line_len(above)?));
        }
    }
    Ok(Position::START)
}

fn line_chars<D: Document + ?Sized>(doc: &D, line: usize) -> Result<Vec<char>> {
    Ok(doc.line(line)?.chars().collect())
}

/// One raw forward scan, without gap coalescing
fn step_forward<D: Document + ?Sized>(doc: &D, pos: Position) -> Result<Position> {
    let mut line = pos.line;
    let mut chars = line_chars(doc, line)?;
    let mut column = pos.column;

    // Set once a word character has been consumed; the first non-word
    // character after it ends the step.
    let mut in_word;

    if column >= chars.len() {
        line += 1;
        if line >= doc.line_count() {
            return doc.end();
        }
        chars = line_chars(doc, line)?;
        column = 0;
        in_word = false;
    } else {
        // The character under the cursor is consumed even if it is a boundary
        in_word = is_word_char(chars[column]);
        column += 1;
    }

    while let Some(&c) = chars.get(column) {
        if is_word_char(c) {
            in_word = true;
        } else if in_word || is_boundary(&chars, column) {
            break;
        }
        column += 1;
    }

    Ok(Position::new(line, column))
}

/// One raw backward scan, without gap coalescing
///
/// `cursor` is the position being scanned; the character examined is the
/// one to its left.
fn step_backward<D: Document + ?Sized>(doc: &D, pos: Position) -> Result<Position> {
    let mut line = pos.line;
    let mut cursor = pos.column;

    if cursor == 0 {
        if line == 0 {
            return Ok(Position::START);
        }
        line -= 1;
        cursor = doc.line_len(line)?;
    }

    let chars = line_chars(doc, line)?;
    let mut past_word = false;

    // The first character of a line is never examined: reaching it lands on
    // the end of the line above.
    while cursor > 1 {
        let index = cursor - 1;
        let c = chars[index];
        if is_boundary(&chars, index) {
            return Ok(Position::new(line, index));
        }
        if !is_word_char(c) {
            past_word = true;
        } else if past_word {
            return Ok(Position::new(line, cursor));
        }
        cursor -= 1;
    }

    if line == 0 {
        return Ok(Position::START);
    }
    Ok(Position::new(line - 1, doc.line_len(line - 1)?))
}
