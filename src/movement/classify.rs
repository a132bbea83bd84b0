//! Character classification for movement operations

use crate::constants::movement::{ANGLE_CLOSE, HARD_BOUNDARIES, QUOTES};

/// Character categories for jump boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII letters and digits
    Word,
    /// Whitespace characters (space, tab, etc.)
    Whitespace,
    /// Closing brackets: `)`, `]`, `}`
    HardBoundary,
    /// `>`, which depends on the character before it
    AngleClose,
    /// Quote characters: `'`, `"`, `` ` ``
    Quote,
    /// Any other symbol or punctuation
    Punctuation,
}

/// Classify a character for jump boundary detection
pub fn classify_char(c: char) -> CharClass {
    if is_word_char(c) {
        CharClass::Word
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else if HARD_BOUNDARIES.contains(&c) {
        CharClass::HardBoundary
    } else if c == ANGLE_CLOSE {
        CharClass::AngleClose
    } else if QUOTES.contains(&c) {
        CharClass::Quote
    } else {
        CharClass::Punctuation
    }
}

/// Check if a character is part of a word.
///
/// Locale independent: only `[A-Za-z0-9]` count.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Check if a string is non-empty and consists only of whitespace
pub fn is_blank(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}
