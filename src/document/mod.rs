//! Document abstraction
//! A read-only, line-indexed view of text that the movement scanner walks over
//!
//! ## Indexing model
//!
//! Lines are 0-based. Columns are **code-point based** (Unicode scalar values),
//! so a column is a position between two characters of a line. Column `len`
//! denotes the end of the line. Line text never includes its newline.

use std::fmt;
use std::path::Path;

use log::debug;

use crate::error::{JumpError, Result};

/// A location between two characters of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Start of the document
    pub const START: Position = Position { line: 0, column: 0 };

    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self {
        Self { line, column }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.line, pos.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Read-only view of a line-indexed document.
///
/// Implementors only provide [`line_count`](Document::line_count) and
/// [`line_at`](Document::line_at); everything else is derived.
pub trait Document {
    /// Number of lines. Always at least 1.
    fn line_count(&self) -> usize;

    /// Text of `line` without its newline, or `None` when the index is outside
    /// `[0, line_count)`.
    fn line_at(&self, line: usize) -> Option<&str>;

    /// Text of `line`, treating an absent line as a range error.
    fn line(&self, line: usize) -> Result<&str> {
        self.line_at(line)
            .ok_or_else(|| JumpError::line_out_of_range(line, self.line_count()))
    }

    /// Length of `line` in code points.
    fn line_len(&self, line: usize) -> Result<usize> {
        Ok(self.line(line)?.chars().count())
    }

    /// End of the last line.
    fn end(&self) -> Result<Position> {
        let last = self.line_count().saturating_sub(1);
        Ok(Position::new(last, self.line_len(last)?))
    }

    /// Fails unless `pos` names an existing line and a column within it.
    fn check_position(&self, pos: Position) -> Result<()> {
        let len = self.line_len(pos.line)?;
        if pos.column > len {
            return Err(JumpError::column_out_of_range(pos.line, pos.column, len));
        }
        Ok(())
    }

    /// Text strictly between two positions. Lines crossed on the way are joined
    /// with `\n`, so the result can span any number of lines.
    fn text_between(&self, from: Position, to: Position) -> Result<String> {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };

        let first = self.line(from.line)?;
        if from.line == to.line {
            return Ok(slice_columns(first, from.column, Some(to.column)).to_string());
        }

        let mut text = slice_columns(first, from.column, None).to_string();
        for line in from.line + 1..to.line {
            text.push('\n');
            text.push_str(self.line(line)?);
        }
        text.push('\n');
        text.push_str(slice_columns(self.line(to.line)?, 0, Some(to.column)));
        Ok(text)
    }
}

/// Slice `text` by code-point columns. Columns past the end clamp to the end.
fn slice_columns(text: &str, start: usize, end: Option<usize>) -> &str {
    let byte = |column: usize| {
        text.char_indices()
            .nth(column)
            .map_or(text.len(), |(offset, _)| offset)
    };
    let start = byte(start);
    let end = end.map_or(text.len(), byte);
    if start >= end {
        ""
    } else {
        &text[start..end]
    }
}

impl<S: AsRef<str>> Document for [S] {
    fn line_count(&self) -> usize {
        self.len().max(1)
    }

    fn line_at(&self, line: usize) -> Option<&str> {
        match self.get(line) {
            Some(text) => Some(text.as_ref()),
            // An empty slice still reads as a single empty line
            None if line == 0 && self.is_empty() => Some(""),
            None => None,
        }
    }
}

impl<S: AsRef<str>> Document for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line_at(&self, line: usize) -> Option<&str> {
        self.as_slice().line_at(line)
    }
}

/// An owned, in-memory document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDocument {
    lines: Vec<String>,
}

impl LineDocument {
    /// Split `text` into lines on `\n`, dropping a `\r` before each newline.
    ///
    /// A trailing newline yields a final empty line, the way an editor shows it.
    pub fn new(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    /// Build a document from lines that are already split
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    /// Load a UTF-8 file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let doc = Self::new(&text);
        debug!(
            "loaded {} ({} lines, {} bytes)",
            path.display(),
            doc.lines.len(),
            text.len()
        );
        Ok(doc)
    }

    /// All lines of the document
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Default for LineDocument {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for LineDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for LineDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

impl Document for LineDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_at(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }
}
