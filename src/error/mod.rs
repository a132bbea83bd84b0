//! Error types for smartjump
//! Defines the error categories and the structured error returned by fallible operations

use std::fmt;

use crate::constants::errors;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// File system or I/O errors while loading a document
    Io,
    /// A line or column outside the document was requested
    Range,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Range => write!(f, "Range"),
        }
    }
}

/// A structured error in smartjump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpError {
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "LINE_OUT_OF_RANGE")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl JumpError {
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// A line index outside `[0, line_count)` was requested
    pub fn line_out_of_range(line: usize, line_count: usize) -> Self {
        Self::new(
            ErrorType::Range,
            errors::LINE_OUT_OF_RANGE,
            format!("line {} not found (document has {} lines)", line, line_count),
        )
    }

    /// A column past the end of its line was requested
    pub fn column_out_of_range(line: usize, column: usize, len: usize) -> Self {
        Self::new(
            ErrorType::Range,
            errors::COLUMN_OUT_OF_RANGE,
            format!("column {} out of range on line {} (length {})", column, line, len),
        )
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for JumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for JumpError {}

impl From<std::io::Error> for JumpError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, errors::IO_ERROR, err.to_string())
    }
}

/// Result alias for smartjump operations
pub type Result<T> = std::result::Result<T, JumpError>;
