//! Smart word-wise movement
//!
//! This module computes where a "jump to next/previous word" lands. Unlike a
//! plain word motion it is tuned for code: it stops at identifier ends, before
//! closing brackets and closing quotes, and at line ends, and it never stops
//! on a position reached only across whitespace or blank lines.
//!
//! ## Design
//!
//! Movement is based on character categories:
//! - **Word**: ASCII letters and digits (no underscore)
//! - **Hard boundary**: `)`, `]`, `}`, and `>` unless it ends an arrow `=>`
//! - **Quote**: `'`, `"`, `` ` `` - a boundary only when it closes a quote
//! - **Punctuation**: everything else, skipped over
//!
//! This means:
//! - `foo_bar` stops after `foo` and after `bar`
//! - `(bar: string) => {}` stops after `bar`, after `string`, then before `}`
//! - `["a b ", '']` stops between the empty quotes and before `]`
//!
//! ## Modules
//!
//! - [`classify`] - Character classification functions
//! - [`boundaries`] - Context-sensitive boundary detection within a line
//! - [`scanner`] - Document-level forward/backward jumps
//! - [`stops`] - Iterating over successive stops

pub mod boundaries;
pub mod classify;
pub mod scanner;
pub mod stops;

// Re-export commonly used types
pub use classify::{classify_char, is_word_char, CharClass};
pub use scanner::{jump_backward, jump_backward_at, jump_forward, jump_forward_at};
pub use stops::{collect_stops, Direction, Stops};
