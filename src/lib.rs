//! Smartjump - word-wise cursor stops for text editors

pub mod constants;
pub mod document;
pub mod error;
pub mod movement;

pub use document::{Document, LineDocument, Position};
pub use error::{ErrorType, JumpError, Result};
pub use movement::{jump_backward, jump_backward_at, jump_forward, jump_forward_at};

#[cfg(test)]
mod test_utils;
