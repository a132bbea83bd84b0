//! Successive stops
//!
//! Walks a cursor through a document one jump at a time, the way a host
//! editor moves the cursor on each key press.

use crate::document::{Document, Position};
use crate::error::Result;

use super::scanner::{jump_backward, jump_forward};

/// Which way to jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Perform one jump in this direction
    pub fn jump<D: Document + ?Sized>(self, doc: &D, pos: Position) -> Result<Position> {
        match self {
            Self::Forward => jump_forward(doc, pos),
            Self::Backward => jump_backward(doc, pos),
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Iterator over the stops reached by repeatedly jumping from a start position
///
/// The start itself is not yielded. Iteration ends once a jump no longer
/// moves (document start or end), or after yielding an error.
pub struct Stops<'a, D: Document + ?Sized> {
    doc: &'a D,
    direction: Direction,
    current: Position,
    done: bool,
}

impl<'a, D: Document + ?Sized> Stops<'a, D> {
    pub fn new(doc: &'a D, start: Position, direction: Direction) -> Self {
        Self {
            doc,
            direction,
            current: start,
            done: false,
        }
    }

    pub fn forward(doc: &'a D, start: Position) -> Self {
        Self::new(doc, start, Direction::Forward)
    }

    pub fn backward(doc: &'a D, start: Position) -> Self {
        Self::new(doc, start, Direction::Backward)
    }

    /// Last position reached
    #[must_use]
    pub fn position(&self) -> Position {
        self.current
    }
}

impl<D: Document + ?Sized> Iterator for Stops<'_, D> {
    type Item = Result<Position>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.direction.jump(self.doc, self.current) {
            Ok(next) if next == self.current => {
                self.done = true;
                None
            }
            Ok(next) => {
                self.current = next;
                Some(Ok(next))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Collect `start` followed by every stop reached from it in `direction`
///
/// # Errors
/// Fails when `start` is not a valid position in `doc`.
pub fn collect_stops<D: Document + ?Sized>(
    doc: &D,
    start: Position,
    direction: Direction,
) -> Result<Vec<Position>> {
    doc.check_position(start)?;
    std::iter::once(Ok(start))
        .chain(Stops::new(doc, start, direction))
        .collect()
}
