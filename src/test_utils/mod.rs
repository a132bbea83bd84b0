//! Test utilities
//! Shared helpers for rendering traversals

use crate::document::{Document, Position};
use crate::movement::{collect_stops, Direction};

/// Marker drawn at every stop by [`render_stops`]
pub const STOP_MARKER: char = '⎕';

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render `doc` with a [`STOP_MARKER`] at every position in `stops`
pub fn render_stops<D: Document + ?Sized>(doc: &D, stops: &[Position]) -> String {
    let mut lines = Vec::with_capacity(doc.line_count());
    for line in 0..doc.line_count() {
        let chars: Vec<char> = doc.line(line).unwrap().chars().collect();
        let mut rendered = String::new();
        for column in 0..=chars.len() {
            if stops.contains(&Position::new(line, column)) {
                rendered.push(STOP_MARKER);
            }
            if let Some(&c) = chars.get(column) {
                rendered.push(c);
            }
        }
        lines.push(rendered);
    }
    lines.join("\n")
}

/// Jump from `start` until the cursor stops moving and render every stop
pub fn walk<D: Document + ?Sized>(doc: &D, start: Position, direction: Direction) -> String {
    init_logging();
    let stops = collect_stops(doc, start, direction).unwrap();
    render_stops(doc, &stops)
}

/// Render a full forward traversal from the document start
pub fn walk_forward<D: Document + ?Sized>(doc: &D) -> String {
    walk(doc, Position::START, Direction::Forward)
}

/// Render a full backward traversal from the document end
pub fn walk_backward<D: Document + ?Sized>(doc: &D) -> String {
    walk(doc, doc.end().unwrap(), Direction::Backward)
}
