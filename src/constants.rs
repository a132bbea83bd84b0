//! Global constants for smartjump

pub mod errors {
    // Error Codes
    pub const LINE_OUT_OF_RANGE: &str = "LINE_OUT_OF_RANGE";
    pub const COLUMN_OUT_OF_RANGE: &str = "COLUMN_OUT_OF_RANGE";
    pub const IO_ERROR: &str = "IO_ERROR";
}

pub mod movement {
    /// Closing brackets; a scan always halts before one of these
    pub const HARD_BOUNDARIES: [char; 3] = [')', ']', '}'];

    /// Halts a scan unless it completes an arrow (`=>`)
    pub const ANGLE_CLOSE: char = '>';

    /// Character that turns a following `>` into part of an arrow
    pub const ARROW_PREFIX: char = '=';

    /// Quote characters; only a closing quote is a boundary
    pub const QUOTES: [char; 3] = ['\'', '"', '`'];
}
