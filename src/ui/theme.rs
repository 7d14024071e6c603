//! Colors and glyphs shared by every view.
//!
//! Views never pick colors or symbols on their own; they go through
//! `Icon`, which reads from here.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// `(unicode, ascii)` pairs
pub mod glyphs {
    pub type Glyph = (&'static str, &'static str);

    pub const SUCCESS: Glyph = ("✓", "[OK]");
    pub const ERROR: Glyph = ("✗", "[FAIL]");
    pub const WARNING: Glyph = ("⚠", "[WARN]");
    pub const PENDING: Glyph = ("○", "[ ]");
    pub const ARROW: Glyph = ("→", "->");
    pub const MODIFIED: Glyph = ("~", "[~]");

    // command headers
    pub const INSTALL: Glyph = ("📦", "[INSTALL]");
    pub const DIFF: Glyph = ("Δ", "[DIFF]");
}
