use crossterm::style::{Color, Stylize};

use crate::ui::theme::{colors, glyphs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Modified,
    Install,
    Diff,
}

impl Icon {
    fn glyph(self) -> glyphs::Glyph {
        match self {
            Icon::Success => glyphs::SUCCESS,
            Icon::Error => glyphs::ERROR,
            Icon::Warning => glyphs::WARNING,
            Icon::Pending => glyphs::PENDING,
            Icon::Arrow => glyphs::ARROW,
            Icon::Modified => glyphs::MODIFIED,
            Icon::Install => glyphs::INSTALL,
            Icon::Diff => glyphs::DIFF,
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Modified => colors::WARNING,
            Icon::Pending | Icon::Arrow => colors::DIM,
            Icon::Install | Icon::Diff => colors::INFO,
        }
    }

    pub fn render(&self, unicode: bool) -> &'static str {
        let (fancy, plain) = self.glyph();
        if unicode {
            fancy
        } else {
            plain
        }
    }

    pub fn colored(&self, color: bool, unicode: bool) -> String {
        let text = self.render(unicode);
        if color {
            text.with(self.color()).to_string()
        } else {
            text.to_string()
        }
    }
}
