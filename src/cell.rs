// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

/// Index into the link table of the screen the cell was drawn for.
pub type LinkId = u16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub link: Option<LinkId>,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        fg: None,
        bold: false,
        underline: false,
        link: None,
    };

    pub fn styled(ch: char, fg: Option<Color>, bold: bool) -> Self {
        Self {
            ch,
            fg,
            bold,
            ..Self::BLANK
        }
    }

    /// Same look, regardless of link target.
    pub fn same_style(&self, other: &Cell) -> bool {
        self.fg == other.fg && self.bold == other.bold && self.underline == other.underline
    }
}
