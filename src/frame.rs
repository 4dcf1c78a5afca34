// Copyright (c) 2026 rezky_nightky

use crate::cell::Cell;

/// Back buffer for one screen. Writes that change a cell are recorded so the
/// terminal only repaints what moved since the last flush.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    cells: Vec<Cell>,
    dirty_all: bool,
    dirty_map: Vec<bool>,
    dirty: Vec<usize>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
            dirty_all: true,
            dirty_map: vec![false; len],
            dirty: Vec::new(),
        }
    }

    pub fn is_dirty_all(&self) -> bool {
        self.dirty_all
    }

    pub fn dirty_indices(&self) -> &[usize] {
        &self.dirty
    }

    pub fn has_changes(&self) -> bool {
        self.dirty_all || !self.dirty.is_empty()
    }

    pub fn clear_dirty(&mut self) {
        if self.dirty_all {
            self.dirty_map.fill(false);
        } else {
            for &i in &self.dirty {
                self.dirty_map[i] = false;
            }
        }
        self.dirty_all = false;
        self.dirty.clear();
    }

    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn cell_at_index(&self, i: usize) -> Cell {
        self.cells.get(i).copied().unwrap_or(Cell::BLANK)
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        if self.cells[i] == cell {
            return;
        }
        self.cells[i] = cell;
        if !self.dirty_all && !self.dirty_map[i] {
            self.dirty_map[i] = true;
            self.dirty.push(i);
        }
    }

    /// Writes `cells` from `(x, y)` rightwards, clipped at the frame edge.
    /// Returns the column after the last cell written.
    pub fn put_cells(&mut self, x: u16, y: u16, cells: impl IntoIterator<Item = Cell>) -> u16 {
        let mut col = x;
        for cell in cells {
            if col >= self.width {
                break;
            }
            self.set(col, y, cell);
            col += 1;
        }
        col
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, template: Cell) -> u16 {
        self.put_cells(x, y, s.chars().map(|ch| Cell { ch, ..template }))
    }

    /// Blanks a row from column `x` to the right edge.
    pub fn clear_from(&mut self, x: u16, y: u16) {
        for col in x..self.width {
            self.set(col, y, Cell::BLANK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_tracks_only_real_changes() {
        let mut f = Frame::new(4, 2);
        f.clear_dirty();
        f.set(1, 1, Cell::BLANK);
        assert!(!f.has_changes());
        f.set(1, 1, Cell::styled('x', None, false));
        f.set(1, 1, Cell::styled('y', None, false));
        assert_eq!(f.dirty_indices(), &[5]);
        assert_eq!(f.get(1, 1).map(|c| c.ch), Some('y'));
        f.clear_dirty();
        assert!(!f.has_changes());
    }

    #[test]
    fn put_str_clips_at_the_edge() {
        let mut f = Frame::new(3, 1);
        let end = f.put_str(1, 0, "abc", Cell::BLANK);
        assert_eq!(end, 3);
        assert_eq!(f.get(2, 0).map(|c| c.ch), Some('b'));
        assert_eq!(f.put_str(0, 5, "zz", Cell::BLANK), 2);
        assert!(f.get(0, 5).is_none());
    }

    #[test]
    fn clear_from_blanks_the_tail() {
        let mut f = Frame::new(3, 1);
        f.put_str(0, 0, "abc", Cell::BLANK);
        f.clear_from(1, 0);
        assert_eq!(f.get(0, 0).map(|c| c.ch), Some('a'));
        assert_eq!(f.get(1, 0).copied(), Some(Cell::BLANK));
    }
}
