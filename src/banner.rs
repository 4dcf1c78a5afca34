// Copyright (c) 2026 rezky_nightky

/// Name plate pinned into the bottom-left corner of the compact banner.
pub const NAME_PLATE: [&str; 5] = [
    " _  _  ____  _  _  ____  _  _    ____  _____  _  _  ___  ",
    "( )/ )( ___)( \\/ )(_  _)( \\( )  (  _ \\(  _  )( \\( )/ __) ",
    " )  (  )__)  \\  /  _)(_  )  (    )(_) ))(_)(  )  (( (_-. ",
    "(_)\\_)(____)  \\/  (____)(_)\\_)  (____/(_____)(_)\\_)\\___/ ",
    "                                                        ",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Compact,
    FullScreen,
}

/// The rectangle of a grid that is copied from [`NAME_PLATE`] instead of
/// being sampled from the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlateRegion {
    pub first_row: u16,
    pub rows: u16,
    pub cols: u16,
}

impl PlateRegion {
    pub fn for_grid(width: u16, height: u16, mode: DisplayMode) -> Option<Self> {
        if mode == DisplayMode::FullScreen {
            return None;
        }
        let plate_cols = NAME_PLATE[0].chars().count() as u16;
        let rows = height.min(NAME_PLATE.len() as u16);
        let cols = width.min(plate_cols);
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self {
            first_row: height - rows,
            rows,
            cols,
        })
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        y >= self.first_row && y < self.first_row + self.rows && x < self.cols
    }

    /// Plate character for a grid cell inside the region. A grid shorter than
    /// the plate shows the plate's last rows; short plate lines pad with space.
    pub fn char_at(&self, x: u16, y: u16) -> char {
        let skipped = NAME_PLATE.len() - self.rows as usize;
        let line = skipped + (y - self.first_row) as usize;
        NAME_PLATE
            .get(line)
            .and_then(|l| l.chars().nth(x as usize))
            .unwrap_or(' ')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_region_in_full_screen() {
        assert_eq!(PlateRegion::for_grid(80, 14, DisplayMode::FullScreen), None);
    }

    #[test]
    fn region_sits_bottom_left() {
        let r = PlateRegion::for_grid(80, 14, DisplayMode::Compact).unwrap();
        assert_eq!(r.first_row, 9);
        assert_eq!(r.rows, 5);
        assert_eq!(r.cols, 57);
        assert!(r.contains(0, 9));
        assert!(!r.contains(57, 9));
        assert!(!r.contains(0, 8));
        assert_eq!(r.char_at(1, 9), '_');
        assert_eq!(r.char_at(56, 13), ' ');
    }

    #[test]
    fn short_grid_shows_plate_tail() {
        let r = PlateRegion::for_grid(60, 3, DisplayMode::Compact).unwrap();
        assert_eq!(r.first_row, 0);
        assert_eq!(r.rows, 3);
        assert_eq!(r.char_at(0, 0), ' ');
        assert_eq!(r.char_at(0, 1), '(');
        assert_eq!(r.char_at(2, 1), ')');
        assert_eq!(r.char_at(3, 1), '\\');
    }
}
