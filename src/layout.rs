// Copyright (c) 2026 rezky_nightky

//! Paints the banner and the prompt session into a [`Frame`].
//!
//! The compact screen behaves like a page scrolled to its end: banner, intro,
//! scrollback and prompt are stacked into one column of rows and the last
//! screenful is shown, minus the user's scroll offset.

use crossterm::style::Color;

use crate::cell::{Cell, LinkId};
use crate::content::{Block, Span, OWNER};
use crate::field::{GlyphGrid, GlyphKind};
use crate::frame::Frame;
use crate::palette::Theme;
use crate::shell::{EntryKind, Shell, PROMPT};

pub const EXIT_HINT: &str = "Click Anywhere or Press ESC to Exit";
const MARGIN: u16 = 1;

/// Where the banner landed on screen. `y` is negative once it has scrolled
/// off the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl BannerRect {
    /// Pointer position normalized to the banner, or `None` outside it.
    pub fn normalize(&self, col: u16, row: u16) -> Option<(f64, f64)> {
        let (dx, dy) = (col as i32 - self.x, row as i32 - self.y);
        if dx < 0 || dy < 0 || dx >= self.width as i32 || dy >= self.height as i32 {
            return None;
        }
        Some((
            dx as f64 / self.width.max(1) as f64,
            dy as f64 / self.height.max(1) as f64,
        ))
    }
}

#[derive(Clone, Debug)]
pub struct Screen {
    pub banner: BannerRect,
    pub cursor: Option<(u16, u16)>,
    /// Largest useful scroll offset for the current content.
    pub max_scroll: usize,
    links: Vec<String>,
}

impl Screen {
    pub fn link_at(&self, frame: &Frame, col: u16, row: u16) -> Option<&str> {
        let id = frame.get(col, row)?.link?;
        self.links.get(id as usize).map(String::as_str)
    }
}

enum Row {
    Banner(u16),
    Cells(Vec<Cell>),
}

struct Painter<'a> {
    theme: &'a Theme,
    links: Vec<String>,
}

impl Painter<'_> {
    fn text(&self, s: &str) -> Vec<Cell> {
        s.chars()
            .map(|ch| Cell::styled(ch, self.theme.text, false))
            .collect()
    }

    fn block_lines(&mut self, block: &Block, prompt_echo: bool, rich: bool) -> Vec<Vec<Cell>> {
        let mut out = Vec::with_capacity(block.lines.len());
        for line in &block.lines {
            let mut cells = Vec::new();
            for span in &line.0 {
                match span {
                    Span::Text(s) => cells.extend(self.text(s)),
                    Span::Link { label, .. } if !rich => cells.extend(self.text(label)),
                    Span::Link { label, url } => {
                        let id = self.link_id(url);
                        cells.extend(label.chars().map(|ch| Cell {
                            ch,
                            fg: self.theme.link,
                            bold: false,
                            underline: true,
                            link: Some(id),
                        }));
                    }
                }
            }
            if prompt_echo {
                let n = PROMPT.chars().count().min(cells.len());
                for c in &mut cells[..n] {
                    c.fg = self.theme.prompt;
                    c.bold = true;
                }
            }
            out.push(cells);
        }
        out
    }

    fn link_id(&mut self, url: &str) -> LinkId {
        if let Some(i) = self.links.iter().position(|u| u == url) {
            return i as LinkId;
        }
        self.links.push(url.to_string());
        (self.links.len() - 1) as LinkId
    }
}

fn wrap(cells: Vec<Cell>, width: usize) -> Vec<Vec<Cell>> {
    if cells.is_empty() || width == 0 {
        return vec![Vec::new()];
    }
    cells.chunks(width).map(<[Cell]>::to_vec).collect()
}

fn glyph_cell(kind: GlyphKind, ch: char, theme: &Theme, levels: usize) -> Cell {
    match kind {
        GlyphKind::Plate => Cell::styled(ch, theme.highlight(), true),
        GlyphKind::Field { index } => {
            let level = index as f32 / levels.saturating_sub(1).max(1) as f32;
            Cell::styled(ch, theme.shade(level), false)
        }
    }
}

fn paint_banner_row(
    frame: &mut Frame,
    x: u16,
    y: u16,
    grid: &GlyphGrid,
    gy: u16,
    theme: &Theme,
    levels: usize,
) {
    let cells = grid
        .row(gy)
        .iter()
        .map(|g| glyph_cell(g.kind, g.ch, theme, levels));
    let end = frame.put_cells(x, y, cells);
    frame.clear_from(end, y);
}

pub fn compose_compact(
    frame: &mut Frame,
    grid: &GlyphGrid,
    shell: &Shell,
    theme: &Theme,
    levels: usize,
    scroll: usize,
) -> Screen {
    let text_width = frame.width.saturating_sub(MARGIN).max(1) as usize;
    let mut painter = Painter {
        theme,
        links: Vec::new(),
    };

    let mut rows: Vec<Row> = (0..grid.height).map(Row::Banner).collect();
    rows.push(Row::Cells(Vec::new()));
    rows.push(Row::Cells(painter.text(&format!(
        "Welcome to {}'s Terminal Portfolio.",
        OWNER
    ))));
    let mut hint = painter.text("Type ");
    hint.extend("'help'".chars().map(|ch| Cell::styled(ch, theme.accent, true)));
    hint.extend(painter.text(" to see a list of available commands."));
    rows.push(Row::Cells(hint));

    for entry in shell.scrollback() {
        let echo = entry.kind == EntryKind::Input;
        for line in painter.block_lines(&entry.block, echo, entry.rich) {
            rows.extend(wrap(line, text_width).into_iter().map(Row::Cells));
        }
    }

    let prompt_row = rows.len();
    let mut prompt: Vec<Cell> = PROMPT
        .chars()
        .map(|ch| Cell::styled(ch, theme.prompt, true))
        .collect();
    let room = text_width.saturating_sub(prompt.len() + 1);
    let input: Vec<char> = shell.input().chars().collect();
    let shown = &input[input.len().saturating_sub(room)..];
    prompt.extend(shown.iter().map(|&ch| Cell::styled(ch, theme.text, false)));
    let cursor_col = prompt.len();
    rows.push(Row::Cells(prompt));

    let height = frame.height as usize;
    let max_scroll = rows.len().saturating_sub(height);
    let first = max_scroll - scroll.min(max_scroll);

    for y in 0..frame.height {
        match rows.get(first + y as usize) {
            Some(Row::Banner(gy)) => paint_banner_row(frame, MARGIN, y, grid, *gy, theme, levels),
            Some(Row::Cells(cells)) => {
                frame.clear_from(0, y);
                frame.put_cells(MARGIN, y, cells.iter().copied());
            }
            None => frame.clear_from(0, y),
        }
    }
    for x in 0..MARGIN.min(frame.width) {
        for y in 0..frame.height {
            frame.set(x, y, Cell::BLANK);
        }
    }

    let last_col = frame.width.saturating_sub(1) as usize;
    let cursor = prompt_row
        .checked_sub(first)
        .filter(|&r| r < height)
        .map(|r| ((MARGIN as usize + cursor_col).min(last_col) as u16, r as u16));

    Screen {
        banner: BannerRect {
            x: MARGIN as i32,
            y: -(first as i32),
            width: grid.width.min(frame.width.saturating_sub(MARGIN)),
            height: grid.height,
        },
        cursor,
        max_scroll,
        links: painter.links,
    }
}

pub fn compose_full_screen(
    frame: &mut Frame,
    grid: &GlyphGrid,
    theme: &Theme,
    levels: usize,
) -> Screen {
    for y in 0..frame.height {
        if y < grid.height {
            paint_banner_row(frame, 0, y, grid, y, theme, levels);
        } else {
            frame.clear_from(0, y);
        }
    }

    if frame.height > 0 {
        let y = frame.height - 1;
        let len = EXIT_HINT.chars().count() as u16;
        let x = frame.width.saturating_sub(len) / 2;
        let dim: Option<Color> = theme.text;
        frame.clear_from(0, y);
        frame.put_str(x, y, EXIT_HINT, Cell::styled(' ', dim, false));
    }

    Screen {
        banner: BannerRect {
            x: 0,
            y: 0,
            width: grid.width.min(frame.width),
            height: grid.height.min(frame.height),
        },
        cursor: None,
        max_scroll: 0,
        links: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::DisplayMode;
    use crate::field::{FieldState, GridSize};
    use crate::glyphs::GlyphSet;
    use crate::palette::build_theme;
    use crate::runtime::{ColorMode, ColorScheme};

    fn row_text(frame: &Frame, y: u16) -> String {
        (0..frame.width)
            .filter_map(|x| frame.get(x, y).map(|c| c.ch))
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn grid(size: GridSize, mode: DisplayMode) -> (GlyphGrid, usize) {
        let glyphs = GlyphSet::Ascii.chars();
        let g = FieldState::new(Some(1), size).render(10, size, mode, &glyphs);
        (g, glyphs.len())
    }

    fn theme() -> Theme {
        build_theme(ColorScheme::Green, ColorMode::TrueColor)
    }

    #[test]
    fn short_session_starts_at_the_top() {
        let mut frame = Frame::new(80, 30);
        let size = GridSize::for_viewport(80, 30, DisplayMode::Compact);
        let (g, levels) = grid(size, DisplayMode::Compact);
        let shell = Shell::new();
        let screen = compose_compact(&mut frame, &g, &shell, &theme(), levels, 0);

        assert_eq!(screen.banner.y, 0);
        assert_eq!(screen.max_scroll, 0);
        let intro = size.height + 1;
        assert_eq!(
            row_text(&frame, intro),
            " Welcome to Kevin Dong's Terminal Portfolio."
        );
        let prompt_y = intro + 2;
        assert_eq!(row_text(&frame, prompt_y), " guest@kevinsportfolio:~$");
        assert_eq!(screen.cursor, Some((1 + PROMPT.len() as u16, prompt_y)));
    }

    #[test]
    fn long_session_follows_the_prompt() {
        let mut frame = Frame::new(80, 20);
        let size = GridSize::for_viewport(80, 20, DisplayMode::Compact);
        let (g, levels) = grid(size, DisplayMode::Compact);
        let mut shell = Shell::new();
        shell.submit_line("about");
        shell.set_input("hel");
        let screen = compose_compact(&mut frame, &g, &shell, &theme(), levels, 0);

        assert!(screen.max_scroll > 0);
        assert!(screen.banner.y < 0);
        assert_eq!(row_text(&frame, 19), " guest@kevinsportfolio:~$ hel");
        assert_eq!(screen.cursor, Some((1 + PROMPT.len() as u16 + 3, 19)));

        let top = compose_compact(&mut frame, &g, &shell, &theme(), levels, usize::MAX);
        assert_eq!(top.banner.y, 0);
        assert_eq!(top.cursor, None);
    }

    #[test]
    fn link_cells_resolve_to_urls() {
        let mut frame = Frame::new(80, 40);
        let size = GridSize::for_viewport(80, 40, DisplayMode::Compact);
        let (g, levels) = grid(size, DisplayMode::Compact);
        let mut shell = Shell::new();
        shell.submit_line("social");
        let screen = compose_compact(&mut frame, &g, &shell, &theme(), levels, 0);

        let (y, x) = (0..frame.height)
            .find_map(|y| {
                let t = row_text(&frame, y);
                t.find("github/kevinlindong").map(|x| (y, x as u16))
            })
            .expect("github row");
        assert_eq!(
            screen.link_at(&frame, x, y),
            Some("https://github.com/kevinlindong")
        );
        assert_eq!(screen.link_at(&frame, 0, y), None);
    }

    #[test]
    fn banner_rect_normalizes_pointer() {
        let r = BannerRect {
            x: 1,
            y: -2,
            width: 10,
            height: 4,
        };
        assert_eq!(r.normalize(1, 0), Some((0.0, 0.5)));
        assert_eq!(r.normalize(6, 1), Some((0.5, 0.75)));
        assert_eq!(r.normalize(0, 0), None);
        assert_eq!(r.normalize(11, 0), None);
        assert_eq!(r.normalize(5, 2), None);
    }

    #[test]
    fn narrow_terminal_clips_the_pointer_rect() {
        let mut frame = Frame::new(40, 30);
        let size = GridSize::for_viewport(40, 30, DisplayMode::Compact);
        assert_eq!(size.width, 60);
        let (g, levels) = grid(size, DisplayMode::Compact);
        let screen = compose_compact(&mut frame, &g, &Shell::new(), &theme(), levels, 0);

        assert_eq!(screen.banner.width, 39);
        let (x, _) = screen.banner.normalize(39, 0).unwrap();
        assert!(x > 0.95, "rightmost visible column maps to {}", x);

        let mut frame = Frame::new(40, 20);
        let size = GridSize::for_viewport(40, 20, DisplayMode::FullScreen);
        let (g, levels) = grid(size, DisplayMode::FullScreen);
        let screen = compose_full_screen(&mut frame, &g, &theme(), levels);
        assert_eq!(screen.banner.width, 40);
        assert_eq!(screen.banner.height, 18);
    }

    #[test]
    fn full_screen_shows_exit_hint() {
        let mut frame = Frame::new(80, 24);
        let size = GridSize::for_viewport(80, 24, DisplayMode::FullScreen);
        let (g, levels) = grid(size, DisplayMode::FullScreen);
        let screen = compose_full_screen(&mut frame, &g, &theme(), levels);
        assert_eq!(row_text(&frame, 23).trim(), EXIT_HINT);
        assert_eq!(screen.banner.height, 22);
        assert_eq!(screen.cursor, None);
    }

    #[test]
    fn long_lines_wrap() {
        let cells: Vec<Cell> = "abcdefg".chars().map(|c| Cell::styled(c, None, false)).collect();
        let rows = wrap(cells, 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].len(), 1);
        assert_eq!(wrap(Vec::new(), 3).len(), 1);
    }
}
