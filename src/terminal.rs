// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::cell::Cell;
use crate::frame::Frame;

/// Pen state last sent to the terminal, so attributes are only re-sent when
/// they change.
#[derive(Default)]
struct Pen {
    fg: Option<Color>,
    bold: bool,
    underline: bool,
}

pub struct Terminal {
    stdout: Stdout,
    mouse: bool,
    drawn: Option<(u16, u16)>,
    run: String,
    order: Vec<usize>,
}

impl Terminal {
    pub fn new(mouse: bool) -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        let setup: Result<()> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
            let _ = out.execute(terminal::DisableLineWrap);
            if mouse {
                out.execute(EnableMouseCapture)?;
            }
            out.execute(SetAttribute(Attribute::Reset))?;
            out.execute(ResetColor)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()
        })();
        if let Err(e) = setup {
            restore(&mut out, mouse);
            return Err(e);
        }
        Ok(Self {
            stdout: out,
            mouse,
            drawn: None,
            run: String::with_capacity(64),
            order: Vec::new(),
        })
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll_event(timeout: Duration) -> Result<bool> {
        event::poll(timeout)
    }

    pub fn read_event() -> Result<event::Event> {
        event::read()
    }

    fn apply_pen(&mut self, pen: &mut Pen, cell: &Cell) -> Result<()> {
        if cell.fg != pen.fg {
            self.stdout
                .queue(SetForegroundColor(cell.fg.unwrap_or(Color::Reset)))?;
            pen.fg = cell.fg;
        }
        if cell.bold != pen.bold || cell.underline != pen.underline {
            // NormalIntensity also drops underline on some terminals; resend both.
            self.stdout.queue(SetAttribute(if cell.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            }))?;
            self.stdout.queue(SetAttribute(if cell.underline {
                Attribute::Underlined
            } else {
                Attribute::NoUnderline
            }))?;
            pen.bold = cell.bold;
            pen.underline = cell.underline;
        }
        Ok(())
    }

    /// Flushes `frame` to the screen. A size change or a large dirty set
    /// repaints every row; otherwise only runs of dirty cells are written.
    pub fn draw(&mut self, frame: &mut Frame, cursor_at: Option<(u16, u16)>) -> Result<()> {
        let size = (frame.width, frame.height);
        let total = frame.width as usize * frame.height as usize;
        let full = self.drawn != Some(size)
            || frame.is_dirty_all()
            || frame.dirty_indices().len() >= total / 3;

        self.stdout.queue(cursor::Hide)?;
        let mut pen = Pen::default();
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(ResetColor)?;

        if full {
            if self.drawn != Some(size) {
                self.stdout
                    .queue(terminal::Clear(terminal::ClearType::All))?;
            }
            self.order.clear();
            self.order.extend(0..total);
        } else {
            self.order.clear();
            self.order.extend_from_slice(frame.dirty_indices());
            self.order.sort_unstable();
        }

        let width = frame.width.max(1) as usize;
        let order = std::mem::take(&mut self.order);
        let mut i = 0;
        while i < order.len() {
            let start = order[i];
            let first = frame.cell_at_index(start);
            self.run.clear();
            self.run.push(first.ch);

            let mut end = start;
            let mut j = i + 1;
            while j < order.len() {
                let next = order[j];
                if next != end + 1 || next % width == 0 {
                    break;
                }
                let cell = frame.cell_at_index(next);
                if !cell.same_style(&first) {
                    break;
                }
                self.run.push(cell.ch);
                end = next;
                j += 1;
            }

            let (x, y) = ((start % width) as u16, (start / width) as u16);
            self.stdout.queue(cursor::MoveTo(x, y))?;
            self.apply_pen(&mut pen, &first)?;
            self.stdout.queue(Print(self.run.as_str()))?;
            i = j;
        }
        self.order = order;

        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(ResetColor)?;
        if let Some((x, y)) = cursor_at {
            self.stdout.queue(cursor::MoveTo(x, y))?;
            self.stdout.queue(cursor::Show)?;
        }
        self.stdout.flush()?;

        self.drawn = Some(size);
        frame.clear_dirty();
        Ok(())
    }
}

fn restore(out: &mut Stdout, mouse: bool) {
    if mouse {
        let _ = out.execute(DisableMouseCapture);
    }
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore(&mut self.stdout, self.mouse);
    }
}

/// Used from the panic hook and signal handlers, where the [`Terminal`]
/// guard is out of reach.
pub fn restore_terminal_best_effort() {
    restore(&mut stdout(), true);
}
