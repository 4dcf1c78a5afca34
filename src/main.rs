// Copyright (c) 2026 rezky_nightky

mod banner;
mod cell;
mod commands;
mod config;
mod content;
mod field;
mod frame;
mod glyphs;
mod layout;
mod logging;
mod palette;
mod runtime;
mod shell;
mod terminal;

use std::env;
use std::time::{Duration, Instant};

#[cfg(unix)]
use std::thread;

use clap::builder::styling::{AnsiColor as ClapAnsiColor, Color as ClapColor};
use clap::builder::styling::{Effects as ClapEffects, Style as ClapStyle};
use clap::builder::Styles as ClapStyles;
use clap::{CommandFactory, FromArgMatches};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

use crate::banner::DisplayMode;
use crate::config::{
    color_enabled_stdout, default_params_usage_for_help, print_list_colors, print_list_commands,
    print_list_glyphs, Args,
};
use crate::content::Format;
use crate::field::{FieldState, GridSize};
use crate::frame::Frame;
use crate::glyphs::glyph_set_from_str;
use crate::layout::{compose_compact, compose_full_screen, Screen};
use crate::palette::{build_theme, Theme};
use crate::runtime::{ColorMode, ColorScheme, Ticker};
use crate::shell::{Effect, EntryKind, Mode, Shell};
use crate::terminal::{restore_terminal_best_effort, Terminal};

const HELP_TEMPLATE_PLAIN: &str = "\
{before-help}{about-with-newline}
USAGE:
  {usage}

{all-args}{after-help}";

const HELP_TEMPLATE_COLOR: &str = "\
{before-help}{about-with-newline}
\x1b[1;36mUSAGE:\x1b[0m
  {usage}

{all-args}{after-help}";

const SCROLL_STEP: usize = 3;
const FALLBACK_SIZE: (u16, u16) = (80, 24);

fn clap_styles() -> ClapStyles {
    ClapStyles::styled()
        .header(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Cyan))),
        )
        .usage(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Green))),
        )
        .literal(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Yellow))))
        .placeholder(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Magenta))))
}

fn require_f64_range(name: &str, v: f64, min: f64, max: f64) -> f64 {
    if !v.is_finite() {
        eprintln!("failed to apply {} {} (must be a finite number)", name, v);
        std::process::exit(1);
    }
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn or_exit<T>(r: Result<T, String>) -> T {
    r.unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    })
}

fn default_to_ascii() -> bool {
    let lang = env::var("LANG").unwrap_or_default();
    !lang.to_ascii_uppercase().contains("UTF")
}

fn display_mode(mode: Mode) -> DisplayMode {
    match mode {
        Mode::Prompt => DisplayMode::Compact,
        Mode::Banner => DisplayMode::FullScreen,
    }
}

fn open_link(url: &str, allowed: bool) {
    if !allowed {
        tracing::info!(url, "link not opened (--no-open)");
        return;
    }
    match open::that_detached(url) {
        Ok(()) => tracing::info!(url, "opened link"),
        Err(e) => tracing::warn!(url, error = %e, "failed to open link"),
    }
}

fn apply_effect(effect: Effect, allow_open: bool) {
    match effect {
        Effect::OpenUrl(url) => open_link(&url, allow_open),
    }
}

fn is_quit(k: &KeyEvent) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(k.code, KeyCode::Char('c') | KeyCode::Char('d'))
}

fn print_snapshot(args: &Args, glyphs: &[char], mode: DisplayMode) {
    let (cols, rows) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
    let size = GridSize::for_viewport(cols, rows, mode);
    let mut field = FieldState::new(args.seed, size);
    field.advance(args.frame, size);
    print!("{}", field.render(args.frame, size, mode, glyphs).to_text());
}

fn run_once(args: &Args, line: &str, format: Format, glyphs: &[char]) {
    let mut shell = Shell::new();
    let effect = shell.submit_line(line);
    if shell.mode() == Mode::Banner {
        print_snapshot(args, glyphs, DisplayMode::FullScreen);
        return;
    }
    for entry in shell.scrollback() {
        if entry.kind == EntryKind::Output {
            println!("{}", entry.block.render(format));
        }
    }
    if let Some(effect) = effect {
        apply_effect(effect, !args.no_open);
    }
}

struct Session {
    shell: Shell,
    field: FieldState,
    ticker: Ticker,
    frame: Frame,
    theme: Theme,
    glyphs: Vec<char>,
    screen: Option<Screen>,
    scroll: usize,
    allow_open: bool,
    running: bool,
}

impl Session {
    fn on_key(&mut self, k: KeyEvent) {
        if is_quit(&k) {
            self.running = false;
            return;
        }
        if self.shell.mode() == Mode::Prompt {
            match k.code {
                KeyCode::PageUp => {
                    self.scroll = self.scroll.saturating_add(self.frame.height as usize / 2);
                    return;
                }
                KeyCode::PageDown => {
                    self.scroll = self.scroll.saturating_sub(self.frame.height as usize / 2);
                    return;
                }
                KeyCode::Enter => self.scroll = 0,
                _ => {}
            }
        }
        if let Some(effect) = self.shell.handle_key(k) {
            apply_effect(effect, self.allow_open);
        }
    }

    fn on_mouse(&mut self, m: MouseEvent) {
        match m.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let hit = self
                    .screen
                    .as_ref()
                    .and_then(|s| s.banner.normalize(m.column, m.row));
                if let Some((x, y)) = hit {
                    self.field.point_at(x, y);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.shell.mode() == Mode::Banner {
                    self.shell.dismiss_banner();
                    return;
                }
                let url = self
                    .screen
                    .as_ref()
                    .and_then(|s| s.link_at(&self.frame, m.column, m.row))
                    .map(str::to_string);
                if let Some(url) = url {
                    open_link(&url, self.allow_open);
                }
            }
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_add(SCROLL_STEP),
            MouseEventKind::ScrollDown => self.scroll = self.scroll.saturating_sub(SCROLL_STEP),
            _ => {}
        }
    }

    fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::debug!(cols, rows, "resize");
        self.frame = Frame::new(cols, rows);
    }

    fn tick(&mut self, term: &mut Terminal) -> std::io::Result<()> {
        let mode = display_mode(self.shell.mode());
        let size = GridSize::for_viewport(self.frame.width, self.frame.height, mode);
        let f = self.ticker.tick(Instant::now());
        self.field.advance(f, size);
        let grid = self.field.render(f, size, mode, &self.glyphs);

        let levels = self.glyphs.len();
        let screen = match mode {
            DisplayMode::Compact => compose_compact(
                &mut self.frame,
                &grid,
                &self.shell,
                &self.theme,
                levels,
                self.scroll,
            ),
            DisplayMode::FullScreen => {
                compose_full_screen(&mut self.frame, &grid, &self.theme, levels)
            }
        };
        self.scroll = self.scroll.min(screen.max_scroll);
        if self.frame.has_changes() {
            term.draw(&mut self.frame, screen.cursor)?;
        }
        self.screen = Some(screen);
        Ok(())
    }
}

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    #[cfg(unix)]
    {
        if let Ok(mut signals) = Signals::new([SIGINT, SIGTERM, SIGHUP]) {
            thread::spawn(move || {
                if let Some(sig) = signals.forever().next() {
                    restore_terminal_best_effort();
                    std::process::exit(128 + sig);
                }
            });
        }
    }

    #[cfg(windows)]
    {
        if let Err(e) = ctrlc::set_handler(|| {
            restore_terminal_best_effort();
            std::process::exit(130);
        }) {
            eprintln!("failed to install Ctrl-C handler: {}", e);
        }
    }

    let mut cmd = Args::command();
    cmd = cmd.styles(clap_styles());
    cmd = cmd.before_help(default_params_usage_for_help());
    cmd = cmd.help_template(if color_enabled_stdout() {
        HELP_TEMPLATE_COLOR
    } else {
        HELP_TEMPLATE_PLAIN
    });
    cmd.build();
    if cmd.get_arguments().any(|a| a.get_id().as_str() == "help") {
        cmd = cmd.mut_arg("help", |a| a.help_heading("HELP"));
    }

    let matches = cmd.get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if args.list_commands {
        print_list_commands();
        return Ok(());
    }
    if args.list_colors {
        print_list_colors();
        return Ok(());
    }
    if args.list_glyphs {
        print_list_glyphs();
        return Ok(());
    }
    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if args.info {
        println!("Version: v{}", env!("CARGO_PKG_VERSION"));
        println!("Build: {}", env!("TERMFOLIO_BUILD"));
        let sha = env!("TERMFOLIO_GIT_SHA");
        if !sha.is_empty() {
            println!("Commit: {}", sha);
        }
        println!("Copyright: (c) 2026 {}", env!("CARGO_PKG_AUTHORS"));
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
        return Ok(());
    }

    if let Some(path) = &args.log_file {
        if let Err(e) = logging::init_file(path) {
            eprintln!("failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let glyphs = or_exit(glyph_set_from_str(&args.glyphs, default_to_ascii())).chars();
    let scheme = or_exit(ColorScheme::parse(&args.color));
    let color_mode = match args.colormode {
        Some(bits) => or_exit(
            ColorMode::from_bits(bits)
                .ok_or_else(|| format!("invalid --colormode: {} (allowed: 0,8,24)", bits)),
        ),
        None => ColorMode::detect(),
    };
    let format = or_exit(Format::parse(&args.format, color_enabled_stdout()));
    let fps = require_f64_range("--fps", args.fps, 1.0, 120.0);

    if args.snapshot {
        let mode = if args.fullscreen {
            DisplayMode::FullScreen
        } else {
            DisplayMode::Compact
        };
        print_snapshot(&args, &glyphs, mode);
        return Ok(());
    }
    if let Some(line) = &args.run {
        run_once(&args, line, format, &glyphs);
        return Ok(());
    }

    let mut term = Terminal::new(!args.no_mouse)?;
    let (cols, rows) = term.size()?;
    tracing::info!(
        cols,
        rows,
        fps,
        color = %args.color,
        color_mode = color_mode.label(),
        glyphs = glyphs.len(),
        "session started"
    );

    let mut shell = Shell::new();
    if args.fullscreen {
        shell.enter_banner();
    }
    let start_size = GridSize::for_viewport(cols, rows, display_mode(shell.mode()));
    let mut session = Session {
        shell,
        field: FieldState::new(args.seed, start_size),
        ticker: Ticker::new(Duration::from_secs_f64(1.0 / fps), Instant::now()),
        frame: Frame::new(cols, rows),
        theme: build_theme(scheme, color_mode),
        glyphs,
        screen: None,
        scroll: 0,
        allow_open: !args.no_open,
        running: true,
    };

    while session.running {
        loop {
            while Terminal::poll_event(Duration::from_millis(0))? {
                match Terminal::read_event()? {
                    Event::Resize(w, h) => session.on_resize(w, h),
                    Event::Key(k) if k.kind == KeyEventKind::Press => session.on_key(k),
                    Event::Mouse(m) => session.on_mouse(m),
                    _ => {}
                }
                if !session.running {
                    break;
                }
            }
            if !session.running {
                break;
            }
            let now = Instant::now();
            if session.ticker.is_due(now) {
                break;
            }
            let _ = Terminal::poll_event(session.ticker.time_left(now))?;
        }
        if !session.running {
            break;
        }
        session.tick(&mut term)?;
    }

    tracing::info!(frames = session.ticker.frame(), "session ended");
    Ok(())
}
