// Copyright (c) 2026 rezky_nightky

//! Prompt state machine: input buffer, scrollback and history.

use chrono::{Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::commands::{help_table, Command};
use crate::content::{self, Block, Line};

pub const PROMPT: &str = "guest@kevinsportfolio:~$ ";
pub const NOT_FOUND: &str = "Command not found. Type 'help' for a list of available commands.\n";
pub const SUDO_DENIED: &str = "Permission denied: unable to run the command 'undefined' as root.\n";
const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Prompt,
    Banner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Input,
    Output,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub block: Block,
    /// Output whose links are live; other entries render as plain text.
    pub rich: bool,
}

/// Work the shell cannot do itself and hands back to the event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(String),
}

#[derive(Clone, Debug, Default)]
pub struct History {
    lines: Vec<String>,
    /// Steps back from the newest line; `None` while editing a fresh line.
    cursor: Option<usize>,
}

impl History {
    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
        self.cursor = None;
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.lines
    }

    fn at(&self, back: usize) -> Option<&str> {
        let idx = self.lines.len().checked_sub(back + 1)?;
        self.lines.get(idx).map(String::as_str)
    }

    /// Older line, or `None` when already at the oldest.
    pub fn older(&mut self) -> Option<&str> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.lines.len() {
            return None;
        }
        self.cursor = Some(next);
        self.at(next)
    }

    /// Newer line; `Some("")` when stepping past the newest, `None` when not
    /// navigating at all.
    pub fn newer(&mut self) -> Option<&str> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some("")
            }
            c => {
                self.cursor = Some(c - 1);
                self.at(c - 1)
            }
        }
    }
}

pub struct Shell {
    mode: Mode,
    input: String,
    scrollback: Vec<Entry>,
    history: History,
    clock: fn() -> NaiveDateTime,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            mode: Mode::Prompt,
            input: String::new(),
            scrollback: Vec::new(),
            history: History::default(),
            clock: || Local::now().naive_local(),
        }
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn scrollback(&self) -> &[Entry] {
        &self.scrollback
    }

    #[cfg(test)]
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn set_input(&mut self, s: &str) {
        self.input.clear();
        self.input.push_str(s);
    }

    pub fn enter_banner(&mut self) {
        self.mode = Mode::Banner;
    }

    pub fn dismiss_banner(&mut self) {
        if self.mode == Mode::Banner {
            self.mode = Mode::Prompt;
            self.input.clear();
        }
    }

    pub fn submit(&mut self) -> Option<Effect> {
        let line = std::mem::take(&mut self.input);
        self.submit_line(&line)
    }

    pub fn submit_line(&mut self, line: &str) -> Option<Effect> {
        let command = Command::parse(line);
        tracing::debug!(line, ?command, "submit");

        let mut effect = None;
        let block = match command {
            Some(Command::Clear) => {
                self.scrollback.clear();
                self.input.clear();
                return None;
            }
            Some(Command::Banner) => {
                self.mode = Mode::Banner;
                return None;
            }
            Some(Command::Sudo) => {
                effect = Some(Effect::OpenUrl(content::SUDO_VIDEO.to_string()));
                Block::from_text(SUDO_DENIED)
            }
            Some(c) => self.respond(c),
            None => Block::from_text(NOT_FOUND),
        };

        self.scrollback.push(Entry {
            kind: EntryKind::Input,
            block: Block::from_text(&format!("{}{}", PROMPT, line)),
            rich: false,
        });
        let rich = block.has_links();
        self.scrollback.push(Entry {
            kind: EntryKind::Output,
            block,
            rich,
        });
        self.history.push(line);
        self.input.clear();
        effect
    }

    /// Output block for a command that only prints. Mode changes and
    /// side effects are handled by [`Shell::submit_line`].
    pub fn respond(&self, command: Command) -> Block {
        match command {
            Command::Help => Block::from_text(&help_table()),
            Command::About => content::about(),
            Command::Social => content::social(),
            Command::Projects => content::projects(),
            Command::Date => {
                let now = (self.clock)().format(DATE_FORMAT).to_string();
                Block::framed(vec![Line::plain(now)])
            }
            Command::Sudo => Block::from_text(SUDO_DENIED),
            Command::Clear | Command::Banner => Block::default(),
        }
    }

    pub fn history_up(&mut self) {
        if let Some(line) = self.history.older() {
            let line = line.to_string();
            self.set_input(&line);
        }
    }

    pub fn history_down(&mut self) {
        if let Some(line) = self.history.newer() {
            let line = line.to_string();
            self.set_input(&line);
        }
    }

    pub fn complete(&mut self) {
        if let Some(c) = Command::complete(&self.input) {
            self.set_input(c.name());
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if self.mode == Mode::Banner {
            if key.code == KeyCode::Esc {
                self.dismiss_banner();
            }
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => return self.submit(),
            (KeyCode::Up, _) => self.history_up(),
            (KeyCode::Down, _) => self.history_down(),
            (KeyCode::Tab, _) => self.complete(),
            (KeyCode::Backspace, _) => {
                self.input.pop();
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.input.clear(),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.input.push(c);
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(15, 4, 5))
            .unwrap()
    }

    fn shell() -> Shell {
        Shell::new().with_clock(fixed_clock)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(sh: &mut Shell, s: &str) {
        for c in s.chars() {
            sh.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn help_lists_every_command_with_description() {
        let mut sh = shell();
        sh.submit_line("help");
        let out = &sh.scrollback()[1];
        assert_eq!(out.kind, EntryKind::Output);
        let text = out.block.visible_text();
        assert_eq!(text.lines().count(), Command::ALL.len());
        for c in Command::ALL {
            assert!(text
                .lines()
                .any(|l| l.starts_with(c.name()) && l.ends_with(c.description())));
        }
    }

    #[test]
    fn unknown_command_appends_echo_and_message() {
        let mut sh = shell();
        assert_eq!(sh.submit_line("xyz123"), None);
        let sb = sh.scrollback();
        assert_eq!(sb.len(), 2);
        assert_eq!(sb[0].kind, EntryKind::Input);
        assert_eq!(
            sb[0].block.visible_text(),
            "guest@kevinsportfolio:~$ xyz123"
        );
        assert_eq!(sb[1].block.visible_text(), NOT_FOUND);
        assert_eq!(sh.history().entries(), ["xyz123"]);
    }

    #[test]
    fn empty_line_is_not_found_but_recorded() {
        let mut sh = shell();
        sh.submit();
        assert_eq!(sh.scrollback().len(), 2);
        assert_eq!(sh.scrollback()[1].block.visible_text(), NOT_FOUND);
        assert_eq!(sh.history().len(), 1);
    }

    #[test]
    fn clear_empties_scrollback_without_echo() {
        let mut sh = shell();
        sh.submit_line("about");
        sh.submit_line("help");
        sh.set_input("clear");
        assert_eq!(sh.submit(), None);
        assert!(sh.scrollback().is_empty());
        assert_eq!(sh.input(), "");
        assert_eq!(sh.history().len(), 2);
    }

    #[test]
    fn banner_enters_full_screen_and_escape_leaves() {
        let mut sh = shell();
        type_line(&mut sh, "banner");
        sh.handle_key(key(KeyCode::Enter));
        assert_eq!(sh.mode(), Mode::Banner);
        assert!(sh.scrollback().is_empty());
        assert!(sh.history().is_empty());

        sh.handle_key(key(KeyCode::Char('x')));
        assert_eq!(sh.mode(), Mode::Banner);
        sh.handle_key(key(KeyCode::Esc));
        assert_eq!(sh.mode(), Mode::Prompt);
        assert_eq!(sh.input(), "");
    }

    #[test]
    fn click_dismiss_returns_to_prompt() {
        let mut sh = shell();
        sh.submit_line("banner");
        sh.dismiss_banner();
        assert_eq!(sh.mode(), Mode::Prompt);
    }

    #[test]
    fn sudo_denies_and_requests_the_video() {
        let mut sh = shell();
        let effect = sh.submit_line("sudo make me a sandwich");
        assert_eq!(effect, Some(Effect::OpenUrl(content::SUDO_VIDEO.to_string())));
        assert_eq!(sh.scrollback()[1].block.visible_text(), SUDO_DENIED);
    }

    #[test]
    fn date_uses_the_clock() {
        let mut sh = shell();
        sh.submit_line("date");
        assert_eq!(
            sh.scrollback()[1].block.visible_text(),
            "\n10/19/2026, 3:04:05 PM\n"
        );
    }

    #[test]
    fn social_output_is_rich() {
        let mut sh = shell();
        sh.submit_line("social");
        assert!(sh.scrollback()[1].rich);
        assert!(!sh.scrollback()[0].rich);
        sh.submit_line("about");
        assert!(!sh.scrollback()[3].rich);
    }

    #[test]
    fn history_walks_back_and_forth() {
        let mut sh = shell();
        sh.submit_line("about");
        sh.submit_line("social");

        sh.handle_key(key(KeyCode::Up));
        assert_eq!(sh.input(), "social");
        sh.handle_key(key(KeyCode::Up));
        assert_eq!(sh.input(), "about");
        sh.handle_key(key(KeyCode::Up));
        assert_eq!(sh.input(), "about");
        sh.handle_key(key(KeyCode::Down));
        assert_eq!(sh.input(), "social");
        sh.handle_key(key(KeyCode::Down));
        assert_eq!(sh.input(), "");
        sh.set_input("draft");
        sh.handle_key(key(KeyCode::Down));
        assert_eq!(sh.input(), "draft");
        assert_eq!(sh.history().entries(), ["about", "social"]);
    }

    #[test]
    fn submitting_resets_the_history_cursor() {
        let mut sh = shell();
        sh.submit_line("about");
        sh.submit_line("social");
        sh.history_up();
        sh.history_up();
        sh.submit();
        assert_eq!(sh.history().entries(), ["about", "social", "about"]);
        sh.history_up();
        assert_eq!(sh.input(), "about");
        sh.history_up();
        assert_eq!(sh.input(), "social");
    }

    #[test]
    fn up_with_no_history_is_a_noop() {
        let mut sh = shell();
        sh.set_input("abc");
        sh.history_up();
        sh.history_down();
        assert_eq!(sh.input(), "abc");
    }

    #[test]
    fn tab_completes_unique_prefix_only() {
        let mut sh = shell();
        type_line(&mut sh, "pro");
        sh.handle_key(key(KeyCode::Tab));
        assert_eq!(sh.input(), "projects");

        sh.set_input("so");
        sh.complete();
        assert_eq!(sh.input(), "social");

        // "social" and "sudo" share the prefix
        sh.set_input("s");
        sh.complete();
        assert_eq!(sh.input(), "s");

        sh.set_input("");
        sh.complete();
        assert_eq!(sh.input(), "");

        sh.set_input("qq");
        sh.complete();
        assert_eq!(sh.input(), "qq");
    }

    #[test]
    fn editing_keys() {
        let mut sh = shell();
        type_line(&mut sh, "helpp");
        sh.handle_key(key(KeyCode::Backspace));
        assert_eq!(sh.input(), "help");
        sh.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(sh.input(), "");
        sh.handle_key(KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT));
        assert_eq!(sh.input(), "H");
    }
}
