// Copyright (c) 2026 rezky_nightky

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    About,
    Social,
    Projects,
    Banner,
    Clear,
    Help,
    Date,
    Sudo,
}

const NAME_COLUMN: usize = 15;

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::About,
        Command::Social,
        Command::Projects,
        Command::Banner,
        Command::Clear,
        Command::Help,
        Command::Date,
        Command::Sudo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::About => "about",
            Command::Social => "social",
            Command::Projects => "projects",
            Command::Banner => "banner",
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Date => "date",
            Command::Sudo => "sudo",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::About => "Information About Me",
            Command::Social => "My Online Profiles",
            Command::Projects => "My Recent Projects",
            Command::Banner => "View and Play With the Banner",
            Command::Clear => "Clear Terminal",
            Command::Help => "Show Available Commands",
            Command::Date => "Display Current Date and Time",
            Command::Sudo => "Run a Command with Superuser Privileges",
        }
    }

    /// Exact, case-sensitive lookup of a command name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Resolves a submitted line by its first token. The line is cut at the
    /// first whitespace character, so leading whitespace never matches.
    pub fn parse(line: &str) -> Option<Self> {
        let token = line.split(char::is_whitespace).next().unwrap_or("");
        Self::lookup(token)
    }

    /// The single command whose name starts with `prefix`, if unambiguous.
    pub fn complete(prefix: &str) -> Option<Self> {
        let mut matches = Self::ALL
            .into_iter()
            .filter(|c| c.name().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }
}

/// One row per command: name padded to a fixed column, then its description.
pub fn help_table() -> String {
    Command::ALL
        .iter()
        .map(|c| format!("{:<width$}{}", c.name(), c.description(), width = NAME_COLUMN))
        .collect::<Vec<_>>()
        .join("\n")
}
