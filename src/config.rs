// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::commands::Command;
use crate::glyphs::list_glyph_sets;
use crate::palette::list_colors;

pub const DEFAULT_PARAMS_USAGE: &str = "DEFAULT PARAMS USAGE:\n  termfolio --color green --glyphs auto --fps 20";

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn heading(text: &str) -> String {
    if color_enabled_stdout() {
        format!("\x1b[1;36m{}\x1b[0m", text)
    } else {
        text.to_string()
    }
}

pub fn default_params_usage_for_help() -> String {
    match DEFAULT_PARAMS_USAGE.split_once('\n') {
        Some((head, rest)) => format!("{}\n{}", heading(head), rest),
        None => DEFAULT_PARAMS_USAGE.to_string(),
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "termfolio", version, disable_version_flag = true)]
pub struct Args {
    #[arg(
        long = "fullscreen",
        help_heading = "GENERAL",
        help = "Start with the full-screen banner"
    )]
    pub fullscreen: bool,

    #[arg(
        long = "run",
        value_name = "COMMAND",
        help_heading = "GENERAL",
        help = "Run one command, print its output and exit"
    )]
    pub run: Option<String>,

    #[arg(
        long = "format",
        default_value = "auto",
        help_heading = "GENERAL",
        help = "Output format for --run (auto, plain, text, hyperlink, html)"
    )]
    pub format: String,

    #[arg(
        long = "snapshot",
        help_heading = "GENERAL",
        help = "Print one banner frame as text and exit"
    )]
    pub snapshot: bool,

    #[arg(
        long = "frame",
        default_value_t = 0,
        help_heading = "GENERAL",
        help = "Frame number used by --snapshot"
    )]
    pub frame: u64,

    #[arg(
        long = "no-open",
        help_heading = "GENERAL",
        help = "Never open links in a browser (log them instead)"
    )]
    pub no_open: bool,

    #[arg(
        long = "no-mouse",
        help_heading = "GENERAL",
        help = "Do not capture the mouse (disables pointer effects and link clicks)"
    )]
    pub no_mouse: bool,

    #[arg(
        short = 'c',
        long = "color",
        default_value = "green",
        help_heading = "APPEARANCE",
        help = "Color theme (see --list-colors)"
    )]
    pub color: String,

    #[arg(
        long = "colormode",
        help_heading = "APPEARANCE",
        help = "Force color mode (allowed: 0, 8/256, 24/32). Default: detected from COLORTERM/TERM"
    )]
    pub colormode: Option<u16>,

    #[arg(
        short = 'g',
        long = "glyphs",
        default_value = "auto",
        help_heading = "APPEARANCE",
        help = "Banner glyph set (see --list-glyphs)"
    )]
    pub glyphs: String,

    #[arg(
        short = 'f',
        long = "fps",
        default_value_t = 20.0,
        help_heading = "PERFORMANCE",
        help = "Animation ticks per second (min 1 max 120)"
    )]
    pub fps: f64,

    #[arg(
        long = "seed",
        help_heading = "ANIMATION",
        help = "Seed for the initial blob scatter (random when omitted)"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "log-file",
        value_name = "PATH",
        help_heading = "LOGGING",
        help = "Write logs to PATH (filter with RUST_LOG)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long = "list-commands",
        help_heading = "HELP",
        help = "List the prompt commands and exit"
    )]
    pub list_commands: bool,

    #[arg(
        long = "list-colors",
        help_heading = "HELP",
        help = "List available color themes and exit"
    )]
    pub list_colors: bool,

    #[arg(
        long = "list-glyphs",
        help_heading = "HELP",
        help = "List available banner glyph sets and exit"
    )]
    pub list_glyphs: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}

fn print_value_table(title: &str, rows: &[(&str, &str)]) {
    println!("{}", heading(title));
    println!();
    println!("VALUE        DESCRIPTION");
    for (value, desc) in rows {
        println!("{:<12} {}", value, desc);
    }
}

pub fn print_list_commands() {
    let rows: Vec<(&str, &str)> = Command::ALL
        .iter()
        .map(|c| (c.name(), c.description()))
        .collect();
    print_value_table("PROMPT COMMANDS:", &rows);
    println!();
    println!("KEYS: Enter submit, Up/Down history, Tab complete, PgUp/PgDn scroll,");
    println!("      Esc or click leaves the full-screen banner, Ctrl+C quits");
}

pub fn print_list_colors() {
    print_value_table("AVAILABLE COLOR THEMES:", list_colors());
}

pub fn print_list_glyphs() {
    print_value_table("AVAILABLE GLYPH SETS:", list_glyph_sets());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_fifty_ms_tick() {
        let args = Args::try_parse_from(["termfolio"]).unwrap();
        assert_eq!(args.fps, 20.0);
        assert_eq!(args.color, "green");
        assert_eq!(args.glyphs, "auto");
        assert!(args.run.is_none());
        assert!(!args.fullscreen);
    }

    #[test]
    fn parses_run_and_seed() {
        let args =
            Args::try_parse_from(["termfolio", "--run", "sudo rm", "--seed", "9", "--no-open"])
                .unwrap();
        assert_eq!(args.run.as_deref(), Some("sudo rm"));
        assert_eq!(args.seed, Some(9));
        assert!(args.no_open);
        assert_eq!(args.format, "auto");
    }

    #[test]
    fn parses_run_format() {
        let args = Args::try_parse_from(["termfolio", "--run", "social", "--format", "html"])
            .unwrap();
        assert_eq!(args.format, "html");
    }
}
