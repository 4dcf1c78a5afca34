// Copyright (c) 2026 rezky_nightky

use std::env;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Mono,
    Color256,
    TrueColor,
}

impl ColorMode {
    pub fn detect() -> Self {
        let colorterm = env::var("COLORTERM")
            .unwrap_or_default()
            .to_ascii_lowercase();
        if colorterm.contains("truecolor") || colorterm.contains("24bit") {
            return ColorMode::TrueColor;
        }
        if env::var("TERM").unwrap_or_default().eq_ignore_ascii_case("dumb") {
            return ColorMode::Mono;
        }
        ColorMode::Color256
    }

    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(ColorMode::Mono),
            8 | 256 => Some(ColorMode::Color256),
            24 | 32 => Some(ColorMode::TrueColor),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::TrueColor => "24-bit truecolor",
            ColorMode::Color256 => "8-bit (256-color)",
            ColorMode::Mono => "mono",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Green,
    Amber,
    Cyan,
    Purple,
    Gray,
    Ice,
}

impl ColorScheme {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" | "matrix" => Ok(ColorScheme::Green),
            "amber" | "gold" => Ok(ColorScheme::Amber),
            "cyan" => Ok(ColorScheme::Cyan),
            "purple" | "violet" => Ok(ColorScheme::Purple),
            "gray" | "grey" => Ok(ColorScheme::Gray),
            "ice" | "snow" => Ok(ColorScheme::Ice),
            _ => Err(format!("invalid color: {} (see --list-colors)", s)),
        }
    }
}

/// Fixed-rate animation clock. Each tick advances the frame counter by one;
/// a late tick does not try to catch up on the frames it missed.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
    frame: u64,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: now,
            frame: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    pub fn time_left(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    pub fn tick(&mut self, now: Instant) -> u64 {
        self.frame = self.frame.wrapping_add(1);
        self.next += self.period;
        if now > self.next {
            self.next = now;
        }
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_counts_one_frame_per_tick() {
        let start = Instant::now();
        let mut t = Ticker::new(Duration::from_millis(50), start);
        assert!(t.is_due(start));
        assert_eq!(t.tick(start), 1);
        assert!(!t.is_due(start));
        assert_eq!(t.time_left(start), Duration::from_millis(50));
        assert_eq!(t.tick(start + Duration::from_millis(50)), 2);
    }

    #[test]
    fn late_ticker_does_not_burst() {
        let start = Instant::now();
        let mut t = Ticker::new(Duration::from_millis(50), start);
        let late = start + Duration::from_secs(2);
        t.tick(late);
        assert!(t.is_due(late));
        t.tick(late);
        assert!(!t.is_due(late));
        assert_eq!(t.frame(), 2);
    }

    #[test]
    fn color_mode_bits() {
        assert_eq!(ColorMode::from_bits(0), Some(ColorMode::Mono));
        assert_eq!(ColorMode::from_bits(256), Some(ColorMode::Color256));
        assert_eq!(ColorMode::from_bits(24), Some(ColorMode::TrueColor));
        assert_eq!(ColorMode::from_bits(16), None);
    }

    #[test]
    fn scheme_aliases() {
        assert_eq!(ColorScheme::parse(" Grey "), Ok(ColorScheme::Gray));
        assert_eq!(ColorScheme::parse("gold"), Ok(ColorScheme::Amber));
        assert!(ColorScheme::parse("plaid").is_err());
    }
}
