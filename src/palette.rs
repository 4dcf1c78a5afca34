// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

use crate::runtime::{ColorMode, ColorScheme};

/// Number of shades in a banner ramp before colour-mode reduction.
const RAMP_STEPS: usize = 8;

#[derive(Clone, Debug)]
pub struct Theme {
    /// Dim to bright; field glyphs pick a shade by their level.
    pub ramp: Vec<Color>,
    pub text: Option<Color>,
    pub prompt: Option<Color>,
    pub accent: Option<Color>,
    pub link: Option<Color>,
}

impl Theme {
    pub fn shade(&self, level: f32) -> Option<Color> {
        if self.ramp.is_empty() {
            return None;
        }
        let last = self.ramp.len() - 1;
        let i = (level.clamp(0.0, 1.0) * last as f32).round() as usize;
        self.ramp.get(i.min(last)).copied()
    }

    pub fn highlight(&self) -> Option<Color> {
        self.ramp.last().copied()
    }
}

struct SchemeStops {
    ramp: &'static [(u8, u8, u8)],
    text: (u8, u8, u8),
    prompt: (u8, u8, u8),
    accent: (u8, u8, u8),
    link: (u8, u8, u8),
}

fn stops_for(scheme: ColorScheme) -> SchemeStops {
    match scheme {
        ColorScheme::Green => SchemeStops {
            ramp: &[(8, 48, 16), (0, 135, 45), (80, 220, 110), (200, 255, 210)],
            text: (190, 230, 195),
            prompt: (90, 230, 120),
            accent: (250, 220, 90),
            link: (110, 190, 255),
        },
        ColorScheme::Amber => SchemeStops {
            ramp: &[(60, 35, 0), (150, 90, 0), (230, 160, 20), (255, 235, 170)],
            text: (240, 210, 160),
            prompt: (255, 175, 40),
            accent: (255, 255, 255),
            link: (255, 215, 120),
        },
        ColorScheme::Cyan => SchemeStops {
            ramp: &[(0, 40, 60), (0, 110, 140), (40, 200, 220), (200, 250, 255)],
            text: (200, 235, 240),
            prompt: (60, 210, 230),
            accent: (255, 200, 90),
            link: (140, 170, 255),
        },
        ColorScheme::Purple => SchemeStops {
            ramp: &[(40, 20, 70), (95, 60, 160), (160, 120, 235), (235, 215, 255)],
            text: (225, 215, 240),
            prompt: (180, 140, 255),
            accent: (255, 140, 200),
            link: (130, 200, 255),
        },
        ColorScheme::Gray => SchemeStops {
            ramp: &[(40, 40, 40), (100, 100, 100), (170, 170, 170), (245, 245, 245)],
            text: (210, 210, 210),
            prompt: (255, 255, 255),
            accent: (255, 255, 255),
            link: (170, 200, 230),
        },
        ColorScheme::Ice => SchemeStops {
            ramp: &[(20, 40, 80), (70, 120, 190), (150, 200, 240), (250, 252, 255)],
            text: (220, 235, 250),
            prompt: (150, 210, 255),
            accent: (255, 255, 255),
            link: (120, 220, 255),
        },
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let (a, b) = (a as f32, b as f32);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

fn gradient(stops: &[(u8, u8, u8)], steps: usize) -> Vec<(u8, u8, u8)> {
    match (stops.len(), steps) {
        (0, _) | (_, 0) => Vec::new(),
        (1, n) => vec![stops[0]; n],
        (_, 1) => vec![stops[0]],
        _ => {
            let segs = stops.len() - 1;
            (0..steps)
                .map(|i| {
                    let pos = (i as f32) / ((steps - 1) as f32) * segs as f32;
                    let seg = (pos.floor() as usize).min(segs - 1);
                    let t = pos - seg as f32;
                    let (r0, g0, b0) = stops[seg];
                    let (r1, g1, b1) = stops[seg + 1];
                    (lerp_u8(r0, r1, t), lerp_u8(g0, g1, t), lerp_u8(b0, b1, t))
                })
                .collect()
        }
    }
}

fn dist2(a: (u8, u8, u8), b: (u8, u8, u8)) -> i32 {
    let dr = a.0 as i32 - b.0 as i32;
    let dg = a.1 as i32 - b.1 as i32;
    let db = a.2 as i32 - b.2 as i32;
    dr * dr + dg * dg + db * db
}

/// Nearest xterm-256 index, choosing between the 6x6x6 cube and the gray ramp.
fn rgb_to_ansi256(rgb: (u8, u8, u8)) -> u8 {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    let axis = |v: u8| ((v as u16 * 5 + 127) / 255) as u8;
    let (r6, g6, b6) = (axis(rgb.0), axis(rgb.1), axis(rgb.2));
    let cube = (
        LEVELS[r6 as usize],
        LEVELS[g6 as usize],
        LEVELS[b6 as usize],
    );
    let cube_idx = 16 + 36 * r6 + 6 * g6 + b6;

    let avg = ((rgb.0 as u16 + rgb.1 as u16 + rgb.2 as u16) / 3) as u8;
    let (gray_idx, gray) = match avg {
        0..=7 => (16, (0, 0, 0)),
        239..=255 => (231, (255, 255, 255)),
        _ => {
            let step = (avg - 8) / 10;
            let v = 8 + 10 * step;
            (232 + step, (v, v, v))
        }
    };

    if dist2(rgb, gray) < dist2(rgb, cube) {
        gray_idx
    } else {
        cube_idx
    }
}

fn to_color(mode: ColorMode, rgb: (u8, u8, u8)) -> Option<Color> {
    match mode {
        ColorMode::Mono => None,
        ColorMode::Color256 => Some(Color::AnsiValue(rgb_to_ansi256(rgb))),
        ColorMode::TrueColor => Some(Color::Rgb {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }),
    }
}

pub fn build_theme(scheme: ColorScheme, mode: ColorMode) -> Theme {
    let stops = stops_for(scheme);
    let ramp = gradient(stops.ramp, RAMP_STEPS)
        .into_iter()
        .filter_map(|rgb| to_color(mode, rgb))
        .collect();
    Theme {
        ramp,
        text: to_color(mode, stops.text),
        prompt: to_color(mode, stops.prompt),
        accent: to_color(mode, stops.accent),
        link: to_color(mode, stops.link),
    }
}

pub fn list_colors() -> &'static [(&'static str, &'static str)] {
    &[
        ("green", "Phosphor green (alias: matrix)"),
        ("amber", "Amber monitor (alias: gold)"),
        ("cyan", "Cyan"),
        ("purple", "Purple (alias: violet)"),
        ("gray", "Grayscale (alias: grey)"),
        ("ice", "Ice blue (alias: snow)"),
    ]
}
