// Copyright (c) 2026 rezky_nightky

//! Procedural banner field.
//!
//! Every tick the banner is resampled from a scalar field built out of three
//! displaced sine waves, two drifting gaussian blobs and a gaussian bump
//! around the mouse pointer. The field is quantized onto a glyph ramp.
//!
//! [`FieldState`] owns the only mutable parts (the smoothed pointer and the
//! blob centres). [`FieldState::render`] reads it without mutation, so the
//! same state, frame and size always give the same grid.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::banner::{DisplayMode, PlateRegion};

/// Radians of animation per frame.
pub const TIME_SCALE: f64 = 0.03;
const FREQUENCY: f64 = 0.1;
const POINTER_SMOOTHING: f64 = 0.2;
const BLOB_SMOOTHING: f64 = 0.2;
const BLOB_FALLOFF: f64 = 0.001;
const MAX_NORMALIZED: f64 = 0.99;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 3;
pub const COMPACT_MAX_HEIGHT: u16 = 14;
/// Rows kept free under the full-screen banner for the exit hint.
pub const FULL_SCREEN_FOOTER: u16 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    pub fn for_viewport(cols: u16, rows: u16, mode: DisplayMode) -> Self {
        let (width, height) = match mode {
            DisplayMode::Compact => (cols.saturating_sub(2), (rows / 2).min(COMPACT_MAX_HEIGHT)),
            DisplayMode::FullScreen => (cols, rows.saturating_sub(FULL_SCREEN_FOOTER)),
        };
        Self {
            width: width.max(MIN_WIDTH),
            height: height.max(MIN_HEIGHT),
        }
    }

    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn approach(&mut self, target: Point, factor: f64) {
        self.x += (target.x - self.x) * factor;
        self.y += (target.y - self.y) * factor;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphKind {
    /// Sampled from the field; `index` is the position in the glyph ramp.
    Field { index: u8 },
    /// Copied from the name plate.
    Plate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub kind: GlyphKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    pub width: u16,
    pub height: u16,
    pub glyphs: Vec<Glyph>,
}

impl GlyphGrid {
    #[cfg(test)]
    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.glyphs
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn row(&self, y: u16) -> &[Glyph] {
        let w = self.width as usize;
        let start = (y as usize * w).min(self.glyphs.len());
        let end = (start + w).min(self.glyphs.len());
        &self.glyphs[start..end]
    }

    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.glyphs.len() * 3 + self.height as usize);
        for y in 0..self.height {
            out.extend(self.row(y).iter().map(|g| g.ch));
            out.push('\n');
        }
        out
    }
}

fn blob_targets(t: f64, size: GridSize) -> [Point; 2] {
    let (w, h) = (size.width as f64, size.height as f64);
    [
        Point {
            x: w * 0.3 - t.sin() * 10.0,
            y: h * 0.5 - (t * 0.7).cos() * 5.0,
        },
        Point {
            x: w * 0.7 - (t * 0.8).cos() * 8.0,
            y: h * 0.3 - (t * 0.9).sin() * 4.0,
        },
    ]
}

/// Gaussian bump around the pointer, in `[0, 2]`.
pub fn pointer_influence(dx: f64, dy: f64) -> f64 {
    (-(dx * dx + dy * dy) * 1.5).exp() * 2.0
}

#[derive(Clone, Debug)]
pub struct FieldState {
    pointer: Point,
    pointer_target: Point,
    blobs: [Point; 2],
}

impl FieldState {
    /// Starts the blobs scattered around their first targets so that the
    /// opening frames drift in. `seed` makes the scatter reproducible.
    pub fn new(seed: Option<u64>, size: GridSize) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let spread_x = size.width as f64 * 0.15;
        let spread_y = size.height as f64 * 0.25;
        let mut blobs = blob_targets(0.0, size);
        for b in &mut blobs {
            b.x += rng.random_range(-1.0f64..=1.0) * spread_x;
            b.y += rng.random_range(-1.0f64..=1.0) * spread_y;
        }
        let origin = Point { x: 0.0, y: 0.0 };
        Self {
            pointer: origin,
            pointer_target: origin,
            blobs,
        }
    }

    /// Records the latest pointer sample, normalized to the banner area.
    pub fn point_at(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.pointer_target = Point {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        };
    }

    #[cfg(test)]
    pub fn pointer(&self) -> (f64, f64) {
        (self.pointer.x, self.pointer.y)
    }

    /// One smoothing step, run once per tick before rendering.
    pub fn advance(&mut self, frame: u64, size: GridSize) {
        self.pointer.approach(self.pointer_target, POINTER_SMOOTHING);
        let targets = blob_targets(frame as f64 * TIME_SCALE, size);
        for (blob, target) in self.blobs.iter_mut().zip(targets) {
            blob.approach(target, BLOB_SMOOTHING);
        }
    }

    /// Field value at a cell, normalized into `[0, MAX_NORMALIZED]`.
    pub fn sample(&self, t: f64, x: u16, y: u16, size: GridSize) -> f64 {
        let (fx, fy) = (x as f64, y as f64);
        let (w, h) = (size.width.max(1) as f64, size.height.max(1) as f64);

        let influence = pointer_influence(fx / w - self.pointer.x, fy / h - self.pointer.y);
        let push = 2.0 + influence * 3.0;
        let sx = fx + (t + fy * 0.1).sin() * push;
        let sy = fy + (t * 0.7 + fx * 0.1).cos() * push;

        let wave = (sx * FREQUENCY + t).sin() * 0.3
            + ((sx + sy) * FREQUENCY * 0.5 + t * 1.1).sin() * 0.3
            + (sy * FREQUENCY * 0.7 + t * 0.9).sin() * 0.3;

        let blob: f64 = self
            .blobs
            .iter()
            .map(|b| {
                let (dx, dy) = (fx - b.x, fy - b.y);
                (-(dx * dx + dy * dy) * BLOB_FALLOFF).exp()
            })
            .sum();

        let value = (wave + blob * 0.5 + influence * 0.5) / 2.0;
        ((value + 1.0) / 2.0).clamp(0.0, MAX_NORMALIZED)
    }

    pub fn render(
        &self,
        frame: u64,
        size: GridSize,
        mode: DisplayMode,
        glyphs: &[char],
    ) -> GlyphGrid {
        let t = frame as f64 * TIME_SCALE;
        let plate = PlateRegion::for_grid(size.width, size.height, mode);
        let mut out = Vec::with_capacity(size.cells());

        for y in 0..size.height {
            for x in 0..size.width {
                if let Some(p) = plate.filter(|p| p.contains(x, y)) {
                    out.push(Glyph {
                        ch: p.char_at(x, y),
                        kind: GlyphKind::Plate,
                    });
                    continue;
                }
                let v = self.sample(t, x, y, size);
                let index = (v * glyphs.len() as f64).floor() as usize;
                out.push(Glyph {
                    ch: glyphs.get(index).copied().unwrap_or(' '),
                    kind: GlyphKind::Field {
                        index: index.min(u8::MAX as usize) as u8,
                    },
                });
            }
        }

        GlyphGrid {
            width: size.width,
            height: size.height,
            glyphs: out,
        }
    }
}
