// Copyright (c) 2026 rezky_nightky

/// Ordered glyph ramps used to quantize the banner field. Spaces inside a
/// ramp are real entries, so the pattern stays airy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphSet {
    Orbs,
    Ascii,
    Blocks,
    Dots,
}

const ORBS: &str = "⊘ ⊙ ◉ ⦿ ○ ●";
const ASCII: &str = " .:-=+*#%@";
const BLOCKS: &str = " ░▒▓█";
const DOTS: &str = " ⠁⠃⠇⡇⣇⣧⣷⣿";

impl GlyphSet {
    pub fn chars(self) -> Vec<char> {
        let src = match self {
            GlyphSet::Orbs => ORBS,
            GlyphSet::Ascii => ASCII,
            GlyphSet::Blocks => BLOCKS,
            GlyphSet::Dots => DOTS,
        };
        src.chars().collect()
    }
}

pub fn glyph_set_from_str(name: &str, default_to_ascii: bool) -> Result<GlyphSet, String> {
    match name.trim().to_ascii_lowercase().as_str() {
        "auto" => Ok(if default_to_ascii {
            GlyphSet::Ascii
        } else {
            GlyphSet::Orbs
        }),
        "orbs" | "circles" => Ok(GlyphSet::Orbs),
        "ascii" => Ok(GlyphSet::Ascii),
        "blocks" | "shade" => Ok(GlyphSet::Blocks),
        "dots" | "braille" => Ok(GlyphSet::Dots),
        _ => Err(format!("invalid glyph set: {} (see --list-glyphs)", name)),
    }
}

pub fn list_glyph_sets() -> &'static [(&'static str, &'static str)] {
    &[
        ("auto", "ascii on non-UTF terminals, otherwise orbs"),
        ("orbs", "Circled orbs with gaps (alias: circles)"),
        ("ascii", "Printable ASCII density ramp"),
        ("blocks", "Shade blocks (alias: shade)"),
        ("dots", "Braille density ramp (alias: braille)"),
    ]
}
