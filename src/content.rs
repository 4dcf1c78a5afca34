// Copyright (c) 2026 rezky_nightky

use std::fmt::Write as _;

pub const OWNER: &str = "Kevin Dong";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/kevinlindong/";
pub const GITHUB: &str = "https://github.com/kevinlindong";
pub const EMAIL: &str = "kevindong@nyu.edu";
pub const SUDO_VIDEO: &str = "https://www.youtube.com/watch?v=9bZkp7q19f0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Link { label: String, url: String },
}

impl Span {
    pub fn text(s: impl Into<String>) -> Self {
        Span::Text(s.into())
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn visible(&self) -> &str {
        match self {
            Span::Text(s) => s,
            Span::Link { label, .. } => label,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line(pub Vec<Span>);

impl Line {
    pub fn plain(s: impl Into<String>) -> Self {
        Line(vec![Span::text(s)])
    }

    pub fn blank() -> Self {
        Line(Vec::new())
    }

    pub fn visible(&self) -> String {
        self.0.iter().map(Span::visible).collect()
    }
}

/// How `--run` prints a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Links spelled out as `label <url>`.
    Plain,
    /// Link labels only.
    Text,
    /// OSC 8 terminal hyperlinks.
    Hyperlink,
    /// HTML anchors.
    Html,
}

impl Format {
    /// `auto` picks hyperlinks when stdout is a colour terminal.
    pub fn parse(s: &str, styled: bool) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(if styled {
                Format::Hyperlink
            } else {
                Format::Plain
            }),
            "plain" => Ok(Format::Plain),
            "text" => Ok(Format::Text),
            "hyperlink" | "osc8" => Ok(Format::Hyperlink),
            "html" => Ok(Format::Html),
            _ => Err(format!(
                "invalid --format: {} (allowed: auto, plain, text, hyperlink, html)",
                s
            )),
        }
    }
}

/// A multi-line piece of output. Lines are rendered in order; hyperlinks are
/// kept as structured spans rather than embedded markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub lines: Vec<Line>,
}

impl Block {
    /// One line per `\n`-separated piece, so a trailing newline yields a
    /// trailing blank line.
    pub fn from_text(s: &str) -> Self {
        Block {
            lines: s.split('\n').map(Line::plain).collect(),
        }
    }

    pub fn framed(lines: Vec<Line>) -> Self {
        let mut all = Vec::with_capacity(lines.len() + 2);
        all.push(Line::blank());
        all.extend(lines);
        all.push(Line::blank());
        Block { lines: all }
    }

    pub fn has_links(&self) -> bool {
        self.lines
            .iter()
            .flat_map(|l| l.0.iter())
            .any(|s| matches!(s, Span::Link { .. }))
    }

    pub fn render(&self, format: Format) -> String {
        match format {
            Format::Plain => self.plain_text(),
            Format::Text => self.visible_text(),
            Format::Hyperlink => self.hyperlinked_text(),
            Format::Html => self.markup(),
        }
    }

    /// Visible text only, one line per line.
    pub fn visible_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::visible)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text with links spelled out as `label <url>`, for non-interactive output.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for span in &line.0 {
                match span {
                    Span::Text(s) => out.push_str(s),
                    Span::Link { label, url } => {
                        let _ = write!(out, "{} <{}>", label, url);
                    }
                }
            }
        }
        out
    }

    /// Text with links as OSC 8 terminal hyperlinks.
    pub fn hyperlinked_text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for span in &line.0 {
                match span {
                    Span::Text(s) => out.push_str(s),
                    Span::Link { label, url } => {
                        let _ = write!(out, "\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, label);
                    }
                }
            }
        }
        out
    }

    /// Anchor markup, the form the content takes when embedded in a page.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for span in &line.0 {
                match span {
                    Span::Text(s) => out.push_str(&escape_html(s)),
                    Span::Link { label, url } => {
                        let _ = if url.starts_with("mailto:") {
                            write!(out, "<a href=\"{}\">{}</a>", url, escape_html(label))
                        } else {
                            write!(
                                out,
                                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                                url,
                                escape_html(label)
                            )
                        };
                    }
                }
            }
        }
        out
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

const PORTRAIT: [&str; 34] = [
    "                                                            ",
    "                          :====:                            ",
    "                        -##%%##%%###*-.                     ",
    "                      :*#%@@@@@%@@@%%##=.                   ",
    "                     +#%@@%#*++++#%@%%%##-                  ",
    "                    *%@@%#*+======+#@@%###=                 ",
    "                   :@@@%#**++======+#@@%%##                 ",
    "                   .@@@####%##++###*++#@@%#                 ",
    "                    =@%+**#**+==+*#++=-*@@*                 ",
    "                     *%=====+=---===---+#%-                 ",
    "                     .#+++++**++====---=+=                  ",
    "                      :++++++**+=====--+-                   ",
    "                       =*+++#*+++++=--+%:                   ",
    "                       :%**+++++=---==##                    ",
    "                        =*#**+++=====-+                     ",
    "                       -#**#%%%##++===##:                   ",
    "                  .:-++*#%#####*+=====*#+.                  ",
    "              .-+***#**#@%####**+++==+##+++-.               ",
    "          :-+**%######%@@%*#*****++++*#*++*%#++=:.          ",
    "        -*####%%%%%%%@@@@%#++======++***++**%%**##+:        ",
    "       =##%%%#%%%%%%%%%%@%#-======+#%@@#**%#%@%**%%**-      ",
    "      +%%#%%%%@%%%%%%%%%@@@=-----=%@@@@@@*%#%%@#%#%##*+.    ",
    "     +%%%%%@%%@%%%%%%%%%@@@#---::-%%%%%%%%%##%@#%%##%#*=    ",
    "    .@%@@@%@%%%%%%#%%%%%%%%%---:.:%%%%%%#%%#%%@%#@%%%%#*.   ",
    "    =@@@%@@@%%%%%%%%%@%%@%%%+:--::#%%%%%#%#%%%@@%%@%@@#*+   ",
    "    *@@@@@@@@%@@@%@%%@%%@%%%+::-::*%%%%##%#%%%%@%%%@@%###.  ",
    "    #@@@@@@@@%%@@@@@%@%%%@%%+-::::+%%%%%%%%%%%%@@@@@%%%#%-  ",
    "   .%@@@@@@@@%%%@@%%%%%%%%%%=-:.::=%%@%%%#%%%%%%%@@@%%%%@*  ",
    "   =@%@@@@@@@%@@@@@@@@%%%%%%=:-::-=%%@%%%#%%%%%#%@@@%%%%%#  ",
    "   #@%@@@@@@@%%%@@@@%%%%%%%%=.---:-#%%%%%#@%%%%#%@@%%%%%@%: ",
    "   %%%@@@@@@@@@@@@@@%%%%%##%=::====+%%@@%%@@@%%%@@%@@%%%@%= ",
    "  -@@@@@@@@@%%%%%@@@@%%@%%#*=::===*+%%@@%%@%@%%#@@@@@%@@@%+ ",
    "  +@@@@@@@@@@@%@@@@@@%%%%%%%==-=-==+#%@@%#@%%%%#@@@@%%%%%%+ ",
    "  #%@@@@@@@@@@@@@@@@@%%%%%%#==-=----=#%%#%@%%%%#@@@%%@%@@@+",
];

pub fn about() -> Block {
    let mut lines: Vec<Line> = PORTRAIT.iter().map(|l| Line::plain(*l)).collect();
    lines.push(Line::blank());
    lines.push(Line::plain(format!("Hi, my name is {}!", OWNER)));
    lines.push(Line::blank());
    lines.push(Line::plain(
        "I am currently a Sophomore majoring in Computer Science and minoring Data Science at \
         New York University. I am a curious and avid learner, passionate about software \
         development, quantitative finance, and data science.",
    ));
    Block::framed(lines)
}

pub fn social() -> Block {
    Block::framed(vec![
        Line(vec![
            Span::text("LinkedIn     "),
            Span::link("linkedin/kevinlindong", LINKEDIN),
        ]),
        Line(vec![
            Span::text("GitHub       "),
            Span::link("github/kevinlindong", GITHUB),
        ]),
        Line(vec![
            Span::text("Email        "),
            Span::link(EMAIL, format!("mailto:{}?subject=Hello%20Kevin", EMAIL)),
        ]),
    ])
}

struct Project {
    name: &'static str,
    repo: &'static str,
    blurb: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        name: "LofAI",
        repo: "LofAI",
        blurb: "An AI-powered endless lofi music player with productivity tools.",
    },
    Project {
        name: "Precedent Parser",
        repo: "Precedent_Parser",
        blurb: "A website that helps find precedent for legal research.",
    },
    Project {
        name: "Duo Dash",
        repo: "Duo_Dash",
        blurb: "A fun retro arcade style game with a twist.",
    },
    Project {
        name: "Antivirus Server",
        repo: "Antivirus_Server",
        blurb: "A web server than scans files for viruses.",
    },
];

pub fn projects() -> Block {
    let mut lines: Vec<Line> = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Line(vec![
                Span::link(
                    format!("{}. {}:", i + 1, p.name),
                    format!("{}/{}", GITHUB, p.repo),
                ),
                Span::text(format!(" {}", p.blurb)),
            ])
        })
        .collect();
    lines.push(Line::blank());
    lines.push(Line(vec![
        Span::text("For more details on these projects, visit my "),
        Span::link("GitHub", GITHUB),
        Span::text(" page!"),
    ]));
    Block::framed(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_keeps_trailing_blank() {
        let b = Block::from_text("one\n");
        assert_eq!(b.lines, vec![Line::plain("one"), Line::plain("")]);
        assert_eq!(b.visible_text(), "one\n");
    }

    #[test]
    fn social_is_rich_and_about_is_not() {
        assert!(social().has_links());
        assert!(projects().has_links());
        assert!(!about().has_links());
    }

    #[test]
    fn about_is_framed_by_blank_lines() {
        let b = about();
        assert_eq!(b.lines.first(), Some(&Line::blank()));
        assert_eq!(b.lines.last(), Some(&Line::blank()));
        assert!(b.visible_text().contains("Hi, my name is Kevin Dong!"));
    }

    #[test]
    fn plain_text_spells_out_links() {
        let text = social().plain_text();
        assert!(text.contains("GitHub       github/kevinlindong <https://github.com/kevinlindong>"));
    }

    #[test]
    fn markup_uses_anchors() {
        let html = projects().markup();
        assert!(html.contains(
            "<a href=\"https://github.com/kevinlindong/Duo_Dash\" target=\"_blank\" rel=\"noopener noreferrer\">3. Duo Dash:</a> A fun retro arcade style game with a twist."
        ));
        let mail = social().markup();
        assert!(mail.contains("<a href=\"mailto:kevindong@nyu.edu?subject=Hello%20Kevin\">kevindong@nyu.edu</a>"));
    }

    #[test]
    fn hyperlinks_wrap_label_in_osc8() {
        let b = Block {
            lines: vec![Line(vec![Span::link("x", "https://e.test")])],
        };
        assert_eq!(
            b.hyperlinked_text(),
            "\x1b]8;;https://e.test\x1b\\x\x1b]8;;\x1b\\"
        );
    }

    #[test]
    fn format_auto_follows_the_terminal() {
        assert_eq!(Format::parse("auto", true), Ok(Format::Hyperlink));
        assert_eq!(Format::parse("auto", false), Ok(Format::Plain));
        assert_eq!(Format::parse("HTML", false), Ok(Format::Html));
        assert_eq!(Format::parse("osc8", false), Ok(Format::Hyperlink));
        assert!(Format::parse("pdf", true).is_err());
    }

    #[test]
    fn render_dispatches_on_format() {
        let b = Block {
            lines: vec![Line(vec![
                Span::text("a < b "),
                Span::link("x", "https://e.test"),
            ])],
        };
        assert_eq!(b.render(Format::Text), "a < b x");
        assert_eq!(b.render(Format::Plain), "a < b x <https://e.test>");
        assert_eq!(
            b.render(Format::Html),
            "a &lt; b <a href=\"https://e.test\" target=\"_blank\" rel=\"noopener noreferrer\">x</a>"
        );
        assert_eq!(b.render(Format::Hyperlink), b.hyperlinked_text());
    }

    #[test]
    fn escape_html_escapes_angle_brackets() {
        assert_eq!(escape_html("a<b>&\""), "a&lt;b&gt;&amp;&quot;");
    }
}
