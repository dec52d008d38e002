//! Display configuration for rendered report lines.
//!
//! This module defines what each report line shows and the color palette it
//! is drawn with. The palette is an ordinary value resolved once by the
//! command-line layer (defaults, config file, then environment overrides)
//! and passed down to the renderer.

use colored::Color;

/// Colors used when rendering a report line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Color of the quote marks around each entry
    pub quote: Color,

    /// Color of the directory part of an entry
    pub directory: Color,

    /// Color of the file name or group prefix
    pub file: Color,

    /// Background behind the whole entry (None = terminal default)
    pub background: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            quote: Color::Yellow,
            directory: Color::Blue,
            file: Color::Green,
            background: None,
        }
    }
}

/// Parse a color name such as `"red"`, `"bright blue"` or `"#ff8800"`.
///
/// Returns `None` for names the terminal color library does not know.
#[must_use]
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim();

    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    name.parse::<Color>().ok()
}

/// Parse a six-digit `rrggbb` hex triple into a true color.
fn parse_hex_color(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    Some(Color::TrueColor {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Configuration for how report entries are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayOptions {
    /// Prefix entries from subdirectories with their path relative to the root
    pub include_dir_names: bool,

    /// Append the group size to each entry
    pub show_group_size: bool,

    /// Show the average size per file instead of the group total
    pub show_average_size: bool,

    /// Reduce the report to one randomly chosen entry
    pub random_pick: bool,

    /// Emit terminal color codes
    pub colorize: bool,

    /// Colors used when `colorize` is set
    pub palette: Palette,
}
