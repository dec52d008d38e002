//! Rendering of report entries.
//!
//! Each emitted group becomes one line:
//!
//! ```text
//! "exports/backup_2024_01_01_pa" x12 [3.50 GiB]
//! ```
//!
//! The directory part only appears for entries below the scanned root when
//! directory names are enabled, the count only outside verbose mode, and the
//! size only when group sizes are enabled.

use colored::{Color, Colorize};

use crate::{config::DisplayOptions, grouping::Group};

/// Turns groups into report lines.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    /// What each line shows and how it is colored
    display: DisplayOptions,

    /// Append `xN` counts (off in verbose mode)
    show_counts: bool,
}

impl Renderer {
    /// Create a renderer.
    ///
    /// `show_counts` is `false` in verbose mode, where every line is a single
    /// file and a count would carry no information.
    #[must_use]
    pub const fn new(display: DisplayOptions, show_counts: bool) -> Self {
        Self {
            display,
            show_counts,
        }
    }

    /// Render one group found in the directory called `directory`.
    ///
    /// `directory` is `None` for the scanned root.
    #[must_use]
    pub fn render(&self, directory: Option<&str>, group: &Group) -> String {
        let palette = self.display.palette;
        let quote = self.paint("\"", palette.quote);

        let mut line = quote.clone();

        if self.display.include_dir_names
            && let Some(directory) = directory
        {
            line.push_str(&self.paint(&format!("{directory}/"), palette.directory));
        }

        line.push_str(&self.paint(&group.name, palette.file));
        line.push_str(&quote);

        if self.show_counts {
            line.push_str(&format!(" x{}", group.count));
        }

        if self.display.show_group_size {
            let size = if self.display.show_average_size {
                group.average_size()
            } else {
                group.total_size
            };
            line.push_str(&format!(" [{size}]"));
        }

        line
    }

    /// Apply the foreground color and the palette background, if coloring.
    fn paint(&self, text: &str, color: Color) -> String {
        if !self.display.colorize {
            return text.to_string();
        }

        let styled = text.color(color);
        match self.display.palette.background {
            Some(background) => styled.on_color(background).to_string(),
            None => styled.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{listing::FileRecord, utils::ByteSize};

    fn group(name: &str, count: usize, kib_each: u64) -> Group {
        let file = FileRecord::new(name, kib_each * 1024);
        let mut group = Group::new(name.to_string(), &file);
        for _ in 1..count {
            group.push(&file);
        }
        group
    }

    #[test]
    fn test_render_plain_group() {
        let renderer = Renderer::new(DisplayOptions::default(), true);
        let line = renderer.render(None, &group("backup_2024_01_01_pa", 3, 1));
        assert_eq!(line, "\"backup_2024_01_01_pa\" x3");
    }

    #[test]
    fn test_render_verbose_has_no_count() {
        let renderer = Renderer::new(DisplayOptions::default(), false);
        let line = renderer.render(None, &group("notes.txt", 1, 1));
        assert_eq!(line, "\"notes.txt\"");
    }

    #[test]
    fn test_render_directory_prefix() {
        let display = DisplayOptions {
            include_dir_names: true,
            ..DisplayOptions::default()
        };
        let renderer = Renderer::new(display, true);

        let nested = renderer.render(Some("exports/2024"), &group("a.txt", 1, 1));
        assert_eq!(nested, "\"exports/2024/a.txt\" x1");

        let root = renderer.render(None, &group("a.txt", 1, 1));
        assert_eq!(root, "\"a.txt\" x1");
    }

    #[test]
    fn test_render_directory_prefix_needs_flag() {
        let renderer = Renderer::new(DisplayOptions::default(), true);
        let line = renderer.render(Some("exports"), &group("a.txt", 1, 1));
        assert_eq!(line, "\"a.txt\" x1");
    }

    #[test]
    fn test_render_group_size() {
        let display = DisplayOptions {
            show_group_size: true,
            ..DisplayOptions::default()
        };
        let renderer = Renderer::new(display, true);
        let line = renderer.render(None, &group("shard_", 4, 512));
        assert_eq!(line, "\"shard_\" x4 [2.00 MiB]");
    }

    #[test]
    fn test_render_average_size() {
        let display = DisplayOptions {
            show_group_size: true,
            show_average_size: true,
            ..DisplayOptions::default()
        };
        let renderer = Renderer::new(display, true);
        let line = renderer.render(None, &group("shard_", 4, 512));
        assert_eq!(line, "\"shard_\" x4 [512.00 KiB]");
    }

    #[test]
    fn test_render_average_keeps_byte_precision() {
        let display = DisplayOptions {
            show_group_size: true,
            show_average_size: true,
            ..DisplayOptions::default()
        };
        let renderer = Renderer::new(display, true);

        let mut group = Group::new("x".to_string(), &FileRecord::new("x1", 2048));
        group.push(&FileRecord::new("x2", 1024));
        group.push(&FileRecord::new("x3", 1024));

        assert_eq!(renderer.render(None, &group), "\"x\" x3 [1.33 KiB]");
    }

    #[test]
    fn test_render_average_flag_alone_shows_nothing() {
        let display = DisplayOptions {
            show_average_size: true,
            ..DisplayOptions::default()
        };
        let renderer = Renderer::new(display, true);
        let line = renderer.render(None, &group("shard_", 4, 512));
        assert_eq!(line, "\"shard_\" x4");
    }

    #[test]
    fn test_render_empty_size() {
        let display = DisplayOptions {
            show_group_size: true,
            ..DisplayOptions::default()
        };
        let renderer = Renderer::new(display, true);
        let empty = Group {
            name: "empty.bin".to_string(),
            count: 1,
            total_size: ByteSize::from_bytes(0),
        };
        assert_eq!(renderer.render(None, &empty), "\"empty.bin\" x1 [0.00 Bytes]");
    }

    #[test]
    fn test_render_colorized_keeps_text() {
        colored::control::set_override(true);
        let display = DisplayOptions {
            colorize: true,
            include_dir_names: true,
            ..DisplayOptions::default()
        };
        let renderer = Renderer::new(display, true);
        let line = renderer.render(Some("sub"), &group("a.txt", 2, 1));

        colored::control::unset_override();

        assert!(line.contains("\u{1b}["));
        assert!(line.contains("sub/"));
        assert!(line.contains("a.txt"));
        assert!(line.ends_with(" x2"));
    }
}
