//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library. It provides structured access
//! to user input and handles argument conflicts and defaults.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use fcc::config::file::{FileColorConfig, FileConfig, expand_tilde};
use fcc::config::{
    DEFAULT_MIN_PREFIX_LENGTH, DisplayOptions, GroupOptions, Palette, ScanOptions, parse_color,
};

/// Environment variable overriding the quote color.
pub const QUOTE_COLOR_ENV: &str = "FCC_QUOTE_COLOR";

/// Environment variable overriding the directory color.
pub const DIR_COLOR_ENV: &str = "FCC_DIR_COLOR";

/// Environment variable overriding the file color.
pub const FILE_COLOR_ENV: &str = "FCC_FILE_COLOR";

/// Environment variable overriding the background color.
pub const BG_COLOR_ENV: &str = "FCC_BG_COLOR";

/// Command-line arguments for grouping and filtering.
#[derive(Parser)]
struct GroupingArgs {
    /// List every file on its own line, without grouping (implies --dir-names)
    ///
    /// Count filters do not apply and no summary line is printed.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Minimum length a shared prefix must exceed to form a group
    ///
    /// Lower values merge more aggressively. Defaults to 20.
    #[arg(short = 'l', long, value_name = "CHARS")]
    min_prefix: Option<usize>,

    /// Drop groups holding fewer files than this
    #[arg(long, value_name = "N")]
    min_count: Option<usize>,

    /// Drop groups holding more files than this
    #[arg(long, value_name = "N")]
    max_count: Option<usize>,
}

/// Command-line arguments controlling what each line shows.
#[derive(Parser)]
#[allow(clippy::struct_excessive_bools)]
struct DisplayArgs {
    /// Prefix entries from subdirectories with their path (only useful with -r)
    #[arg(short = 'd', long)]
    dir_names: bool,

    /// Show the aggregate size of each group
    #[arg(short = 's', long)]
    group_size: bool,

    /// Show the average size per file instead of the group total (with -s)
    #[arg(short = 'a', long)]
    average: bool,

    /// Print a single randomly chosen entry
    #[arg(long)]
    random: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Command-line arguments controlling directory traversal.
#[derive(Parser)]
struct ScanningArgs {
    /// Descend into subdirectories
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Include hidden files and directories
    #[arg(short = 'H', long = "hidden")]
    include_hidden: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "fcc")]
#[command(
    about = "Summarize a directory listing by collapsing files that share a long name prefix into counted groups"
)]
#[command(version)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Directory to summarize
    ///
    /// Defaults to the config file `dir`, then the current directory.
    #[arg(value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Directory to summarize (alternative to the positional argument)
    #[arg(short = 'p', long = "path", value_name = "PATH", conflicts_with = "dir")]
    path: Option<PathBuf>,

    /// Save the report to <DIR>/<timestamp>.fcc instead of printing it
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    out: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(long)]
    debug: bool,

    /// Grouping options
    #[command(flatten)]
    grouping: GroupingArgs,

    /// Display options
    #[command(flatten)]
    display: DisplayArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether debug logging was requested.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Whether every file is listed on its own line.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.grouping.verbose
    }

    /// Directory the report should be saved into, if any.
    #[must_use]
    pub fn out_dir(&self) -> Option<PathBuf> {
        self.out.clone()
    }

    /// Resolve the directory to scan.
    ///
    /// Priority: positional argument or `--path` > config file `dir` > current directory.
    /// Tilde expansion is applied to the path from the config file.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> PathBuf {
        self.dir
            .clone()
            .or_else(|| self.path.clone())
            .or_else(|| config.dir.as_deref().map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// For boolean flags, the CLI flag (if set) takes priority, then the
    /// config file value, then `false`.
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        ScanOptions {
            recursive: self.scanning.recursive || config.scanning.recursive.unwrap_or(false),
            include_hidden: self.scanning.include_hidden
                || config.scanning.include_hidden.unwrap_or(false),
        }
    }

    /// Extract grouping options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > hardcoded default.
    #[must_use]
    pub fn group_options(&self, config: &FileConfig) -> GroupOptions {
        GroupOptions {
            verbose: self.grouping.verbose,
            min_prefix_length: self
                .grouping
                .min_prefix
                .or(config.grouping.min_prefix_length)
                .unwrap_or(DEFAULT_MIN_PREFIX_LENGTH),
            min_count_in_group: self
                .grouping
                .min_count
                .or(config.grouping.min_count)
                .unwrap_or(0),
            max_count_in_group: self.grouping.max_count.or(config.grouping.max_count),
        }
    }

    /// Extract display options from CLI args, config file and environment.
    ///
    /// `--verbose` turns directory names on. Colors follow
    /// [`resolve_palette`] with the process environment.
    #[must_use]
    pub fn display_options(&self, config: &FileConfig) -> DisplayOptions {
        DisplayOptions {
            include_dir_names: self.display.dir_names
                || self.grouping.verbose
                || config.display.dir_names.unwrap_or(false),
            show_group_size: self.display.group_size || config.display.group_size.unwrap_or(false),
            show_average_size: self.display.average
                || config.display.average_size.unwrap_or(false),
            random_pick: self.display.random,
            colorize: !self.display.no_color && config.display.color.unwrap_or(true),
            palette: resolve_palette(&config.colors, |key| std::env::var(key).ok()),
        }
    }
}

/// Build the palette from defaults, config file colors and environment overrides.
///
/// Priority: environment variable > config file > [`Palette::default`].
/// Color names that cannot be parsed are ignored with a warning.
pub fn resolve_palette(colors: &FileColorConfig, env: impl Fn(&str) -> Option<String>) -> Palette {
    let pick = |env_key: &str, configured: Option<&str>| {
        [env(env_key).as_deref(), configured]
            .into_iter()
            .flatten()
            .find_map(|name| {
                let color = parse_color(name);
                if color.is_none() {
                    warn!(color = name, "ignoring unknown color");
                }
                color
            })
    };

    let defaults = Palette::default();

    Palette {
        quote: pick(QUOTE_COLOR_ENV, colors.quote.as_deref()).unwrap_or(defaults.quote),
        directory: pick(DIR_COLOR_ENV, colors.directory.as_deref())
            .unwrap_or(defaults.directory),
        file: pick(FILE_COLOR_ENV, colors.file.as_deref()).unwrap_or(defaults.file),
        background: pick(BG_COLOR_ENV, colors.background.as_deref()).or(defaults.background),
    }
}
