//! # fcc
//!
//! Summarize large directory listings by collapsing files that share a long
//! common name prefix into a single counted entry.
//!
//! ## Usage
//!
//! ```bash
//! # Group the files of the current directory
//! fcc
//!
//! # Walk a whole tree, show directory names and group sizes
//! fcc ~/backups -r -d -s
//!
//! # Save the report instead of printing it
//! fcc ~/backups -r --out ~/reports
//! ```

mod cli;

use std::{path::Path, process::exit};

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use fcc::{
    Report, ScanError, Scanner,
    config::{DEFAULT_MIN_PREFIX_LENGTH, FileConfig, GroupOptions},
    output,
    report::SEPARATOR,
};
use tracing::Level;

/// Exit code for invalid arguments or configuration.
const EXIT_USAGE: i32 = 1;

/// Exit code for filesystem failures during the scan.
const EXIT_FILESYSTEM: i32 = 2;

/// Message shown when the scan hits a permission problem.
const PERMISSION_MESSAGE: &str =
    "You do not have sufficient permissions to view all directories or files.";

/// Entry point for the fcc application.
///
/// Errors from [`inner_main`] are printed to stderr. A [`ScanError`] anywhere
/// in the chain exits with code 2, everything else with code 1.
fn main() {
    if let Err(err) = inner_main() {
        match err.downcast_ref::<ScanError>() {
            Some(scan_error) if scan_error.is_permission_denied() => {
                eprintln!("{}", PERMISSION_MESSAGE.red());
                exit(EXIT_FILESYSTEM);
            }
            Some(scan_error) => {
                eprintln!("Error: {scan_error}");
                exit(EXIT_FILESYSTEM);
            }
            None => {
                eprintln!("Error: {err}");
                exit(EXIT_USAGE);
            }
        }
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, layers them over the config file, validates the
/// result, scans, and prints or saves the report.
///
/// # Errors
///
/// Returns configuration errors before anything is scanned, and the
/// [`ScanError`] that aborted the walk otherwise.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    init_logging(args.debug());

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config();

    let dir = args.directory(&file_config);
    let out_dir = args.out_dir();
    let scan_options = args.scan_options(&file_config);
    let group_options = args.group_options(&file_config);
    let mut display_options = args.display_options(&file_config);

    validate_directory(&dir, "Path")?;
    if let Some(out) = &out_dir {
        validate_directory(out, "Output directory")?;
    }
    validate_counts(&group_options)?;

    if out_dir.is_some() {
        display_options.colorize = false;
    }

    let scanner = Scanner::new(scan_options, group_options, display_options);
    let report = scanner.scan(&dir)?;
    let text = report.to_text(args.verbose());

    print_header();

    match out_dir {
        Some(out) => {
            let path = output::write_report(&out, &text)?;
            println!("Saved to '{}'", path.display());
            println!("{}", saved_summary(&report, args.verbose()));
        }
        None => print!("{text}"),
    }

    Ok(())
}

// ── Helper functions ────────────────────────────────────────────────────

/// Install the stderr log subscriber.
fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print the program name and version above the output.
fn print_header() {
    println!("{} {}", "fcc".bold(), env!("CARGO_PKG_VERSION"));
    println!("{SEPARATOR}");
}

/// Summary printed after saving a report; verbose mode reports files only.
fn saved_summary(report: &Report, verbose: bool) -> String {
    if verbose {
        report.stats.files_line()
    } else {
        report.stats.summary_line()
    }
}

/// Ensure `path` exists and is a directory.
fn validate_directory(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{what} does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("{what} is not a directory: {}", path.display());
    }
    Ok(())
}

/// Ensure the count filters describe a non-empty range.
fn validate_counts(options: &GroupOptions) -> Result<()> {
    if let Some(max) = options.max_count_in_group
        && max < options.min_count_in_group
    {
        bail!(
            "--max-count ({max}) must not be smaller than --min-count ({})",
            options.min_count_in_group
        );
    }
    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r##"# fcc configuration
# All values shown are their defaults. Uncomment and change as needed.

# Default directory to scan (defaults to current directory when not set)
# dir = "."

[scanning]
# Descend into subdirectories
# recursive = false

# Include hidden files and directories
# include_hidden = false

[grouping]
# A shared prefix must be longer than this to form a group
# min_prefix_length = 20

# Drop groups with fewer files than this
# min_count = 0

# Drop groups with more files than this (unbounded when not set)
# max_count = 100

[display]
# Prefix entries with their directory
# dir_names = false

# Show the size of each group
# group_size = false

# Show the average size per file instead of the group total
# average_size = false

# Colorize terminal output
# color = true

[colors]
# Color names (red, bright blue, ...) or hex values like "#ff8800".
# FCC_QUOTE_COLOR, FCC_DIR_COLOR, FCC_FILE_COLOR and FCC_BG_COLOR override these.
# quote = "yellow"
# directory = "blue"
# file = "green"
# background = "black"
"##;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let dir_str = config.dir.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
dir            = {dir}

[scanning]
recursive      = {recursive}
include_hidden = {include_hidden}

[grouping]
min_prefix_length = {min_prefix_length}
min_count         = {min_count}
max_count         = {max_count}

[display]
dir_names      = {dir_names}
group_size     = {group_size}
average_size   = {average_size}
color          = {color}

[colors]
quote          = {quote}
directory      = {directory}
file           = {file}
background     = {background}",
        dir = dir_str,
        recursive = show_bool(config.scanning.recursive, false),
        include_hidden = show_bool(config.scanning.include_hidden, false),
        min_prefix_length = show_usize(
            config.grouping.min_prefix_length,
            &DEFAULT_MIN_PREFIX_LENGTH.to_string()
        ),
        min_count = show_usize(config.grouping.min_count, "0"),
        max_count = show_usize(config.grouping.max_count, "(unbounded)"),
        dir_names = show_bool(config.display.dir_names, false),
        group_size = show_bool(config.display.group_size, false),
        average_size = show_bool(config.display.average_size, false),
        color = show_bool(config.display.color, true),
        quote = show_str(config.colors.quote.as_deref(), "yellow"),
        directory = show_str(config.colors.directory.as_deref(), "blue"),
        file = show_str(config.colors.file.as_deref(), "green"),
        background = config
            .colors
            .background
            .as_deref()
            .map_or_else(|| "(terminal)  (default)".to_string(), |v| format!("\"{v}\"")),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.dir.is_none());
        assert!(config.grouping.max_count.is_none());
    }

    #[test]
    fn test_format_config_defaults() {
        let text = format_config(&FileConfig::default());
        assert!(text.contains("min_prefix_length = 20  (default)"));
        assert!(text.contains("background     = (terminal)  (default)"));
    }

    #[test]
    fn test_saved_summary_verbose_omits_groups() {
        let report = Report {
            lines: vec!["\"a.txt\"".to_string(), "\"b.txt\"".to_string()],
            stats: fcc::Stats {
                files_seen: 2,
                groups_emitted: 2,
                total_size: fcc::utils::ByteSize::from_bytes(2048),
            },
        };

        assert_eq!(saved_summary(&report, true), "TOTAL: 2 FILES");
        assert_eq!(
            saved_summary(&report, false),
            "TOTAL: 2 FILES | 2 GROUPS | 2.00 KiB"
        );
    }

    #[test]
    fn test_validate_counts() {
        let ok = GroupOptions {
            min_count_in_group: 2,
            max_count_in_group: Some(2),
            ..GroupOptions::default()
        };
        assert!(validate_counts(&ok).is_ok());

        let inverted = GroupOptions {
            min_count_in_group: 5,
            max_count_in_group: Some(3),
            ..GroupOptions::default()
        };
        assert!(validate_counts(&inverted).is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(validate_directory(temp.path(), "Path").is_ok());
        assert!(validate_directory(&file, "Path").is_err());
        assert!(validate_directory(&temp.path().join("missing"), "Path").is_err());
    }
}
