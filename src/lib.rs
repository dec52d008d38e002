//! # fcc
//!
//! Summarize large directory listings by collapsing files that share a long
//! common name prefix into one counted entry.
//!
//! A directory holding `backup_2024_01_01_part001.tar` through
//! `backup_2024_01_01_part480.tar` reads as a single line:
//!
//! ```text
//! "backup_2024_01_01_pa" x480 [1.17 TiB]
//! ```
//!
//! ## Main Parts
//!
//! - [`scanner::Scanner`] - walks the directory tree and folds per-directory reports
//! - [`grouping`] - the prefix-grouping engine
//! - [`render::Renderer`] - turns groups into (optionally colored) lines
//! - [`report::Report`] - rendered lines plus [`report::Stats`]
//! - [`utils::ByteSize`] - byte quantities with smart unit formatting
//! - [`config`] - typed options and the TOML configuration file

pub mod config;
pub mod error;
pub mod grouping;
pub mod listing;
pub mod output;
pub mod render;
pub mod report;
pub mod scanner;
pub mod utils;

pub use config::{DisplayOptions, FileConfig, GroupOptions, Palette, ScanOptions};
pub use error::ScanError;
pub use report::{Report, Stats};
pub use scanner::Scanner;
