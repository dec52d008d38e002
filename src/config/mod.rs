//! Configuration types for scanning, grouping and display.
//!
//! The options here are plain, strongly typed values. The command-line layer
//! resolves them from arguments, the configuration file and the environment,
//! and hands them to the library fully formed.

pub mod display;
pub mod file;
pub mod group;
pub mod scan;

pub use display::{DisplayOptions, Palette, parse_color};
pub use file::FileConfig;
pub use group::{DEFAULT_MIN_PREFIX_LENGTH, GroupOptions};
pub use scan::ScanOptions;
