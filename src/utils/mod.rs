//! Utility types and helpers.
//!
//! This module contains value types used throughout the application, such
//! as the byte-size type the report is rendered with.

pub mod size;

pub use size::{ByteSize, SizeUnit};
