//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control which directories and files
//! the walker visits before their listings reach the grouping engine.

/// Configuration for directory scanning behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into subdirectories of the root
    pub recursive: bool,

    /// Visit hidden subdirectories and list hidden files
    pub include_hidden: bool,
}

impl ScanOptions {
    /// Whether a non-root directory with the given attributes is visited.
    ///
    /// System directories are never visited; hidden ones only when
    /// [`ScanOptions::include_hidden`] is set.
    #[must_use]
    pub const fn visits_directory(&self, is_hidden: bool, is_system: bool) -> bool {
        !is_system && (self.include_hidden || !is_hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_options_default() {
        let scan_opts = ScanOptions::default();

        assert!(!scan_opts.recursive);
        assert!(!scan_opts.include_hidden);
    }

    #[test]
    fn test_visits_directory() {
        let strict = ScanOptions::default();
        assert!(strict.visits_directory(false, false));
        assert!(!strict.visits_directory(true, false));
        assert!(!strict.visits_directory(false, true));

        let lenient = ScanOptions {
            recursive: true,
            include_hidden: true,
        };
        assert!(lenient.visits_directory(true, false));
        assert!(!lenient.visits_directory(true, true));
    }
}
