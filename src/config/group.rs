//! Grouping configuration.
//!
//! This module defines how aggressively file names are merged into groups
//! and which of the resulting groups make it into the report.

/// Default minimum length a shared prefix must exceed to anchor a group.
pub const DEFAULT_MIN_PREFIX_LENGTH: usize = 20;

/// Configuration for the prefix-grouping engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupOptions {
    /// List every file on its own line without grouping or filtering
    pub verbose: bool,

    /// Candidate prefixes must be longer than this many characters
    pub min_prefix_length: usize,

    /// Groups with fewer files are dropped
    pub min_count_in_group: usize,

    /// Groups with more files are dropped (None = unbounded)
    pub max_count_in_group: Option<usize>,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            min_prefix_length: DEFAULT_MIN_PREFIX_LENGTH,
            min_count_in_group: 0,
            max_count_in_group: None,
        }
    }
}

impl GroupOptions {
    /// Whether a group holding `count` files passes the count filters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fcc::config::GroupOptions;
    /// let options = GroupOptions {
    ///     min_count_in_group: 3,
    ///     max_count_in_group: Some(5),
    ///     ..GroupOptions::default()
    /// };
    /// assert!(!options.accepts(2));
    /// assert!(options.accepts(4));
    /// assert!(!options.accepts(6));
    /// ```
    #[must_use]
    pub fn accepts(&self, count: usize) -> bool {
        self.min_count_in_group <= count && self.max_count_in_group.is_none_or(|max| count <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_options_default() {
        let options = GroupOptions::default();

        assert!(!options.verbose);
        assert_eq!(options.min_prefix_length, 20);
        assert_eq!(options.min_count_in_group, 0);
        assert_eq!(options.max_count_in_group, None);
    }

    #[test]
    fn test_default_accepts_everything() {
        let options = GroupOptions::default();
        assert!(options.accepts(1));
        assert!(options.accepts(10_000));
    }

    #[test]
    fn test_accepts_bounds_are_inclusive() {
        let options = GroupOptions {
            min_count_in_group: 3,
            max_count_in_group: Some(5),
            ..GroupOptions::default()
        };

        assert!(!options.accepts(2));
        assert!(options.accepts(3));
        assert!(options.accepts(4));
        assert!(options.accepts(5));
        assert!(!options.accepts(6));
    }
}
