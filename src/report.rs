//! Scan results: rendered lines plus aggregate statistics.
//!
//! Every directory visit produces a [`Report`]; the scanner folds them into
//! one run report with [`Report::merge`]. Nothing is shared or mutated across
//! visits, which keeps a single directory's report testable on its own.

use rand::Rng;

use crate::{grouping::Group, utils::ByteSize};

/// Separator printed above the summary line.
pub const SEPARATOR: &str = "-----------------------------";

/// Aggregate counts for the groups that made it into a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Files inside emitted groups
    pub files_seen: usize,

    /// Emitted groups (report lines before any random pick)
    pub groups_emitted: usize,

    /// Aggregate size of the emitted groups
    pub total_size: ByteSize,
}

impl Stats {
    /// Count one emitted group.
    pub fn record(&mut self, group: &Group) {
        self.files_seen += group.count;
        self.groups_emitted += 1;
        self.total_size.add_bytes(group.total_size.to_bytes());
    }

    /// Combine two sets of statistics.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            files_seen: self.files_seen + other.files_seen,
            groups_emitted: self.groups_emitted + other.groups_emitted,
            total_size: self.total_size + other.total_size,
        }
    }

    /// `TOTAL: <files> FILES`, the summary used in verbose mode where every
    /// group is a single file.
    #[must_use]
    pub fn files_line(&self) -> String {
        format!("TOTAL: {} FILES", self.files_seen)
    }

    /// `TOTAL: <files> FILES | <groups> GROUPS | <size>`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "TOTAL: {} FILES | {} GROUPS | {}",
            self.files_seen, self.groups_emitted, self.total_size
        )
    }
}

/// Rendered lines together with their statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// One rendered entry per line
    pub lines: Vec<String>,

    /// Totals over the emitted groups
    pub stats: Stats,
}

impl Report {
    /// Append another report after this one.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.lines.extend(other.lines);
        self.stats = self.stats.merge(other.stats);
        self
    }

    /// Whether no line was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Keep one uniformly chosen line.
    ///
    /// Reports with fewer than two lines are left as they are. The statistics
    /// still describe the whole scan.
    pub fn random_pick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.lines.len() < 2 {
            return;
        }

        let index = rng.gen_range(0..self.lines.len());
        let picked = self.lines.swap_remove(index);
        self.lines = vec![picked];
    }

    /// The text block written to the terminal or the output file.
    ///
    /// Outside verbose mode the lines are followed by a separator and the
    /// summary line.
    #[must_use]
    pub fn to_text(&self, verbose: bool) -> String {
        let mut text = String::new();

        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }

        if !verbose {
            text.push_str(SEPARATOR);
            text.push('\n');
            text.push_str(&self.stats.summary_line());
            text.push('\n');
        }

        text
    }
}
