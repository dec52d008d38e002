//! Prefix grouping of file names.
//!
//! This module holds the algorithm that turns one directory's sorted file
//! list into report entries. Adjacent names that share a long enough prefix
//! are collapsed into a single [`Group`] carrying a file count and an
//! aggregate size; names that share nothing with their successor become
//! singleton groups.
//!
//! Prefix discovery is deliberately approximate. Candidate lengths shrink in
//! steps of three from just below the shorter name's length, and the first
//! match loses its last two characters so that a trailing counter digit or
//! two does not end up in the anchor:
//!
//! ```text
//! backup_2024_01_01_part001.tar ┐
//! backup_2024_01_01_part002.tar ├─ "backup_2024_01_01_pa" x3
//! backup_2024_01_01_part003.tar ┘
//! ```

use tracing::trace;

use crate::{config::GroupOptions, listing::FileRecord, utils::ByteSize};

/// Distance between two candidate prefix lengths.
const PREFIX_STRIDE: usize = 3;

/// Characters dropped from the end of a matched prefix.
const PREFIX_TRIM: usize = 2;

/// A run of files collapsed into one report entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Shared prefix, or the full file name for a singleton
    pub name: String,

    /// Number of files in the group
    pub count: usize,

    /// Aggregate size of the files
    pub total_size: ByteSize,
}

impl Group {
    /// Start a group anchored at `prefix` holding `file`.
    #[must_use]
    pub fn new(prefix: String, file: &FileRecord) -> Self {
        Self {
            name: prefix,
            count: 1,
            total_size: ByteSize::from_bytes(file.size),
        }
    }

    /// A group holding only `file`, named after it.
    #[must_use]
    pub fn singleton(file: &FileRecord) -> Self {
        Self::new(file.name.clone(), file)
    }

    /// Whether `file` continues this group's prefix.
    #[must_use]
    pub fn continues(&self, file: &FileRecord) -> bool {
        file.name.starts_with(&self.name)
    }

    /// Add a file to the group.
    pub fn push(&mut self, file: &FileRecord) {
        self.count += 1;
        self.total_size.add_bytes(file.size);
    }

    /// Size per file in the group.
    #[must_use]
    pub fn average_size(&self) -> ByteSize {
        self.total_size / u64::try_from(self.count).ok()
    }
}

/// Find the shared prefix two adjacent file names are grouped under.
///
/// Candidate lengths start one below the shorter name's character count and
/// shrink by three while they exceed `min_prefix_length`. The first candidate
/// both names agree on is returned without its last two characters and
/// without trailing whitespace.
///
/// Returns `None` when no candidate matches or the trimmed prefix is empty.
///
/// # Examples
///
/// ```
/// # use fcc::grouping::common_prefix;
/// let prefix = common_prefix(
///     "backup_2024_01_01_part001.tar",
///     "backup_2024_01_01_part002.tar",
///     20,
/// );
/// assert_eq!(prefix.as_deref(), Some("backup_2024_01_01_pa"));
///
/// assert_eq!(common_prefix("notes.txt", "notes.md", 20), None);
/// ```
#[must_use]
pub fn common_prefix(a: &str, b: &str, min_prefix_length: usize) -> Option<String> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut len = a.len().min(b.len()).checked_sub(1)?;

    while len > min_prefix_length {
        if a[..len] == b[..len] {
            let prefix: String = a[..len.saturating_sub(PREFIX_TRIM)].iter().collect();
            let prefix = prefix.trim_end();

            return (!prefix.is_empty()).then(|| prefix.to_string());
        }

        len = len.saturating_sub(PREFIX_STRIDE);
    }

    None
}

/// Partition a sorted file list into groups and apply the count filters.
///
/// In verbose mode every file becomes its own group and nothing is filtered.
/// Otherwise consecutive files are collapsed as described in the module
/// documentation, and groups whose size falls outside
/// `min_count_in_group..=max_count_in_group` are dropped.
#[must_use]
pub fn group_files(files: &[FileRecord], options: &GroupOptions) -> Vec<Group> {
    if options.verbose {
        return files.iter().map(Group::singleton).collect();
    }

    let mut emitted = Vec::new();
    let mut emit = |group: Group| {
        if options.accepts(group.count) {
            trace!(name = %group.name, count = group.count, "group emitted");
            emitted.push(group);
        } else {
            trace!(name = %group.name, count = group.count, "group dropped by count filter");
        }
    };

    let mut open: Option<Group> = None;

    for (index, file) in files.iter().enumerate() {
        if let Some(group) = open.as_mut()
            && group.continues(file)
        {
            group.push(file);
            continue;
        }

        if let Some(group) = open.take() {
            emit(group);
        }

        let prefix = files
            .get(index + 1)
            .and_then(|next| common_prefix(&file.name, &next.name, options.min_prefix_length));

        match prefix {
            Some(prefix) => open = Some(Group::new(prefix, file)),
            None => emit(Group::singleton(file)),
        }
    }

    if let Some(group) = open {
        emit(group);
    }

    emitted
}
