//! Directory walking and per-directory dispatch.
//!
//! This module provides the scanning logic that enumerates the directories
//! below a root, lists the eligible files of each one, hands every listing to
//! the grouping engine and folds the per-directory reports into a single run
//! report.
//!
//! The walk is depth-first and pre-order. The root is always visited; below
//! it, system directories and (unless hidden entries are included) hidden
//! directories are skipped together with everything inside them. The first
//! filesystem error ends the scan.

use std::{fs, path::Path, time::Duration};

use humansize::{BINARY, format_size};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::{DisplayOptions, GroupOptions, ScanOptions},
    error::ScanError,
    grouping::group_files,
    listing::{self, DirectoryAttributes, DirectoryListing, DirectoryNode, FileRecord},
    render::Renderer,
    report::{Report, Stats},
};

/// Directory scanner producing grouped file reports.
///
/// The `Scanner` owns the fully resolved options for one run. It walks the
/// directory tree, groups each directory's files and renders the groups, and
/// returns the combined [`Report`].
#[derive(Debug)]
pub struct Scanner {
    /// Which directories and files are visited
    scan_options: ScanOptions,

    /// How files are grouped and filtered
    group_options: GroupOptions,

    /// How groups are rendered
    display_options: DisplayOptions,

    /// When `true`, suppresses the progress spinner.
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fcc::{Scanner, ScanOptions, GroupOptions, DisplayOptions};
    /// let scan_options = ScanOptions {
    ///     recursive: true,
    ///     include_hidden: false,
    /// };
    ///
    /// let scanner = Scanner::new(scan_options, GroupOptions::default(), DisplayOptions::default());
    /// ```
    #[must_use]
    pub const fn new(
        scan_options: ScanOptions,
        group_options: GroupOptions,
        display_options: DisplayOptions,
    ) -> Self {
        Self {
            scan_options,
            group_options,
            display_options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Scan a directory tree and build the report.
    ///
    /// When random picking is enabled the rendered lines are reduced to one
    /// using the thread-local random generator.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] if the root is not a directory or any
    /// directory or file below it cannot be read.
    pub fn scan(&self, root: &Path) -> Result<Report, ScanError> {
        self.scan_with_rng(root, &mut rand::thread_rng())
    }

    /// Scan a directory tree, drawing the random pick from `rng`.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] if the root is not a directory or any
    /// directory or file below it cannot be read.
    pub fn scan_with_rng<R: Rng + ?Sized>(
        &self,
        root: &Path,
        rng: &mut R,
    ) -> Result<Report, ScanError> {
        let metadata = fs::metadata(root).map_err(|e| ScanError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let progress = self.progress_bar();
        let mut report = Report::default();
        let mut visited = 0usize;

        for node in self.directories(root) {
            let listing = self.list_files(node?)?;
            visited += 1;
            progress.set_message(format!("Scanning... {visited} directories"));

            if listing.files.is_empty() {
                debug!(path = %listing.node.path.display(), "no eligible files, skipping");
                continue;
            }

            report = report.merge(self.summarize(&listing));
        }

        progress.finish_and_clear();

        if self.display_options.random_pick {
            report.random_pick(rng);
        }

        debug!(
            files = report.stats.files_seen,
            groups = report.stats.groups_emitted,
            "scan complete"
        );

        Ok(report)
    }

    /// Lazily enumerate the directories to visit, root first.
    ///
    /// Only the root is yielded unless recursion is enabled. Directories
    /// that fail [`ScanOptions::visits_directory`] are pruned with their
    /// whole subtree.
    pub fn directories<'a>(
        &'a self,
        root: &'a Path,
    ) -> impl Iterator<Item = Result<DirectoryNode, ScanError>> + 'a {
        let max_depth = if self.scan_options.recursive {
            usize::MAX
        } else {
            0
        };

        WalkDir::new(root)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| self.should_visit(entry))
            .map(move |entry| {
                entry
                    .map(|entry| DirectoryNode::new(root, entry.path()))
                    .map_err(|e| ScanError::walk(root, e))
            })
    }

    /// List the eligible files of one directory, sorted by name.
    ///
    /// Hidden files are dropped unless hidden entries are included. Entries
    /// that are neither regular files nor symlinks to one are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] if the directory or one of its entries cannot
    /// be read.
    pub fn list_files(&self, node: DirectoryNode) -> Result<DirectoryListing, ScanError> {
        let entries = fs::read_dir(&node.path).map_err(|e| ScanError::io(&node.path, e))?;
        let mut files = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| ScanError::io(&node.path, e))?;
            let path = entry.path();

            if !self.scan_options.include_hidden && listing::is_hidden(&path) {
                continue;
            }

            let size = listing::regular_file_size(&entry).map_err(|e| ScanError::io(&path, e))?;
            if let Some(size) = size {
                files.push(FileRecord::new(
                    entry.file_name().to_string_lossy().into_owned(),
                    size,
                ));
            }
        }

        Ok(DirectoryListing::new(node, files))
    }

    /// Group and render one directory's files.
    #[must_use]
    pub fn summarize(&self, listing: &DirectoryListing) -> Report {
        debug!(
            path = %listing.node.path.display(),
            files = listing.files.len(),
            size = %format_size(listing.total_bytes(), BINARY),
            "grouping directory"
        );

        let renderer = Renderer::new(self.display_options, !self.group_options.verbose);
        let directory = listing.node.display_name();
        let mut stats = Stats::default();

        let lines = group_files(&listing.files, &self.group_options)
            .iter()
            .map(|group| {
                stats.record(group);
                renderer.render(directory.as_deref(), group)
            })
            .collect();

        Report { lines, stats }
    }

    /// Whether the walker yields (and descends into) `entry`.
    fn should_visit(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }

        if !entry.file_type().is_dir() {
            return false;
        }

        let attributes = DirectoryAttributes::inspect(entry.path(), false);
        self.scan_options
            .visits_directory(attributes.is_hidden, attributes.is_system)
    }

    /// Spinner shown on stderr while walking.
    fn progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scanning...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Create a quiet scanner with the given scan options and defaults otherwise.
    fn scanner(scan_options: ScanOptions) -> Scanner {
        Scanner::new(
            scan_options,
            GroupOptions::default(),
            DisplayOptions::default(),
        )
        .with_quiet(true)
    }

    /// Helper to create a file with content, ensuring parent dirs exist.
    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn relative_paths(scanner: &Scanner, root: &Path) -> Vec<PathBuf> {
        scanner
            .directories(root)
            .map(|node| node.unwrap().relative_path)
            .collect()
    }

    #[test]
    fn test_directories_non_recursive_yields_root_only() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sub")).unwrap();

        let paths = relative_paths(&scanner(ScanOptions::default()), temp.path());
        assert_eq!(paths, vec![PathBuf::new()]);
    }

    #[test]
    fn test_directories_pre_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/inner")).unwrap();
        fs::create_dir_all(temp.path().join("b")).unwrap();
        create_file(&temp.path().join("file.txt"), "x");

        let options = ScanOptions {
            recursive: true,
            include_hidden: false,
        };
        let paths = relative_paths(&scanner(options), temp.path());

        assert_eq!(
            paths,
            vec![
                PathBuf::new(),
                PathBuf::from("a"),
                PathBuf::from("a/inner"),
                PathBuf::from("b"),
            ]
        );
    }

    #[test]
    fn test_directories_prune_hidden_subtree() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".cache/deep")).unwrap();
        fs::create_dir_all(temp.path().join("visible")).unwrap();

        let strict = ScanOptions {
            recursive: true,
            include_hidden: false,
        };
        let paths = relative_paths(&scanner(strict), temp.path());
        assert_eq!(paths, vec![PathBuf::new(), PathBuf::from("visible")]);

        let lenient = ScanOptions {
            recursive: true,
            include_hidden: true,
        };
        let paths = relative_paths(&scanner(lenient), temp.path());
        assert_eq!(paths.len(), 4);
        assert!(paths.contains(&PathBuf::from(".cache/deep")));
    }

    #[test]
    fn test_directories_always_yield_hidden_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join(".hidden-root");
        fs::create_dir_all(&root).unwrap();

        let nodes: Vec<_> = scanner(ScanOptions::default())
            .directories(&root)
            .map(Result::unwrap)
            .collect();

        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].attributes.is_root);
        assert!(nodes[0].attributes.is_hidden);
    }

    #[test]
    fn test_list_files_sorted_and_sized() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("b.txt"), "bb");
        create_file(&temp.path().join("a.txt"), "a");
        fs::create_dir_all(temp.path().join("dir.txt")).unwrap();

        let scanner = scanner(ScanOptions::default());
        let node = DirectoryNode::new(temp.path(), temp.path());
        let listing = scanner.list_files(node).unwrap();

        assert_eq!(
            listing.files,
            vec![FileRecord::new("a.txt", 1), FileRecord::new("b.txt", 2)]
        );
    }

    #[test]
    fn test_list_files_hidden_filter() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join(".env"), "secret");
        create_file(&temp.path().join("main.rs"), "fn main() {}");

        let node = DirectoryNode::new(temp.path(), temp.path());

        let strict = scanner(ScanOptions::default());
        let listing = strict.list_files(node.clone()).unwrap();
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name, "main.rs");

        let lenient = scanner(ScanOptions {
            recursive: false,
            include_hidden: true,
        });
        let listing = lenient.list_files(node).unwrap();
        assert_eq!(listing.files.len(), 2);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = TempDir::new().unwrap();

        let report = scanner(ScanOptions::default()).scan(temp.path()).unwrap();

        assert!(report.is_empty());
        assert_eq!(report.stats.files_seen, 0);
        assert_eq!(report.stats.groups_emitted, 0);
        assert_eq!(report.stats.total_size.to_string(), "0.00 Bytes");
    }

    #[test]
    fn test_scan_missing_root() {
        let temp = TempDir::new().unwrap();
        let result = scanner(ScanOptions::default()).scan(&temp.path().join("missing"));
        assert!(matches!(result, Err(ScanError::NotFound { .. })));
    }

    #[test]
    fn test_scan_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        create_file(&file, "x");

        let result = scanner(ScanOptions::default()).scan(&file);
        assert!(matches!(result, Err(ScanError::NotADirectory { .. })));
    }

    #[test]
    fn test_summarize_uses_directory_name() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        create_file(&sub.join("a.txt"), "a");

        let scanner = Scanner::new(
            ScanOptions::default(),
            GroupOptions::default(),
            DisplayOptions {
                include_dir_names: true,
                ..DisplayOptions::default()
            },
        )
        .with_quiet(true);

        let listing = scanner
            .list_files(DirectoryNode::new(temp.path(), &sub))
            .unwrap();
        let report = scanner.summarize(&listing);

        assert_eq!(report.lines, vec!["\"sub/a.txt\" x1"]);
        assert_eq!(report.stats.files_seen, 1);
    }
}
