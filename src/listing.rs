//! Directory and file records produced by the walker.
//!
//! These are read-only snapshots taken at enumeration time. The grouping
//! engine works on a [`DirectoryListing`]: one directory plus its eligible
//! files, sorted by name.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// A file as seen when its directory was listed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// File name without its directory
    pub name: String,

    /// Size in bytes
    pub size: u64,
}

impl FileRecord {
    /// Create a new file record.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Filesystem attributes that decide whether a directory is visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectoryAttributes {
    /// Name starts with `.` or (on Windows) the hidden attribute is set
    pub is_hidden: bool,

    /// The Windows system attribute is set
    pub is_system: bool,

    /// This is the directory the scan was started from
    pub is_root: bool,
}

impl DirectoryAttributes {
    /// Read the attributes of the directory at `path`.
    #[must_use]
    pub fn inspect(path: &Path, is_root: bool) -> Self {
        let (hidden_attribute, is_system) = platform_flags(path);

        Self {
            is_hidden: hidden_attribute || has_hidden_name(path),
            is_system,
            is_root,
        }
    }
}

/// A directory yielded by the walker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Path as reachable from the current working directory
    pub path: PathBuf,

    /// Path relative to the scanned root (empty for the root itself)
    pub relative_path: PathBuf,

    /// Hidden/system/root flags
    pub attributes: DirectoryAttributes,
}

impl DirectoryNode {
    /// Describe `path`, found below `root`.
    #[must_use]
    pub fn new(root: &Path, path: &Path) -> Self {
        let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        let is_root = relative_path.as_os_str().is_empty();

        Self {
            path: path.to_path_buf(),
            attributes: DirectoryAttributes::inspect(path, is_root),
            relative_path,
        }
    }

    /// Relative path with `/` separators, or `None` for the root.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        if self.attributes.is_root {
            return None;
        }

        let parts: Vec<_> = self
            .relative_path
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect();

        Some(parts.join("/"))
    }
}

/// One directory together with its eligible files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryListing {
    /// The directory the files belong to
    pub node: DirectoryNode,

    /// Files sorted by name
    pub files: Vec<FileRecord>,
}

impl DirectoryListing {
    /// Create a listing, sorting the files by name.
    #[must_use]
    pub fn new(node: DirectoryNode, mut files: Vec<FileRecord>) -> Self {
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Self { node, files }
    }

    /// Total size of the listed files in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|file| file.size).sum()
    }
}

/// Whether the last path component starts with a dot.
#[must_use]
pub fn has_hidden_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.starts_with('.') && name != "." && name != "..")
}

/// Whether a listed entry counts as hidden.
#[must_use]
pub fn is_hidden(path: &Path) -> bool {
    has_hidden_name(path) || platform_flags(path).0
}

/// Hidden and system attribute bits.
#[cfg(windows)]
fn platform_flags(path: &Path) -> (bool, bool) {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    const FILE_ATTRIBUTE_SYSTEM: u32 = 0x4;

    fs::symlink_metadata(path).map_or((false, false), |metadata| {
        let attributes = metadata.file_attributes();
        (
            attributes & FILE_ATTRIBUTE_HIDDEN != 0,
            attributes & FILE_ATTRIBUTE_SYSTEM != 0,
        )
    })
}

/// Hidden and system attribute bits. Unix has neither.
#[cfg(not(windows))]
const fn platform_flags(_path: &Path) -> (bool, bool) {
    (false, false)
}

/// Size of a file in bytes, following symlinks.
///
/// Returns `None` for anything that is not a regular file, including broken
/// symlinks. Any other failure to read a link target is an error.
pub(crate) fn regular_file_size(entry: &fs::DirEntry) -> io::Result<Option<u64>> {
    let file_type = entry.file_type()?;

    if file_type.is_file() {
        return entry.metadata().map(|metadata| Some(metadata.len()));
    }

    if file_type.is_symlink() {
        return match fs::metadata(entry.path()) {
            Ok(metadata) => Ok(metadata.is_file().then(|| metadata.len())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        };
    }

    Ok(None)
}
