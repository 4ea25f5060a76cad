//! File system abstraction layer
//!
//! Each method performs one filesystem mutation or read (or one recursive
//! primitive, for directory removal) and converts any OS failure into a
//! classified [`HalError`]. Nothing here panics on bad input.

use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsFault, HalError, HalResult};

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

/// What a successful [`FileSystem::remove`] deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removed {
    File,
    Directory,
}

/// High-level file system interface
#[derive(Debug, Default, Clone)]
pub struct FileSystem;

impl FileSystem {
    /// Create a new file system interface
    pub fn new() -> Self {
        Self
    }

    /// List the immediate children of `path`, sorted by name.
    pub fn list_dir<P: AsRef<Path>>(&self, path: P) -> HalResult<Vec<DirEntryInfo>> {
        let path = non_empty(path.as_ref())?;
        let meta = fs::metadata(path).map_err(|e| HalError::io_error("cannot list", path, e))?;
        if !meta.is_dir() {
            return Err(HalError::fault("cannot list", path, FsFault::NotADirectory, "Not a directory"));
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| HalError::io_error("cannot list", path, e))? {
            let entry = entry.map_err(|e| HalError::io_error("cannot list", path, e))?;
            // Follow symlinks so a link to a folder is shown as a folder.
            let is_dir = entry.path().is_dir();
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Current working directory of the process.
    pub fn current_dir(&self) -> HalResult<PathBuf> {
        env::current_dir().map_err(|e| HalError::io_error("cannot read", Path::new("."), e))
    }

    /// Change the working directory of the process.
    pub fn set_current_dir<P: AsRef<Path>>(&self, path: P) -> HalResult<()> {
        let path = non_empty(path.as_ref())?;
        env::set_current_dir(path).map_err(|e| HalError::io_error("cannot change directory to", path, e))?;
        debug!(path = %path.display(), "working directory changed");
        Ok(())
    }

    /// Open a file for line-by-line reading.
    pub fn open_text<P: AsRef<Path>>(&self, path: P) -> HalResult<BufReader<File>> {
        let path = non_empty(path.as_ref())?;
        let file = File::open(path).map_err(|e| HalError::io_error("cannot open", path, e))?;
        if file.metadata().map(|m| m.is_dir()).unwrap_or(false) {
            return Err(HalError::fault("cannot open", path, FsFault::InvalidInput, "Is a directory"));
        }
        Ok(BufReader::new(file))
    }

    /// Copy a file, overwriting the destination.
    ///
    /// When `to` names an existing directory the file is copied into it under
    /// its own file name. Returns the path that was written.
    pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(&self, from: P, to: Q) -> HalResult<PathBuf> {
        let from = non_empty(from.as_ref())?;
        let to = non_empty(to.as_ref())?;

        let target = if to.is_dir() {
            let name = from
                .file_name()
                .ok_or_else(|| HalError::fault("cannot copy", from, FsFault::InvalidInput, "No file name"))?;
            to.join(name)
        } else {
            to.to_path_buf()
        };

        // fs::copy truncates the destination before reading the source.
        if target.exists() && same_file(from, &target) {
            return Err(HalError::fault(
                "cannot copy",
                from,
                FsFault::AlreadyExists,
                "Source and destination are the same file",
            ));
        }

        let bytes = fs::copy(from, &target).map_err(|e| HalError::io_error("cannot copy", from, e))?;
        debug!(from = %from.display(), to = %target.display(), bytes, "file copied");
        Ok(target)
    }

    /// Move `from` into the existing directory `dir`, keeping its file name.
    ///
    /// This is a single rename; a move across devices fails with
    /// [`FsFault::CrossDevice`] instead of degrading to copy-and-delete.
    pub fn move_into<P: AsRef<Path>, Q: AsRef<Path>>(&self, from: P, dir: Q) -> HalResult<PathBuf> {
        let from = non_empty(from.as_ref())?;
        let dir = non_empty(dir.as_ref())?;

        if !dir.is_dir() {
            return Err(HalError::fault(
                "cannot move into",
                dir,
                FsFault::NotFound,
                "Destination folder does not exist",
            ));
        }
        fs::symlink_metadata(from).map_err(|e| HalError::io_error("cannot move", from, e))?;
        let name = from
            .file_name()
            .ok_or_else(|| HalError::fault("cannot move", from, FsFault::InvalidInput, "No file name"))?;

        let target = dir.join(name);
        fs::rename(from, &target).map_err(|e| HalError::io_error("cannot move", from, e))?;
        debug!(from = %from.display(), to = %target.display(), "moved");
        Ok(target)
    }

    /// Remove a file, or a directory together with everything below it.
    pub fn remove<P: AsRef<Path>>(&self, path: P) -> HalResult<Removed> {
        let path = non_empty(path.as_ref())?;
        let meta = fs::symlink_metadata(path).map_err(|e| HalError::io_error("cannot delete", path, e))?;

        if meta.is_dir() {
            fs::remove_dir_all(path).map_err(|e| HalError::io_error("cannot delete", path, e))?;
            Ok(Removed::Directory)
        } else {
            fs::remove_file(path).map_err(|e| HalError::io_error("cannot delete", path, e))?;
            Ok(Removed::File)
        }
    }

    /// Rename/move a file or directory
    pub fn rename<P: AsRef<Path>, Q: AsRef<Path>>(&self, from: P, to: Q) -> HalResult<()> {
        let from = non_empty(from.as_ref())?;
        let to = non_empty(to.as_ref())?;
        fs::rename(from, to).map_err(|e| HalError::io_error("cannot rename", from, e))
    }

    /// Create a single directory; fails if it already exists.
    pub fn create_dir<P: AsRef<Path>>(&self, path: P) -> HalResult<()> {
        let path = non_empty(path.as_ref())?;
        fs::create_dir(path).map_err(|e| HalError::io_error("cannot create folder", path, e))
    }

    /// Create an empty file, truncating any existing one.
    pub fn create_file<P: AsRef<Path>>(&self, path: P) -> HalResult<()> {
        let path = non_empty(path.as_ref())?;
        File::create(path).map_err(|e| HalError::io_error("cannot create file", path, e))?;
        Ok(())
    }
}

fn non_empty(path: &Path) -> HalResult<&Path> {
    if path.as_os_str().is_empty() {
        return Err(HalError::invalid("empty path"));
    }
    Ok(path)
}

/// Whether both paths resolve to the same file on disk.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
