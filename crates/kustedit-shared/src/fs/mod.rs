//! A minimal file system abstraction.
//!
//! Commands which read and rewrite configuration files go through [`FileSystem`] instead of
//! [`std::fs`] directly. Production code uses [`RealFileSystem`], tests substitute the in-memory
//! [`MemoryFileSystem`].
use std::{
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

mod memory;

pub use memory::*;

/// Read and write access to whole files.
pub trait FileSystem {
    /// Reads the complete content of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replaces the content of the file at `path` with `content`, creating it if needed.
    ///
    /// Implementations must not leave a partially written file behind when this fails.
    fn write(&mut self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Returns whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// A [`FileSystem`] backed by the operating system.
///
/// Writes are atomic: the content is first written to a temporary file in the same directory,
/// which is then renamed over the target. The permissions of an existing target are kept, and a
/// symlinked target is written through the link.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> io::Result<()> {
        // A symlinked target is replaced at its destination, the link itself stays
        let (target, permissions) = match std::fs::canonicalize(path) {
            Ok(target) => {
                let permissions = std::fs::metadata(&target)?.permissions();
                (target, Some(permissions))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => (path.to_path_buf(), None),
            Err(err) => return Err(err),
        };

        // Path::parent returns Some("") for bare file names
        let directory = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(directory)?;
        file.write_all(content)?;
        if let Some(permissions) = permissions {
            file.as_file().set_permissions(permissions)?;
        }
        file.as_file().sync_all()?;
        file.persist(&target).map_err(|err| err.error)?;

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
