use std::{
    collections::BTreeMap,
    io,
    path::{Component, Path, PathBuf},
};

use crate::fs::FileSystem;

/// An in-memory [`FileSystem`], mostly useful in tests.
///
/// Paths are compared after dropping `.` components, so `./kustomization.yaml` and
/// `kustomization.yaml` refer to the same file.
#[derive(Clone, Debug, Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a file system which already contains a single file.
    pub fn with_file(path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> Self {
        let mut fs = Self::new();
        fs.files.insert(normalize(path.as_ref()), content.into());
        fs
    }

    /// Returns the content of the file at `path`, if any.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files
            .get(&normalize(path.as_ref()))
            .map(Vec::as_slice)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.get(path).map(<[u8]>::to_vec).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{path} does not exist", path = path.display()),
            )
        })
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.files.insert(normalize(path), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&normalize(path))
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
