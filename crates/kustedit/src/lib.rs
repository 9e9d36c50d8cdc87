//! Edit the common labels and common annotations of kustomization files.
//!
//! The library powers the `kustedit` binary, but every command can also be
//! driven directly, e.g. with an in-memory [`FileSystem`](shared::fs::FileSystem)
//! in tests:
//!
//! ```
//! use std::path::Path;
//!
//! use kustedit::{commands, kvp::MetadataKind, shared::fs::MemoryFileSystem};
//!
//! let mut fs = MemoryFileSystem::with_file("kustomization.yaml", "resources:\n- app.yaml\n");
//! commands::add_metadata(&mut fs, Path::new("."), MetadataKind::Label, &["app:web"]).unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod kustomization;
pub mod kvp;
pub mod logging;

// Internal re-exports
pub use kustedit_shared as shared;
