//! Loading and persisting of kustomization files.
//!
//! Only the common labels and common annotations are modelled explicitly.
//! Every other top-level field is carried along as raw YAML, so rewriting a
//! file never drops content this crate doesn't understand.
use std::path::{Path, PathBuf};

use kustedit_shared::{
    fs::FileSystem,
    yaml::{self, SerializeOptions},
};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu, ensure};

use crate::kvp::{Metadata, MetadataKind};

/// The well-known name of the kustomization file.
pub const KUSTOMIZATION_FILE_NAME: &str = "kustomization.yaml";

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("missing kustomization file {path:?}", path = path.display()))]
    MissingKustomizationFile { path: PathBuf },

    #[snafu(display("failed to read kustomization file {path:?}", path = path.display()))]
    ReadKustomization {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to write kustomization file {path:?}", path = path.display()))]
    WriteKustomization {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to deserialize kustomization file {path:?}", path = path.display()))]
    DeserializeKustomization {
        source: yaml::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to serialize kustomization"))]
    SerializeKustomization { source: yaml::Error },
}

/// The content of a kustomization file.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kustomization {
    #[serde(flatten)]
    pub other: serde_yaml::Mapping,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_labels: Option<Metadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_annotations: Option<Metadata>,
}

impl Kustomization {
    /// Returns the metadata set selected by `kind`, if present.
    pub fn metadata(&self, kind: MetadataKind) -> Option<&Metadata> {
        match kind {
            MetadataKind::Label => self.common_labels.as_ref(),
            MetadataKind::Annotation => self.common_annotations.as_ref(),
        }
    }

    /// Returns the metadata set selected by `kind`, inserting an empty set
    /// if it is absent.
    pub fn metadata_mut(&mut self, kind: MetadataKind) -> &mut Metadata {
        let field = match kind {
            MetadataKind::Label => &mut self.common_labels,
            MetadataKind::Annotation => &mut self.common_annotations,
        };

        field.get_or_insert_with(Metadata::new)
    }
}

/// A [`Kustomization`] together with the location it was loaded from.
#[derive(Debug)]
pub struct KustomizationFile {
    path: PathBuf,
    options: SerializeOptions,
    pub kustomization: Kustomization,
}

impl KustomizationFile {
    /// Loads the kustomization file located in `directory`.
    pub fn load(fs: &impl FileSystem, directory: &Path) -> Result<Self> {
        let path = directory.join(KUSTOMIZATION_FILE_NAME);
        ensure!(
            fs.exists(&path),
            MissingKustomizationFileSnafu { path: path.clone() }
        );

        let content = fs
            .read(&path)
            .with_context(|_| ReadKustomizationSnafu { path: path.clone() })?;
        let kustomization = yaml::deserialize(&content)
            .with_context(|_| DeserializeKustomizationSnafu { path: path.clone() })?;

        tracing::debug!(path = %path.display(), "loaded kustomization file");

        Ok(Self {
            options: SerializeOptions::matching(&content),
            path,
            kustomization,
        })
    }

    /// Writes the kustomization back to the file it was loaded from.
    ///
    /// The whole document is written in one go, the previous content stays
    /// in place if serialization fails.
    pub fn save(&self, fs: &mut impl FileSystem) -> Result<()> {
        let content =
            yaml::to_vec(&self.kustomization, self.options).context(SerializeKustomizationSnafu)?;

        fs.write(&self.path, &content)
            .with_context(|_| WriteKustomizationSnafu {
                path: self.path.clone(),
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
