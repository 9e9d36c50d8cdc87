use std::path::Path;

use kustedit_shared::fs::FileSystem;

use crate::{
    commands::Error,
    kustomization::KustomizationFile,
    kvp::{self, Metadata, MetadataKind, ParseError},
};

/// Options of the `edit add label` and `edit add annotation` commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddMetadataOptions {
    /// The validated user input, populated by
    /// [`AddMetadataOptions::validate_and_parse`].
    pub metadata: Metadata,
}

impl AddMetadataOptions {
    /// Parses the raw command line arguments and stores the result.
    ///
    /// Any previously stored metadata is discarded, even if parsing fails.
    pub fn validate_and_parse<S>(
        &mut self,
        args: &[S],
        kind: MetadataKind,
    ) -> Result<(), ParseError>
    where
        S: AsRef<str>,
    {
        self.metadata.clear();
        self.metadata = kvp::parse(kind, args)?;
        Ok(())
    }

    /// Merges the stored metadata into the kustomization file located in
    /// `directory`.
    pub fn run_add_metadata(
        &self,
        fs: &mut impl FileSystem,
        directory: &Path,
        kind: MetadataKind,
    ) -> Result<(), Error> {
        let mut file = KustomizationFile::load(&*fs, directory)?;

        kvp::merge(kind, file.kustomization.metadata_mut(kind), &self.metadata)?;
        file.save(fs)?;

        tracing::info!(
            %kind,
            entries = self.metadata.len(),
            path = %file.path().display(),
            "added metadata to kustomization file"
        );

        Ok(())
    }

    pub fn run_add_label(&self, fs: &mut impl FileSystem, directory: &Path) -> Result<(), Error> {
        self.run_add_metadata(fs, directory, MetadataKind::Label)
    }

    pub fn run_add_annotation(
        &self,
        fs: &mut impl FileSystem,
        directory: &Path,
    ) -> Result<(), Error> {
        self.run_add_metadata(fs, directory, MetadataKind::Annotation)
    }
}

/// Runs the `edit add <kind>` command with the raw positional arguments.
///
/// The arguments are validated before the kustomization file is touched.
pub fn add_metadata<S>(
    fs: &mut impl FileSystem,
    directory: &Path,
    kind: MetadataKind,
    args: &[S],
) -> Result<(), Error>
where
    S: AsRef<str>,
{
    let mut options = AddMetadataOptions::default();
    options.validate_and_parse(args, kind)?;
    options.run_add_metadata(fs, directory, kind)
}

#[cfg(test)]
mod tests {
    use std::io;

    use indoc::indoc;
    use kustedit_shared::fs::MemoryFileSystem;
    use rstest::rstest;

    use super::*;
    use crate::kustomization::{self, KUSTOMIZATION_FILE_NAME};

    const KUSTOMIZATION: &str = indoc! {"
        namePrefix: some-prefix
        resources:
        - deployment.yaml
    "};

    fn with_metadata<const N: usize>(entries: [(&str, &str); N]) -> AddMetadataOptions {
        AddMetadataOptions {
            metadata: entries
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect(),
        }
    }

    /// Wraps a [`MemoryFileSystem`] and fails reads or writes on demand.
    struct FailingFileSystem {
        inner: MemoryFileSystem,
        fail_read: bool,
        fail_write: bool,
    }

    impl FileSystem for FailingFileSystem {
        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            if self.fail_read {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read denied"));
            }
            self.inner.read(path)
        }

        fn write(&mut self, path: &Path, content: &[u8]) -> io::Result<()> {
            if self.fail_write {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "write denied"));
            }
            self.inner.write(path, content)
        }

        fn exists(&self, path: &Path) -> bool {
            self.inner.exists(path)
        }
    }

    #[rstest]
    #[case("otters:cute", MetadataKind::Label, &[("otters", "cute")])]
    #[case("owls:great,unicorns:magical", MetadataKind::Label, &[("owls", "great"), ("unicorns", "magical")])]
    #[case("123:45", MetadataKind::Annotation, &[("123", "45")])]
    fn validate_and_parse(
        #[case] input: &str,
        #[case] kind: MetadataKind,
        #[case] expected: &[(&str, &str)],
    ) {
        let mut options = AddMetadataOptions::default();
        options.validate_and_parse(&[input], kind).unwrap();

        let expected = expected
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect::<Metadata>();
        assert_eq!(options.metadata, expected);
    }

    #[test]
    fn validate_and_parse_clears_on_error() {
        let mut options = with_metadata([("owls", "cute")]);

        options
            .validate_and_parse(&[" "], MetadataKind::Annotation)
            .unwrap_err();

        assert!(options.metadata.is_empty());
    }

    #[rstest]
    #[case(MetadataKind::Label)]
    #[case(MetadataKind::Annotation)]
    fn run_add_metadata(#[case] kind: MetadataKind) {
        let mut fs = MemoryFileSystem::with_file(KUSTOMIZATION_FILE_NAME, KUSTOMIZATION);
        let directory = Path::new(".");

        let options = with_metadata([("owls", "cute"), ("otters", "adorable")]);
        options.run_add_metadata(&mut fs, directory, kind).unwrap();

        // Adding the same input again must not work
        let err = options.run_add_metadata(&mut fs, directory, kind).unwrap_err();
        assert!(matches!(
            err,
            Error::Merge {
                source: kvp::MergeError::DuplicateKey { .. }
            }
        ));

        // Adding new keys must work
        let options = with_metadata([("new", "entry")]);
        options.run_add_metadata(&mut fs, directory, kind).unwrap();

        let file = KustomizationFile::load(&fs, directory).unwrap();
        let metadata = file.kustomization.metadata(kind).unwrap();
        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata["new"], "entry");
    }

    #[test]
    fn run_add_label_and_annotation_are_separate() {
        let mut fs = MemoryFileSystem::with_file(KUSTOMIZATION_FILE_NAME, KUSTOMIZATION);
        let directory = Path::new(".");
        let options = with_metadata([("owls", "cute")]);

        options.run_add_label(&mut fs, directory).unwrap();
        options.run_add_annotation(&mut fs, directory).unwrap();

        let file = KustomizationFile::load(&fs, directory).unwrap();
        assert_eq!(
            file.kustomization.common_labels,
            file.kustomization.common_annotations
        );
    }

    #[test]
    fn duplicate_key_leaves_file_untouched() {
        let mut fs = MemoryFileSystem::with_file(
            KUSTOMIZATION_FILE_NAME,
            "commonLabels:\n  owls: cute\n",
        );

        let err = add_metadata(
            &mut fs,
            Path::new("."),
            MetadataKind::Label,
            &["aardvarks:odd,owls:wise"],
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "label owls already in kustomization file");
        assert_eq!(
            fs.get(KUSTOMIZATION_FILE_NAME),
            Some(b"commonLabels:\n  owls: cute\n".as_slice())
        );
    }

    #[rstest]
    #[case(MetadataKind::Label, "must specify label")]
    #[case(MetadataKind::Annotation, "must specify annotation")]
    fn no_args(#[case] kind: MetadataKind, #[case] message: &str) {
        let mut fs = MemoryFileSystem::new();

        let args: [&str; 0] = [];

        let err = add_metadata(&mut fs, Path::new("."), kind, &args).unwrap_err();

        assert_eq!(err.to_string(), message);
    }

    #[rstest]
    #[case(
        MetadataKind::Label,
        &["this:input", "has:spaces"],
        "labels must be comma-separated, with no spaces. See help text for example"
    )]
    #[case(
        MetadataKind::Annotation,
        &["this:annotation", "has:spaces"],
        "annotations must be comma-separated, with no spaces. See help text for example"
    )]
    fn multiple_args(#[case] kind: MetadataKind, #[case] args: &[&str], #[case] message: &str) {
        let mut fs = MemoryFileSystem::with_file(KUSTOMIZATION_FILE_NAME, KUSTOMIZATION);

        let err = add_metadata(&mut fs, Path::new("."), kind, args).unwrap_err();

        assert_eq!(err.to_string(), message);
        assert_eq!(
            fs.get(KUSTOMIZATION_FILE_NAME),
            Some(KUSTOMIZATION.as_bytes())
        );
    }

    #[test]
    fn missing_kustomization_file() {
        let mut fs = MemoryFileSystem::new();

        let err =
            add_metadata(&mut fs, Path::new("."), MetadataKind::Label, &["a:b"]).unwrap_err();

        assert!(matches!(err, Error::Kustomization { .. }));
        assert!(!fs.exists(Path::new(KUSTOMIZATION_FILE_NAME)));
    }

    #[test]
    fn failing_read() {
        let mut fs = FailingFileSystem {
            inner: MemoryFileSystem::with_file(KUSTOMIZATION_FILE_NAME, KUSTOMIZATION),
            fail_read: true,
            fail_write: false,
        };

        let err =
            add_metadata(&mut fs, Path::new("."), MetadataKind::Label, &["a:b"]).unwrap_err();

        assert!(matches!(
            err,
            Error::Kustomization {
                source: kustomization::Error::ReadKustomization { .. }
            }
        ));
        assert_eq!(
            fs.inner.get(KUSTOMIZATION_FILE_NAME),
            Some(KUSTOMIZATION.as_bytes())
        );
    }

    #[test]
    fn failing_write() {
        let mut fs = FailingFileSystem {
            inner: MemoryFileSystem::with_file(KUSTOMIZATION_FILE_NAME, KUSTOMIZATION),
            fail_read: false,
            fail_write: true,
        };

        let err =
            add_metadata(&mut fs, Path::new("."), MetadataKind::Annotation, &["a:b"]).unwrap_err();

        assert!(matches!(
            err,
            Error::Kustomization {
                source: kustomization::Error::WriteKustomization { .. }
            }
        ));
        assert_eq!(
            err.to_string(),
            "failed to write kustomization file \"./kustomization.yaml\""
        );
        assert_eq!(
            fs.inner.get(KUSTOMIZATION_FILE_NAME),
            Some(KUSTOMIZATION.as_bytes())
        );
    }
}
