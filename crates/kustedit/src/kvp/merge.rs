use snafu::Snafu;

use crate::kvp::{Metadata, MetadataKind};

/// The error type for merging metadata into an existing set.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum MergeError {
    /// Indicates that an incoming key is already present in the existing set.
    #[snafu(display("{kind} {key} already in kustomization file"))]
    DuplicateKey { kind: MetadataKind, key: String },
}

/// Merges `incoming` into `existing`.
///
/// Existing entries are never overwritten. If any incoming key is already
/// present, nothing is merged at all and the first conflicting key is
/// reported.
pub fn merge(
    kind: MetadataKind,
    existing: &mut Metadata,
    incoming: &Metadata,
) -> Result<(), MergeError> {
    if let Some(key) = incoming.keys().find(|key| existing.contains_key(*key)) {
        tracing::warn!(%kind, key = key.as_str(), "refusing to overwrite existing metadata");
        return DuplicateKeySnafu { kind, key }.fail();
    }

    existing.extend(
        incoming
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );

    Ok(())
}

/// Like [`merge`], but returns the merged set and leaves `existing` as is.
pub fn merged(
    kind: MetadataKind,
    existing: &Metadata,
    incoming: &Metadata,
) -> Result<Metadata, MergeError> {
    let mut result = existing.clone();
    merge(kind, &mut result, incoming)?;
    Ok(result)
}
