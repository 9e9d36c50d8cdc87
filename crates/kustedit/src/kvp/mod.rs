//! Utility functions and data structures to parse and merge the key/value
//! pairs of a kustomization, like common labels and common annotations.
//!
//! Both kinds share the same rules: the user input is parsed by [`parse`] and
//! merged into the existing set by [`merge`]. The [`MetadataKind`] only
//! selects the target field and the wording of error messages.
use std::collections::BTreeMap;

use strum::Display;

mod merge;
mod parse;

pub use merge::*;
pub use parse::*;

/// A set of key/value pairs, either the labels or the annotations of a
/// kustomization.
///
/// Keys are unique, and the set is ordered by key which keeps rewritten
/// files stable.
pub type Metadata = BTreeMap<String, String>;

/// Selects whether an operation targets labels or annotations.
///
/// It is displayed in lower case, e.g. `label` or `annotation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MetadataKind {
    Label,
    Annotation,
}
