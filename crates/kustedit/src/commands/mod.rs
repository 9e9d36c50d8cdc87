//! Implementations of the `edit` subcommands.
//!
//! Each command performs exactly one read-parse-merge-write cycle against
//! the kustomization file. The file is only written if every step before
//! succeeded.
use snafu::Snafu;

use crate::{
    kustomization,
    kvp::{MergeError, ParseError},
};

mod add_metadata;

pub use add_metadata::*;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(transparent)]
    Parse { source: ParseError },

    #[snafu(transparent)]
    Merge { source: MergeError },

    #[snafu(transparent)]
    Kustomization { source: kustomization::Error },
}
