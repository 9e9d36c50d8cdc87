//! Utility functions for processing data in the YAML file format
use std::io::Write;

use serde::de::DeserializeOwned;
use snafu::{ResultExt, Snafu};

const DOCUMENT_SEPARATOR: &[u8] = b"---";

type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents every error which can be encountered during YAML (de)serialization.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to serialize YAML"))]
    SerializeYaml { source: serde_yaml::Error },

    #[snafu(display("failed to deserialize YAML"))]
    DeserializeYaml { source: serde_yaml::Error },

    #[snafu(display("failed to write YAML document separator"))]
    WriteDocumentSeparator { source: std::io::Error },
}

/// Provides configurable options during YAML serialization.
///
/// The default implementation [`SerializeOptions::default()`] writes a plain document without
/// a leading separator, which is how most hand-written configuration files look.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Adds leading triple dashes (`---`) to the output string.
    pub explicit_document: bool,
}

impl SerializeOptions {
    /// Derives the options from an existing document, so that rewriting it keeps its leading
    /// separator (or the lack of one).
    pub fn matching(input: &[u8]) -> Self {
        Self {
            explicit_document: input.trim_ascii_start().starts_with(DOCUMENT_SEPARATOR),
        }
    }
}

/// Serializes the given data structure and writes it to a [`Writer`](Write).
pub fn serialize<T, W>(value: &T, mut writer: W, options: SerializeOptions) -> Result<()>
where
    T: serde::Serialize,
    W: Write,
{
    if options.explicit_document {
        writer
            .write_all(b"---\n")
            .context(WriteDocumentSeparatorSnafu)?;
    }

    let mut serializer = serde_yaml::Serializer::new(writer);
    value
        .serialize(&mut serializer)
        .context(SerializeYamlSnafu)?;

    Ok(())
}

/// Serializes the given data structure into an owned byte buffer.
pub fn to_vec<T>(value: &T, options: SerializeOptions) -> Result<Vec<u8>>
where
    T: serde::Serialize,
{
    let mut buffer = Vec::new();
    serialize(value, &mut buffer, options)?;
    Ok(buffer)
}

/// Deserializes a single YAML document.
///
/// Input which contains nothing but whitespace (or a bare document separator) is treated as an
/// empty document and produces `T::default()`.
pub fn deserialize<T>(input: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let content = input.trim_ascii();
    if content.is_empty() || content == DOCUMENT_SEPARATOR {
        return Ok(T::default());
    }

    serde_yaml::from_slice(input).context(DeserializeYamlSnafu)
}
