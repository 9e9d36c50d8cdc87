use snafu::Snafu;

use crate::kvp::{Metadata, MetadataKind};

/// The error type for parsing user supplied metadata.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParseError {
    /// Indicates that no argument was supplied at all.
    #[snafu(display("must specify {kind}"))]
    MissingArgument { kind: MetadataKind },

    /// Indicates that the input doesn't follow the `key:value,key:value`
    /// format. This includes multiple arguments, which is usually caused by
    /// spaces between the pairs.
    #[snafu(display(
        "{kind}s must be comma-separated, with no spaces. See help text for example"
    ))]
    MalformedInput { kind: MetadataKind },
}

/// Parses raw command line arguments into a set of metadata.
///
/// Exactly one argument is accepted, which is split on `,` into `key:value`
/// tokens. Each token is split on the first `:`, so values can contain
/// colons themselves. Neither the key nor the value can be empty, and tokens
/// cannot contain any whitespace.
///
/// If a key appears more than once, the last value wins.
///
/// ```
/// use kustedit::kvp::{parse, MetadataKind};
///
/// let labels = parse(MetadataKind::Label, &["app:web,tier:frontend"]).unwrap();
///
/// assert_eq!(labels["app"], "web");
/// assert_eq!(labels["tier"], "frontend");
/// ```
pub fn parse<S>(kind: MetadataKind, args: &[S]) -> Result<Metadata, ParseError>
where
    S: AsRef<str>,
{
    let input = match args {
        [] => return MissingArgumentSnafu { kind }.fail(),
        [input] => input.as_ref(),
        _ => {
            tracing::debug!(%kind, args = args.len(), "rejecting multiple arguments");
            return MalformedInputSnafu { kind }.fail();
        }
    };

    let metadata = input
        .split(',')
        .map(|token| parse_token(kind, token))
        .collect::<Result<Metadata, _>>()?;

    tracing::debug!(%kind, entries = metadata.len(), "parsed metadata input");
    Ok(metadata)
}

fn parse_token(kind: MetadataKind, token: &str) -> Result<(String, String), ParseError> {
    match token.split_once(':') {
        Some((key, value))
            if !key.is_empty() && !value.is_empty() && !token.contains(char::is_whitespace) =>
        {
            Ok((key.to_owned(), value.to_owned()))
        }
        _ => {
            tracing::debug!(%kind, token, "rejecting malformed token");
            MalformedInputSnafu { kind }.fail()
        }
    }
}
