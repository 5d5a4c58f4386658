use thiserror::Error;

use super::hash::HashScheme;

/// Errors that can occur when parsing a magnet URI.
///
/// Every variant is terminal: the parser stops at the first failure and no
/// partially populated [`Magnet`](super::Magnet) is returned.
#[derive(Debug, Error)]
pub enum MagnetError {
    /// The URI is not of the form `magnet:?key=value[&key=value...]`.
    #[error("malformed magnet uri: {0}")]
    MalformedUri(String),

    /// The key prefix is not one of the recognized two-character tags.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// The key has a recognized prefix but an invalid suffix or index.
    #[error("malformed key: {0}")]
    MalformedKey(String),

    /// The URN payload does not start with a known hash-scheme tag.
    #[error("unknown hash scheme: {0}")]
    UnknownHashScheme(String),

    /// The hash scheme is recognized but has no decoder.
    #[error("unsupported hash scheme: {0}")]
    UnsupportedHashScheme(HashScheme),

    /// The hash payload is not valid base-32 or hexadecimal.
    #[error("invalid {scheme} hash encoding: {payload}")]
    InvalidHashEncoding {
        scheme: HashScheme,
        payload: String,
    },

    /// A URN or composite value is structurally invalid.
    #[error("malformed magnet value: {0}")]
    MalformedMagnet(String),

    /// An acceptable source is not a valid absolute URL.
    #[error("invalid url {value}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A value contains a malformed percent-escape or invalid UTF-8.
    #[error("invalid percent encoding: {0}")]
    InvalidEncoding(String),

    /// An exact length is not an unsigned decimal integer.
    #[error("invalid integer: {0}")]
    InvalidInteger(String),
}
