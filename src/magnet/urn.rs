use std::fmt;

use tracing::trace;

use super::error::MagnetError;
use super::hash::{self, Hash, HashScheme};
use crate::constants::{BITPRINT_SEPARATOR, URN_PREFIX};

/// A content URN (`urn:<scheme>:<payload>`) holding one or more hashes.
///
/// A parsed URN holds exactly one hash, except BitPrint URNs, which hold a
/// SHA1 hash followed by a TigerTree hash of the same content. An empty URN
/// is only produced when [`ParseOptions`](super::ParseOptions) allows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Urn {
    hashes: Vec<Hash>,
}

impl Urn {
    /// Creates a URN holding a single hash.
    pub fn single(hash: Hash) -> Self {
        Self { hashes: vec![hash] }
    }

    /// Creates a BitPrint URN from its SHA1 and TigerTree digests.
    pub fn bitprint(sha1: impl Into<bytes::Bytes>, tiger: impl Into<bytes::Bytes>) -> Self {
        Self {
            hashes: vec![
                Hash::new(HashScheme::Sha1, sha1),
                Hash::new(HashScheme::TigerTreeHash, tiger),
            ],
        }
    }

    /// Parses a value of the form `urn:<tag>:<payload>`.
    ///
    /// The `urn:` literal must appear exactly once, at the start of the value.
    /// When the payload matches no known scheme tag, the result is
    /// [`MagnetError::UnknownHashScheme`] unless `allow_empty` is set, in which
    /// case an empty URN is returned.
    pub(crate) fn parse(value: &str, allow_empty: bool) -> Result<Self, MagnetError> {
        let lower = value.to_ascii_lowercase();
        let mut occurrences = lower.match_indices(URN_PREFIX).map(|(i, _)| i);
        let payload = match (occurrences.next(), occurrences.next()) {
            (Some(0), None) => &value[URN_PREFIX.len()..],
            _ => return Err(MagnetError::MalformedMagnet(value.to_string())),
        };

        let Some((scheme, encoded)) = HashScheme::split_tag(payload) else {
            if allow_empty {
                trace!("no hash scheme matched {}, keeping empty urn", value);
                return Ok(Self::default());
            }
            return Err(MagnetError::UnknownHashScheme(payload.to_string()));
        };

        let hashes = hash::decode(scheme, encoded)?;
        trace!("parsed {} urn with {} hash(es)", scheme, hashes.len());
        Ok(Self { hashes })
    }

    pub fn hashes(&self) -> &[Hash] {
        &self.hashes
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Returns the first hash of the given scheme, if any.
    pub fn hash(&self, scheme: HashScheme) -> Option<&Hash> {
        self.hashes.iter().find(|h| h.scheme() == scheme)
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hashes.as_slice() {
            [sha1, tiger]
                if sha1.scheme() == HashScheme::Sha1
                    && tiger.scheme() == HashScheme::TigerTreeHash =>
            {
                write!(
                    f,
                    "{}{}:{}{}{}",
                    URN_PREFIX,
                    HashScheme::BitPrint,
                    sha1.to_base32(),
                    BITPRINT_SEPARATOR,
                    tiger.to_base32()
                )
            }
            [hash, ..] => write!(f, "{}{}", URN_PREFIX, hash),
            [] => f.write_str(URN_PREFIX),
        }
    }
}
