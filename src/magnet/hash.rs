use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

use super::encoding::{base32_decode, base32_encode};
use super::error::MagnetError;
use crate::constants::{BITPRINT_SEPARATOR, SCHEME_SEPARATOR};

/// Hash algorithms that may appear inside a magnet URN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashScheme {
    /// Tiger Tree hash (`tree:tiger`).
    TigerTreeHash,
    /// Secure Hash Algorithm 1 (`sha1`).
    Sha1,
    /// SHA1 and TigerTree hash of the same content (`bitprint`).
    BitPrint,
    /// eDonkey2000 hash (`ed2k`).
    Ed2k,
    /// Advanced Intelligent Corruption Handler (`aich`).
    Aich,
    /// Kazaa hash (`kzhash`).
    KazaaHash,
    /// BitTorrent info hash (`btih`).
    BitTorrentInfoHash,
    /// Message Digest 5 (`md5`).
    Md5,
}

/// Scheme tags as they appear after `urn:`, longest first so that prefix
/// matching never stops at a shorter tag.
const SCHEME_TAGS: [(&str, HashScheme); 8] = [
    ("tree:tiger", HashScheme::TigerTreeHash),
    ("bitprint", HashScheme::BitPrint),
    ("kzhash", HashScheme::KazaaHash),
    ("sha1", HashScheme::Sha1),
    ("ed2k", HashScheme::Ed2k),
    ("aich", HashScheme::Aich),
    ("btih", HashScheme::BitTorrentInfoHash),
    ("md5", HashScheme::Md5),
];

/// How a scheme's payload is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadEncoding {
    Base32,
    Hex,
}

impl HashScheme {
    /// Returns the lowercase URN tag for this scheme.
    pub const fn tag(self) -> &'static str {
        match self {
            HashScheme::TigerTreeHash => "tree:tiger",
            HashScheme::Sha1 => "sha1",
            HashScheme::BitPrint => "bitprint",
            HashScheme::Ed2k => "ed2k",
            HashScheme::Aich => "aich",
            HashScheme::KazaaHash => "kzhash",
            HashScheme::BitTorrentInfoHash => "btih",
            HashScheme::Md5 => "md5",
        }
    }

    /// Looks up a scheme by its tag, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        SCHEME_TAGS
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(tag))
            .map(|&(_, scheme)| scheme)
    }

    /// Splits `<tag>:<payload>` into its scheme and payload.
    ///
    /// The tag is matched case-insensitively and must be followed by `:`.
    pub(crate) fn split_tag(s: &str) -> Option<(Self, &str)> {
        SCHEME_TAGS.iter().find_map(|&(tag, scheme)| {
            let head = s.get(..tag.len())?;
            if !head.eq_ignore_ascii_case(tag) {
                return None;
            }
            s[tag.len()..]
                .strip_prefix(SCHEME_SEPARATOR)
                .map(|payload| (scheme, payload))
        })
    }

    fn payload_encoding(self) -> PayloadEncoding {
        match self {
            HashScheme::TigerTreeHash
            | HashScheme::Sha1
            | HashScheme::Aich
            | HashScheme::BitPrint => PayloadEncoding::Base32,
            HashScheme::Ed2k
            | HashScheme::KazaaHash
            | HashScheme::BitTorrentInfoHash
            | HashScheme::Md5 => PayloadEncoding::Hex,
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for HashScheme {
    type Err = MagnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| MagnetError::UnknownHashScheme(s.to_string()))
    }
}

/// A decoded content hash.
///
/// The digest length is not checked against the scheme; the bytes are stored
/// exactly as decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hash {
    scheme: HashScheme,
    data: Bytes,
}

impl Hash {
    /// Creates a hash from a scheme and raw digest bytes.
    pub fn new(scheme: HashScheme, data: impl Into<Bytes>) -> Self {
        Self {
            scheme,
            data: data.into(),
        }
    }

    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.data)
    }

    pub fn to_base32(&self) -> String {
        base32_encode(&self.data)
    }

    /// Returns the payload as it would appear after `urn:<tag>:`.
    pub(crate) fn encoded_payload(&self) -> String {
        match self.scheme.payload_encoding() {
            PayloadEncoding::Base32 => self.to_base32(),
            PayloadEncoding::Hex => self.to_hex(),
        }
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.encoded_payload())
    }
}

/// Decodes a hash payload for `scheme`.
///
/// BitPrint payloads yield two hashes, SHA1 then TigerTree; every other
/// supported scheme yields one.
pub(crate) fn decode(scheme: HashScheme, payload: &str) -> Result<Vec<Hash>, MagnetError> {
    match scheme {
        HashScheme::TigerTreeHash | HashScheme::Sha1 | HashScheme::Aich => {
            Ok(vec![decode_base32(scheme, payload)?])
        }
        HashScheme::Ed2k | HashScheme::KazaaHash | HashScheme::BitTorrentInfoHash => {
            let data = hex::decode(payload).map_err(|_| invalid_encoding(scheme, payload))?;
            Ok(vec![Hash::new(scheme, data)])
        }
        HashScheme::BitPrint => {
            let (sha1, tiger) = payload
                .split_once(BITPRINT_SEPARATOR)
                .filter(|(_, tiger)| !tiger.contains(BITPRINT_SEPARATOR))
                .ok_or_else(|| {
                    MagnetError::MalformedMagnet(format!("bitprint payload: {}", payload))
                })?;
            Ok(vec![
                decode_base32(HashScheme::Sha1, sha1)?,
                decode_base32(HashScheme::TigerTreeHash, tiger)?,
            ])
        }
        HashScheme::Md5 => Err(MagnetError::UnsupportedHashScheme(scheme)),
    }
}

fn decode_base32(scheme: HashScheme, payload: &str) -> Result<Hash, MagnetError> {
    base32_decode(payload)
        .map(|data| Hash::new(scheme, data))
        .ok_or_else(|| invalid_encoding(scheme, payload))
}

fn invalid_encoding(scheme: HashScheme, payload: &str) -> MagnetError {
    MagnetError::InvalidHashEncoding {
        scheme,
        payload: payload.to_string(),
    }
}
