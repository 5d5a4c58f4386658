//! Magnet URI literals.
//!
//! This module contains the fixed separators and prefixes of the magnet URI
//! grammar. The key-prefix and hash-scheme tables live next to the types they
//! describe ([`KeyCategory`](crate::magnet::KeyCategory) and
//! [`HashScheme`](crate::magnet::HashScheme)).

// ============================================================================
// Top-level URI shape
// ============================================================================

/// URI scheme name, compared case-insensitively.
pub const MAGNET_SCHEME: &str = "magnet";

/// Separates the scheme from the query section (`magnet:?...`).
pub const QUERY_SEPARATOR: &str = ":?";

/// Separates `key=value` tokens in the query section.
pub const PAIR_SEPARATOR: char = '&';

/// Separates a key from its value. Only the first occurrence splits.
pub const KEY_VALUE_SEPARATOR: char = '=';

// ============================================================================
// Keys
// ============================================================================

/// Prefix of supplemental (extension) keys such as `x.pe`.
pub const SUPPLEMENT_PREFIX: &str = "x.";

/// Separates a key prefix from its numeric index (`xt.2`).
pub const INDEX_SEPARATOR: char = '.';

// ============================================================================
// URNs
// ============================================================================

/// Literal that introduces a URN value, matched case-insensitively.
pub const URN_PREFIX: &str = "urn:";

/// Separates the SHA1 and TigerTree halves of a BitPrint payload.
pub const BITPRINT_SEPARATOR: char = '.';

/// Separates a hash-scheme tag from its payload (`sha1:<payload>`).
pub const SCHEME_SEPARATOR: char = ':';
