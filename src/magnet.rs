//! Magnet URI parsing.
//!
//! A magnet URI references content by hash rather than by location:
//!
//! ```text
//! magnet:?xt=urn:btih:<hex>&dn=<name>&tr=<tracker>&x.pe=<peer>
//! ```
//!
//! [`Magnet::parse`] splits the query into `key=value` tokens, classifies each
//! key ([`KeyDescriptor`]), decodes each value into its typed form and
//! accumulates the result. Repeated keys are preserved in order.
//!
//! # Keys
//!
//! | Key | Field | Value |
//! |-----|-------|-------|
//! | `as` | [`Magnet::acceptable_sources`] | absolute URL |
//! | `dn` | [`Magnet::display_names`] | percent-decoded text |
//! | `kt` | [`Magnet::keyword_topics`] | percent-decoded text |
//! | `mt` | [`Magnet::manifest_topics`] | URN or percent-decoded text |
//! | `tr` | [`Magnet::trackers`] | percent-decoded text |
//! | `xl` | [`Magnet::exact_length`] | signed integer, last one wins |
//! | `xs` | [`Magnet::exact_sources`] | raw text |
//! | `xt` | [`Magnet::exact_topics`] | URN |
//! | `x.<tag>` | [`Magnet::supplements`] | raw text |
//!
//! Any key may carry a numeric index (`xt.1`, `xt.2`) to distinguish repeats.
//!
//! # Hash schemes
//!
//! | Tag | Scheme | Payload |
//! |-----|--------|---------|
//! | `tree:tiger` | [`HashScheme::TigerTreeHash`] | base-32 |
//! | `sha1` | [`HashScheme::Sha1`] | base-32 |
//! | `aich` | [`HashScheme::Aich`] | base-32 |
//! | `bitprint` | SHA1 + TigerTree | `<base-32>.<base-32>` |
//! | `ed2k` | [`HashScheme::Ed2k`] | hex |
//! | `kzhash` | [`HashScheme::KazaaHash`] | hex |
//! | `btih` | [`HashScheme::BitTorrentInfoHash`] | hex |
//! | `md5` | [`HashScheme::Md5`] | not supported |
//!
//! # Examples
//!
//! ```
//! use rmagnet::magnet::{HashScheme, Magnet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let magnet = Magnet::parse(
//!     "magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a\
//!      &dn=Example+File&tr=udp%3A%2F%2Ftracker.example.com%3A80",
//! )?;
//!
//! assert_eq!(magnet.display_names, ["Example File"]);
//! assert_eq!(magnet.trackers, ["udp://tracker.example.com:80"]);
//!
//! let info_hash = magnet.hashes(HashScheme::BitTorrentInfoHash).next().unwrap();
//! assert_eq!(info_hash.to_hex(), "c12fe1c06bba254a9dc9f519b335aa7c1367a88a");
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Parsing is all-or-nothing: the first malformed token fails the whole parse
//! with a [`MagnetError`] describing what was wrong.
//!
//! ```
//! use rmagnet::magnet::{Magnet, MagnetError};
//!
//! let err = Magnet::parse("magnet:?zz=value").unwrap_err();
//! assert!(matches!(err, MagnetError::UnknownKey(_)));
//! ```

mod encoding;
mod error;
mod hash;
mod key;
mod link;
mod options;
mod urn;

pub use error::MagnetError;
pub use hash::{Hash, HashScheme};
pub use key::{KeyCategory, KeyDescriptor};
pub use link::{Magnet, ManifestTopic, Supplement};
pub use options::ParseOptions;
pub use urn::Urn;
