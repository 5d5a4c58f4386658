//! rmagnet - Magnet URI parsing
//!
//! This library parses magnet URIs into a strongly typed [`Magnet`] record,
//! decoding the content hashes embedded in their URNs.
//!
//! # Modules
//!
//! - [`magnet`] - Magnet URI, key, URN and hash parsing
//! - [`constants`] - Separators and prefixes of the magnet grammar

pub mod constants;
pub mod magnet;

pub use magnet::{
    Hash, HashScheme, KeyCategory, KeyDescriptor, Magnet, MagnetError, ManifestTopic,
    ParseOptions, Supplement, Urn,
};
