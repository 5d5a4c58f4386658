use std::fmt;
use std::str::FromStr;

use super::error::MagnetError;
use crate::constants::{INDEX_SEPARATOR, SUPPLEMENT_PREFIX};

/// The recognized magnet key categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    /// `as` - web URL to download the content from directly.
    AcceptableSource,
    /// `dn` - suggested file or display name.
    DisplayName,
    /// `kt` - search keywords.
    KeywordTopic,
    /// `mt` - link to a manifest (a URL or a URN).
    ManifestTopic,
    /// `tr` - tracker address.
    TrackerAddress,
    /// `xl` - exact length in bytes.
    ExactLength,
    /// `xs` - exact source (a peer-to-peer link).
    ExactSource,
    /// `xt` - exact topic, a URN containing content hashes.
    ExactTopic,
    /// `x.` - supplemental key for format extensions.
    Supplement,
}

const KEY_PREFIXES: [(&str, KeyCategory); 9] = [
    ("as", KeyCategory::AcceptableSource),
    ("dn", KeyCategory::DisplayName),
    ("kt", KeyCategory::KeywordTopic),
    ("mt", KeyCategory::ManifestTopic),
    ("tr", KeyCategory::TrackerAddress),
    ("xl", KeyCategory::ExactLength),
    ("xs", KeyCategory::ExactSource),
    ("xt", KeyCategory::ExactTopic),
    (SUPPLEMENT_PREFIX, KeyCategory::Supplement),
];

impl KeyCategory {
    /// Returns the two-character key prefix for this category.
    pub const fn prefix(self) -> &'static str {
        match self {
            KeyCategory::AcceptableSource => "as",
            KeyCategory::DisplayName => "dn",
            KeyCategory::KeywordTopic => "kt",
            KeyCategory::ManifestTopic => "mt",
            KeyCategory::TrackerAddress => "tr",
            KeyCategory::ExactLength => "xl",
            KeyCategory::ExactSource => "xs",
            KeyCategory::ExactTopic => "xt",
            KeyCategory::Supplement => SUPPLEMENT_PREFIX,
        }
    }

    /// Looks up a category by its exact (case-sensitive) prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        KEY_PREFIXES
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|&(_, category)| category)
    }
}

impl fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A classified magnet key such as `xt`, `xt.2` or `x.pe`.
///
/// # Examples
///
/// ```
/// use rmagnet::magnet::{KeyCategory, KeyDescriptor};
///
/// let key: KeyDescriptor = "xt.2".parse().unwrap();
/// assert_eq!(key.category, KeyCategory::ExactTopic);
/// assert_eq!(key.index, 2);
///
/// let key: KeyDescriptor = "x.pe".parse().unwrap();
/// assert_eq!(key.category, KeyCategory::Supplement);
/// assert_eq!(key.supplement.as_deref(), Some("pe"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDescriptor {
    pub category: KeyCategory,
    /// Distinguishes repeated keys (`xt.1`, `xt.2`); 0 when absent.
    pub index: u64,
    /// Sub-tag of a supplemental key (`pe` in `x.pe`).
    pub supplement: Option<String>,
}

impl KeyDescriptor {
    /// Classifies a raw key token.
    ///
    /// The first two characters select the category. Ordinary keys may be
    /// followed by `.<index>`. Supplemental keys carry `x.<tag>[.<index>]`.
    pub fn parse(key: &str) -> Result<Self, MagnetError> {
        let category = key
            .get(..2)
            .and_then(KeyCategory::from_prefix)
            .ok_or_else(|| MagnetError::UnknownKey(key.to_string()))?;
        let rest = &key[2..];

        if category == KeyCategory::Supplement {
            let (tag, index) = match rest.split_once(INDEX_SEPARATOR) {
                Some((tag, index)) => (tag, parse_index(key, index)?),
                None => (rest, 0),
            };
            if tag.is_empty() {
                return Err(MagnetError::MalformedKey(key.to_string()));
            }
            return Ok(Self {
                category,
                index,
                supplement: Some(tag.to_string()),
            });
        }

        let index = match rest.strip_prefix(INDEX_SEPARATOR) {
            Some(index) => parse_index(key, index)?,
            None if rest.is_empty() => 0,
            None => return Err(MagnetError::MalformedKey(key.to_string())),
        };

        Ok(Self {
            category,
            index,
            supplement: None,
        })
    }
}

impl FromStr for KeyDescriptor {
    type Err = MagnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses a non-negative decimal index. Signs, further separators and empty
/// text are rejected.
fn parse_index(key: &str, index: &str) -> Result<u64, MagnetError> {
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MagnetError::MalformedKey(key.to_string()));
    }
    index
        .parse()
        .map_err(|_| MagnetError::MalformedKey(key.to_string()))
}
