use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};
use url::Url;

use super::encoding::{percent_decode, percent_encode};
use super::error::MagnetError;
use super::hash::{Hash, HashScheme};
use super::key::{KeyCategory, KeyDescriptor};
use super::options::ParseOptions;
use super::urn::Urn;
use crate::constants::{
    KEY_VALUE_SEPARATOR, MAGNET_SCHEME, PAIR_SEPARATOR, QUERY_SEPARATOR, SUPPLEMENT_PREFIX,
};

/// A manifest topic (`mt`): either a content URN or a link to a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestTopic {
    Urn(Urn),
    /// Percent-decoded manifest location.
    Url(String),
}

/// One supplemental `x.<tag>=<value>` pair. The value is kept undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplement {
    pub tag: String,
    pub value: String,
}

/// A parsed magnet URI.
///
/// Repeated keys accumulate in insertion order; duplicates are kept. The
/// exact length is the value of the last `xl` key, or 0 when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Magnet {
    /// `as` - direct download locations.
    pub acceptable_sources: Vec<Url>,
    /// `dn` - display names, percent-decoded.
    pub display_names: Vec<String>,
    /// `kt` - search keywords, percent-decoded.
    pub keyword_topics: Vec<String>,
    /// `mt` - manifest topics.
    pub manifest_topics: Vec<ManifestTopic>,
    /// `tr` - tracker addresses, percent-decoded.
    pub trackers: Vec<String>,
    /// `xl` - exact length in bytes.
    pub exact_length: i64,
    /// `xs` - exact sources, stored as written.
    pub exact_sources: Vec<String>,
    /// `xt` - exact topics.
    pub exact_topics: Vec<Urn>,
    /// Supplemental pairs keyed by their key prefix (`x.`).
    pub supplements: BTreeMap<String, Vec<Supplement>>,
}

impl Magnet {
    /// Parses a magnet URI with the default (strict) options.
    pub fn parse(uri: &str) -> Result<Self, MagnetError> {
        Self::parse_with(uri, &ParseOptions::default())
    }

    /// Parses a magnet URI.
    ///
    /// Tokens are consumed in order and the first failure aborts the parse;
    /// no partially populated result is ever returned.
    pub fn parse_with(uri: &str, options: &ParseOptions) -> Result<Self, MagnetError> {
        let tokens = split_query(uri)?;
        debug!("parsing magnet uri with {} token(s)", tokens.len());

        let mut magnet = Magnet::default();
        for token in tokens {
            if let Err(e) = magnet.push_token(token, options) {
                debug!("rejected magnet token {}: {}", token, e);
                return Err(e);
            }
        }

        debug!(
            "parsed magnet uri: {} exact topic(s), {} tracker(s), {} display name(s)",
            magnet.exact_topics.len(),
            magnet.trackers.len(),
            magnet.display_names.len()
        );
        Ok(magnet)
    }

    fn push_token(&mut self, token: &str, options: &ParseOptions) -> Result<(), MagnetError> {
        let (raw_key, value) = token
            .split_once(KEY_VALUE_SEPARATOR)
            .ok_or_else(|| MagnetError::MalformedUri(format!("token without value: {}", token)))?;

        let key = KeyDescriptor::parse(raw_key)?;
        trace!(
            "magnet key {} classified as {:?} (index {})",
            raw_key,
            key.category,
            key.index
        );
        self.push_value(key, value, options)
    }

    fn push_value(
        &mut self,
        key: KeyDescriptor,
        value: &str,
        options: &ParseOptions,
    ) -> Result<(), MagnetError> {
        match key.category {
            KeyCategory::AcceptableSource => {
                let url = Url::parse(value).map_err(|source| MagnetError::InvalidUrl {
                    value: value.to_string(),
                    source,
                })?;
                self.acceptable_sources.push(url);
            }
            KeyCategory::DisplayName => self.display_names.push(percent_decode(value)?),
            KeyCategory::KeywordTopic => self.keyword_topics.push(percent_decode(value)?),
            KeyCategory::ManifestTopic => {
                let is_urn = value
                    .get(..3)
                    .is_some_and(|head| head.eq_ignore_ascii_case("urn"));
                let topic = if is_urn {
                    ManifestTopic::Urn(Urn::parse(value, options.allow_empty_urn)?)
                } else {
                    ManifestTopic::Url(percent_decode(value)?)
                };
                self.manifest_topics.push(topic);
            }
            KeyCategory::TrackerAddress => self.trackers.push(percent_decode(value)?),
            KeyCategory::ExactLength => self.exact_length = parse_length(value)?,
            KeyCategory::ExactSource => self.exact_sources.push(value.to_string()),
            KeyCategory::ExactTopic => {
                let urn = Urn::parse(value, options.allow_empty_urn)?;
                self.exact_topics.push(urn);
            }
            KeyCategory::Supplement => {
                self.supplements
                    .entry(key.category.prefix().to_string())
                    .or_default()
                    .push(Supplement {
                        tag: key.supplement.unwrap_or_default(),
                        value: value.to_string(),
                    });
            }
        }
        Ok(())
    }

    /// Iterates every exact-topic hash of the given scheme, in order.
    pub fn hashes(&self, scheme: HashScheme) -> impl Iterator<Item = &Hash> + '_ {
        self.exact_topics
            .iter()
            .flat_map(|urn| urn.hashes())
            .filter(move |hash| hash.scheme() == scheme)
    }

    /// Iterates the values of every `x.<tag>` supplement, in order.
    pub fn supplement<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.supplements
            .get(SUPPLEMENT_PREFIX)
            .into_iter()
            .flatten()
            .filter(move |s| s.tag == tag)
            .map(|s| s.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.acceptable_sources.is_empty()
            && self.display_names.is_empty()
            && self.keyword_topics.is_empty()
            && self.manifest_topics.is_empty()
            && self.trackers.is_empty()
            && self.exact_length == 0
            && self.exact_sources.is_empty()
            && self.exact_topics.is_empty()
            && self.supplements.values().all(Vec::is_empty)
    }

    /// Serializes back to a magnet URI.
    ///
    /// Text fields are percent-encoded; exact sources, acceptable sources and
    /// supplement values are written as stored. Multiple exact topics are
    /// numbered `xt.1`, `xt.2`, ...
    ///
    /// The result parses back to an equal `Magnet`, except that an empty
    /// magnet yields a bare `magnet:?` and an empty [`Urn`] yields `urn:`;
    /// neither is accepted by the default parser.
    pub fn to_uri(&self) -> String {
        let mut params = Vec::new();

        match self.exact_topics.as_slice() {
            [urn] => params.push(format!("{}={}", KeyCategory::ExactTopic, urn)),
            urns => {
                for (i, urn) in urns.iter().enumerate() {
                    params.push(format!("{}.{}={}", KeyCategory::ExactTopic, i + 1, urn));
                }
            }
        }

        if self.exact_length != 0 {
            params.push(format!("{}={}", KeyCategory::ExactLength, self.exact_length));
        }

        for name in &self.display_names {
            params.push(format!("{}={}", KeyCategory::DisplayName, percent_encode(name)));
        }

        for keywords in &self.keyword_topics {
            params.push(format!(
                "{}={}",
                KeyCategory::KeywordTopic,
                percent_encode(keywords)
            ));
        }

        for topic in &self.manifest_topics {
            let value = match topic {
                ManifestTopic::Urn(urn) => urn.to_string(),
                ManifestTopic::Url(url) => encode_manifest_location(url),
            };
            params.push(format!("{}={}", KeyCategory::ManifestTopic, value));
        }

        for tracker in &self.trackers {
            params.push(format!(
                "{}={}",
                KeyCategory::TrackerAddress,
                percent_encode(tracker)
            ));
        }

        for source in &self.acceptable_sources {
            params.push(format!("{}={}", KeyCategory::AcceptableSource, source));
        }

        for source in &self.exact_sources {
            params.push(format!("{}={}", KeyCategory::ExactSource, source));
        }

        for (prefix, entries) in &self.supplements {
            for entry in entries {
                params.push(format!("{}{}={}", prefix, entry.tag, entry.value));
            }
        }

        let separator = PAIR_SEPARATOR.to_string();
        format!(
            "{}{}{}",
            MAGNET_SCHEME,
            QUERY_SEPARATOR,
            params.join(separator.as_str())
        )
    }
}

impl fmt::Display for Magnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl FromStr for Magnet {
    type Err = MagnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Checks the `magnet:?` shape and splits the query into raw tokens.
fn split_query(uri: &str) -> Result<Vec<&str>, MagnetError> {
    let mut parts = uri.split(QUERY_SEPARATOR);
    let (scheme, query) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(query), None) => (scheme, query),
        _ => {
            return Err(MagnetError::MalformedUri(format!(
                "expected exactly one '{}': {}",
                QUERY_SEPARATOR, uri
            )))
        }
    };

    if !scheme.eq_ignore_ascii_case(MAGNET_SCHEME) {
        return Err(MagnetError::MalformedUri(format!(
            "unexpected scheme: {}",
            scheme
        )));
    }

    let tokens: Vec<&str> = query.split(PAIR_SEPARATOR).collect();
    if tokens.is_empty() {
        return Err(MagnetError::MalformedUri("no keys".into()));
    }
    Ok(tokens)
}

fn parse_length(value: &str) -> Result<i64, MagnetError> {
    value
        .parse()
        .map_err(|_| MagnetError::InvalidInteger(value.to_string()))
}

/// Percent-encodes a manifest location. A leading `urn` is escaped so the
/// value is not read back as a URN.
fn encode_manifest_location(location: &str) -> String {
    let encoded = percent_encode(location);
    let starts_with_urn = encoded
        .get(..3)
        .is_some_and(|head| head.eq_ignore_ascii_case("urn"));
    if starts_with_urn {
        format!("%{:02X}{}", encoded.as_bytes()[0], &encoded[1..])
    } else {
        encoded
    }
}
