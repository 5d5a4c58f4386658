/// Options controlling how lenient the magnet parser is.
///
/// The defaults are strict: every value that cannot be fully decoded is an
/// error.
///
/// # Examples
///
/// ```
/// use rmagnet::magnet::{Magnet, ParseOptions};
///
/// let options = ParseOptions::new().allow_empty_urn(true);
/// let magnet = Magnet::parse_with("magnet:?xt=urn:foo:bar", &options).unwrap();
/// assert!(magnet.exact_topics[0].is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept URNs whose payload matches no known hash scheme, keeping them
    /// as empty [`Urn`](super::Urn)s instead of failing with
    /// [`MagnetError::UnknownHashScheme`](super::MagnetError::UnknownHashScheme).
    pub allow_empty_urn: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_empty_urn(mut self, allow: bool) -> Self {
        self.allow_empty_urn = allow;
        self
    }
}
