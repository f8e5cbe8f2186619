//! Prefix expansion for compact RDF names (`prefix:local`).

use indexmap::IndexMap;
use serde::Serialize;

use super::vocabulary::default_vocabulary;

/// Ordered prefix -> namespace URI mapping. Re-registering a prefix replaces
/// its URI in place.
pub type VocabularyMap = IndexMap<String, String>;

/// A single prefix bound to a namespace URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub prefix: String,
    pub uri: String,
}

impl Vocabulary {
    pub fn new(prefix: &str, uri: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            uri: uri.to_string(),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(default_vocabulary::PREFIX, default_vocabulary::URI)
    }
}

/// Expand `prefix:local` against `namespaces`.
///
/// Names without a separator, or whose prefix is not mapped, come back
/// unchanged. That covers absolute URIs such as `http://...` as long as no
/// `http` prefix is registered.
pub fn expand(name: &str, namespaces: &VocabularyMap) -> String {
    match name.split_once(':') {
        Some((prefix, local)) => match namespaces.get(prefix) {
            Some(uri) => format!("{uri}{local}"),
            None => name.to_string(),
        },
        None => name.to_string(),
    }
}

/// Parse an RDFa `prefix` attribute value of the form `"foo: http://example.org/"`.
///
/// The value splits at the first `:`; both sides are trimmed. Returns `None`
/// when either side is empty.
pub fn parse_prefix_declaration(value: &str) -> Option<(&str, &str)> {
    let (prefix, uri) = value.split_once(':')?;
    let prefix = prefix.trim();
    let uri = uri.trim();
    if prefix.is_empty() || uri.is_empty() {
        return None;
    }
    Some((prefix, uri))
}
