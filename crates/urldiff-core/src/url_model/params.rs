//! Query-parameter extraction.

const PATH_DELIM: char = '?';
const PARAM_DELIM: char = '&';
const NAME_VALUE_DELIM: char = '=';

/// Insertion-ordered name → value mapping for query parameters.
///
/// Keys are unique. Inserting an existing name overwrites its value in
/// place and keeps the original position, so iteration order stays
/// deterministic regardless of duplicates in the source URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, String)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a parameter (last value wins).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts the query parameters of a normalized URL.
///
/// Everything after the first `?` is split on `&`; each token is split on
/// its first `=` into name and value. Tokens without `=` are silently
/// dropped. A URL without `?` yields an empty map.
pub fn extract_params(url: &str) -> ParamMap {
    let mut params = ParamMap::new();
    let query = match url.split_once(PATH_DELIM) {
        Some((_, query)) => query,
        None => return params,
    };
    for token in query.split(PARAM_DELIM) {
        if let Some((name, value)) = token.split_once(NAME_VALUE_DELIM) {
            params.insert(name, value);
        }
    }
    params
}
