//! Address splitting and byte-exact splice helpers.

/// A borrowed view over a full address string.
///
/// The raw text is kept immutable; injectors produce a new address by
/// replacing exactly one of the query or fragment sections, so every byte
/// outside the rewritten section survives untouched.
#[derive(Debug, Clone)]
pub struct Address<'a> {
    raw: &'a str,
    host: &'a str,
    path: &'a str,
    query: &'a str,
    fragment: &'a str,
    query_start: Option<usize>,
    fragment_start: Option<usize>,
}

impl<'a> Address<'a> {
    /// Splits an address once into its sections.
    ///
    /// The fragment is everything after the first `#`; the query sits
    /// between the first `?` and that `#`. A missing scheme or host is
    /// tolerated (the classifier rejects such addresses as not-applicable).
    pub fn split(raw: &'a str) -> Self {
        let (before_hash, fragment, fragment_start) = match raw.find('#') {
            Some(idx) => (&raw[..idx], &raw[idx + 1..], Some(idx + 1)),
            None => (raw, "", None),
        };
        let (before_query, query, query_start) = match before_hash.find('?') {
            Some(idx) => (&before_hash[..idx], &before_hash[idx + 1..], Some(idx + 1)),
            None => (before_hash, "", None),
        };
        let rest = before_query
            .split_once("://")
            .map(|(_, r)| r)
            .unwrap_or(before_query);
        let (host, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        Self {
            raw,
            host,
            path,
            query,
            fragment,
            query_start,
            fragment_start,
        }
    }

    /// The full address text.
    pub fn raw(&self) -> &str {
        self.raw
    }

    /// Host section, possibly empty.
    pub fn host(&self) -> &str {
        self.host
    }

    /// Path section starting at `/`, possibly empty.
    pub fn path(&self) -> &str {
        self.path
    }

    /// Query section without the leading `?`, possibly empty.
    pub fn query(&self) -> &str {
        self.query
    }

    /// Fragment section without the leading `#`, possibly empty.
    pub fn fragment(&self) -> &str {
        self.fragment
    }

    /// Returns a new address with the fragment section replaced.
    ///
    /// Every byte up to and including the `#` is carried over verbatim.
    /// Without a `#` there is nothing to replace and the address is
    /// returned unchanged.
    pub fn with_fragment(&self, fragment: &str) -> String {
        match self.fragment_start {
            Some(start) => format!("{}{}", &self.raw[..start], fragment),
            None => self.raw.to_string(),
        }
    }

    /// Returns a new address with the query section replaced, preserving
    /// the fragment and everything before the `?`.
    pub fn with_query(&self, query: &str) -> String {
        match self.query_start {
            Some(start) => {
                let end = start + self.query.len();
                format!("{}{}{}", &self.raw[..start], query, &self.raw[end..])
            }
            None => self.raw.to_string(),
        }
    }
}
