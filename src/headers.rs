use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in emission order.
pub type Headers = IndexMap<String, String>;

/// Accumulates response headers, folding every `Vary` token into a single
/// comma-separated value at the position of the first one.
#[derive(Debug, Default)]
pub(crate) struct HeaderSet {
    entries: Headers,
}

impl HeaderSet {
    pub(crate) fn new() -> Self {
        Self {
            entries: Headers::with_capacity(7),
        }
    }

    pub(crate) fn set(&mut self, name: &str, value: impl Into<String>) {
        self.entries.insert(name.to_string(), value.into());
    }

    /// Adds `token` to `Vary` unless it is already listed.
    pub(crate) fn vary(&mut self, token: &str) {
        match self.entries.get_mut(header::VARY) {
            Some(value) => {
                let listed = value
                    .split(',')
                    .any(|existing| existing.trim().eq_ignore_ascii_case(token));
                if !listed {
                    value.push_str(", ");
                    value.push_str(token);
                }
            }
            None => {
                self.entries
                    .insert(header::VARY.to_string(), token.to_string());
            }
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.entries
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
