use crate::constants::WILDCARD;
use crate::util::{collect_tokens, first_invalid_token, is_lone_wildcard, join_tokens};

/// Response headers scripts may read, sent as `Access-Control-Expose-Headers`
/// on admitted actual requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExposedHeaders {
    List(Vec<String>),
    Any,
}

impl Default for ExposedHeaders {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl ExposedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = collect_tokens(values);
        if is_lone_wildcard(&names) {
            Self::Any
        } else {
            Self::List(names)
        }
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => Some(WILDCARD.to_string()),
            Self::List(names) => join_tokens(names),
        }
    }

    pub(crate) fn invalid_entry(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::List(names) => first_invalid_token(names),
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
