use crate::constants::WILDCARD;
use crate::util::{
    collect_tokens, first_invalid_token, is_lone_wildcard, join_tokens, split_header_list,
};

/// Request headers a preflight may announce, mirrored into
/// `Access-Control-Allow-Headers`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Header names in configured spelling. An empty list admits preflights
    /// that announce no headers.
    List(Vec<String>),
    /// `*`: every announced header is admitted.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl AllowedHeaders {
    /// A lone `*` selects [`Self::Any`].
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

    pub fn any() -> Self {
        Self::Any
    }

    /// Names from an `Access-Control-Request-Headers` value that are not
    /// admitted, in request order.
    pub fn disallowed_headers(&self, requested: &str) -> Vec<String> {
        let Self::List(names) = self else {
            return Vec::new();
        };

        split_header_list(requested)
            .filter(|wanted| !names.iter().any(|name| name.eq_ignore_ascii_case(wanted)))
            .map(str::to_string)
            .collect()
    }

    pub fn allows_headers(&self, requested: &str) -> bool {
        self.disallowed_headers(requested).is_empty()
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
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
