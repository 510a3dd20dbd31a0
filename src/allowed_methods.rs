use crate::constants::{WILDCARD, method};
use crate::util::{collect_tokens, first_invalid_token, is_lone_wildcard, join_tokens};

/// Methods a preflight may request, mirrored into `Access-Control-Allow-Methods`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedMethods {
    /// `*`: any requested method is admitted.
    Any,
    /// Method names in configured spelling; matching ignores ASCII case.
    List(Vec<String>),
}

impl AllowedMethods {
    /// A lone `*` selects [`Self::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let methods = collect_tokens(values);
        if is_lone_wildcard(&methods) {
            Self::Any
        } else {
            Self::List(methods)
        }
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_method(&self, requested: &str) -> bool {
        let requested = requested.trim();
        match self {
            Self::Any => true,
            Self::List(methods) => methods.iter().any(|name| name.eq_ignore_ascii_case(requested)),
        }
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => Some(WILDCARD.to_string()),
            Self::List(methods) => join_tokens(methods),
        }
    }

    pub(crate) fn invalid_entry(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::List(methods) => first_invalid_token(methods),
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::PATCH,
            method::POST,
            method::DELETE,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
