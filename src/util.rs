use crate::constants::WILDCARD;

const TCHAR_SYMBOLS: &[u8] = b"!#$%&'*+-.^_`|~";

/// Drops surrounding whitespace and trailing `/` from an origin.
pub(crate) fn normalize_origin(value: &str) -> &str {
    value.trim().trim_end_matches('/')
}

/// Returns `true` when `value` ends with `suffix`, ignoring ASCII case.
pub(crate) fn ends_with_ignore_ascii_case(value: &str, suffix: &str) -> bool {
    value.len() >= suffix.len()
        && value.is_char_boundary(value.len() - suffix.len())
        && value[value.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// An RFC 9110 `token`: one or more `tchar`.
pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || TCHAR_SYMBOLS.contains(&byte))
}

/// Splits a comma-separated header list such as `Access-Control-Request-Headers`,
/// dropping blank entries.
pub(crate) fn split_header_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

/// Trims configured entries, drops blanks and keeps the first spelling of
/// entries that differ only in ASCII case.
pub(crate) fn collect_tokens<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens: Vec<String> = Vec::new();
    for value in values {
        let value = value.into();
        let entry = value.trim();
        if entry.is_empty() || tokens.iter().any(|token| token.eq_ignore_ascii_case(entry)) {
            continue;
        }
        tokens.push(entry.to_string());
    }
    tokens
}

pub(crate) fn is_lone_wildcard(tokens: &[String]) -> bool {
    matches!(tokens, [only] if only == WILDCARD)
}

/// A `*` mixed into a list is not a wildcard, and anything else must be a token.
pub(crate) fn first_invalid_token(tokens: &[String]) -> Option<&str> {
    tokens
        .iter()
        .map(String::as_str)
        .find(|token| *token == WILDCARD || !is_http_token(token))
}

/// `None` for an empty list, which emits no header.
pub(crate) fn join_tokens(tokens: &[String]) -> Option<String> {
    (!tokens.is_empty()).then(|| tokens.join(","))
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
