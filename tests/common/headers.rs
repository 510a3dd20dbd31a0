use cors_gate::Headers;
use cors_gate::constants::header;

/// Header lookup ignoring name case, as HTTP does.
pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find_map(|(key, value)| key.eq_ignore_ascii_case(name).then_some(value.as_str()))
}

pub fn pairs(headers: &Headers) -> Vec<(&str, &str)> {
    headers
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
}

pub fn vary_tokens(headers: &Headers) -> Vec<&str> {
    header_value(headers, header::VARY)
        .map(|value| value.split(',').map(str::trim).collect())
        .unwrap_or_default()
}
