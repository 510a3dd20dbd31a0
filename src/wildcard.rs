use std::fmt;
use thiserror::Error;

use crate::util::ends_with_ignore_ascii_case;

/// Errors produced while parsing a wildcard origin pattern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WildcardError {
    #[error("origin pattern `{0}` is missing a `scheme://` prefix")]
    MissingScheme(String),
    #[error("origin pattern `{0}` must start its host with a `*.` label")]
    MissingWildcardLabel(String),
    #[error("origin pattern `{0}` has an empty or malformed domain suffix")]
    InvalidSuffix(String),
    #[error("origin pattern `{pattern}` has an invalid port specification `{ports}`")]
    InvalidPort { pattern: String, ports: String },
}

/// Which ports a wildcard pattern accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortRule {
    /// Only origins without an explicit port.
    Default,
    /// Any explicit port, or none (`:[*]`).
    Any,
    /// One of the listed explicit ports (`:8080` or `:[8080,8081]`).
    List(Vec<u16>),
}

/// An origin pattern of the form `scheme://*.domain.tld`, optionally followed by
/// a port specification.
///
/// The leftmost host label is the wildcard and must match at least one
/// non-empty subdomain label, so `https://*.netlify.app` accepts
/// `https://foo.netlify.app` and `https://a.b.netlify.app` but rejects
/// `https://netlify.app` and `http://foo.netlify.app`.
#[derive(Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    source: String,
    scheme: String,
    suffix: String,
    ports: PortRule,
}

impl WildcardPattern {
    pub fn parse(pattern: &str) -> Result<Self, WildcardError> {
        let source = pattern.trim().trim_end_matches('/');
        let Some((scheme, rest)) = source.split_once("://") else {
            return Err(WildcardError::MissingScheme(pattern.to_string()));
        };
        if !is_scheme(scheme) {
            return Err(WildcardError::MissingScheme(pattern.to_string()));
        }

        let Some(rest) = rest.strip_prefix("*.") else {
            return Err(WildcardError::MissingWildcardLabel(pattern.to_string()));
        };

        let (host, ports) = match rest.split_once(':') {
            Some((host, ports)) => (host, parse_ports(pattern, ports)?),
            None => (rest, PortRule::Default),
        };

        if host.is_empty() || !host.split('.').all(is_host_label) {
            return Err(WildcardError::InvalidSuffix(pattern.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            scheme: scheme.to_ascii_lowercase(),
            suffix: format!(".{}", host.to_ascii_lowercase()),
            ports,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn ports(&self) -> &PortRule {
        &self.ports
    }

    pub fn matches(&self, candidate: &str) -> bool {
        let Some((scheme, authority)) = candidate.split_once("://") else {
            return false;
        };
        if !scheme.eq_ignore_ascii_case(&self.scheme) {
            return false;
        }

        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => match parse_port(port) {
                Some(port) => (host, Some(port)),
                None => return false,
            },
            None => (authority, None),
        };

        if !self.port_allowed(port) {
            return false;
        }

        if !ends_with_ignore_ascii_case(host, &self.suffix) {
            return false;
        }

        let subdomain = &host[..host.len() - self.suffix.len()];
        !subdomain.is_empty() && subdomain.split('.').all(is_host_label)
    }

    fn port_allowed(&self, port: Option<u16>) -> bool {
        match (&self.ports, port) {
            (PortRule::Any, _) => true,
            (PortRule::Default, None) => true,
            (PortRule::Default, Some(_)) => false,
            (PortRule::List(_), None) => false,
            (PortRule::List(ports), Some(port)) => ports.contains(&port),
        }
    }
}

impl fmt::Debug for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WildcardPattern").field(&self.source).finish()
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// `u16::from_str` also accepts a leading `+`.
fn parse_port(value: &str) -> Option<u16> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn parse_ports(pattern: &str, ports: &str) -> Result<PortRule, WildcardError> {
    let invalid = || WildcardError::InvalidPort {
        pattern: pattern.to_string(),
        ports: ports.to_string(),
    };

    let inner = match ports.strip_prefix('[') {
        Some(list) => list.strip_suffix(']').ok_or_else(invalid)?,
        None => ports,
    };

    if inner.trim() == "*" {
        return Ok(PortRule::Any);
    }

    let parsed = inner
        .split(',')
        .map(|entry| parse_port(entry.trim()).ok_or_else(invalid))
        .collect::<Result<Vec<_>, _>>()?;

    if parsed.is_empty() {
        return Err(invalid());
    }

    Ok(PortRule::List(parsed))
}

fn is_scheme(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}

fn is_host_label(label: &str) -> bool {
    !label.is_empty()
        && label
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_'))
}

#[cfg(test)]
#[path = "wildcard_test.rs"]
mod wildcard_test;
