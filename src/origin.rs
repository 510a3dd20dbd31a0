use crate::constants::WILDCARD;
use crate::origin_regex::{OriginRegex, PatternError};
use crate::util::normalize_origin;
use crate::wildcard::{WildcardError, WildcardPattern};

/// Request origins longer than this never match a rule.
pub(crate) const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Which request origins a policy admits.
#[derive(Clone, Debug, Default)]
pub enum Origin {
    /// Every origin, answered with `*`. Never valid together with credentials.
    /// Nothing is echoed, so the origin length is not checked either.
    #[default]
    Any,
    /// Rules tried exact-first. A matching origin is echoed back, and origins
    /// longer than 4096 bytes are refused without matching.
    List(Vec<OriginMatcher>),
}

/// How [`Origin::resolve`] classified a request origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision {
    /// Answer with `*`.
    Any,
    /// Echo the request origin.
    Mirror,
    Disallow,
    /// The request has no origin; CORS does not apply.
    Skip,
}

/// One origin rule.
#[derive(Clone, Debug)]
pub enum OriginMatcher {
    /// A full `scheme://host[:port]`, compared ignoring ASCII case.
    Exact(String),
    /// `scheme://*.domain.tld[:ports]`.
    Wildcard(WildcardPattern),
    /// A regular expression that must match the whole origin, ignoring case.
    Pattern(OriginRegex),
}

impl OriginMatcher {
    /// Surrounding whitespace and trailing `/` are dropped, here and from the
    /// request origin when comparing.
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(normalize_origin(&value.into()).to_string())
    }

    pub fn wildcard(pattern: &str) -> Result<Self, WildcardError> {
        WildcardPattern::parse(pattern).map(Self::Wildcard)
    }

    /// Compiles `pattern` as a whole-origin regex; see [`OriginRegex`].
    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        OriginRegex::new(pattern).map(Self::Pattern)
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Exact(value) => value.eq_ignore_ascii_case(normalize_origin(origin)),
            Self::Wildcard(pattern) => pattern.matches(origin),
            Self::Pattern(regex) => regex.is_match(origin),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        Self::exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        Self::exact(value)
    }
}

impl From<WildcardPattern> for OriginMatcher {
    fn from(pattern: WildcardPattern) -> Self {
        Self::Wildcard(pattern)
    }
}

impl From<OriginRegex> for OriginMatcher {
    fn from(regex: OriginRegex) -> Self {
        Self::Pattern(regex)
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::List(vec![OriginMatcher::exact(value)])
    }

    pub fn list<I, T>(rules: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(rules.into_iter().map(Into::into).collect())
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let origin = match request_origin.map(str::trim) {
            Some(origin) if !origin.is_empty() => origin,
            _ => return OriginDecision::Skip,
        };

        let rules = match self {
            Self::Any => return OriginDecision::Any,
            Self::List(rules) => rules,
        };

        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        let exact = rules.iter().filter(|rule| rule.is_exact());
        let patterns = rules.iter().filter(|rule| !rule.is_exact());
        if exact.chain(patterns).any(|rule| rule.matches(origin)) {
            OriginDecision::Mirror
        } else {
            OriginDecision::Disallow
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(rules) if rules.is_empty())
    }

    /// First exact rule that is blank or a bare `*`.
    pub(crate) fn invalid_exact_rule(&self) -> Option<&str> {
        let Self::List(rules) = self else {
            return None;
        };

        rules.iter().find_map(|rule| match rule {
            OriginMatcher::Exact(value) if value.is_empty() || value == WILDCARD => {
                Some(value.as_str())
            }
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
