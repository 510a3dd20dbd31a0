use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::WILDCARD;
use crate::cors::Cors;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{Origin, OriginMatcher};
use crate::origin_regex::PatternError;
use crate::util::split_header_list;
use crate::wildcard::WildcardError;
use serde::Deserialize;
use std::env;
use thiserror::Error;

pub const ENV_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const ENV_ALLOWED_ORIGIN_PATTERNS: &str = "CORS_ALLOWED_ORIGIN_PATTERNS";
pub const ENV_ALLOWED_METHODS: &str = "CORS_ALLOWED_METHODS";
pub const ENV_ALLOWED_HEADERS: &str = "CORS_ALLOWED_HEADERS";
pub const ENV_EXPOSED_HEADERS: &str = "CORS_EXPOSED_HEADERS";
pub const ENV_ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
pub const ENV_MAX_AGE: &str = "CORS_MAX_AGE";

/// Declarative CORS configuration, as read from a config file or the
/// environment.
///
/// A lone `"*"` in `allowed_origins`, `allowed_methods` or `allowed_headers`
/// selects the wildcard. `allowed_origin_patterns` accepts
/// `scheme://*.domain.tld[:ports]` patterns; entries without `*` are treated
/// as exact origins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_origin_patterns: Vec<String>,
    /// Regular expressions that must match the whole origin, ignoring case.
    /// They are anchored on load, so `^` and `$` are optional.
    pub allowed_origin_regexes: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}")]
    Env { key: &'static str, value: String },
    #[error(transparent)]
    Wildcard(#[from] WildcardError),
    #[error("invalid origin regex `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CorsConfig {
    /// Loads configuration from `CORS_*` environment variables. Unset
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let list = |key: &str| -> Vec<String> {
            lookup(key)
                .map(|value| split_header_list(&value).map(str::to_string).collect())
                .unwrap_or_default()
        };

        let allow_credentials = match lookup(ENV_ALLOW_CREDENTIALS) {
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::Env {
                key: ENV_ALLOW_CREDENTIALS,
                value,
            })?,
            None => false,
        };

        let max_age_seconds = match lookup(ENV_MAX_AGE) {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|_| ConfigError::Env {
                key: ENV_MAX_AGE,
                value,
            })?),
            None => None,
        };

        Ok(Self {
            allowed_origins: list(ENV_ALLOWED_ORIGINS),
            allowed_origin_patterns: list(ENV_ALLOWED_ORIGIN_PATTERNS),
            allowed_origin_regexes: Vec::new(),
            allowed_methods: list(ENV_ALLOWED_METHODS),
            allowed_headers: list(ENV_ALLOWED_HEADERS),
            exposed_headers: list(ENV_EXPOSED_HEADERS),
            allow_credentials,
            max_age_seconds,
        })
    }

    pub fn to_options(&self) -> Result<CorsOptions, ConfigError> {
        let methods = if self.allowed_methods.is_empty() {
            AllowedMethods::default()
        } else {
            AllowedMethods::list(self.allowed_methods.iter().map(String::as_str))
        };

        Ok(CorsOptions {
            origin: self.origin()?,
            methods,
            allowed_headers: AllowedHeaders::list(self.allowed_headers.iter().map(String::as_str)),
            exposed_headers: ExposedHeaders::list(self.exposed_headers.iter().map(String::as_str)),
            credentials: self.allow_credentials,
            max_age: self.max_age_seconds,
            ..CorsOptions::default()
        })
    }

    /// Converts into a validated policy.
    pub fn build(&self) -> Result<Cors, ConfigError> {
        Ok(Cors::new(self.to_options()?)?)
    }

    fn origin(&self) -> Result<Origin, ConfigError> {
        let is_any = |value: &String| value.trim() == WILDCARD;
        if self.allowed_origins.iter().any(is_any) || self.allowed_origin_patterns.iter().any(is_any)
        {
            return Ok(Origin::Any);
        }

        let mut matchers: Vec<OriginMatcher> = self
            .allowed_origins
            .iter()
            .map(|value| OriginMatcher::exact(value.as_str()))
            .collect();

        for pattern in &self.allowed_origin_patterns {
            if pattern.contains('*') {
                matchers.push(OriginMatcher::wildcard(pattern)?);
            } else {
                matchers.push(OriginMatcher::exact(pattern.as_str()));
            }
        }

        for pattern in &self.allowed_origin_regexes {
            let matcher =
                OriginMatcher::pattern_str(pattern).map_err(|source| ConfigError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            matchers.push(matcher);
        }

        Ok(Origin::List(matchers))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
