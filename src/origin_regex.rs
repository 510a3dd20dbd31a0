//! Regular-expression origin rules.

use regex_automata::meta::{BuildError, Regex};
use regex_automata::util::syntax;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

const COMPILE_BUDGET: Duration = Duration::from_millis(100);
pub(crate) const MAX_PATTERN_LENGTH: usize = 50_000;

/// Why an origin regex was refused at load time.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("origin regex is {length} bytes long; the limit is {max}")]
    TooLong { length: usize, max: usize },
    #[error("origin regex does not compile")]
    Build(#[source] Box<BuildError>),
    #[error("origin regex took {elapsed:?} to compile, over the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
}

/// A regular expression that must match an entire origin, ignoring case.
///
/// The expression is compiled as `^(?:pattern)$`, so
/// `https://[a-z]+\.example\.com` admits `https://app.example.com` but not
/// `https://app.example.com.attacker.io`. Writing the anchors yourself is
/// harmless.
#[derive(Clone)]
pub struct OriginRegex {
    source: String,
    regex: Regex,
}

impl OriginRegex {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_budget(pattern, COMPILE_BUDGET)
    }

    pub(crate) fn with_budget(pattern: &str, budget: Duration) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(true))
            .build(&format!("^(?:{pattern})$"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as configured, without the added anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, origin: &str) -> bool {
        self.regex.is_match(origin)
    }
}

impl fmt::Debug for OriginRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OriginRegex").field(&self.source).finish()
    }
}

impl fmt::Display for OriginRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
#[path = "origin_regex_test.rs"]
mod origin_regex_test;
