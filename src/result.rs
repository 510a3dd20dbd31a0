use crate::headers::Headers;
use once_cell::sync::Lazy;
use std::fmt;

static NO_HEADERS: Lazy<Headers> = Lazy::new(Headers::default);

/// Headers and status for an admitted preflight. The HTTP layer answers with
/// `status` and an empty body and does not forward the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers to attach to the response of an admitted actual request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Why a cross-origin request was not admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    OriginNotAllowed,
    MethodNotAllowed(String),
    HeadersNotAllowed(Vec<String>),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::OriginNotAllowed => write!(f, "origin not allowed"),
            RejectionReason::MethodNotAllowed(method) => {
                write!(f, "method `{method}` not allowed")
            }
            RejectionReason::HeadersNotAllowed(headers) => {
                write!(f, "headers not allowed: {}", headers.join(", "))
            }
        }
    }
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    /// Not admitted. No CORS headers are emitted; the browser enforces the
    /// same-origin policy from their absence.
    Rejected(RejectionReason),
    /// The request carries no `Origin`, so CORS does not apply.
    NotApplicable,
}

impl CorsDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_) | CorsDecision::Simple(_))
    }

    pub fn is_preflight(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_))
    }

    /// Response headers to emit; empty unless the request was admitted.
    pub fn headers(&self) -> &Headers {
        match self {
            CorsDecision::Preflight(result) => &result.headers,
            CorsDecision::Simple(result) => &result.headers,
            CorsDecision::Rejected(_) | CorsDecision::NotApplicable => &*NO_HEADERS,
        }
    }
}
