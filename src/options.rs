use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use thiserror::Error;

const DEFAULT_SUCCESS_STATUS: u16 = 204;

/// Load-time policy settings. [`crate::Cors::new`] validates them once; they
/// are never mutated afterwards.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    /// Sends `Access-Control-Allow-Credentials: true`. Requires listed origins.
    pub credentials: bool,
    /// Preflight cache lifetime in seconds.
    pub max_age: Option<u64>,
    /// Status the HTTP layer answers admitted preflights with.
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: None,
            options_success_status: DEFAULT_SUCCESS_STATUS,
        }
    }
}

/// Settings refused at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("credentials cannot be combined with a wildcard origin; list the allowed origins")]
    CredentialsRequireSpecificOrigin,
    #[error("credentials are enabled but no origins are allowed")]
    CredentialsRequireOrigins,
    #[error("origin rule `{0}` is not a valid exact origin")]
    InvalidOrigin(String),
    #[error("allowed method `{0}` is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name `{0}` is not a valid HTTP token")]
    InvalidHeaderName(String),
    #[error("preflight success status {0} is outside 200..=299")]
    InvalidSuccessStatus(u16),
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(self, origin: Origin) -> Self {
        Self { origin, ..self }
    }

    pub fn methods(self, methods: AllowedMethods) -> Self {
        Self { methods, ..self }
    }

    pub fn allowed_headers(self, allowed_headers: AllowedHeaders) -> Self {
        Self {
            allowed_headers,
            ..self
        }
    }

    pub fn exposed_headers(self, exposed_headers: ExposedHeaders) -> Self {
        Self {
            exposed_headers,
            ..self
        }
    }

    pub fn credentials(self, credentials: bool) -> Self {
        Self {
            credentials,
            ..self
        }
    }

    pub fn max_age(self, seconds: u64) -> Self {
        Self {
            max_age: Some(seconds),
            ..self
        }
    }

    pub fn options_success_status(self, status: u16) -> Self {
        Self {
            options_success_status: status,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_credentials()?;

        if let Some(rule) = self.origin.invalid_exact_rule() {
            return Err(ValidationError::InvalidOrigin(rule.to_string()));
        }
        if let Some(method) = self.methods.invalid_entry() {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }
        let bad_header = self
            .allowed_headers
            .invalid_entry()
            .or_else(|| self.exposed_headers.invalid_entry());
        if let Some(name) = bad_header {
            return Err(ValidationError::InvalidHeaderName(name.to_string()));
        }

        match self.options_success_status {
            200..=299 => Ok(()),
            status => Err(ValidationError::InvalidSuccessStatus(status)),
        }
    }

    fn validate_credentials(&self) -> Result<(), ValidationError> {
        if !self.credentials {
            return Ok(());
        }
        match &self.origin {
            Origin::Any => Err(ValidationError::CredentialsRequireSpecificOrigin),
            Origin::List(rules) if rules.is_empty() => {
                Err(ValidationError::CredentialsRequireOrigins)
            }
            Origin::List(_) => Ok(()),
        }
    }

    /// Credentialed requests read `*` in methods, headers and exposed headers
    /// literally, so such a policy admits less than it appears to.
    pub(crate) fn has_credentialed_wildcards(&self) -> bool {
        self.credentials
            && (self.methods == AllowedMethods::Any
                || self.allowed_headers == AllowedHeaders::Any
                || self.exposed_headers == ExposedHeaders::Any)
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
