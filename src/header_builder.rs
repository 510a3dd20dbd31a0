use crate::constants::{WILDCARD, header};
use crate::headers::{HeaderSet, Headers};
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

/// Writes the response headers for an admitted request, one group per call.
pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
    headers: HeaderSet,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self {
            options,
            headers: HeaderSet::new(),
        }
    }

    /// `Any` answers `*`. `Mirror` echoes `origin` and varies on `Origin`.
    pub(crate) fn allow_origin(mut self, decision: OriginDecision, origin: &str) -> Self {
        match decision {
            OriginDecision::Any => {
                self.headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
            }
            OriginDecision::Mirror => {
                self.headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                self.headers.vary(header::ORIGIN);
            }
            OriginDecision::Disallow | OriginDecision::Skip => {}
        }
        self
    }

    /// An echoed preflight answer is cached per requested method and headers.
    pub(crate) fn vary_on_request(mut self, decision: OriginDecision) -> Self {
        if decision == OriginDecision::Mirror {
            self.headers.vary(header::ACCESS_CONTROL_REQUEST_METHOD);
            self.headers.vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        }
        self
    }

    pub(crate) fn credentials(mut self) -> Self {
        if self.options.credentials {
            self.headers
                .set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        self
    }

    pub(crate) fn methods(self) -> Self {
        let value = self.options.methods.header_value();
        self.optional(header::ACCESS_CONTROL_ALLOW_METHODS, value)
    }

    pub(crate) fn allowed_headers(self) -> Self {
        let value = self.options.allowed_headers.header_value();
        self.optional(header::ACCESS_CONTROL_ALLOW_HEADERS, value)
    }

    pub(crate) fn exposed_headers(self) -> Self {
        let value = self.options.exposed_headers.header_value();
        self.optional(header::ACCESS_CONTROL_EXPOSE_HEADERS, value)
    }

    pub(crate) fn max_age(self) -> Self {
        let value = self.options.max_age.map(|seconds| seconds.to_string());
        self.optional(header::ACCESS_CONTROL_MAX_AGE, value)
    }

    pub(crate) fn build(self) -> Headers {
        self.headers.into_headers()
    }

    fn optional(mut self, name: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.headers.set(name, value);
        }
        self
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
