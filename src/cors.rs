use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{Origin, OriginDecision};
use crate::result::{CorsDecision, PreflightResult, RejectionReason, SimpleResult};

/// A validated, immutable origin admission policy.
///
/// Evaluation never fails and never mutates, so one `Cors` can serve every
/// request on every thread.
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        match &options.origin {
            Origin::Any => tracing::debug!(
                credentials = options.credentials,
                max_age = ?options.max_age,
                "cors policy admits any origin"
            ),
            Origin::List(rules) => tracing::debug!(
                rules = rules.len(),
                exact = rules.iter().filter(|rule| rule.is_exact()).count(),
                credentials = options.credentials,
                max_age = ?options.max_age,
                "cors policy loaded"
            ),
        }
        if options.has_credentialed_wildcards() {
            tracing::warn!(
                "cors policy combines credentials with `*` methods or headers; \
                 browsers treat `*` literally on credentialed requests"
            );
        }

        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Evaluates a request described by its CORS-relevant fields. A preflight
    /// is judged on the method and headers it announces.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if request.is_preflight() {
            let announced = request.access_control_request_method.unwrap_or_default();
            self.evaluate(
                request.origin,
                announced,
                request.access_control_request_headers,
                true,
            )
        } else {
            self.evaluate(request.origin, request.method, None, false)
        }
    }

    /// Evaluates a request given its `Origin`, the method and headers it asks
    /// for, and whether it is a preflight. `method` and `request_headers` are
    /// only consulted for preflights.
    pub fn evaluate(
        &self,
        origin: Option<&str>,
        method: &str,
        request_headers: Option<&str>,
        is_preflight: bool,
    ) -> CorsDecision {
        let decision = self.options.origin.resolve(origin);
        let origin = match (decision, origin) {
            (OriginDecision::Skip, _) | (_, None) => return CorsDecision::NotApplicable,
            (OriginDecision::Disallow, Some(origin)) => {
                return Self::reject(origin, RejectionReason::OriginNotAllowed);
            }
            (OriginDecision::Any | OriginDecision::Mirror, Some(origin)) => origin.trim(),
        };

        if is_preflight {
            self.preflight(decision, origin, method, request_headers)
        } else {
            self.actual(decision, origin)
        }
    }

    fn preflight(
        &self,
        decision: OriginDecision,
        origin: &str,
        method: &str,
        request_headers: Option<&str>,
    ) -> CorsDecision {
        if !self.options.methods.allows_method(method) {
            let method = method.trim().to_string();
            return Self::reject(origin, RejectionReason::MethodNotAllowed(method));
        }

        let refused = self
            .options
            .allowed_headers
            .disallowed_headers(request_headers.unwrap_or_default());
        if !refused.is_empty() {
            return Self::reject(origin, RejectionReason::HeadersNotAllowed(refused));
        }

        let headers = HeaderBuilder::new(&self.options)
            .allow_origin(decision, origin)
            .vary_on_request(decision)
            .credentials()
            .methods()
            .allowed_headers()
            .max_age()
            .build();

        CorsDecision::Preflight(PreflightResult {
            headers,
            status: self.options.options_success_status,
        })
    }

    fn actual(&self, decision: OriginDecision, origin: &str) -> CorsDecision {
        let headers = HeaderBuilder::new(&self.options)
            .allow_origin(decision, origin)
            .credentials()
            .methods()
            .allowed_headers()
            .exposed_headers()
            .build();

        CorsDecision::Simple(SimpleResult { headers })
    }

    fn reject(origin: &str, reason: RejectionReason) -> CorsDecision {
        tracing::trace!(origin, %reason, "cors request rejected");
        CorsDecision::Rejected(reason)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
