use crate::constants::method;

/// Borrowed view of the request fields the policy consults.
///
/// The HTTP layer fills this from the request line and the `Origin`,
/// `Access-Control-Request-Method` and `Access-Control-Request-Headers`
/// headers; absent headers are `None`.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// An `OPTIONS` request carrying a non-empty `Access-Control-Request-Method`.
    pub fn is_preflight(&self) -> bool {
        self.method.trim().eq_ignore_ascii_case(method::OPTIONS)
            && self
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }
}
