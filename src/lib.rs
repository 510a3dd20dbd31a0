//! Immutable CORS origin admission policy.
//!
//! Build a [`Cors`] once from [`CorsOptions`] (or a deserialized
//! [`CorsConfig`]), then call [`Cors::check`] or [`Cors::evaluate`] for every
//! request. The returned [`CorsDecision`] carries the response headers to emit;
//! the HTTP layer stays in charge of the connection.

mod allowed_headers;
mod allowed_methods;
mod config;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
pub mod global;
mod header_builder;
mod headers;
mod options;
mod origin;
mod origin_regex;
mod result;
mod util;
mod wildcard;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig};
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginDecision, OriginMatcher};
pub use origin_regex::{OriginRegex, PatternError};
pub use result::{CorsDecision, PreflightResult, RejectionReason, SimpleResult};
pub use wildcard::{PortRule, WildcardError, WildcardPattern};
