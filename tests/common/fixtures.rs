use cors_gate::constants::method;
use cors_gate::{Cors, CorsConfig, CorsDecision, CorsOptions, RequestContext};

pub const NETLIFY_SITE: &str = "https://vehicle-management-system.netlify.app";
pub const PREVIEW_ORIGIN: &str = "https://deploy-preview-42--vehicle-management-system.netlify.app";
pub const LOCAL_VITE: &str = "http://localhost:5173";
pub const LOCAL_CRA: &str = "http://localhost:3000";

/// Local dev servers, the deployed Netlify site and its preview subdomains,
/// any method and header, credentials on, one hour preflight cache.
pub fn backend_config() -> CorsConfig {
    CorsConfig {
        allowed_origins: vec![LOCAL_VITE.into(), LOCAL_CRA.into(), NETLIFY_SITE.into()],
        allowed_origin_patterns: vec!["https://*.netlify.app".into()],
        allowed_methods: vec!["*".into()],
        allowed_headers: vec!["*".into()],
        allow_credentials: true,
        max_age_seconds: Some(3600),
        ..CorsConfig::default()
    }
}

pub fn backend_cors() -> Cors {
    backend_config()
        .build()
        .expect("backend CORS configuration is valid")
}

pub fn policy(options: CorsOptions) -> Cors {
    Cors::new(options).expect("valid CORS options")
}

/// Sends an `OPTIONS` preflight announcing `method` and optional headers.
pub fn preflight(cors: &Cors, origin: &str, method: &str, headers: Option<&str>) -> CorsDecision {
    cors.check(&RequestContext {
        method: method::OPTIONS,
        origin: Some(origin),
        access_control_request_method: Some(method),
        access_control_request_headers: headers,
    })
}

pub fn actual(cors: &Cors, method: &str, origin: Option<&str>) -> CorsDecision {
    cors.check(&RequestContext {
        method,
        origin,
        access_control_request_method: None,
        access_control_request_headers: None,
    })
}
