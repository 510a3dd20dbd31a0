use cors_gate::{CorsDecision, Headers, RejectionReason};

pub fn expect_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected an admitted actual request, got {other:?}"),
    }
}

pub fn expect_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected an admitted preflight, got {other:?}"),
    }
}

/// Rejections must leave the response without any CORS header.
pub fn expect_rejected(decision: CorsDecision) -> RejectionReason {
    assert!(
        decision.headers().is_empty(),
        "rejection carried headers: {:?}",
        decision.headers()
    );
    match decision {
        CorsDecision::Rejected(reason) => reason,
        other => panic!("expected a rejection, got {other:?}"),
    }
}
