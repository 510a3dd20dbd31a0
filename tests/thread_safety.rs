mod common;

use common::fixtures::{LOCAL_VITE, NETLIFY_SITE, actual, backend_cors, preflight};
use common::headers::header_value;
use cors_gate::constants::{header, method};
use cors_gate::{Cors, CorsDecision, global};
use std::sync::Arc;
use std::thread;

#[test]
fn one_policy_serves_many_request_threads() {
    let cors = Arc::new(backend_cors());

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let cors = Arc::clone(&cors);
            thread::spawn(move || {
                let preview = format!("https://deploy-preview-{worker}.netlify.app");
                let foreign = format!("https://tenant{worker}.example");

                for _ in 0..200 {
                    let admitted = preflight(&cors, &preview, method::PATCH, Some("Authorization"));
                    assert_eq!(
                        header_value(admitted.headers(), header::ACCESS_CONTROL_ALLOW_ORIGIN),
                        Some(preview.as_str())
                    );

                    let refused = actual(&cors, method::GET, Some(foreign.as_str()));
                    assert!(matches!(refused, CorsDecision::Rejected(_)));
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker panicked");
    }
}

#[test]
fn concurrent_decisions_equal_sequential_decisions() {
    let cors = Arc::new(backend_cors());
    let origins = [
        NETLIFY_SITE,
        LOCAL_VITE,
        "https://preview.netlify.app",
        "http://preview.netlify.app",
        "https://netlify.app",
        "https://unrelated.dev",
    ];

    let sequential: Vec<_> = origins
        .into_iter()
        .map(|origin| actual(&cors, method::GET, Some(origin)))
        .collect();

    let concurrent: Vec<_> = origins
        .into_iter()
        .map(|origin| {
            let cors = Arc::clone(&cors);
            thread::spawn(move || actual(&cors, method::GET, Some(origin)))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().expect("worker panicked"))
        .collect();

    assert_eq!(concurrent, sequential);
}

#[test]
fn installed_global_policy_is_readable_from_other_threads() {
    let installed = global::install(backend_cors()).expect("first install succeeds");

    let seen = thread::spawn(|| {
        let cors = global::get().expect("policy installed");
        actual(cors, method::GET, Some(NETLIFY_SITE)).is_allowed()
    })
    .join()
    .expect("reader panicked");

    assert!(seen);
    assert!(std::ptr::eq(installed, global::get().expect("policy installed")));
    assert!(global::install(backend_cors()).is_err());
}

#[test]
fn policy_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Cors>();
}
