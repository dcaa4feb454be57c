//! Fetch routing integration tests
//!
//! Verifies the cache-first-with-fallback read policy through the full
//! dispatch path: hits never touch the network, misses touch it exactly
//! once and are never written back.

use fetch_types::{FetchRequest, FetchResponse, NetworkBackend, RequestMethod, WorkerError};
use service_worker::{StaticNetwork, WorkerRuntime, PRECACHE_STORE};
use std::sync::Arc;

fn controlled_runtime() -> (WorkerRuntime, Arc<StaticNetwork>) {
    let network = StaticNetwork::new();
    network.route("/", FetchResponse::new(200, b"<html>home</html>".to_vec()));
    network.route("/app3.py", FetchResponse::new(200, b"app source".to_vec()));
    network.route(
        "/static/manifest.json",
        FetchResponse::new(200, b"{\"name\":\"app\"}".to_vec()),
    );
    let network = Arc::new(network);
    let network_concrete: Arc<StaticNetwork> = Arc::clone(&network);
    let network_handle: Arc<dyn NetworkBackend> = network_concrete;
    let mut runtime = WorkerRuntime::new(network_handle);
    runtime.register().expect("installation should succeed");
    (runtime, network)
}

#[test]
fn hit_serves_stored_response_without_network() {
    let (mut runtime, network) = controlled_runtime();
    let baseline = network.fetch_count();

    let response = runtime.handle_request(&FetchRequest::get("/app3.py")).unwrap();

    assert_eq!(response.body, b"app source");
    assert_eq!(network.fetch_count(), baseline, "hit must not fetch live");
}

#[test]
fn miss_performs_exactly_one_live_fetch() {
    let (mut runtime, network) = controlled_runtime();
    network.route(
        "/style.css",
        FetchResponse::new(200, b"body{margin:0}".to_vec()),
    );

    let response = runtime.handle_request(&FetchRequest::get("/style.css")).unwrap();

    assert_eq!(response.body, b"body{margin:0}");
    assert_eq!(network.served("/style.css"), 1);
}

#[test]
fn miss_result_is_returned_unmodified() {
    let (mut runtime, network) = controlled_runtime();
    network.route(
        "/teapot",
        FetchResponse::new(404, b"nothing here".to_vec())
            .with_header("X-Upstream", "origin-3"),
    );

    let response = runtime.handle_request(&FetchRequest::get("/teapot")).unwrap();

    // Whatever the network produced comes straight back, non-OK included.
    assert_eq!(response.status, 404);
    assert_eq!(response.body, b"nothing here");
    assert_eq!(
        response.headers.get("X-Upstream").map(String::as_str),
        Some("origin-3")
    );
}

#[test]
fn miss_is_not_written_back() {
    let (mut runtime, network) = controlled_runtime();
    network.route("/style.css", FetchResponse::new(200, vec![]));

    runtime.handle_request(&FetchRequest::get("/style.css")).unwrap();
    runtime.handle_request(&FetchRequest::get("/style.css")).unwrap();

    assert_eq!(
        network.served("/style.css"),
        2,
        "every miss goes live; nothing is cached after install"
    );
    let cache = runtime.storage().open(PRECACHE_STORE);
    assert!(cache.match_request(&FetchRequest::get("/style.css")).is_none());
}

#[test]
fn miss_failure_propagates_to_caller() {
    let (mut runtime, _network) = controlled_runtime();

    let result = runtime.handle_request(&FetchRequest::get("/not-routed"));

    assert!(matches!(result, Err(WorkerError::Network(_))));
}

#[test]
fn descriptor_includes_method() {
    let (mut runtime, network) = controlled_runtime();

    // "/" is pre-cached for GET; a HEAD is a different descriptor.
    let result = runtime.handle_request(&FetchRequest::new("/", RequestMethod::Head));

    assert!(matches!(result, Err(WorkerError::Network(_))));
    // Three install fetches plus the one live attempt for the HEAD.
    assert_eq!(network.fetch_count(), 4);
}
