use fetch_types::{FetchRequest, FetchResponse, NetworkBackend, WorkerError};
use service_worker::{
    FetchEvent, InstallEvent, StaticNetwork, WorkerHost, WorkerRuntime, WorkerState,
    PRECACHE_ASSETS, PRECACHE_STORE,
};
use std::sync::Arc;

fn staged_network() -> Arc<StaticNetwork> {
    let network = StaticNetwork::new();
    network.route("/", FetchResponse::new(200, b"<html>home</html>".to_vec()));
    network.route("/app3.py", FetchResponse::new(200, b"app source".to_vec()));
    network.route(
        "/static/manifest.json",
        FetchResponse::new(200, b"{\"name\":\"app\"}".to_vec()),
    );
    Arc::new(network)
}

#[cfg(test)]
mod precache_constant_tests {
    use super::*;

    #[test]
    fn test_asset_list_is_fixed() {
        assert_eq!(PRECACHE_ASSETS.len(), 3);
        assert_eq!(PRECACHE_ASSETS[0], "/");
        assert!(PRECACHE_ASSETS.contains(&"/static/manifest.json"));
    }

    #[test]
    fn test_store_name_is_fixed() {
        assert_eq!(PRECACHE_STORE, "streamlit-cache");
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_worker_only_intercepts_once_activated() {
        let host = WorkerHost::new();
        let registration = host.register();

        let worker = registration.installing().unwrap();
        assert!(!worker.state().can_intercept_fetch());

        registration.complete_install().unwrap();
        assert!(!worker.state().can_intercept_fetch());

        host.activate_controller().unwrap();
        assert!(worker.state().can_intercept_fetch());
    }

    #[test]
    fn test_install_failure_makes_worker_redundant() {
        let host = WorkerHost::new();
        let registration = host.register();
        let worker = registration.installing().unwrap();

        registration.fail_install();

        assert_eq!(worker.state(), WorkerState::Redundant);
        assert!(host.controller().is_none());
    }
}

#[cfg(test)]
mod event_tests {
    use super::*;

    #[test]
    fn test_install_event_collects_setup_outcome() {
        let event = InstallEvent::new();
        event.wait_until(Err(WorkerError::Network("asset fetch failed".to_string())));
        assert!(event.settle().is_err());
    }

    #[test]
    fn test_fetch_event_single_resolution() {
        let event = FetchEvent::new(FetchRequest::get("/"));
        event.respond_with(FetchResponse::new(200, vec![])).unwrap();
        assert!(event.respond_with(FetchResponse::new(200, vec![])).is_err());
        assert!(event.into_response().is_some());
    }
}

#[cfg(test)]
mod runtime_tests {
    use super::*;

    #[test]
    fn test_full_lifecycle_cache_first() {
        let network = staged_network();
        let network_concrete: Arc<StaticNetwork> = Arc::clone(&network);
        let network_handle: Arc<dyn NetworkBackend> = network_concrete;
        let mut runtime = WorkerRuntime::new(network_handle);

        runtime.register().expect("install should succeed");

        // Every pre-cached asset is served without touching the network.
        let baseline = network.fetch_count();
        for url in PRECACHE_ASSETS {
            let response = runtime.handle_request(&FetchRequest::get(url)).unwrap();
            assert!(response.ok());
        }
        assert_eq!(network.fetch_count(), baseline);
    }

    #[test]
    fn test_miss_falls_back_to_network_unmodified() {
        let network = staged_network();
        network.route(
            "/extra.css",
            FetchResponse::new(200, b"body{}".to_vec()).with_header("Content-Type", "text/css"),
        );
        let network_concrete: Arc<StaticNetwork> = Arc::clone(&network);
        let network_handle: Arc<dyn NetworkBackend> = network_concrete;
        let mut runtime = WorkerRuntime::new(network_handle);
        runtime.register().unwrap();

        let response = runtime
            .handle_request(&FetchRequest::get("/extra.css"))
            .unwrap();

        assert_eq!(response.body, b"body{}");
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("text/css")
        );
        assert_eq!(network.served("/extra.css"), 1);
    }

    #[test]
    fn test_miss_failure_reaches_the_caller() {
        let mut runtime = WorkerRuntime::new(staged_network());
        runtime.register().unwrap();

        let result = runtime.handle_request(&FetchRequest::get("/no-such-path"));
        assert!(matches!(result, Err(WorkerError::Network(_))));
    }
}

#[cfg(test)]
mod update_tests {
    use super::*;

    #[test]
    fn test_reinstall_overwrites_same_keys() {
        let network = staged_network();
        let network_concrete: Arc<StaticNetwork> = Arc::clone(&network);
        let network_handle: Arc<dyn NetworkBackend> = network_concrete;
        let mut runtime = WorkerRuntime::new(network_handle);
        runtime.register().unwrap();

        // New content behind the same paths, then a second install.
        network.route("/", FetchResponse::new(200, b"<html>v2</html>".to_vec()));
        runtime.register().unwrap();

        let cache = runtime.storage().open(PRECACHE_STORE);
        assert_eq!(cache.len(), PRECACHE_ASSETS.len());

        let response = runtime.handle_request(&FetchRequest::get("/")).unwrap();
        assert_eq!(response.body, b"<html>v2</html>");
    }
}
