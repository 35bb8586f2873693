//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use dynamic_app::config::Config;
use dynamic_app::demo::{build_application, DemoStores};
use dynamic_app::server::Server;
use http_body_util::BodyExt;
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceExt;

/// Router over the demo application with default initial state.
pub fn demo_router() -> (Router, DemoStores) {
    demo_router_with(&Config::default())
}

pub fn demo_router_with(config: &Config) -> (Router, DemoStores) {
    let (app, stores) = build_application(config);
    (Server::new(app).router(), stores)
}

/// Send a bodiless request through the router and collect the response.
pub async fn send(router: &Router, method: Method, path: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
