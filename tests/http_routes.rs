mod common;

use axum::http::{Method, StatusCode};
use common::{demo_router, demo_router_with, send};
use dynamic_app::app::Application;
use dynamic_app::config::Config;
use dynamic_app::demo::{COUNTER_KEY, THEME_KEY};
use dynamic_app::server::router::build_router;
use dynamic_app::state::{StateStore, Value};
use std::sync::Arc;

#[tokio::test]
async fn test_get_root_renders_document() {
    let (router, _stores) = demo_router();
    let (status, body) = send(&router, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"class="main light""#));
    assert!(body.contains("Counter: 1"));
}

#[tokio::test]
async fn test_toggle_dark_mode_round_trip() {
    let (router, stores) = demo_router();

    let (status, body) = send(&router, Method::POST, "/toggle-dark-mode").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(stores.main.get(THEME_KEY), Some(Value::from("dark")));

    let (_, page) = send(&router, Method::GET, "/").await;
    assert!(page.contains(r#"class="main dark""#));

    send(&router, Method::POST, "/toggle-dark-mode").await;
    let (_, page) = send(&router, Method::GET, "/").await;
    assert!(page.contains(r#"class="main light""#));
}

#[tokio::test]
async fn test_counter_then_reset() {
    let (router, stores) = demo_router();

    let (status, _) = send(&router, Method::POST, "/counter").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(stores.counter.get_int(COUNTER_KEY), Ok(2));
    let (_, page) = send(&router, Method::GET, "/").await;
    assert!(page.contains("Counter: 2"));

    let (status, _) = send(&router, Method::POST, "/reset").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(stores.counter.get_int(COUNTER_KEY), Ok(0));
    let (_, page) = send(&router, Method::GET, "/").await;
    assert!(page.contains("Counter: 0"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (router, _stores) = demo_router();
    let (status, _) = send(&router, Method::GET, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_on_action_path_is_405() {
    let (router, stores) = demo_router();
    let (status, _) = send(&router, Method::GET, "/counter").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(stores.counter.get_int(COUNTER_KEY), Ok(1));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (router, _stores) = demo_router();
    let (status, body) = send(&router, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "dynamic-app");
}

#[tokio::test]
async fn test_render_failure_is_500_json() {
    let mut config = Config::default();
    config.state.counter.clear();
    let (router, _stores) = demo_router_with(&config);

    let (status, body) = send(&router, Method::GET, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["type"], "render_error");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("'val' is not set"));
    assert!(!json["error"]["request_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_action_failure_is_500() {
    let mut config = Config::default();
    config
        .state
        .counter
        .insert("val".to_string(), Value::from("one"));
    let (router, stores) = demo_router_with(&config);

    let (status, body) = send(&router, Method::POST, "/counter").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["type"], "action_error");
    assert_eq!(stores.counter.get(COUNTER_KEY), Some(Value::from("one")));

    // Reset still works and repairs the value.
    let (status, _) = send(&router, Method::POST, "/reset").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(stores.counter.get_int(COUNTER_KEY), Ok(0));
}

#[tokio::test]
async fn test_concurrent_increments_are_not_lost() {
    let (router, stores) = demo_router();
    stores.counter.set(COUNTER_KEY, 0);

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let router = router.clone();
        tasks.push(tokio::spawn(async move {
            send(&router, Method::POST, "/counter").await.0
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::NO_CONTENT);
    }

    assert_eq!(stores.counter.get_int(COUNTER_KEY), Ok(50));
}

#[tokio::test]
async fn test_unroutable_action_paths_are_skipped() {
    let hits = StateStore::from_pairs([("hits", 0)]);
    let mut app = Application::default();
    for path in ["counter", "/a/:id", "/files/*rest", "/b/{id}", "/ok"] {
        let hits = hits.clone();
        app.define_route(path, move || {
            hits.set("hits", hits.get_int("hits")? + 1);
            Ok(())
        });
    }

    let router = build_router(Arc::new(app));

    let (status, _) = send(&router, Method::POST, "/ok").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&router, Method::POST, "/counter").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&router, Method::POST, "/a/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(hits.get_int("hits"), Ok(1));
}
