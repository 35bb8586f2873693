//! Route table.
//!
//! `GET /` renders the application, `GET /health` reports liveness and
//! every path in the application's action registry accepts `POST`. Registry
//! paths that are not absolute or that use characters outside the unreserved
//! URL set are skipped with a warning.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{Html, Response};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;

use crate::app::{Application, RouteHandler};
use crate::event::is_action_path;
use crate::server::error::ServerError;
use crate::server::health::health;

pub fn build_router(app: Arc<Application>) -> Router {
    let mut router = Router::new()
        .route("/", get(render_page))
        .route("/health", get(health));

    for path in app.routes() {
        if !is_action_path(path) {
            tracing::warn!(path = %path, "skipping action route with unroutable path");
            continue;
        }
        let Some(handler) = app.route(path) else {
            continue;
        };
        let action_path = path.to_string();
        router = router.route(
            path,
            post(move || {
                let path = action_path.clone();
                let handler = handler.clone();
                async move { run_action(&path, handler) }
            }),
        );
    }

    router
        .layer(ServiceBuilder::new().layer(middleware::from_fn(log_request)))
        .with_state(app)
}

async fn render_page(State(app): State<Arc<Application>>) -> Result<Html<String>, ServerError> {
    Ok(Html(app.render()?))
}

fn run_action(path: &str, handler: RouteHandler) -> Result<StatusCode, ServerError> {
    handler().map_err(|source| ServerError::Action {
        path: path.to_string(),
        source,
    })?;
    tracing::debug!(path = %path, "action applied");
    Ok(StatusCode::NO_CONTENT)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}
