//! Application: ordered components plus the action route registry.

use std::collections::HashMap;
use std::sync::Arc;

use maud::{html, PreEscaped, DOCTYPE};
use thiserror::Error;

use crate::component::{Component, RenderError};
use crate::state::StateError;

pub const DEFAULT_TITLE: &str = "Dynamic App";

const THEME_CSS: &str = "\
.light { background-color: white; color: black; }
.dark { background-color: black; color: white; }";

/// Failure inside an action handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("counter overflow on '{key}'")]
    Overflow { key: String },
}

/// Handler invoked for a POST to a registered action path.
pub type RouteHandler = Arc<dyn Fn() -> Result<(), ActionError> + Send + Sync>;

pub struct Application {
    title: String,
    components: Vec<Component>,
    routes: HashMap<String, RouteHandler>,
}

impl Application {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            components: Vec::new(),
            routes: HashMap::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append a component. Render order is insertion order.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Register `handler` for `path`, replacing any existing handler.
    pub fn define_route<F>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn() -> Result<(), ActionError> + Send + Sync + 'static,
    {
        let path = path.into();
        if self.routes.insert(path.clone(), Arc::new(handler)).is_some() {
            tracing::debug!(path = %path, "replaced action route");
        }
    }

    pub fn route(&self, path: &str) -> Option<RouteHandler> {
        self.routes.get(path).cloned()
    }

    /// Registered action paths, sorted.
    pub fn routes(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Render the full document. Fails if any component fails.
    pub fn render(&self) -> Result<String, RenderError> {
        let fragments = self
            .components
            .iter()
            .map(|c| c.render().map(|m| m.into_string()))
            .collect::<Result<Vec<_>, _>>()?;
        let body = fragments.join("\n");

        let page = html! {
            (DOCTYPE)
            html {
                head {
                    title { (self.title) }
                    style { (PreEscaped(THEME_CSS)) }
                }
                body {
                    (PreEscaped(body))
                }
            }
        };
        Ok(page.into_string())
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
