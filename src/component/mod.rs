//! Renderable components: a pure function from state to an HTML fragment.

use std::fmt;
use std::sync::Arc;

use maud::Markup;
use thiserror::Error;

use crate::event::EventError;
use crate::state::{StateError, StateStore};

/// Failure while rendering a component. Any failure aborts the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("component '{component}' has no state attached")]
    NoState { component: String },

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Event(#[from] EventError),
}

/// Render function signature. Receives the component's store, if any.
pub type RenderFn = dyn Fn(Option<&StateStore>) -> Result<Markup, RenderError> + Send + Sync;

/// A render function paired with the store it reads.
#[derive(Clone)]
pub struct Component {
    name: String,
    render_fn: Arc<RenderFn>,
    state: Option<StateStore>,
}

impl Component {
    pub fn new<F>(name: impl Into<String>, render_fn: F, state: StateStore) -> Self
    where
        F: Fn(Option<&StateStore>) -> Result<Markup, RenderError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            render_fn: Arc::new(render_fn),
            state: Some(state),
        }
    }

    /// A component that reads no state.
    pub fn stateless<F>(name: impl Into<String>, render_fn: F) -> Self
    where
        F: Fn(Option<&StateStore>) -> Result<Markup, RenderError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            render_fn: Arc::new(render_fn),
            state: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> Option<&StateStore> {
        self.state.as_ref()
    }

    /// Render against the live store.
    pub fn render(&self) -> Result<Markup, RenderError> {
        (self.render_fn)(self.state.as_ref())
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
