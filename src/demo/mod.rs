//! Demo wiring: a dark-mode toggle and a counter.
//!
//! `build_application` is the composition root. It owns the two stores and
//! hands clones to the components that read them and the action routes
//! that mutate them.

mod theme;

use maud::{html, Markup};

use crate::app::{ActionError, Application};
use crate::component::{Component, RenderError};
use crate::config::Config;
use crate::event::create_event;
use crate::state::{StateError, StateStore, Value};

pub use theme::Theme;

pub const THEME_KEY: &str = "light_or_dark";
pub const COUNTER_KEY: &str = "val";

pub const TOGGLE_PATH: &str = "/toggle-dark-mode";
pub const INCREMENT_PATH: &str = "/counter";
pub const RESET_PATH: &str = "/reset";

/// Greeting with a dark-mode toggle. Reads `light_or_dark`.
pub fn main_component(state: Option<&StateStore>) -> Result<Markup, RenderError> {
    let state = require(state, "main")?;
    let theme = state.get_text(THEME_KEY)?;
    let toggle = create_event("toggleDarkMode", TOGGLE_PATH)?;

    Ok(html! {
        (toggle)
        div class={ "main " (theme) } {
            h1 { "Hello" }
            button onclick="toggleDarkMode()" { "Toggle Dark Mode" }
        }
    })
}

/// Counter with increment and reset buttons. Reads `val`.
pub fn counter_component(state: Option<&StateStore>) -> Result<Markup, RenderError> {
    let state = require(state, "counter")?;
    let val = state.get_int(COUNTER_KEY)?;
    let increment = create_event("counterEvent", INCREMENT_PATH)?;
    let reset = create_event("resetEvent", RESET_PATH)?;

    Ok(html! {
        (increment)
        (reset)
        div {
            h1 { "Counter: " (val) }
            button onclick="counterEvent()" { "Increment" }
            button onclick="resetEvent()" { "Reset" }
        }
    })
}

fn require<'a>(state: Option<&'a StateStore>, component: &str) -> Result<&'a StateStore, RenderError> {
    state.ok_or_else(|| RenderError::NoState {
        component: component.to_string(),
    })
}

/// Flip `light_or_dark` between `"light"` and `"dark"`.
pub fn toggle_theme(state: &StateStore) -> Result<(), ActionError> {
    state.update(THEME_KEY, |current| {
        let next = Theme::toggle_value(current.and_then(Value::as_text));
        tracing::debug!(theme = %next, "theme toggled");
        Ok::<_, ActionError>(Value::from(next.to_string()))
    })?;
    Ok(())
}

/// Add one to `val`. The read and the write happen under one lock.
pub fn increment(state: &StateStore) -> Result<(), ActionError> {
    state.update(COUNTER_KEY, |current| match current {
        Some(Value::Int(n)) => n
            .checked_add(1)
            .map(Value::Int)
            .ok_or_else(|| ActionError::Overflow {
                key: COUNTER_KEY.to_string(),
            }),
        Some(other) => Err(StateError::TypeMismatch {
            key: COUNTER_KEY.to_string(),
            expected: "integer",
            found: other.kind(),
        }
        .into()),
        None => Err(StateError::MissingKey {
            key: COUNTER_KEY.to_string(),
        }
        .into()),
    })?;
    Ok(())
}

/// Set `val` back to zero.
pub fn reset(state: &StateStore) -> Result<(), ActionError> {
    state.set(COUNTER_KEY, 0);
    Ok(())
}

/// Stores created by [`build_application`], exposed so callers can inspect
/// them.
#[derive(Debug, Clone)]
pub struct DemoStores {
    pub main: StateStore,
    pub counter: StateStore,
}

/// Build the demo application from configured initial state.
pub fn build_application(config: &Config) -> (Application, DemoStores) {
    let stores = DemoStores {
        main: StateStore::from_pairs(config.state.main.clone()),
        counter: StateStore::from_pairs(config.state.counter.clone()),
    };

    let mut app = Application::new(config.page.title.clone());
    app.add_component(Component::new("main", main_component, stores.main.clone()));
    app.add_component(Component::new(
        "counter",
        counter_component,
        stores.counter.clone(),
    ));

    let main = stores.main.clone();
    app.define_route(TOGGLE_PATH, move || toggle_theme(&main));
    let counter = stores.counter.clone();
    app.define_route(INCREMENT_PATH, move || increment(&counter));
    let counter = stores.counter.clone();
    app.define_route(RESET_PATH, move || reset(&counter));

    tracing::debug!(routes = ?app.routes(), "demo application built");
    (app, stores)
}
