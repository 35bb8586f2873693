//! Server-rendered UI: shared key/value state, components that render HTML
//! from it, and action routes that mutate it before the client reloads.

pub mod app;
pub mod cli;
pub mod component;
pub mod config;
pub mod demo;
pub mod event;
pub mod logging;
pub mod server;
pub mod state;
