use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::state::Value;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub state: InitialState,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Document-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Contents of the `<title>` element.
    #[serde(default = "default_title")]
    pub title: String,
}

/// Initial contents of the two demo stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialState {
    /// Store read by the main component (`light_or_dark`).
    #[serde(default = "default_main_state")]
    pub main: HashMap<String, Value>,
    /// Store read by the counter component (`val`).
    #[serde(default = "default_counter_state")]
    pub counter: HashMap<String, Value>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_title() -> String {
    crate::app::DEFAULT_TITLE.to_string()
}

fn default_main_state() -> HashMap<String, Value> {
    HashMap::from([("light_or_dark".to_string(), Value::from("light"))])
}

fn default_counter_state() -> HashMap<String, Value> {
    HashMap::from([("val".to_string(), Value::Int(1))])
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            main: default_main_state(),
            counter: default_counter_state(),
        }
    }
}
