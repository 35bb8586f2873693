//! Client-side event script generation.
//!
//! An event is a `<script>` defining a global function that POSTs to an
//! action path and reloads the page once the request settles. Both the
//! function name and the path end up inside script source, so they are
//! validated here rather than escaped.

use maud::{html, Markup, PreEscaped};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("invalid event function name '{0}'")]
    InvalidName(String),

    #[error("invalid event handler path '{0}'")]
    InvalidPath(String),
}

/// Build the `<script>` fragment for an event named `name` posting to
/// `handler_path`.
pub fn create_event(name: &str, handler_path: &str) -> Result<Markup, EventError> {
    if !is_identifier(name) {
        return Err(EventError::InvalidName(name.to_string()));
    }
    if !is_action_path(handler_path) {
        return Err(EventError::InvalidPath(handler_path.to_string()));
    }

    // Validated above: the path cannot contain quotes, backslashes or '<'.
    let path_literal = serde_json::Value::String(handler_path.to_string()).to_string();
    let source = format!(
        "function {name}() {{ fetch({path_literal}, {{ method: 'POST' }}).then(() => window.location.reload()); }}"
    );

    Ok(html! {
        script { (PreEscaped(source)) }
    })
}

/// Words that match the identifier grammar but can't name a function.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// `[A-Za-z_$][A-Za-z0-9_$]*`, excluding reserved words.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !RESERVED_WORDS.contains(&name)
}

/// Absolute path made of unreserved URL characters and `/`.
pub(crate) fn is_action_path(path: &str) -> bool {
    path.starts_with('/')
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.' | '~'))
}
