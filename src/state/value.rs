use std::fmt;

use serde::{Deserialize, Serialize};

/// A value held in a [`StateStore`](super::StateStore).
///
/// Untagged so that initial state can be written as plain TOML scalars:
/// `val = 1` becomes `Int(1)`, `light_or_dark = "light"` becomes `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Int(_) => None,
        }
    }

    /// Name of the variant, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::from("dark").to_string(), "dark");
    }

    #[test]
    fn deserializes_untagged_scalars() {
        #[derive(Deserialize)]
        struct Pair {
            a: Value,
            b: Value,
        }

        let pair: Pair = toml::from_str("a = 7\nb = \"light\"").unwrap();
        assert_eq!(pair.a, Value::Int(7));
        assert_eq!(pair.b, Value::Text("light".to_string()));
    }

    #[test]
    fn typed_accessors() {
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Int(3).as_text(), None);
        assert_eq!(Value::from("x").as_text(), Some("x"));
        assert_eq!(Value::from("x").kind(), "text");
    }
}
