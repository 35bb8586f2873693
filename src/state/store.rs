//! Shared key/value state.
//!
//! A `StateStore` is a cheap-to-clone handle: every clone points at the same
//! underlying map, so the composition root can hand one store to a component
//! and to the action handlers that mutate it.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use super::Value;

/// Errors from typed reads and read-modify-write updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("state key '{key}' is not set")]
    MissingKey { key: String },

    #[error("state key '{key}' holds {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Thread-safe key/value store.
///
/// Readers share the lock; `set` and `update` take it exclusively, so an
/// `update` closure observes and replaces the value atomically.
#[derive(Clone, Default)]
pub struct StateStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    values: HashMap<String, Value>,
    /// Bumped on every successful mutation.
    revision: u64,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with initial key/value pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(StoreInner { values, revision: 0 })),
        }
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut inner = self.inner.write();
        tracing::debug!(key = %key, value = %value, "state set");
        inner.values.insert(key, value);
        inner.revision += 1;
    }

    /// Returns the value stored under `key`, or `None` if it was never set.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.read().values.get(key).cloned()
    }

    pub fn get_text(&self, key: &str) -> Result<String, StateError> {
        match self.get(key) {
            Some(Value::Text(s)) => Ok(s),
            Some(other) => Err(mismatch(key, "text", &other)),
            None => Err(StateError::MissingKey { key: key.to_string() }),
        }
    }

    pub fn get_int(&self, key: &str) -> Result<i64, StateError> {
        match self.get(key) {
            Some(Value::Int(n)) => Ok(n),
            Some(other) => Err(mismatch(key, "integer", &other)),
            None => Err(StateError::MissingKey { key: key.to_string() }),
        }
    }

    /// Read-modify-write `key` under the write lock.
    ///
    /// The closure sees the current value (if any) and returns the
    /// replacement. On error the store is left untouched. Returns the new
    /// value.
    pub fn update<F, E>(&self, key: &str, f: F) -> Result<Value, E>
    where
        F: FnOnce(Option<&Value>) -> Result<Value, E>,
    {
        let mut inner = self.inner.write();
        let next = f(inner.values.get(key))?;
        tracing::debug!(key = %key, value = %next, "state updated");
        inner.values.insert(key.to_string(), next.clone());
        inner.revision += 1;
        Ok(next)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.read().values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().values.is_empty()
    }

    /// Number of mutations applied since construction.
    pub fn revision(&self) -> u64 {
        self.inner.read().revision
    }

    /// Point-in-time copy of all values, sorted by key.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.inner
            .read()
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("values", &self.snapshot())
            .field("revision", &self.revision())
            .finish()
    }
}

fn mismatch(key: &str, expected: &'static str, found: &Value) -> StateError {
    StateError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}
