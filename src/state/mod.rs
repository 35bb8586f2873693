//! Process-wide key/value state read by components and written by actions.

mod store;
mod value;

pub use store::{StateError, StateStore};
pub use value::Value;
