//! Shared helpers for integration tests.

use std::env;
use std::sync::{Mutex, PoisonError};

/// Serializes tests that touch process-wide environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with `vars` applied to the environment, then restores the
/// previous values, also when `f` panics.
///
/// `Some(value)` sets a variable, `None` removes it.
pub fn with_scoped_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let _restore = Restore::apply(vars);
    f()
}

/// Previous values of the variables a scope changed.
struct Restore(Vec<(String, Option<String>)>);

impl Restore {
    fn apply(vars: &[(&str, Option<&str>)]) -> Self {
        let mut previous: Vec<(String, Option<String>)> = Vec::with_capacity(vars.len());
        for (key, value) in vars {
            if !previous.iter().any(|(k, _)| k == key) {
                previous.push((key.to_string(), env::var(key).ok()));
            }
            set(key, *value);
        }
        Self(previous)
    }
}

impl Drop for Restore {
    fn drop(&mut self) {
        for (key, value) in self.0.drain(..) {
            set(&key, value.as_deref());
        }
    }
}

fn set(key: &str, value: Option<&str>) {
    match value {
        Some(v) => env::set_var(key, v),
        None => env::remove_var(key),
    }
}
