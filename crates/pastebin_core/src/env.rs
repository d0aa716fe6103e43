//! Test helpers for mutating process environment variables.
//!
//! Config tests read `PORT`, `DB_PATH` and `TEST_MODE` from the process
//! environment, which is shared by every test thread.

use std::sync::{Mutex, OnceLock};

/// Process-wide lock serializing env-mutating tests.
pub(crate) fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

#[allow(unused_unsafe)]
fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: callers hold `env_lock` while mutating.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Restores an environment variable to its prior state on drop.
pub(crate) struct EnvGuard {
    key: String,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    pub(crate) fn remove(key: &str) -> Self {
        Self::replace(key, None)
    }

    fn replace(key: &str, value: Option<&str>) -> Self {
        let previous = std::env::var(key).ok();
        write_var(key, value);
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        write_var(self.key.as_str(), self.previous.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::{env_lock, EnvGuard};

    #[test]
    fn guard_restores_previous_value_and_absence() {
        let _lock = env_lock().lock().expect("env lock");
        let key = "PASTEBIN_TEST_ENV_GUARD";
        {
            let _outer = EnvGuard::set(key, "before");
            {
                let _inner = EnvGuard::set(key, "after");
                assert_eq!(std::env::var(key).ok().as_deref(), Some("after"));
            }
            assert_eq!(std::env::var(key).ok().as_deref(), Some("before"));
            {
                let _removed = EnvGuard::remove(key);
                assert!(std::env::var(key).is_err());
            }
            assert_eq!(std::env::var(key).ok().as_deref(), Some("before"));
        }
        assert!(std::env::var(key).is_err());
    }
}
