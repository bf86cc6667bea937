//! Environment configuration.

use std::env;

pub const WRITE_LOG_ENV: &str = "TWOPANE_WRITE_LOG";
pub const DEBUG_LOG_ENV: &str = "TWOPANE_DEBUG_LOG";

#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Every byte written to the output stream is also appended here.
    pub write_log: Option<String>,
    /// Key dispatch and frame diagnostics are appended here.
    pub debug_log: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            write_log: env_string_opt(WRITE_LOG_ENV),
            debug_log: env_string_opt(DEBUG_LOG_ENV),
        }
    }
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

#[cfg(test)]
pub(crate) mod test_env {
    use std::env;
    use std::sync::{Mutex, OnceLock};

    pub(crate) struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }
}
