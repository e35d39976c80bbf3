//! Helpers shared by unit tests that touch process-wide state.

use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serialize tests that read or write environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets or removes an environment variable and restores the old value on drop.
pub struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    pub fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    pub fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

/// A media element that accepts every command and never reports anything.
pub struct SilentElement;

impl crate::audio::MediaElement for SilentElement {
    fn load(&mut self, _path: &std::path::Path) {}

    fn play(&mut self) -> Result<(), crate::audio::MediaError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_volume(&mut self, _volume: f32) {}

    fn set_muted(&mut self, _muted: bool) {}

    fn seek(&mut self, _position: std::time::Duration) -> Result<(), crate::audio::MediaError> {
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<crate::audio::MediaEvent> {
        Vec::new()
    }
}
