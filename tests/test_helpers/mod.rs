//! Shared helpers for integration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Guard that applies scoped environment variable updates and restores the
/// previous values on drop.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets or removes each variable for the guard lifetime.
    pub fn set_many(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = env_lock();
        let mut previous = Vec::with_capacity(changes.len());

        for (key, value) in changes {
            previous.push((OsString::from(key), env::var_os(key)));
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, &previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Clock that only moves when a test moves it.
#[derive(Debug, Clone)]
pub struct AdjustableClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl AdjustableClock {
    /// Creates a clock frozen at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    /// Creates a clock frozen at 2026-03-10 12:00:00 UTC.
    pub fn reference() -> Self {
        Self::at(reference_instant())
    }

    /// Moves the clock by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl mockable::Clock for AdjustableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reference instant shared by integration tests.
pub fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0)
        .single()
        .unwrap_or_default()
}
