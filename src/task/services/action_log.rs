//! Logging wrapper shared by task service operations.

use std::fmt::Display;
use std::future::Future;

/// Emits `tracing` events around each service operation.
///
/// Start and success events are debug-level and only emitted when debug
/// logging is enabled. Failures are always logged at error level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionLogger {
    debug: bool,
}

impl ActionLogger {
    /// Creates a logger; `debug` enables start and success events.
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Returns whether start and success events are emitted.
    #[must_use]
    pub const fn debug_enabled(self) -> bool {
        self.debug
    }

    /// Runs `operation` under the given action name and returns its result
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns whatever error `operation` produced, after logging it.
    pub async fn run<T, E, F>(self, action: &'static str, operation: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        if self.debug {
            tracing::debug!(action, "action started");
        }
        let result = operation.await;
        match &result {
            Ok(_) if self.debug => tracing::debug!(action, "action completed"),
            Ok(_) => {}
            Err(err) => tracing::error!(action, error = %err, "action failed"),
        }
        result
    }
}
