//! Runtime reader configuration

use std::time::Duration;

/// Settings passed to [`crate::R200`] and [`crate::Dispatcher`] at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Log frame-level diagnostics (raw bytes, RSSI/PC/EPC, checksums) at debug level
    pub verbose_diagnostics: bool,
    /// How long a single receive attempt waits for a terminator
    pub receive_timeout: Duration,
}

impl ReaderConfig {
    pub const DEFAULT_RECEIVE_TIMEOUT: Duration = Duration::from_millis(500);

    pub fn with_verbose_diagnostics(mut self, enabled: bool) -> Self {
        self.verbose_diagnostics = enabled;
        self
    }

    pub fn with_receive_timeout(mut self, timeout: Duration) -> Self {
        self.receive_timeout = timeout;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            verbose_diagnostics: false,
            receive_timeout: Self::DEFAULT_RECEIVE_TIMEOUT,
        }
    }
}
