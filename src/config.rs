use std::time::Duration;

/// Artificial "compiling" latency the original front end showed.
pub const DEFAULT_COMPILE_DELAY_MS: u64 = 1500;

/// Runtime settings shared by the CLI front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub compile_delay: Duration,
}

impl Config {
    pub fn with_delay_ms(ms: u64) -> Self {
        Self {
            compile_delay: Duration::from_millis(ms),
        }
    }

    /// No latency; used by tests and `--delay-ms 0`.
    pub fn immediate() -> Self {
        Self::with_delay_ms(0)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_delay_ms(DEFAULT_COMPILE_DELAY_MS)
    }
}
