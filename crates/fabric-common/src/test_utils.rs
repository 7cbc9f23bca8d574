//! Test utilities and shared test helpers for the site workspace.
//!
//! This module provides common testing utilities that can be used across all
//! crates in the workspace for unit and integration testing.

use parking_lot::Mutex;
use std::sync::{Arc, Once};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may have installed a global subscriber already
        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Records every value a listener receives.
///
/// ```ignore
/// let recorder = RecordingListener::<u8>::new();
/// let _sub = signal.subscribe(recorder.listener());
/// signal.set(3);
/// assert_eq!(recorder.values(), vec![3]);
/// ```
#[derive(Debug)]
pub struct RecordingListener<T> {
    seen: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for RecordingListener<T> {
    fn clone(&self) -> Self {
        Self {
            seen: Arc::clone(&self.seen),
        }
    }
}

impl<T: Clone + Send + 'static> RecordingListener<T> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A listener closure that appends each value to this recorder.
    pub fn listener(&self) -> impl Fn(&T) + Send + Sync + 'static {
        let seen = Arc::clone(&self.seen);
        move |value: &T| seen.lock().push(value.clone())
    }

    /// All recorded values, oldest first.
    pub fn values(&self) -> Vec<T> {
        self.seen.lock().clone()
    }

    /// Number of recorded notifications.
    pub fn count(&self) -> usize {
        self.seen.lock().len()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.seen.lock().clear();
    }
}

impl<T: Clone + Send + 'static> Default for RecordingListener<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Signal;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_recording_listener() {
        let signal = Signal::new(0_u8);
        let recorder = RecordingListener::<u8>::new();
        let _sub = signal.subscribe(recorder.listener());

        signal.set(1);
        signal.set(2);
        assert_eq!(recorder.values(), vec![1, 2]);

        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }
}
