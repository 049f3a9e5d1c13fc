//! Version source test utilities

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use winver_gate::version::error::QueryError;
use winver_gate::version::source::VersionSource;

/// Source that replays a fixed response and counts how often it was queried
#[derive(Clone)]
pub struct CountingSource {
    response: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source whose query always fails
    pub fn unavailable() -> Self {
        Self {
            response: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VersionSource for CountingSource {
    fn query(&self) -> Result<String, QueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().ok_or(QueryError::Empty)
    }
}
