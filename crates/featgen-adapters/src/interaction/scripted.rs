//! Scripted user-interaction adapter for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use featgen_core::{
    application::ports::{Notice, UserInteraction},
    error::FeatgenResult,
};

/// Test double for the user-interaction port.
///
/// Prompt responses are queued up front; notifications are recorded for
/// later inspection. An exhausted response queue behaves like a dismissed
/// prompt (`None`).
#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    responses: VecDeque<Option<String>>,
    notices: Vec<(Notice, String)>,
}

impl ScriptedInteraction {
    /// Create an adapter with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next prompt response.
    pub fn push_response(&self, response: Option<&str>) {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(response.map(str::to_owned));
    }

    /// All notifications sent so far, in order.
    pub fn notices(&self) -> Vec<(Notice, String)> {
        self.inner.lock().unwrap().notices.clone()
    }

    /// Messages of a given severity, in order.
    pub fn messages(&self, notice: Notice) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .notices
            .iter()
            .filter(|(n, _)| *n == notice)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl UserInteraction for ScriptedInteraction {
    fn prompt_text(&self, _label: &str) -> FeatgenResult<Option<String>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .responses
            .pop_front()
            .unwrap_or(None))
    }

    fn notify(&self, notice: Notice, message: &str) -> FeatgenResult<()> {
        self.inner
            .lock()
            .unwrap()
            .notices
            .push((notice, message.to_owned()));
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
