//! The navigation seam: what the engine needs from a host router.

use serde::{Deserialize, Serialize};
use serde_json::Map;
use thiserror::Error;

use qsync_model::query::QueryMap;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("unknown field `{0}` in update")]
    UnknownField(String),
    #[error("navigation failed: {0}")]
    Host(String),
}

/// History semantics for a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HistoryMode {
    /// Add a new history entry.
    #[default]
    Push,
    /// Overwrite the current history entry.
    Replace,
}

/// An opaque bag of host-specific transition options (e.g. suppressing
/// scroll restoration). Passed through to the navigator verbatim; the
/// engine never interprets its contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionOptions(Map<String, serde_json::Value>);

impl TransitionOptions {
    pub fn new() -> TransitionOptions {
        TransitionOptions::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Caller-configured dispatch behavior, passed explicitly per engine
/// construction (no captured mutable state).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchOptions {
    pub mode: HistoryMode,
    pub transition: TransitionOptions,
}

impl DispatchOptions {
    pub fn new() -> DispatchOptions {
        DispatchOptions::default()
    }

    /// Replace the current history entry instead of pushing.
    #[must_use]
    pub fn replace(mut self) -> DispatchOptions {
        self.mode = HistoryMode::Replace;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionOptions) -> DispatchOptions {
        self.transition = transition;
        self
    }
}

/// A host navigation collaborator: exposes the current raw query snapshot
/// and a navigate primitive. These are the only two externals the engine
/// depends on. Path and hash components are the host's business; `navigate`
/// receives the full destination query component.
pub trait Navigator {
    fn current(&self) -> &QueryMap;

    /// Applies the destination snapshot with the given history semantics.
    /// Host failures propagate unchanged; the engine does not retry.
    fn navigate(
        &mut self,
        query: QueryMap,
        mode: HistoryMode,
        transition: &TransitionOptions,
    ) -> Result<(), NavError>;
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn current(&self) -> &QueryMap {
        (**self).current()
    }

    fn navigate(
        &mut self,
        query: QueryMap,
        mode: HistoryMode,
        transition: &TransitionOptions,
    ) -> Result<(), NavError> {
        (**self).navigate(query, mode, transition)
    }
}
