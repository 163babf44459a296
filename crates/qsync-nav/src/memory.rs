//! An in-process navigator with a real history stack, for tests and
//! terminal hosts.

use qsync_model::query::QueryMap;

use crate::navigator::{HistoryMode, NavError, Navigator, TransitionOptions};

/// A synchronous [`Navigator`] over an in-memory history stack.
///
/// `Push` truncates any forward entries past the cursor (as a browser
/// history does) and appends; `Replace` overwrites in place. `back` and
/// `forward` move the cursor without changing the stack.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    history: Vec<QueryMap>,
    cursor: usize,
}

impl MemoryNavigator {
    pub fn new() -> MemoryNavigator {
        MemoryNavigator::with_query(QueryMap::new())
    }

    pub fn with_query(query: QueryMap) -> MemoryNavigator {
        MemoryNavigator {
            history: vec![query],
            cursor: 0,
        }
    }

    /// Moves back one entry. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves forward one entry. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        MemoryNavigator::new()
    }
}

impl Navigator for MemoryNavigator {
    fn current(&self) -> &QueryMap {
        &self.history[self.cursor]
    }

    fn navigate(
        &mut self,
        query: QueryMap,
        mode: HistoryMode,
        _transition: &TransitionOptions,
    ) -> Result<(), NavError> {
        tracing::debug!(?mode, entries = query.len(), "navigating");
        match mode {
            HistoryMode::Push => {
                self.history.truncate(self.cursor + 1);
                self.history.push(query);
                self.cursor += 1;
            }
            HistoryMode::Replace => {
                self.history[self.cursor] = query;
            }
        }
        Ok(())
    }
}
