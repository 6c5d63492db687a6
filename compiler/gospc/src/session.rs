//! Sessions: one persistent interpreter state per key.
//!
//! The table lock is held only to find or create a session; evaluation then
//! runs under that session's own lock, so evaluations against one session are
//! serialized while different sessions proceed in parallel. Requests without a
//! key get a fresh state that is dropped afterwards.

use std::sync::Arc;
use std::time::SystemTime;

use gosp_lexer_core::Location;
use gosp_parse::InterpreterState;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use crate::{evaluate_source, new_state, DriverError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Most entries [`SessionTable::history`] returns.
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { history_limit: 50 }
    }
}

/// One successful evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub at: SystemTime,
    pub input: String,
    pub result: String,
}

/// Outcome of one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub transcript: String,
    /// Where the first error is, if any expression failed.
    pub first_error: Option<Location>,
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        self.first_error.is_none()
    }
}

#[derive(Debug, Default)]
pub struct Session {
    state: Mutex<InterpreterState>,
    history: Mutex<Vec<HistoryEntry>>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Evaluate `text` against this session's state.
    ///
    /// Only fully successful evaluations are recorded in the history.
    pub fn evaluate(&self, name: &str, text: &str) -> Evaluation {
        let mut state = self.state.lock();
        let (transcript, first_error) = evaluate_source(&mut state, name, text);
        if first_error.is_none() {
            self.history.lock().push(HistoryEntry {
                at: SystemTime::now(),
                input: text.to_owned(),
                result: transcript.clone(),
            });
        }
        Evaluation {
            transcript,
            first_error,
        }
    }

    /// Up to `limit` entries, newest first.
    pub fn history(&self, limit: usize) -> Vec<HistoryEntry> {
        self.history.lock().iter().rev().take(limit).cloned().collect()
    }

    /// Names of the functions defined so far, builtins included.
    pub fn function_names(&self) -> Vec<String> {
        self.state
            .lock()
            .functions()
            .iter()
            .map(|function| function.id.clone())
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct SessionTable {
    config: SessionConfig,
    sessions: Mutex<FxHashMap<String, Arc<Session>>>,
}

impl SessionTable {
    pub fn new(config: SessionConfig) -> Self {
        SessionTable {
            config,
            sessions: Mutex::default(),
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// The session for `key`, created on first use.
    pub fn session(&self, key: &str) -> Arc<Session> {
        let mut sessions = self.sessions.lock();
        let session = sessions.entry(key.to_owned()).or_insert_with(|| {
            debug!(session = key, "session created");
            Arc::new(Session::new())
        });
        Arc::clone(session)
    }

    /// Evaluate one request.
    ///
    /// The input is trimmed and must not be empty. `None` as the key runs
    /// against a throw-away state with only the builtins.
    pub fn evaluate(
        &self,
        key: Option<&str>,
        name: &str,
        text: &str,
    ) -> Result<Evaluation, DriverError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DriverError::EmptyInput);
        }
        Ok(match key {
            Some(key) => self.session(key).evaluate(name, text),
            None => {
                let mut state = new_state();
                let (transcript, first_error) = evaluate_source(&mut state, name, text);
                Evaluation {
                    transcript,
                    first_error,
                }
            }
        })
    }

    /// Forget the session for `key`. Returns whether it existed.
    pub fn drop_session(&self, key: &str) -> bool {
        let removed = self.sessions.lock().remove(key).is_some();
        if removed {
            debug!(session = key, "session dropped");
        }
        removed
    }

    /// Newest-first history of `key`, at most `history_limit` entries.
    ///
    /// Unknown keys have an empty history; no session is created.
    pub fn history(&self, key: &str) -> Vec<HistoryEntry> {
        let session = self.sessions.lock().get(key).cloned();
        session.map_or_else(Vec::new, |session| session.history(self.config.history_limit))
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}
