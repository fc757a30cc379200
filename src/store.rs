//! The concurrency-safe session store.
//!
//! One [`SessionStore`] serves every participant of the process. It owns a
//! single map from [`ParticipantKey`] to [`SessionState`] behind one
//! reader/writer lock: read accessors take the shared lock, every mutating
//! operation takes the exclusive lock for the duration of one key's
//! read-modify-write. Concurrent operations on different keys are
//! correctness-independent but serialized by that lock — an accepted
//! baseline; sharding the lock per key is the scale-out path.
//!
//! The lock provides mutual exclusion, not ordering: two racing events for
//! the same key each apply atomically against a consistent snapshot, but
//! their relative order is unspecified.
//!
//! The [`DecisionGraph`] is immutable and shared by `Arc`; no store
//! operation ever blocks on anything but lock acquisition.

use miette::Diagnostic;
use rustc_hash::FxHashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::instrument;

use crate::graph::{DecisionGraph, Question};
use crate::navigator::{self, Advance};
use crate::session::SessionState;
use crate::types::{MessageRef, ParticipantKey};

/// Recoverable failures of store operations.
///
/// None of these are fatal: callers log them and acknowledge the inbound
/// event as a no-op, leaving all observable state unchanged.
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("no active session for participant {key}")]
    #[diagnostic(code(surveygraph::store::no_active_session))]
    NoActiveSession { key: ParticipantKey },

    #[error("selector '{selector}' does not match any option of the current question for participant {key}")]
    #[diagnostic(code(surveygraph::store::selector_not_found))]
    SelectorNotFound {
        key: ParticipantKey,
        selector: String,
    },

    #[error("back requested with an empty back-stack for participant {key}")]
    #[diagnostic(code(surveygraph::store::empty_back_stack))]
    EmptyBackStack { key: ParticipantKey },
}

/// Result of a successful [`SessionStore::select`].
#[derive(Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    /// Advanced to the next question; the session stays alive.
    Advanced(Arc<Question>),
    /// A terminal option was reached. The session was deleted as part of
    /// the same operation; the handle of its last rendered message rides
    /// along so the transport can edit the final result in place.
    Terminal {
        result: String,
        last_message: Option<MessageRef>,
    },
}

/// Concurrency-safe registry of per-participant navigation state.
///
/// Constructed once at startup around the compiled graph and passed by
/// reference (`Arc`) to the transport layer — an explicit service instance,
/// not ambient global state.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use surveygraph::graph::{GraphBuilder, OptionDef, QuestionDef};
/// use surveygraph::store::{SelectOutcome, SessionStore};
///
/// let graph = GraphBuilder::new()
///     .add_root(
///         QuestionDef::new("q", "Ready?")
///             .with_option(OptionDef::terminal("Yes", "q_yes", "DONE")),
///     )
///     .compile()
///     .unwrap();
/// let store = SessionStore::new(Arc::new(graph));
///
/// let key = 7.into();
/// let root = store.start(key);
/// assert_eq!(root.id.as_str(), "q");
///
/// match store.select(key, "q_yes").unwrap() {
///     SelectOutcome::Terminal { result, .. } => assert_eq!(result, "DONE"),
///     other => panic!("expected terminal, got {other:?}"),
/// }
/// assert!(!store.is_active(key));
/// ```
pub struct SessionStore {
    graph: Arc<DecisionGraph>,
    sessions: RwLock<FxHashMap<ParticipantKey, SessionState>>,
}

impl SessionStore {
    /// Create a store over a compiled graph.
    #[must_use]
    pub fn new(graph: Arc<DecisionGraph>) -> Self {
        Self {
            graph,
            sessions: RwLock::new(FxHashMap::default()),
        }
    }

    /// The graph this store navigates.
    #[must_use]
    pub fn graph(&self) -> &Arc<DecisionGraph> {
        &self.graph
    }

    // Every critical section leaves the map consistent (single-key
    // read-modify-write), so a poisoned lock is adopted rather than
    // propagated.
    fn read_sessions(&self) -> RwLockReadGuard<'_, FxHashMap<ParticipantKey, SessionState>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_sessions(&self) -> RwLockWriteGuard<'_, FxHashMap<ParticipantKey, SessionState>> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Unconditionally (re)create the session for `key` at the graph root.
    ///
    /// Any prior state for `key` — active mid-flow, just-finished, or absent
    /// — is discarded. Always succeeds; returns the root question for
    /// rendering.
    #[instrument(skip(self))]
    pub fn start(&self, key: ParticipantKey) -> Arc<Question> {
        let root = self.graph.root().clone();
        let root_question = self
            .graph
            .lookup(&root)
            .expect("graph roots are always registered in the arena");

        let mut sessions = self.write_sessions();
        let replaced = sessions
            .insert(key, SessionState::new(root))
            .is_some();
        drop(sessions);

        tracing::debug!(%key, replaced, "session started at root");
        root_question
    }

    /// Apply an inbound selector to the session's current question.
    ///
    /// On a terminal match the session is deleted within this same
    /// operation — success implies destruction, so no stale back-navigation
    /// can resurrect a completed flow. On failure nothing changes.
    #[instrument(skip(self))]
    pub fn select(
        &self,
        key: ParticipantKey,
        selector: &str,
    ) -> Result<SelectOutcome, StoreError> {
        let mut sessions = self.write_sessions();
        let Some(session) = sessions.get_mut(&key) else {
            return Err(StoreError::NoActiveSession { key });
        };

        match navigator::advance(&self.graph, session, selector) {
            None => Err(StoreError::SelectorNotFound {
                key,
                selector: selector.to_string(),
            }),
            Some(Advance::Forward(question)) => {
                tracing::debug!(%key, next = %question.id, depth = session.depth(), "advanced");
                Ok(SelectOutcome::Advanced(question))
            }
            Some(Advance::Finish(result)) => {
                let last_message = sessions.remove(&key).and_then(|s| s.last_message);
                tracing::debug!(%key, %result, "terminal reached, session torn down");
                Ok(SelectOutcome::Terminal {
                    result,
                    last_message,
                })
            }
        }
    }

    /// Pop the back-stack top into the current position.
    #[instrument(skip(self))]
    pub fn back(&self, key: ParticipantKey) -> Result<Arc<Question>, StoreError> {
        let mut sessions = self.write_sessions();
        let Some(session) = sessions.get_mut(&key) else {
            return Err(StoreError::NoActiveSession { key });
        };

        let Some(previous) = navigator::retreat(session) else {
            return Err(StoreError::EmptyBackStack { key });
        };
        let question = self
            .graph
            .lookup(&previous)
            .expect("back-stack entries always resolve in the immutable graph");

        tracing::debug!(%key, restored = %question.id, depth = session.depth(), "went back");
        Ok(question)
    }

    /// Unconditionally delete the session for `key`. Idempotent, no error.
    #[instrument(skip(self))]
    pub fn reset(&self, key: ParticipantKey) {
        let removed = self.write_sessions().remove(&key).is_some();
        tracing::debug!(%key, removed, "session reset");
    }

    /// The question currently presented to `key`, if a session exists.
    #[must_use]
    pub fn current_question(&self, key: ParticipantKey) -> Option<Arc<Question>> {
        let current = self.read_sessions().get(&key).map(|s| s.current.clone())?;
        self.graph.lookup(&current)
    }

    /// Back-stack depth for `key`, if a session exists.
    #[must_use]
    pub fn back_stack_depth(&self, key: ParticipantKey) -> Option<usize> {
        self.read_sessions().get(&key).map(SessionState::depth)
    }

    /// Handle of the last rendered message for `key`, if a session exists
    /// and one was persisted.
    #[must_use]
    pub fn last_message(&self, key: ParticipantKey) -> Option<MessageRef> {
        self.read_sessions().get(&key).and_then(|s| s.last_message)
    }

    /// Overwrite the last-message handle for `key`.
    ///
    /// The previous handle is discarded, never retained: only one message
    /// is ever edited per session.
    pub fn set_last_message(
        &self,
        key: ParticipantKey,
        message: MessageRef,
    ) -> Result<(), StoreError> {
        let mut sessions = self.write_sessions();
        let Some(session) = sessions.get_mut(&key) else {
            return Err(StoreError::NoActiveSession { key });
        };
        session.last_message = Some(message);
        Ok(())
    }

    /// Whether `key` currently has a live session.
    #[must_use]
    pub fn is_active(&self, key: ParticipantKey) -> bool {
        self.read_sessions().contains_key(&key)
    }

    /// Number of live sessions.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.read_sessions().len()
    }

    /// Remove every session idle for longer than `max_idle`.
    ///
    /// There is no background expiry; this is an explicit sweep the
    /// embedder may schedule. Returns the number of sessions removed.
    #[instrument(skip(self))]
    pub fn purge_idle(&self, max_idle: chrono::Duration) -> usize {
        let now = chrono::Utc::now();
        let mut sessions = self.write_sessions();
        let before = sessions.len();
        sessions.retain(|_, s| s.idle_for(now) <= max_idle);
        let removed = before - sessions.len();
        drop(sessions);

        if removed > 0 {
            tracing::info!(removed, "purged idle sessions");
        }
        removed
    }
}
