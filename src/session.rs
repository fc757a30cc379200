//! Per-participant navigation state.
//!
//! A [`SessionState`] records where one participant currently is in the
//! decision graph, the trail of questions they can navigate back through,
//! and the handle of the single chat message being edited in place as they
//! move. The store owns all session state exclusively; this module only
//! defines the record and its local accessors — transitions live in
//! [`navigator`](crate::navigator).

use chrono::{DateTime, Utc};

use crate::types::{MessageRef, QuestionId};

/// Navigation state for one participant.
///
/// Created by `start`, mutated by `select`/`back`, destroyed by `reset` or
/// by reaching a terminal option. The back-stack is bounded by the graph's
/// maximum depth: one push per forward advance, one pop per back step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// The question currently presented. Never absent while the session
    /// exists.
    pub current: QuestionId,
    /// Questions visited and not yet returned from, oldest first.
    pub back_stack: Vec<QuestionId>,
    /// Handle of the one outward message edited as navigation proceeds.
    /// `None` until the transport persists the first render.
    pub last_message: Option<MessageRef>,
    /// When this session was created.
    pub started_at: DateTime<Utc>,
    /// Last successful operation on this session; feeds the idle sweep.
    pub touched_at: DateTime<Utc>,
}

impl SessionState {
    /// Fresh session positioned on `root` with an empty back-stack.
    #[must_use]
    pub fn new(root: QuestionId) -> Self {
        let now = Utc::now();
        Self {
            current: root,
            back_stack: Vec::new(),
            last_message: None,
            started_at: now,
            touched_at: now,
        }
    }

    /// Number of questions available to navigate back through.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Record a successful operation for idle-sweep accounting.
    pub fn touch(&mut self) {
        self.touched_at = Utc::now();
    }

    /// Idle time since the last successful operation.
    #[must_use]
    pub fn idle_for(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.touched_at
    }
}
