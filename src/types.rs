//! Core identifier types for the surveygraph engine.
//!
//! This module defines the fundamental identity types used throughout the
//! system: questions in the decision graph, participants owning sessions,
//! and handles to rendered chat messages. These are the core domain concepts
//! that the graph, store, and transport layers all agree on.
//!
//! # Key Types
//!
//! - [`QuestionId`]: Stable identifier of a question in the decision graph
//! - [`ParticipantKey`]: Opaque key identifying one independent conversation
//! - [`MessageRef`]: Opaque handle to the single outward message a session edits
//!
//! # Examples
//!
//! ```rust
//! use surveygraph::types::{MessageRef, ParticipantKey, QuestionId};
//!
//! let root: QuestionId = "q1".into();
//! assert_eq!(root.as_str(), "q1");
//!
//! let participant = ParticipantKey::from(42);
//! let handle = MessageRef::from(1001);
//! println!("{participant} last saw message {handle}");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, unique identifier of a question within a [`DecisionGraph`].
///
/// Question IDs are opaque strings supplied by the tree definition. They are
/// the only way options refer to their next question: the compiled graph is
/// a flat arena indexed by ID, with no embedded question-to-question
/// pointers.
///
/// Uniqueness across the whole graph is enforced at compile time.
///
/// [`DecisionGraph`]: crate::graph::DecisionGraph
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a question ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the underlying string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque key identifying one independent conversation with the process.
///
/// One participant key maps to at most one live [`SessionState`] in the
/// store. In a chat deployment this is typically the chat ID delivered with
/// every inbound event; the core never interprets the value.
///
/// [`SessionState`]: crate::session::SessionState
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantKey(i64);

impl ParticipantKey {
    #[must_use]
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw integer form, for logging and transport calls.
    #[must_use]
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ParticipantKey {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ParticipantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to the one outward message a session keeps editing.
///
/// Navigation never sends a second menu message: the transport edits the
/// message identified by this handle in place. The handle is stored strictly
/// per session and overwritten, never accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageRef(i64);

impl MessageRef {
    #[must_use]
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl From<i64> for MessageRef {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MessageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
