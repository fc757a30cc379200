//! Inbound event model.
//!
//! The transport adapter translates whatever its chat medium delivers
//! (commands, button taps) into these records. Each event names the
//! participant it came from and carries just enough context for the router
//! to act: a selector token and, for taps, the message the tapped keyboard
//! was attached to.

use crate::types::{MessageRef, ParticipantKey};

/// Chat commands the router understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// The conversation-opening command (`/start` in most chat media).
    Begin,
}

/// A choice-button tap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Opaque event ID the medium expects acknowledged (may be empty for
    /// media without acknowledgement).
    pub id: String,
    /// Selector token of the tapped button.
    pub selector: String,
    /// The message the tapped keyboard was attached to, when the medium
    /// reports it. Used as the edit target if the session has not
    /// persisted a handle yet.
    pub message: Option<MessageRef>,
}

/// What an inbound event carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventPayload {
    Command(Command),
    Selection(Selection),
}

/// One inbound transport event, handled as one independent unit of work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundEvent {
    pub from: ParticipantKey,
    pub payload: EventPayload,
}

impl InboundEvent {
    /// A conversation-opening command from `from`.
    #[must_use]
    pub fn begin(from: impl Into<ParticipantKey>) -> Self {
        Self {
            from: from.into(),
            payload: EventPayload::Command(Command::Begin),
        }
    }

    /// A button tap from `from`.
    #[must_use]
    pub fn selection(
        from: impl Into<ParticipantKey>,
        id: impl Into<String>,
        selector: impl Into<String>,
        message: Option<MessageRef>,
    ) -> Self {
        Self {
            from: from.into(),
            payload: EventPayload::Selection(Selection {
                id: id.into(),
                selector: selector.into(),
                message,
            }),
        }
    }
}
