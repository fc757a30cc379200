//! The outbound transport trait and its rendering primitives.
//!
//! A [`ChatTransport`] adapts one concrete chat medium: it can send a new
//! menu message, edit a previously sent one in place, and acknowledge an
//! inbound event. The router drives exactly this surface and nothing more,
//! so tests run against a recording mock and production binds whatever
//! chat client the deployment uses.

use async_trait::async_trait;
use miette::Diagnostic;
use thiserror::Error;

use crate::types::{MessageRef, ParticipantKey};

/// One tappable button: a label and the selector token it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub selector: String,
}

impl Button {
    #[must_use]
    pub fn new(label: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selector: selector.into(),
        }
    }
}

/// A choice keyboard: rows of buttons, rendered in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row of buttons.
    #[must_use]
    pub fn with_row(mut self, row: Vec<Button>) -> Self {
        self.rows.push(row);
        self
    }

    /// Flat view over every button, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// I/O failures at the chat boundary.
///
/// Never fatal to the process: the router logs them and moves on; the
/// participant simply sees no update for that event.
#[derive(Debug, Error, Diagnostic)]
pub enum TransportError {
    #[error("failed to send menu message: {source}")]
    #[diagnostic(code(surveygraph::transport::send))]
    Send {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to edit message {message}: {source}")]
    #[diagnostic(code(surveygraph::transport::edit))]
    Edit {
        message: MessageRef,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to acknowledge event '{event_id}': {source}")]
    #[diagnostic(code(surveygraph::transport::acknowledge))]
    Acknowledge {
        event_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// The outbound surface of one chat medium.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a fresh menu message; returns the handle the session should
    /// persist for later in-place edits.
    async fn send_menu(
        &self,
        to: ParticipantKey,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<MessageRef, TransportError>;

    /// Replace the text and keyboard of a previously sent message.
    async fn edit_menu(
        &self,
        to: ParticipantKey,
        message: MessageRef,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<(), TransportError>;

    /// Acknowledge an inbound event without changing anything visible
    /// (media like Telegram require every callback answered).
    async fn acknowledge(&self, event_id: &str) -> Result<(), TransportError>;
}
