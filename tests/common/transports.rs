#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use surveygraph::transport::{ChatTransport, Keyboard, TransportError};
use surveygraph::types::{MessageRef, ParticipantKey};

/// One outbound call observed by the [`RecordingTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outbound {
    Sent {
        to: ParticipantKey,
        message: MessageRef,
        text: String,
        keyboard: Keyboard,
    },
    Edited {
        to: ParticipantKey,
        message: MessageRef,
        text: String,
        keyboard: Keyboard,
    },
    Acknowledged {
        event_id: String,
    },
}

/// Mock transport recording every call, handing out sequential message
/// handles for sends.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    next_message: AtomicI64,
    calls: Mutex<Vec<Outbound>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            next_message: AtomicI64::new(1),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every recorded call, in order.
    pub fn calls(&self) -> Vec<Outbound> {
        self.calls.lock().expect("recorder lock").clone()
    }

    /// Calls addressed to one participant, in order.
    pub fn calls_for(&self, to: ParticipantKey) -> Vec<Outbound> {
        self.calls()
            .into_iter()
            .filter(|call| match call {
                Outbound::Sent { to: t, .. } | Outbound::Edited { to: t, .. } => *t == to,
                Outbound::Acknowledged { .. } => false,
            })
            .collect()
    }

    fn record(&self, call: Outbound) {
        self.calls.lock().expect("recorder lock").push(call);
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_menu(
        &self,
        to: ParticipantKey,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<MessageRef, TransportError> {
        let message = MessageRef::new(self.next_message.fetch_add(1, Ordering::SeqCst));
        self.record(Outbound::Sent {
            to,
            message,
            text: text.to_string(),
            keyboard: keyboard.clone(),
        });
        Ok(message)
    }

    async fn edit_menu(
        &self,
        to: ParticipantKey,
        message: MessageRef,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<(), TransportError> {
        self.record(Outbound::Edited {
            to,
            message,
            text: text.to_string(),
            keyboard: keyboard.clone(),
        });
        Ok(())
    }

    async fn acknowledge(&self, event_id: &str) -> Result<(), TransportError> {
        self.record(Outbound::Acknowledged {
            event_id: event_id.to_string(),
        });
        Ok(())
    }
}
