//! Event routing: one inbound event → one store operation → one render.
//!
//! [`SurveyRouter`] is the glue between a chat medium and the session
//! store. It owns no navigation state of its own; everything it renders is
//! read back from the store or carried by the event, so racing events for
//! the same participant degrade to stale renders rather than corrupted
//! state.

use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::instrument;

use super::chat::ChatTransport;
use super::event::{Command, EventPayload, InboundEvent, Selection};
use super::render::{question_keyboard, result_keyboard, result_text};
use super::{BACK_SELECTOR, RESTART_SELECTOR};
use crate::graph::Question;
use crate::store::{SelectOutcome, SessionStore, StoreError};
use crate::types::{MessageRef, ParticipantKey};

/// Maps inbound transport events to store operations and renders.
///
/// Handles each event as one independent unit of work: [`run`](Self::run)
/// spawns a task per received event. Store failures are stale-UI noise and
/// are logged and acknowledged as no-ops; transport failures are logged and
/// dropped — the participant simply sees no update for that event.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use surveygraph::catalog;
/// use surveygraph::store::SessionStore;
/// use surveygraph::transport::{InboundEvent, SurveyRouter};
/// # async fn example(transport: Arc<impl surveygraph::transport::ChatTransport + 'static>) {
///
/// let graph = Arc::new(catalog::survey_graph().unwrap());
/// let store = Arc::new(SessionStore::new(graph));
/// let router = Arc::new(
///     SurveyRouter::new(store, transport).with_descriptions(catalog::result_descriptions()),
/// );
///
/// let (tx, rx) = flume::unbounded::<InboundEvent>();
/// tokio::spawn({
///     let router = Arc::clone(&router);
///     async move { router.run(rx).await }
/// });
/// tx.send(InboundEvent::begin(42)).unwrap();
/// # }
/// ```
pub struct SurveyRouter<T: ChatTransport> {
    store: Arc<SessionStore>,
    transport: Arc<T>,
    descriptions: FxHashMap<String, String>,
}

impl<T: ChatTransport + 'static> SurveyRouter<T> {
    #[must_use]
    pub fn new(store: Arc<SessionStore>, transport: Arc<T>) -> Self {
        Self {
            store,
            transport,
            descriptions: FxHashMap::default(),
        }
    }

    /// Attach per-selector result descriptions rendered beneath terminal
    /// recommendations.
    #[must_use]
    pub fn with_descriptions(mut self, descriptions: FxHashMap<String, String>) -> Self {
        self.descriptions = descriptions;
        self
    }

    /// Consume inbound events until the channel closes, spawning one task
    /// per event.
    pub async fn run(self: Arc<Self>, events: flume::Receiver<InboundEvent>) {
        while let Ok(event) = events.recv_async().await {
            let router = Arc::clone(&self);
            tokio::spawn(async move { router.handle(event).await });
        }
        tracing::info!("event channel closed, router stopped");
    }

    /// Handle one inbound event to completion.
    #[instrument(skip(self, event), fields(from = %event.from))]
    pub async fn handle(&self, event: InboundEvent) {
        match event.payload {
            EventPayload::Command(Command::Begin) => self.begin(event.from).await,
            EventPayload::Selection(selection) => self.selection(event.from, selection).await,
        }
    }

    /// The conversation-opening command: fresh session, fresh menu message.
    async fn begin(&self, key: ParticipantKey) {
        let root = self.store.start(key);
        let keyboard = question_keyboard(&root, 0);
        match self.transport.send_menu(key, &root.text, &keyboard).await {
            Ok(message) => self.persist_handle(key, message),
            Err(error) => tracing::warn!(%key, %error, "failed to send opening menu"),
        }
    }

    async fn selection(&self, key: ParticipantKey, selection: Selection) {
        match selection.selector.as_str() {
            RESTART_SELECTOR => {
                let root = self.store.start(key);
                self.render_question(key, selection.message, &root).await;
            }
            BACK_SELECTOR => match self.store.back(key) {
                Ok(question) => self.render_question(key, selection.message, &question).await,
                Err(error) => self.acknowledge_noop(&selection, &error).await,
            },
            _ => match self.store.select(key, &selection.selector) {
                Ok(SelectOutcome::Advanced(question)) => {
                    self.render_question(key, selection.message, &question).await;
                }
                Ok(SelectOutcome::Terminal {
                    result,
                    last_message,
                }) => {
                    self.render_result(key, &selection, &result, last_message)
                        .await;
                }
                Err(error) => self.acknowledge_noop(&selection, &error).await,
            },
        }
    }

    /// Re-render the menu in place, falling back to the event's message
    /// handle (or a fresh send) when the session has none persisted yet.
    async fn render_question(
        &self,
        key: ParticipantKey,
        fallback: Option<MessageRef>,
        question: &Question,
    ) {
        let depth = self.store.back_stack_depth(key).unwrap_or(0);
        let keyboard = question_keyboard(question, depth);

        match self.store.last_message(key).or(fallback) {
            Some(message) => {
                match self
                    .transport
                    .edit_menu(key, message, &question.text, &keyboard)
                    .await
                {
                    Ok(()) => self.persist_handle(key, message),
                    Err(error) => tracing::warn!(%key, %error, "failed to edit menu"),
                }
            }
            None => match self.transport.send_menu(key, &question.text, &keyboard).await {
                Ok(message) => self.persist_handle(key, message),
                Err(error) => tracing::warn!(%key, %error, "failed to send menu"),
            },
        }
    }

    /// Render a terminal recommendation into the session's final message.
    ///
    /// The session is already gone; the handle captured during teardown
    /// (or the event's own message) is the only edit target left.
    async fn render_result(
        &self,
        key: ParticipantKey,
        selection: &Selection,
        result: &str,
        last_message: Option<MessageRef>,
    ) {
        let description = self.descriptions.get(&selection.selector).map(String::as_str);
        let text = result_text(result, description);
        let keyboard = result_keyboard();

        match last_message.or(selection.message) {
            Some(message) => {
                if let Err(error) = self
                    .transport
                    .edit_menu(key, message, &text, &keyboard)
                    .await
                {
                    tracing::warn!(%key, %error, "failed to edit result message");
                }
            }
            None => {
                if let Err(error) = self.transport.send_menu(key, &text, &keyboard).await {
                    tracing::warn!(%key, %error, "failed to send result message");
                }
            }
        }
    }

    /// Store the handle of the message a session keeps editing.
    fn persist_handle(&self, key: ParticipantKey, message: MessageRef) {
        if let Err(error) = self.store.set_last_message(key, message) {
            // The session can legitimately vanish between render and
            // persist (racing reset or terminal); nothing to repair.
            tracing::debug!(%key, %error, "session gone before handle persisted");
        }
    }

    /// Log a stale interaction and acknowledge it without visible change.
    async fn acknowledge_noop(&self, selection: &Selection, error: &StoreError) {
        tracing::debug!(event = %selection.id, %error, "ignoring stale interaction");
        if let Err(ack_error) = self.transport.acknowledge(&selection.id).await {
            tracing::debug!(event = %selection.id, %ack_error, "failed to acknowledge event");
        }
    }
}
