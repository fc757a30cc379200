//! Interactive console walkthrough of the shipped survey.
//!
//! This demo binds the router to a terminal transport: menus print to
//! stdout, "editing" a message reprints it with its handle, and you answer
//! by typing a selector token (e.g. `q1_option3`). Type `/start` to
//! restart, `back` to go back, `quit` to leave.
//!
//! Run with: `cargo run --example console_survey`

use async_trait::async_trait;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use surveygraph::catalog;
use surveygraph::store::SessionStore;
use surveygraph::telemetry;
use surveygraph::transport::{
    ChatTransport, InboundEvent, Keyboard, SurveyRouter, TransportError,
};
use surveygraph::types::{MessageRef, ParticipantKey};

/// A chat "medium" that renders keyboards as numbered lines on stdout.
struct ConsoleTransport {
    next_message: AtomicI64,
}

impl ConsoleTransport {
    fn new() -> Self {
        Self {
            next_message: AtomicI64::new(1),
        }
    }

    fn print_menu(&self, message: MessageRef, text: &str, keyboard: &Keyboard) {
        println!("\n[message #{message}] {text}");
        for button in keyboard.buttons() {
            println!("  {:<28} -> {}", button.label, button.selector);
        }
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn send_menu(
        &self,
        _to: ParticipantKey,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<MessageRef, TransportError> {
        let message = MessageRef::new(self.next_message.fetch_add(1, Ordering::SeqCst));
        self.print_menu(message, text, keyboard);
        Ok(message)
    }

    async fn edit_menu(
        &self,
        _to: ParticipantKey,
        message: MessageRef,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<(), TransportError> {
        self.print_menu(message, text, keyboard);
        Ok(())
    }

    async fn acknowledge(&self, _event_id: &str) -> Result<(), TransportError> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    telemetry::init();

    let graph = Arc::new(catalog::survey_graph()?);
    let store = Arc::new(SessionStore::new(graph));
    let transport = Arc::new(ConsoleTransport::new());
    let router = Arc::new(
        SurveyRouter::new(Arc::clone(&store), transport)
            .with_descriptions(catalog::result_descriptions()),
    );

    let (tx, rx) = flume::unbounded::<InboundEvent>();
    tokio::spawn(Arc::clone(&router).run(rx));

    let me = ParticipantKey::new(1);
    let _ = tx.send(InboundEvent::begin(me.raw()));

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let input = line.trim();

        let event = match input {
            "" => continue,
            "quit" | "q" => break,
            "/start" => InboundEvent::begin(me.raw()),
            selector => InboundEvent::selection(me.raw(), "console", selector, None),
        };
        let _ = tx.send(event);

        // Give the spawned handler a beat to render before re-prompting.
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    println!("bye");
    Ok(())
}
