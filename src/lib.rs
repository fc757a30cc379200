//! # Surveygraph: Decision-Tree Survey Engine
//!
//! Surveygraph routes chat participants through a static, multi-step
//! decision tree to one of several terminal recommendations, with mid-flow
//! back-navigation and restart, serving many independent participants
//! concurrently from a single shared process.
//!
//! ## Core Concepts
//!
//! - **Decision Graph**: immutable tree of questions and options, compiled
//!   once at startup and shared read-only across every session
//! - **Session**: per-participant position, back-stack, and the handle of
//!   the one chat message being edited in place
//! - **Store**: the concurrency-safe registry applying all navigation
//!   operations atomically per key
//! - **Transport**: the chat boundary — inbound events in, keyboard
//!   renders out — behind an async trait
//!
//! ## Quick Start
//!
//! ### Compiling a tree
//!
//! ```
//! use surveygraph::graph::{GraphBuilder, OptionDef, QuestionDef};
//!
//! let graph = GraphBuilder::new()
//!     .add_root(
//!         QuestionDef::new("root", "Coffee or tea?")
//!             .with_option(OptionDef::terminal("Coffee", "root_coffee", "COFFEE-01"))
//!             .with_option(OptionDef::terminal("Tea", "root_tea", "TEA-01")),
//!     )
//!     .compile()
//!     .unwrap();
//! assert_eq!(graph.root().as_str(), "root");
//! ```
//!
//! ### Navigating sessions
//!
//! ```
//! use std::sync::Arc;
//! use surveygraph::catalog;
//! use surveygraph::store::{SelectOutcome, SessionStore};
//!
//! let graph = Arc::new(catalog::survey_graph().unwrap());
//! let store = SessionStore::new(graph);
//!
//! let participant = 1001.into();
//! store.start(participant);
//!
//! match store.select(participant, "q1_option3").unwrap() {
//!     SelectOutcome::Advanced(question) => assert_eq!(question.id.as_str(), "q3_1"),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! assert_eq!(store.back_stack_depth(participant), Some(1));
//! ```
//!
//! ### Wiring a transport
//!
//! Implement [`transport::ChatTransport`] for your chat medium, hand a
//! [`transport::SurveyRouter`] the store and a `flume` receiver of
//! [`transport::InboundEvent`]s, and every event is handled as its own
//! task. See `demos/console_survey.rs` for a complete walkthrough on a
//! terminal transport.
//!
//! ## Error Handling
//!
//! Graph construction fails closed: every structural violation is a
//! [`graph::GraphBuildError`] and nothing partial is ever built. Runtime
//! navigation failures ([`store::StoreError`]) are recoverable typed
//! outcomes — stale taps and missing sessions are logged and acknowledged,
//! never escalated.
//!
//! ## Module Guide
//!
//! - [`graph`] - Tree definitions, validation, and the compiled model
//! - [`session`] - Per-participant navigation state
//! - [`navigator`] - Pure transition logic applied by the store
//! - [`store`] - The concurrency-safe session registry
//! - [`transport`] - Chat boundary: events, rendering, routing
//! - [`catalog`] - The shipped clinical-study finder tree
//! - [`config`] - Environment-driven deployment settings
//! - [`telemetry`] - Tracing subscriber wiring

pub mod catalog;
pub mod config;
pub mod graph;
pub mod navigator;
pub mod session;
pub mod store;
pub mod telemetry;
pub mod transport;
pub mod types;
pub mod utils;
