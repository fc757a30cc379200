//! The chat-transport boundary.
//!
//! The core never talks to a chat medium directly. This module defines the
//! seam: the inbound event model ([`InboundEvent`]), the outbound rendering
//! surface ([`ChatTransport`], [`Keyboard`]), and the [`SurveyRouter`] that
//! maps one inbound event to one store operation and one render.
//!
//! Two selector tokens are reserved as transport-level conventions —
//! [`RESTART_SELECTOR`] and [`BACK_SELECTOR`] — and are routed before
//! option matching ever runs. They are not options inside the graph;
//! builders should reserve them so collisions fail at compile time:
//!
//! ```
//! use surveygraph::graph::{GraphBuilder, OptionDef, QuestionDef};
//! use surveygraph::transport::{BACK_SELECTOR, RESTART_SELECTOR};
//!
//! let err = GraphBuilder::new()
//!     .add_root(
//!         QuestionDef::new("q", "Oops")
//!             .with_option(OptionDef::terminal("Back", BACK_SELECTOR, "X")),
//!     )
//!     .reserve_selectors([RESTART_SELECTOR, BACK_SELECTOR])
//!     .compile()
//!     .unwrap_err();
//! assert!(err.to_string().contains("reserved"));
//! ```
//!
//! Store failures (`NoActiveSession`, `SelectorNotFound`, `EmptyBackStack`)
//! are stale-UI noise, not faults: the router logs them and acknowledges
//! the event as a no-op, leaving the rendered state unchanged.

mod chat;
mod event;
mod render;
mod router;

pub use chat::{Button, ChatTransport, Keyboard, TransportError};
pub use event::{Command, EventPayload, InboundEvent, Selection};
pub use render::{BACK_LABEL, RESTART_LABEL, question_keyboard, result_keyboard, result_text};
pub use router::SurveyRouter;

/// Selector token the transport maps to a session restart.
pub const RESTART_SELECTOR: &str = "start";

/// Selector token the transport maps to back-navigation.
pub const BACK_SELECTOR: &str = "back";
