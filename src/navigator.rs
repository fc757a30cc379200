//! Pure navigation transitions.
//!
//! The navigator is the stateless transition logic the store applies under
//! its lock. Per participant the machine has three logical states:
//! `NoSession`, `Active(current, back_stack)`, and an instantaneous
//! `Terminal(result)` that collapses back to `NoSession` within the same
//! atomic store operation that produced it — it is never independently
//! observable. The only transitions are the four store operations
//! (`start`, `select`, `back`, `reset`).
//!
//! Functions here mutate a [`SessionState`] in place, perform no locking
//! and no I/O, and report "no transition" as `None` so the store can map
//! it to its typed error without any state having changed.

use std::sync::Arc;

use crate::graph::{DecisionGraph, OptionTarget, Question};
use crate::session::SessionState;
use crate::types::QuestionId;

/// Outcome of a successful forward transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    /// Moved to the next question; the previous one was pushed onto the
    /// back-stack.
    Forward(Arc<Question>),
    /// A terminal option was selected; the payload is the survey result.
    /// The caller is responsible for tearing the session down in the same
    /// operation.
    Finish(String),
}

/// Apply a selector to the session's current question.
///
/// Matching is token equality against the current question's options in
/// authoring order; the first match wins. Returns `None` — with the session
/// untouched — when no option matches.
pub fn advance(
    graph: &DecisionGraph,
    session: &mut SessionState,
    selector: &str,
) -> Option<Advance> {
    let question = graph.lookup(&session.current)?;
    let option = question.find_option(selector)?;

    match &option.target {
        OptionTarget::Terminal(result) => Some(Advance::Finish(result.clone())),
        OptionTarget::Next(next) => {
            // Compilation rejects dangling targets, so the lookup only
            // fails on a graph the builder never produced; the `?` keeps
            // even that case a no-op.
            let next_question = graph.lookup(next)?;
            session.back_stack.push(session.current.clone());
            session.current = next.clone();
            session.touch();
            Some(Advance::Forward(next_question))
        }
    }
}

/// Pop the back-stack top into `current`.
///
/// Returns the restored question ID, or `None` — with the session
/// untouched — when there is nothing to return to.
pub fn retreat(session: &mut SessionState) -> Option<QuestionId> {
    let previous = session.back_stack.pop()?;
    session.current = previous.clone();
    session.touch();
    Some(previous)
}
