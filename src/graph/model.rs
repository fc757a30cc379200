//! The compiled, read-only decision graph model.
//!
//! Everything here is immutable after [`GraphBuilder::compile`] returns.
//! Questions live in a flat arena keyed by [`QuestionId`]; options carry
//! their target as a tagged union referencing the next question by ID, so
//! the graph contains no ownership cycles and is shared across sessions by
//! `Arc` without synchronization.
//!
//! [`GraphBuilder::compile`]: super::GraphBuilder::compile

use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::types::QuestionId;

/// Where a selected option leads: the tagged-union invariant of the model.
///
/// An option is exactly one of terminal or non-terminal; compilation
/// rejects any definition where that does not hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionTarget {
    /// Advance to the referenced question.
    Next(QuestionId),
    /// Finish the survey with this result payload.
    Terminal(String),
}

impl OptionTarget {
    /// Returns `true` if selecting this option ends the session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }
}

/// One selectable option of a compiled [`Question`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionOption {
    /// Button label shown to the participant.
    pub label: String,
    /// Opaque token matched against inbound choice events.
    pub selector: String,
    /// Terminal or non-terminal destination.
    pub target: OptionTarget,
}

impl QuestionOption {
    /// Token-equality match against an inbound selector.
    #[must_use]
    pub fn matches(&self, selector: &str) -> bool {
        self.selector == selector
    }
}

/// A compiled question: identity, display text, ordered options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// First option whose selector matches, in authoring order.
    ///
    /// Duplicate selectors within a question are tolerated; the first match
    /// wins, mirroring the linear scan the rendering order implies.
    #[must_use]
    pub fn find_option(&self, selector: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.matches(selector))
    }
}

/// The immutable decision graph: a flat arena of questions indexed by ID.
///
/// Built once at startup, then read-only for the remaining process
/// lifetime. Lookups are pure, lock-free reads; the whole structure is
/// shared across concurrent sessions behind an `Arc`.
///
/// # Examples
///
/// ```
/// use surveygraph::graph::{GraphBuilder, OptionDef, QuestionDef};
///
/// let graph = GraphBuilder::new()
///     .add_root(
///         QuestionDef::new("q", "Pick one")
///             .with_option(OptionDef::terminal("A", "q_a", "RES-A")),
///     )
///     .compile()
///     .unwrap();
///
/// let q = graph.lookup(&"q".into()).unwrap();
/// assert_eq!(q.options[0].selector, "q_a");
/// ```
#[derive(Clone, Debug)]
pub struct DecisionGraph {
    questions: FxHashMap<QuestionId, Arc<Question>>,
    roots: Vec<QuestionId>,
}

impl DecisionGraph {
    /// Assemble a graph from validated parts. Compilation is the only
    /// caller; it guarantees `roots` is non-empty and every referenced ID
    /// resolves.
    pub(crate) fn from_parts(
        questions: FxHashMap<QuestionId, Arc<Question>>,
        roots: Vec<QuestionId>,
    ) -> Self {
        Self { questions, roots }
    }

    /// O(1), lock-free lookup of a question by ID.
    #[must_use]
    pub fn lookup(&self, id: &QuestionId) -> Option<Arc<Question>> {
        self.questions.get(id).cloned()
    }

    /// The ordered entry points of the graph.
    #[must_use]
    pub fn roots(&self) -> &[QuestionId] {
        &self.roots
    }

    /// The primary entry point (first root).
    ///
    /// Compilation rejects rootless graphs, so the slice is never empty.
    #[must_use]
    pub fn root(&self) -> &QuestionId {
        &self.roots[0]
    }

    /// Number of questions in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate over every question in the arena (no defined order).
    pub fn questions(&self) -> impl Iterator<Item = &Arc<Question>> {
        self.questions.values()
    }
}
