//! GraphBuilder implementation for assembling decision trees.
//!
//! This module contains the main [`GraphBuilder`] type and its fluent API
//! for collecting question definitions and transport-reserved selectors
//! before compiling to a [`DecisionGraph`](super::DecisionGraph).

use rustc_hash::FxHashSet;

use super::definition::QuestionDef;

/// Builder collecting the declarative inputs of a decision graph.
///
/// The builder itself performs no validation; it only gathers entry points,
/// shared subtrees, and reserved selector tokens. All checks happen in
/// [`compile`](Self::compile), which either returns a fully valid
/// [`DecisionGraph`](super::DecisionGraph) or the first
/// [`GraphBuildError`](super::GraphBuildError) encountered — a graph is
/// never partially built.
///
/// # Required Configuration
///
/// Every graph must have at least one entry point added via
/// [`add_root`](Self::add_root).
///
/// # Examples
///
/// ```
/// use surveygraph::graph::{GraphBuilder, OptionDef, QuestionDef};
///
/// let graph = GraphBuilder::new()
///     .add_root(
///         QuestionDef::new("q1", "Choose category")
///             .with_option(OptionDef::terminal("Other", "q1_other", "NONE")),
///     )
///     .reserve_selector("back")
///     .reserve_selector("start")
///     .compile()
///     .unwrap();
///
/// assert_eq!(graph.len(), 1);
/// ```
pub struct GraphBuilder {
    /// Entry-point definitions, in registration order.
    pub(super) roots: Vec<QuestionDef>,
    /// Non-root definitions referenced by ID from `OptionDef::goto`.
    pub(super) standalone: Vec<QuestionDef>,
    /// Selector tokens claimed by the transport layer; no option may use them.
    pub(super) reserved: FxHashSet<String>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a new, empty graph builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            standalone: Vec::new(),
            reserved: FxHashSet::default(),
        }
    }

    /// Adds an entry-point question (with its embedded subtree).
    ///
    /// The first root added becomes the question every fresh session starts
    /// on. Multiple roots are allowed for graphs with more than one entry
    /// point.
    #[must_use]
    pub fn add_root(mut self, def: QuestionDef) -> Self {
        self.roots.push(def);
        self
    }

    /// Registers a question that is not an entry point but is referenced by
    /// ID from one or more [`OptionDef::goto`](super::OptionDef::goto)
    /// options (a shared subtree).
    #[must_use]
    pub fn add_question(mut self, def: QuestionDef) -> Self {
        self.standalone.push(def);
        self
    }

    /// Declares a selector token reserved by the transport layer.
    ///
    /// Reserved tokens (e.g. the restart and back conventions) are routed by
    /// the transport before option matching ever runs; compilation fails if
    /// any option claims one.
    #[must_use]
    pub fn reserve_selector(mut self, selector: impl Into<String>) -> Self {
        self.reserved.insert(selector.into());
        self
    }

    /// Declares several reserved selector tokens at once.
    #[must_use]
    pub fn reserve_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(selectors.into_iter().map(Into::into));
        self
    }
}
