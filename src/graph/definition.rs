//! Declarative, serde-friendly decision tree definitions.
//!
//! Definitions mirror the natural authoring shape: a question embeds its
//! options, and a non-terminal option either embeds the next question or
//! references one registered elsewhere by ID. The optional `next` /
//! `next_id` / `result` fields intentionally make malformed options
//! representable — compilation rejects them with
//! [`GraphBuildError::MalformedOption`](super::GraphBuildError::MalformedOption)
//! so that trees loaded from serialized data get the same validation as
//! trees written in Rust.

use serde::{Deserialize, Serialize};

use crate::types::QuestionId;

/// Declarative definition of one question and its ordered options.
///
/// # Examples
///
/// ```
/// use surveygraph::graph::{OptionDef, QuestionDef};
///
/// let def = QuestionDef::new("q1", "Choose category")
///     .with_option(OptionDef::terminal("Done", "q1_done", "RESULT-1"));
/// assert_eq!(def.options.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionDef {
    /// Stable identifier, unique across the whole tree.
    pub id: QuestionId,
    /// Display text rendered above the choice keyboard.
    pub text: String,
    /// Ordered options; order matters for rendering, not for matching.
    #[serde(default)]
    pub options: Vec<OptionDef>,
}

impl QuestionDef {
    /// Create a question definition with no options yet.
    #[must_use]
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// Append an option, preserving authoring order.
    #[must_use]
    pub fn with_option(mut self, option: OptionDef) -> Self {
        self.options.push(option);
        self
    }
}

/// Declarative definition of one selectable option.
///
/// Exactly one of `next`, `next_id`, or `result` must be set; the
/// constructors below keep hand-written definitions well-formed, and
/// compilation validates definitions from any other source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionDef {
    /// Button label shown to the participant.
    pub label: String,
    /// Opaque token matched against inbound choice events.
    pub selector: String,
    /// Embedded next question (non-terminal).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Box<QuestionDef>>,
    /// Reference to a question registered elsewhere in the builder
    /// (non-terminal, shared subtree).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<QuestionId>,
    /// Terminal result payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl OptionDef {
    /// A non-terminal option embedding its next question.
    #[must_use]
    pub fn next(
        label: impl Into<String>,
        selector: impl Into<String>,
        question: QuestionDef,
    ) -> Self {
        Self {
            label: label.into(),
            selector: selector.into(),
            next: Some(Box::new(question)),
            next_id: None,
            result: None,
        }
    }

    /// A non-terminal option referencing a question registered separately
    /// via [`GraphBuilder::add_question`](super::GraphBuilder::add_question).
    #[must_use]
    pub fn goto(
        label: impl Into<String>,
        selector: impl Into<String>,
        target: impl Into<QuestionId>,
    ) -> Self {
        Self {
            label: label.into(),
            selector: selector.into(),
            next: None,
            next_id: Some(target.into()),
            result: None,
        }
    }

    /// A terminal option carrying its result payload.
    #[must_use]
    pub fn terminal(
        label: impl Into<String>,
        selector: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            selector: selector.into(),
            next: None,
            next_id: None,
            result: Some(result.into()),
        }
    }
}
