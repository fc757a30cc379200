//! Graph compilation logic and validation.
//!
//! This module turns the nested definitions collected by a
//! [`GraphBuilder`](super::GraphBuilder) into the flat, ID-indexed arena of
//! a [`DecisionGraph`](super::DecisionGraph), enforcing every structural
//! invariant of the model along the way.

use miette::Diagnostic;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use thiserror::Error;

use super::definition::{OptionDef, QuestionDef};
use super::model::{DecisionGraph, OptionTarget, Question, QuestionOption};
use crate::types::QuestionId;

/// Structural validation failures raised during [`GraphBuilder::compile`].
///
/// All of these abort startup: the graph is foundational and is never
/// partially built.
///
/// [`GraphBuilder::compile`]: super::GraphBuilder::compile
#[derive(Debug, Error, Diagnostic)]
pub enum GraphBuildError {
    #[error("duplicate question id: {id}")]
    #[diagnostic(code(surveygraph::graph::duplicate_id))]
    DuplicateId { id: QuestionId },

    #[error("option '{selector}' of question {question} must carry exactly one of a next question or a result")]
    #[diagnostic(
        code(surveygraph::graph::malformed_option),
        help("set one of `next`, `next_id`, or `result` — never several, never none")
    )]
    MalformedOption {
        question: QuestionId,
        selector: String,
    },

    #[error("option '{selector}' of question {question} points at unknown question {target}")]
    #[diagnostic(
        code(surveygraph::graph::dangling_target),
        help("register the target with `add_question` or `add_root`")
    )]
    DanglingTarget {
        question: QuestionId,
        selector: String,
        target: QuestionId,
    },

    #[error("graph has no root question")]
    #[diagnostic(
        code(surveygraph::graph::no_roots),
        help("add at least one entry point with `add_root`")
    )]
    NoRoots,

    #[error("option '{selector}' of question {question} collides with a reserved transport selector")]
    #[diagnostic(
        code(surveygraph::graph::reserved_selector),
        help("reserved tokens are routed by the transport before option matching; pick another selector")
    )]
    ReservedSelector {
        question: QuestionId,
        selector: String,
    },
}

/// Compilation logic for GraphBuilder.
impl super::builder::GraphBuilder {
    /// Compiles the collected definitions into an immutable [`DecisionGraph`].
    ///
    /// Flattens the nested definitions into the arena and validates:
    ///
    /// - every question ID is unique across the whole graph
    ///   ([`GraphBuildError::DuplicateId`])
    /// - every option is exactly one of terminal / non-terminal
    ///   ([`GraphBuildError::MalformedOption`])
    /// - every by-ID reference resolves ([`GraphBuildError::DanglingTarget`])
    /// - at least one root exists ([`GraphBuildError::NoRoots`])
    /// - no option claims a reserved transport selector
    ///   ([`GraphBuildError::ReservedSelector`])
    ///
    /// Duplicate selectors *within* one question are tolerated (first match
    /// wins at navigation time) but logged as a warning.
    ///
    /// # Errors
    ///
    /// The first violated invariant, as a [`GraphBuildError`].
    pub fn compile(self) -> Result<DecisionGraph, GraphBuildError> {
        if self.roots.is_empty() {
            return Err(GraphBuildError::NoRoots);
        }

        let root_ids: Vec<QuestionId> = self.roots.iter().map(|d| d.id.clone()).collect();

        let mut questions: FxHashMap<QuestionId, Arc<Question>> = FxHashMap::default();
        let mut worklist: Vec<QuestionDef> = Vec::new();
        worklist.extend(self.roots);
        worklist.extend(self.standalone);

        while let Some(def) = worklist.pop() {
            let compiled = compile_question(&def, &self.reserved, &mut worklist)?;
            if questions
                .insert(compiled.id.clone(), Arc::new(compiled))
                .is_some()
            {
                return Err(GraphBuildError::DuplicateId { id: def.id });
            }
        }

        // By-ID references can only be checked once the whole arena exists.
        for question in questions.values() {
            for option in &question.options {
                if let OptionTarget::Next(target) = &option.target
                    && !questions.contains_key(target)
                {
                    return Err(GraphBuildError::DanglingTarget {
                        question: question.id.clone(),
                        selector: option.selector.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            questions = questions.len(),
            roots = root_ids.len(),
            "decision graph compiled"
        );

        Ok(DecisionGraph::from_parts(questions, root_ids))
    }
}

/// Compile one definition into its arena record, queueing embedded
/// subtrees onto the worklist.
fn compile_question(
    def: &QuestionDef,
    reserved: &FxHashSet<String>,
    worklist: &mut Vec<QuestionDef>,
) -> Result<Question, GraphBuildError> {
    let mut seen_selectors: FxHashSet<&str> = FxHashSet::default();
    let mut options = Vec::with_capacity(def.options.len());

    for option in &def.options {
        if reserved.contains(&option.selector) {
            return Err(GraphBuildError::ReservedSelector {
                question: def.id.clone(),
                selector: option.selector.clone(),
            });
        }
        if !seen_selectors.insert(option.selector.as_str()) {
            tracing::warn!(
                question = %def.id,
                selector = %option.selector,
                "duplicate selector within one question; first match wins"
            );
        }

        let target = option_target(def, option)?;
        if let Some(next) = &option.next {
            worklist.push((**next).clone());
        }

        options.push(QuestionOption {
            label: option.label.clone(),
            selector: option.selector.clone(),
            target,
        });
    }

    Ok(Question {
        id: def.id.clone(),
        text: def.text.clone(),
        options,
    })
}

/// Resolve the tagged-union target of one option definition.
fn option_target(
    question: &QuestionDef,
    option: &OptionDef,
) -> Result<OptionTarget, GraphBuildError> {
    match (&option.next, &option.next_id, &option.result) {
        (Some(next), None, None) => Ok(OptionTarget::Next(next.id.clone())),
        (None, Some(target), None) => Ok(OptionTarget::Next(target.clone())),
        (None, None, Some(result)) => Ok(OptionTarget::Terminal(result.clone())),
        _ => Err(GraphBuildError::MalformedOption {
            question: question.id.clone(),
            selector: option.selector.clone(),
        }),
    }
}
