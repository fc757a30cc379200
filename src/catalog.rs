//! The shipped clinical-study finder tree.
//!
//! This is the production survey the bot deploys with: a participant picks
//! a diagnosis category, narrows it down over one or two follow-up
//! questions, and lands on the identifier of a matching study. Selector
//! tokens follow the `<question>_option<n>` convention; terminal payloads
//! are study identifiers, with per-selector descriptions rendered beneath
//! the recommendation.

use rustc_hash::FxHashMap;

use crate::graph::{DecisionGraph, GraphBuildError, GraphBuilder, OptionDef, QuestionDef};
use crate::transport::{BACK_SELECTOR, RESTART_SELECTOR};

/// Compile the shipped survey tree.
///
/// The transport's restart/back tokens are reserved here, so a collision
/// with an option selector fails at startup rather than misrouting taps.
///
/// # Errors
///
/// [`GraphBuildError`] if the definitions violate a structural invariant;
/// with the shipped definitions this aborts startup only when the tree was
/// edited incorrectly.
pub fn survey_graph() -> Result<DecisionGraph, GraphBuildError> {
    GraphBuilder::new()
        .add_root(root_question())
        .reserve_selectors([RESTART_SELECTOR, BACK_SELECTOR])
        .compile()
}

fn root_question() -> QuestionDef {
    QuestionDef::new("q1", "Choose category")
        .with_option(OptionDef::next(
            "Breast cancer",
            "q1_option1",
            QuestionDef::new("q1_1", "Choose the subtype:")
                .with_option(OptionDef::terminal(
                    "Triple negative",
                    "q1_1_option1",
                    "AREAL",
                ))
                .with_option(OptionDef::next(
                    "HER2 positive",
                    "q1_1_option2",
                    QuestionDef::new("q1_1_1", "Choose the therapy line:")
                        .with_option(OptionDef::terminal(
                            "First line",
                            "q1_1_1_option1",
                            "BCD-267-1",
                        ))
                        .with_option(OptionDef::terminal(
                            "Second and later lines",
                            "q1_1_1_option2",
                            "CL011101223 (Perjeta R-pharm)",
                        )),
                )),
        ))
        .with_option(OptionDef::next(
            "Colorectal cancer",
            "q1_option2",
            QuestionDef::new("q2_1", "Which treatment line is planned?")
                .with_option(OptionDef::terminal(
                    "First line",
                    "q2_1_option1",
                    "CL01790199",
                ))
                .with_option(OptionDef::terminal(
                    "Second line",
                    "q2_1_option2",
                    "Generium",
                )),
        ))
        .with_option(OptionDef::next(
            "Lung cancer",
            "q1_option3",
            QuestionDef::new("q3_1", "Choose the molecular profile:")
                .with_option(OptionDef::terminal(
                    "EGFR, ALK neg. PD-L1 >= 50%",
                    "q3_1_option1",
                    "MIT-002",
                ))
                .with_option(OptionDef::terminal(
                    "EGFR, ALK neg. PD-L1 < 50%",
                    "q3_1_option2",
                    "BEV-III/2022",
                )),
        ))
        .with_option(OptionDef::terminal("Melanoma", "q1_option4", "MIT-002"))
        .with_option(OptionDef::terminal(
            "Head and neck cancer",
            "q1_option5",
            "R-pharm 2356",
        ))
        .with_option(OptionDef::terminal(
            "Gastric cancer",
            "q1_option6",
            "R-pharm 1339",
        ))
}

/// Study descriptions rendered beneath a terminal recommendation, keyed by
/// the selector of the terminal option that produced it.
#[must_use]
pub fn result_descriptions() -> FxHashMap<String, String> {
    let entries = [
        (
            "q1_1_option1",
            "AREAL: study of first-line therapy for triple-negative breast cancer.",
        ),
        (
            "q1_1_1_option1",
            "BCD-267-1: first-line study for HER2-positive breast cancer.",
        ),
        (
            "q1_1_1_option2",
            "CL011101223: Perjeta (R-pharm) study for previously treated HER2-positive breast cancer.",
        ),
        (
            "q2_1_option1",
            "CL01790199: first-line study for metastatic colorectal cancer.",
        ),
        (
            "q2_1_option2",
            "Generium: second-line study for metastatic colorectal cancer.",
        ),
        (
            "q3_1_option1",
            "MIT-002: study for non-small-cell lung cancer with PD-L1 expression of 50% or higher.",
        ),
        (
            "q3_1_option2",
            "BEV-III/2022: study for non-small-cell lung cancer with PD-L1 expression below 50%.",
        ),
        (
            "q1_option4",
            "MIT-002: study open to patients with unresectable or metastatic melanoma.",
        ),
        (
            "q1_option5",
            "R-pharm 2356: study for squamous-cell carcinoma of the head and neck.",
        ),
        (
            "q1_option6",
            "R-pharm 1339: study for advanced gastric cancer.",
        ),
    ];

    entries
        .into_iter()
        .map(|(selector, text)| (selector.to_string(), text.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::OptionTarget;

    #[test]
    fn shipped_tree_compiles() {
        let graph = survey_graph().expect("shipped catalog is valid");
        assert_eq!(graph.root().as_str(), "q1");
        assert_eq!(graph.len(), 5);
    }

    #[test]
    fn every_terminal_selector_has_a_description() {
        let graph = survey_graph().expect("shipped catalog is valid");
        let descriptions = result_descriptions();
        for question in graph.questions() {
            for option in &question.options {
                if let OptionTarget::Terminal(_) = option.target {
                    assert!(
                        descriptions.contains_key(&option.selector),
                        "missing description for {}",
                        option.selector
                    );
                }
            }
        }
    }
}
