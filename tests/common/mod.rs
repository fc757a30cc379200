pub mod transports;

pub use transports::*;

use std::sync::Arc;

use surveygraph::catalog;
use surveygraph::graph::{DecisionGraph, GraphBuilder, OptionDef, QuestionDef};
use surveygraph::store::SessionStore;

/// The shipped survey tree, compiled.
#[allow(dead_code)]
pub fn shipped_graph() -> DecisionGraph {
    catalog::survey_graph().expect("shipped catalog compiles")
}

/// A store over the shipped survey tree.
#[allow(dead_code)]
pub fn shipped_store() -> SessionStore {
    SessionStore::new(Arc::new(shipped_graph()))
}

/// A tiny two-level tree for focused graph tests:
/// `top` -> (`top_go` -> `leaf`), `leaf` -> (`leaf_done` -> "DONE").
#[allow(dead_code)]
pub fn tiny_graph() -> DecisionGraph {
    GraphBuilder::new()
        .add_root(
            QuestionDef::new("top", "Top?").with_option(OptionDef::next(
                "Go",
                "top_go",
                QuestionDef::new("leaf", "Leaf?").with_option(OptionDef::terminal(
                    "Done",
                    "leaf_done",
                    "DONE",
                )),
            )),
        )
        .compile()
        .expect("tiny graph compiles")
}
