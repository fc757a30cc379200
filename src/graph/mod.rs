//! Decision graph definition and compilation.
//!
//! This module provides everything needed to describe a survey decision tree
//! and compile it into an immutable, concurrently shareable
//! [`DecisionGraph`]. The main entry point is [`GraphBuilder`], which takes
//! declarative nested [`QuestionDef`] records and compiles them into a flat,
//! ID-indexed arena of [`Question`] records.
//!
//! # Core Concepts
//!
//! - **Definitions**: Nested, serde-friendly records describing questions
//!   and options ([`QuestionDef`], [`OptionDef`])
//! - **Compilation**: Validation and flattening into the arena
//!   ([`GraphBuilder::compile`], [`GraphBuildError`])
//! - **Model**: The compiled, read-only graph ([`DecisionGraph`],
//!   [`Question`], [`QuestionOption`], [`OptionTarget`])
//!
//! Options never embed their target question in the compiled form; they
//! reference it by [`QuestionId`](crate::types::QuestionId). That keeps the
//! graph free of ownership cycles and lets every session share it through a
//! plain `Arc` with no synchronization.
//!
//! # Quick Start
//!
//! ```
//! use surveygraph::graph::{GraphBuilder, OptionDef, QuestionDef};
//!
//! let tree = QuestionDef::new("root", "Tea or coffee?")
//!     .with_option(OptionDef::next(
//!         "Tea",
//!         "root_tea",
//!         QuestionDef::new("tea", "Green or black?")
//!             .with_option(OptionDef::terminal("Green", "tea_green", "GREEN-01"))
//!             .with_option(OptionDef::terminal("Black", "tea_black", "BLACK-01")),
//!     ))
//!     .with_option(OptionDef::terminal("Coffee", "root_coffee", "COFFEE-01"));
//!
//! let graph = GraphBuilder::new().add_root(tree).compile().unwrap();
//! assert_eq!(graph.root().as_str(), "root");
//! assert!(graph.lookup(&"tea".into()).is_some());
//! ```

mod builder;
mod compilation;
mod definition;
mod model;

pub use builder::GraphBuilder;
pub use compilation::GraphBuildError;
pub use definition::{OptionDef, QuestionDef};
pub use model::{DecisionGraph, OptionTarget, Question, QuestionOption};
