//! Tests for decision-graph compilation and validation.

mod common;

use common::*;
use surveygraph::graph::{
    GraphBuildError, GraphBuilder, OptionDef, OptionTarget, QuestionDef,
};

#[test]
fn compile_flattens_nested_definitions_into_the_arena() {
    let graph = tiny_graph();

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.roots().len(), 1);
    assert_eq!(graph.root().as_str(), "top");

    let top = graph.lookup(&"top".into()).expect("top registered");
    match &top.options[0].target {
        OptionTarget::Next(id) => assert_eq!(id, &"leaf".into()),
        other => panic!("expected next target, got {other:?}"),
    }

    let leaf = graph.lookup(&"leaf".into()).expect("leaf registered");
    assert!(leaf.options[0].target.is_terminal());
}

#[test]
fn lookup_misses_return_none() {
    let graph = tiny_graph();
    assert!(graph.lookup(&"nope".into()).is_none());
}

#[test]
fn empty_builder_is_rejected() {
    let err = GraphBuilder::new().compile().unwrap_err();
    assert!(matches!(err, GraphBuildError::NoRoots));
}

#[test]
fn duplicate_ids_across_branches_are_rejected() {
    let err = GraphBuilder::new()
        .add_root(
            QuestionDef::new("root", "Root")
                .with_option(OptionDef::next(
                    "A",
                    "root_a",
                    QuestionDef::new("dup", "First")
                        .with_option(OptionDef::terminal("x", "dup_x", "X")),
                ))
                .with_option(OptionDef::next(
                    "B",
                    "root_b",
                    QuestionDef::new("dup", "Second")
                        .with_option(OptionDef::terminal("y", "dup_y", "Y")),
                )),
        )
        .compile()
        .unwrap_err();

    match err {
        GraphBuildError::DuplicateId { id } => assert_eq!(id, "dup".into()),
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn option_with_both_targets_is_rejected() {
    let mut option = OptionDef::terminal("Broken", "root_broken", "X");
    option.next_id = Some("elsewhere".into());

    let err = GraphBuilder::new()
        .add_root(QuestionDef::new("root", "Root").with_option(option))
        .compile()
        .unwrap_err();

    match err {
        GraphBuildError::MalformedOption { question, selector } => {
            assert_eq!(question, "root".into());
            assert_eq!(selector, "root_broken");
        }
        other => panic!("expected MalformedOption, got {other:?}"),
    }
}

#[test]
fn option_with_no_target_is_rejected() {
    let option = OptionDef {
        label: "Neither".into(),
        selector: "root_neither".into(),
        next: None,
        next_id: None,
        result: None,
    };

    let err = GraphBuilder::new()
        .add_root(QuestionDef::new("root", "Root").with_option(option))
        .compile()
        .unwrap_err();
    assert!(matches!(err, GraphBuildError::MalformedOption { .. }));
}

#[test]
fn by_id_reference_to_unknown_question_is_rejected() {
    let err = GraphBuilder::new()
        .add_root(
            QuestionDef::new("root", "Root").with_option(OptionDef::goto(
                "Jump",
                "root_jump",
                "missing",
            )),
        )
        .compile()
        .unwrap_err();

    match err {
        GraphBuildError::DanglingTarget {
            question,
            selector,
            target,
        } => {
            assert_eq!(question, "root".into());
            assert_eq!(selector, "root_jump");
            assert_eq!(target, "missing".into());
        }
        other => panic!("expected DanglingTarget, got {other:?}"),
    }
}

#[test]
fn by_id_reference_to_registered_subtree_resolves() {
    let graph = GraphBuilder::new()
        .add_root(
            QuestionDef::new("root", "Root").with_option(OptionDef::goto(
                "Jump",
                "root_jump",
                "shared",
            )),
        )
        .add_question(
            QuestionDef::new("shared", "Shared subtree")
                .with_option(OptionDef::terminal("End", "shared_end", "S")),
        )
        .compile()
        .expect("goto to registered question compiles");

    assert_eq!(graph.len(), 2);
    assert!(graph.lookup(&"shared".into()).is_some());
}

#[test]
fn reserved_selector_collision_is_rejected() {
    let err = GraphBuilder::new()
        .add_root(
            QuestionDef::new("root", "Root")
                .with_option(OptionDef::terminal("Back", "back", "X")),
        )
        .reserve_selector("back")
        .compile()
        .unwrap_err();

    match err {
        GraphBuildError::ReservedSelector { question, selector } => {
            assert_eq!(question, "root".into());
            assert_eq!(selector, "back");
        }
        other => panic!("expected ReservedSelector, got {other:?}"),
    }
}

#[test]
fn duplicate_selector_within_one_question_keeps_first_match() {
    let graph = GraphBuilder::new()
        .add_root(
            QuestionDef::new("root", "Root")
                .with_option(OptionDef::terminal("First", "root_dup", "FIRST"))
                .with_option(OptionDef::terminal("Second", "root_dup", "SECOND")),
        )
        .compile()
        .expect("duplicate selectors are tolerated");

    let root = graph.lookup(&"root".into()).expect("root registered");
    let matched = root.find_option("root_dup").expect("selector matches");
    assert_eq!(matched.label, "First");
}

#[test]
fn definitions_round_trip_through_serde() {
    let def = QuestionDef::new("q", "Text?")
        .with_option(OptionDef::terminal("Done", "q_done", "R"))
        .with_option(OptionDef::goto("Jump", "q_jump", "q"));

    let json = serde_json::to_string(&def).expect("serializes");
    let parsed: QuestionDef = serde_json::from_str(&json).expect("parses");
    assert_eq!(parsed, def);
}

#[test]
fn shipped_catalog_matches_its_contract() {
    let graph = shipped_graph();
    assert_eq!(graph.root().as_str(), "q1");

    let root = graph.lookup(&"q1".into()).expect("root registered");
    assert_eq!(root.text, "Choose category");
    assert_eq!(root.options.len(), 6);

    // Option order is the rendering order.
    let selectors: Vec<&str> = root.options.iter().map(|o| o.selector.as_str()).collect();
    assert_eq!(
        selectors,
        vec![
            "q1_option1",
            "q1_option2",
            "q1_option3",
            "q1_option4",
            "q1_option5",
            "q1_option6"
        ]
    );
}
