//! Rendering of questions and terminal results into transport primitives.
//!
//! A question renders as its text plus one button row per option in
//! authoring order, with a back row appended while there is somewhere to
//! go back to. A terminal result renders as an escaped recommendation line
//! (plus the catalog's description of the matched study, when one exists)
//! under a restart keyboard.

use super::chat::{Button, Keyboard};
use super::{BACK_SELECTOR, RESTART_SELECTOR};
use crate::graph::Question;
use crate::utils::markdown::escape_markdown_v2;

/// Label of the appended back button.
pub const BACK_LABEL: &str = "Back";

/// Label of the restart button under a terminal result.
pub const RESTART_LABEL: &str = "🔄 Start over";

/// Build the choice keyboard for a question.
///
/// `depth` is the session's back-stack depth; the back row only appears
/// when there is a question to return to.
#[must_use]
pub fn question_keyboard(question: &Question, depth: usize) -> Keyboard {
    let mut keyboard = Keyboard::new();
    for option in &question.options {
        keyboard = keyboard.with_row(vec![Button::new(&option.label, &option.selector)]);
    }
    if depth > 0 {
        keyboard = keyboard.with_row(vec![Button::new(BACK_LABEL, BACK_SELECTOR)]);
    }
    keyboard
}

/// The single-button keyboard shown under a terminal result.
#[must_use]
pub fn result_keyboard() -> Keyboard {
    Keyboard::new().with_row(vec![Button::new(RESTART_LABEL, RESTART_SELECTOR)])
}

/// Format a terminal result for MarkdownV2 output.
///
/// The recommendation and description are escaped; the formatting markers
/// are not, so the study name stays bold.
#[must_use]
pub fn result_text(result: &str, description: Option<&str>) -> String {
    let mut text = format!("✅ *Suitable study:* {}", escape_markdown_v2(result));
    if let Some(description) = description {
        text.push_str("\n\n");
        text.push_str(&escape_markdown_v2(description));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, OptionDef, QuestionDef};

    fn question() -> Question {
        let graph = GraphBuilder::new()
            .add_root(
                QuestionDef::new("q", "Pick")
                    .with_option(OptionDef::terminal("A", "q_a", "RA"))
                    .with_option(OptionDef::terminal("B", "q_b", "RB")),
            )
            .compile()
            .expect("valid graph");
        graph.lookup(&"q".into()).expect("root present").as_ref().clone()
    }

    #[test]
    fn keyboard_has_one_row_per_option() {
        let kb = question_keyboard(&question(), 0);
        assert_eq!(kb.rows.len(), 2);
        assert_eq!(kb.rows[0][0].selector, "q_a");
    }

    #[test]
    fn back_row_appears_only_mid_flow() {
        assert!(
            question_keyboard(&question(), 0)
                .buttons()
                .all(|b| b.selector != BACK_SELECTOR)
        );
        let kb = question_keyboard(&question(), 2);
        assert_eq!(kb.rows.last().map(|r| r[0].selector.as_str()), Some(BACK_SELECTOR));
    }

    #[test]
    fn result_text_escapes_payload_but_keeps_markers() {
        let text = result_text("MIT-002", Some("Phase 2. Ask your doctor!"));
        assert!(text.starts_with("✅ *Suitable study:* MIT\\-002"));
        assert!(text.contains("Phase 2\\. Ask your doctor\\!"));
    }
}
