//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::{AnswerOption, Catalog, House, Question};
use crate::core::action::{Action, update};
use crate::core::state::QuizState;

pub fn answer_option(id: &str, scores: &[(House, i32)]) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: format!("option {id}"),
        scores: scores.iter().copied().collect::<HashMap<_, _>>(),
    }
}

pub fn question(id: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("prompt {id}"),
        options,
    }
}

/// Three questions, each with the same option shape:
/// `qNa` = +1 Gryffindor, `qNb` = +1 Slytherin, `qNc` = no deltas.
pub fn test_catalog() -> Catalog {
    let questions = (1..=3)
        .map(|n| {
            let id = format!("q{n}");
            question(
                &id,
                vec![
                    answer_option(&format!("{id}a"), &[(House::Gryffindor, 1)]),
                    answer_option(&format!("{id}b"), &[(House::Slytherin, 1)]),
                    answer_option(&format!("{id}c"), &[]),
                ],
            )
        })
        .collect();
    Catalog { questions }
}

/// Creates a fresh QuizState over the 3-question test catalog.
pub fn test_state() -> QuizState {
    QuizState::new(Arc::new(test_catalog()))
}

/// Answers the current question with its option of the given suffix
/// ("a", "b" or "c" for the test catalog).
pub fn answer_current(state: &mut QuizState, suffix: &str) {
    let question_id = state
        .current_question()
        .map(|q| q.id.clone())
        .unwrap_or_default();
    let option_id = format!("{question_id}{suffix}");
    update(
        state,
        Action::Answer {
            question_id,
            option_id,
        },
    );
}
