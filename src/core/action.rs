//! # Actions
//!
//! Everything that can happen in a quiz session becomes an `Action`.
//! User picks an option? That's `Action::Answer { .. }`.
//! User hits "next question"? That's `Action::Next`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state accordingly. No side effects here. I/O
//! happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: drive the machine with a sequence of
//! actions and assert on the resulting state.
//!
//! Invalid actions (wrong question id, foreign option id, NEXT with no
//! answer recorded, anything after completion) are rejected as logged
//! no-ops. The machine never panics on bad input and stays usable after
//! a rejection.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};

use crate::catalog::House;
use crate::core::state::QuizState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reset to the initial state. Idempotent if already there.
    Start,
    /// Record the chosen option for the question at the current index.
    Answer {
        question_id: String,
        option_id: String,
    },
    /// Advance past the current question; completes the quiz after the
    /// last one. Requires a recorded answer for the current question.
    Next,
    /// Discard all history and start over, from any state.
    Retake,
}

/// The reducer. Each call is atomic: the transition and every derived
/// field are settled before it returns.
pub fn update(state: &mut QuizState, action: Action) {
    match action {
        Action::Start | Action::Retake => state.reset(),
        Action::Answer {
            question_id,
            option_id,
        } => answer(state, &question_id, &option_id),
        Action::Next => next(state),
    }
}

fn answer(state: &mut QuizState, question_id: &str, option_id: &str) {
    if state.completed {
        debug!("ANSWER ignored: quiz already completed");
        return;
    }
    let catalog = Arc::clone(&state.catalog);
    let Some(question) = catalog.question(state.index) else {
        debug!("ANSWER ignored: no question at index {}", state.index);
        return;
    };
    if question.id != question_id {
        debug!(
            "ANSWER rejected: {question_id} is not the current question ({})",
            question.id
        );
        return;
    }
    let Some(option) = question.option(option_id) else {
        debug!("ANSWER rejected: unknown option {option_id} for {question_id}");
        return;
    };

    // Re-answering replaces the previous choice: undo its deltas first
    // so repeated answers never double-count.
    if let Some(previous_id) = state.answers.get(question_id)
        && let Some(previous) = question.option(previous_id)
    {
        apply_deltas(&mut state.scores, &previous.scores, -1);
    }

    apply_deltas(&mut state.scores, &option.scores, 1);
    state
        .answers
        .insert(question_id.to_string(), option_id.to_string());
    debug!("Answered {question_id} with {option_id}");
}

fn next(state: &mut QuizState) {
    if state.completed {
        debug!("NEXT ignored: quiz already completed");
        return;
    }
    let catalog = Arc::clone(&state.catalog);
    let Some(question) = catalog.question(state.index) else {
        debug!("NEXT ignored: no question at index {}", state.index);
        return;
    };
    if !state.answers.contains_key(&question.id) {
        debug!("NEXT rejected: no answer recorded for {}", question.id);
        return;
    }

    state.index += 1;
    if state.index == catalog.len() {
        let house = resolve_house(&state.scores);
        state.completed = true;
        state.sorted_house = Some(house);
        info!("Quiz completed: sorted into {house}");
    }
}

fn apply_deltas(scores: &mut HashMap<House, i32>, deltas: &HashMap<House, i32>, sign: i32) {
    for (house, delta) in deltas {
        *scores.entry(*house).or_insert(0) += sign * delta;
    }
}

/// The house with the maximal accumulated score. Ties go to the house
/// earlier in `House::ALL`, so resolution never depends on map
/// iteration order.
fn resolve_house(scores: &HashMap<House, i32>) -> House {
    let mut best = House::ALL[0];
    let mut best_score = scores.get(&best).copied().unwrap_or(0);
    for house in House::ALL.into_iter().skip(1) {
        let score = scores.get(&house).copied().unwrap_or(0);
        if score > best_score {
            best = house;
            best_score = score;
        }
    }
    best
}
