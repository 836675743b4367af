//! # Quiz State
//!
//! Core business state for the sorting quiz. This module contains
//! domain logic only - no terminal or rendering types. Presentation
//! lives in the `cli` module.
//!
//! ```text
//! QuizState
//! ├── catalog: Arc<Catalog>       // fixed question set for the session
//! ├── index: usize                // current question, 0 <= index <= N
//! ├── scores: HashMap<House, i32> // accumulated deltas, all houses present
//! ├── answers: HashMap            // question id -> chosen option id
//! ├── completed: bool             // true once NEXT passes the last question
//! └── sorted_house: Option<House> // Some iff completed
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! Invariants: `index == catalog.len()` exactly when `completed`;
//! `sorted_house.is_some()` exactly when `completed`; `scores` always
//! contains every house.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::{Catalog, House, Question};

pub struct QuizState {
    pub catalog: Arc<Catalog>,
    pub index: usize,
    pub scores: HashMap<House, i32>,
    /// Question id -> chosen option id. Re-answering overwrites.
    pub answers: HashMap<String, String>,
    pub completed: bool,
    pub sorted_house: Option<House>,
}

impl QuizState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            index: 0,
            scores: zero_scores(),
            answers: HashMap::new(),
            completed: false,
            sorted_house: None,
        }
    }

    /// Back to the initial state: first question, zero scores, no
    /// answers, not completed. START and RETAKE both land here.
    pub fn reset(&mut self) {
        self.index = 0;
        self.scores = zero_scores();
        self.answers.clear();
        self.completed = false;
        self.sorted_house = None;
    }

    /// The question at the current index, or `None` once completed.
    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            return None;
        }
        self.catalog.question(self.index)
    }

    /// 1-based current step and total step count, for progress display.
    /// Clamped to `(N, N)` once completed.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.catalog.len();
        ((self.index + 1).min(total), total)
    }

    /// Per-house affinity as a percentage of the total positive score.
    ///
    /// Negative accumulated scores are floored to 0 first, so a house
    /// never shows negative affinity. When nothing is positive yet,
    /// every house reads 0.
    pub fn score_percentages(&self) -> HashMap<House, f64> {
        let total: i32 = House::ALL
            .iter()
            .map(|house| self.score(*house).max(0))
            .sum();

        House::ALL
            .iter()
            .map(|&house| {
                let positive = self.score(house).max(0);
                let pct = if total > 0 {
                    positive as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                (house, pct)
            })
            .collect()
    }

    /// The sorted house, present only once the quiz is completed.
    pub fn result(&self) -> Option<House> {
        self.sorted_house
    }

    pub(crate) fn score(&self, house: House) -> i32 {
        self.scores.get(&house).copied().unwrap_or(0)
    }
}

fn zero_scores() -> HashMap<House, i32> {
    House::ALL.iter().map(|&house| (house, 0)).collect()
}
