//! # Question Catalog
//!
//! The static data the quiz runs over: questions, their answer options,
//! and each option's per-house score deltas. A catalog is fixed for the
//! lifetime of a quiz session; the state machine only ever reads it.
//!
//! Two ways to get one:
//!
//! - [`Catalog::builtin`]: the default Sorting Hat question set, compiled in.
//! - [`Catalog::load`]: a custom set from a TOML file, e.g.
//!
//! ```toml
//! [[questions]]
//! id = "q1"
//! prompt = "Which quality do you most admire in yourself?"
//!
//! [[questions.options]]
//! id = "q1a"
//! text = "Courage in the face of danger"
//! scores = { Gryffindor = 3 }
//! ```
//!
//! Loaded catalogs are validated (non-empty, unique ids, every question
//! has options) before the quiz ever sees them.

pub mod houses;
mod questions;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub use houses::{House, HouseInfo};

/// One selectable answer and the score deltas it applies.
///
/// Houses absent from `scores` are unaffected (delta 0). Deltas may be
/// negative.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub scores: HashMap<House, i32>,
}

/// A prompt plus its ordered answer options.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Look up one of this question's options by id.
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// The ordered question set a quiz session runs over.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::Invalid(msg) => write!(f, "invalid catalog: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl Catalog {
    /// The default compiled-in question set.
    pub fn builtin() -> Self {
        questions::builtin()
    }

    /// Load and validate a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog: Catalog = toml::from_str(&contents).map_err(CatalogError::Parse)?;
        catalog.validate()?;
        info!(
            "Loaded catalog from {} ({} questions)",
            path.display(),
            catalog.questions.len()
        );
        debug!("Catalog: {:?}", catalog);
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question at `index`, if any.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Checks structural invariants: at least one question, at least one
    /// option per question, unique question ids, unique option ids
    /// within each question.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::Invalid("catalog has no questions".into()));
        }

        let mut seen_questions = std::collections::HashSet::new();
        for question in &self.questions {
            if !seen_questions.insert(question.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate question id: {}",
                    question.id
                )));
            }
            if question.options.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "question {} has no options",
                    question.id
                )));
            }
            let mut seen_options = std::collections::HashSet::new();
            for option in &question.options {
                if !seen_options.insert(option.id.as_str()) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate option id {} in question {}",
                        option.id, question.id
                    )));
                }
            }
        }
        Ok(())
    }
}
