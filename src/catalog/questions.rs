//! The built-in Sorting Hat question set.
//!
//! Each option nudges one house strongly (+3) and sometimes a second
//! house weakly (+1), so most playthroughs produce a clear winner while
//! mixed answers still resolve deterministically via the tie-break.

use std::collections::HashMap;

use super::houses::House;
use super::{AnswerOption, Catalog, Question};

fn opt(id: &str, text: &str, scores: &[(House, i32)]) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: text.to_string(),
        scores: scores.iter().copied().collect::<HashMap<_, _>>(),
    }
}

fn q(id: &str, prompt: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options,
    }
}

pub(super) fn builtin() -> Catalog {
    use House::*;

    Catalog {
        questions: vec![
            q(
                "q1",
                "Which quality do you most admire in yourself?",
                vec![
                    opt("q1a", "Courage, even when I'm afraid", &[(Gryffindor, 3)]),
                    opt("q1b", "Loyalty to the people I care about", &[(Hufflepuff, 3)]),
                    opt("q1c", "Curiosity about how everything works", &[(Ravenclaw, 3)]),
                    opt("q1d", "Ambition to make something of myself", &[(Slytherin, 3)]),
                ],
            ),
            q(
                "q2",
                "A troll is loose in the castle. What's your first move?",
                vec![
                    opt(
                        "q2a",
                        "Charge in and hold it off so others can escape",
                        &[(Gryffindor, 3), (Hufflepuff, 1)],
                    ),
                    opt(
                        "q2b",
                        "Round up the younger students and get them to safety",
                        &[(Hufflepuff, 3)],
                    ),
                    opt(
                        "q2c",
                        "Recall everything I've read about troll weaknesses",
                        &[(Ravenclaw, 3)],
                    ),
                    opt(
                        "q2d",
                        "Create a distraction and slip away with the advantage",
                        &[(Slytherin, 3), (Ravenclaw, 1)],
                    ),
                ],
            ),
            q(
                "q3",
                "Four paths lead through the enchanted forest. Which calls to you?",
                vec![
                    opt(
                        "q3a",
                        "The dark, twisted path where something growls",
                        &[(Gryffindor, 3)],
                    ),
                    opt(
                        "q3b",
                        "The sunlit path through wildflowers and birdsong",
                        &[(Hufflepuff, 3)],
                    ),
                    opt(
                        "q3c",
                        "The overgrown path with ancient runes carved on the trees",
                        &[(Ravenclaw, 3)],
                    ),
                    opt(
                        "q3d",
                        "The quiet path that winds down toward a hidden lake",
                        &[(Slytherin, 3)],
                    ),
                ],
            ),
            q(
                "q4",
                "What would you hate most for people to call you?",
                vec![
                    opt("q4a", "Cowardly", &[(Gryffindor, 3)]),
                    opt("q4b", "Selfish", &[(Hufflepuff, 3)]),
                    opt("q4c", "Ignorant", &[(Ravenclaw, 3)]),
                    opt("q4d", "Ordinary", &[(Slytherin, 3)]),
                ],
            ),
            q(
                "q5",
                "How do you spend a free Saturday afternoon?",
                vec![
                    opt(
                        "q5a",
                        "Trying something I've never dared to try before",
                        &[(Gryffindor, 3), (Slytherin, 1)],
                    ),
                    opt(
                        "q5b",
                        "Helping a friend with whatever they're stuck on",
                        &[(Hufflepuff, 3)],
                    ),
                    opt(
                        "q5c",
                        "Lost in a book or puzzle until the light fades",
                        &[(Ravenclaw, 3)],
                    ),
                    opt(
                        "q5d",
                        "Working on a plan I've been quietly building for months",
                        &[(Slytherin, 3)],
                    ),
                ],
            ),
            q(
                "q6",
                "You discover a secret passage behind a tapestry. You...",
                vec![
                    opt(
                        "q6a",
                        "Go straight in, wand lit, and see where it leads",
                        &[(Gryffindor, 3)],
                    ),
                    opt(
                        "q6b",
                        "Tell a teacher, someone could get hurt in there",
                        &[(Hufflepuff, 3)],
                    ),
                    opt(
                        "q6c",
                        "Map it carefully and research where it might go",
                        &[(Ravenclaw, 3), (Hufflepuff, 1)],
                    ),
                    opt(
                        "q6d",
                        "Keep it to myself, a private shortcut is worth having",
                        &[(Slytherin, 3)],
                    ),
                ],
            ),
            q(
                "q7",
                "Which magical artifact would you take from a locked vault?",
                vec![
                    opt(
                        "q7a",
                        "A sword that appears whenever you show true valor",
                        &[(Gryffindor, 3)],
                    ),
                    opt(
                        "q7b",
                        "A cup that never lets a friend at your table go hungry",
                        &[(Hufflepuff, 3)],
                    ),
                    opt(
                        "q7c",
                        "A diadem said to sharpen the wearer's wisdom",
                        &[(Ravenclaw, 3)],
                    ),
                    opt(
                        "q7d",
                        "A locket that opens only for those with great destinies",
                        &[(Slytherin, 3)],
                    ),
                ],
            ),
        ],
    }
}
