//! # CLI Adapter
//!
//! The terminal-specific layer. Prints questions, reads answers from
//! stdin, and translates choices into core::Action values.
//!
//! This is the only module that does user I/O. It holds no quiz logic:
//! every state change goes through `update()`, and the quiz machine
//! independently enforces its own preconditions (an unanswered question
//! can't be skipped even if this layer misbehaves).

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use log::info;

use crate::catalog::{Catalog, House, Question};
use crate::core::action::{Action, update};
use crate::core::state::QuizState;

const BAR_WIDTH: usize = 30;

/// Runs quiz sessions on stdin/stdout until the user declines a retake.
pub fn run(catalog: Arc<Catalog>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_session(&mut input, &mut out, QuizState::new(catalog))
}

/// The session loop, generic over its streams so tests can script it.
fn run_session(
    input: &mut impl BufRead,
    out: &mut impl Write,
    mut state: QuizState,
) -> io::Result<()> {
    writeln!(out, "The Sorting Hat awaits. Answer honestly...")?;

    loop {
        while let Some(question) = state.current_question().cloned() {
            ask(input, out, &mut state, &question)?;
        }

        if let Some(house) = state.result() {
            print_result(out, &state, house)?;
        }

        if !confirm(input, out, "Take the quiz again? [y/N] ")? {
            return Ok(());
        }
        update(&mut state, Action::Retake);
        info!("Quiz retaken");
    }
}

/// Presents one question, reads a valid choice, and dispatches
/// ANSWER + NEXT for it.
fn ask(
    input: &mut impl BufRead,
    out: &mut impl Write,
    state: &mut QuizState,
    question: &Question,
) -> io::Result<()> {
    let (step, total) = state.progress();
    writeln!(out, "\nQuestion {step} of {total}")?;
    writeln!(out, "{}", question.prompt)?;
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, option.text)?;
    }

    let choice = read_choice(input, out, question.options.len())?;
    update(
        state,
        Action::Answer {
            question_id: question.id.clone(),
            option_id: question.options[choice].id.clone(),
        },
    );
    update(state, Action::Next);
    Ok(())
}

/// Reads a 1-based option number from stdin, reprompting until valid.
fn read_choice(input: &mut impl BufRead, out: &mut impl Write, count: usize) -> io::Result<usize> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed mid-quiz",
            ));
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(n - 1),
            _ => writeln!(out, "Please enter a number between 1 and {count}.")?,
        }
    }
}

fn print_result(out: &mut impl Write, state: &QuizState, house: House) -> io::Result<()> {
    let info = house.info();

    writeln!(out, "\nThe Sorting Hat has spoken!")?;
    writeln!(out, "Welcome to {}!", info.name)?;
    writeln!(out, "\"{}\"", info.quote)?;
    writeln!(out)?;
    writeln!(out, "  Values:           {}", info.values.join(", "))?;
    writeln!(out, "  Symbol & element: {} ({})", info.animal, info.element)?;
    writeln!(out, "  Founder & ghost:  {} / {}", info.founder, info.ghost)?;
    writeln!(
        out,
        "  Notable alumni:   {}",
        info.notable_alumni.join(", ")
    )?;
    writeln!(out, "  Common room:      {}", info.common_room)?;

    writeln!(out, "\nYour affinity scores:")?;
    let percentages = state.score_percentages();
    for candidate in House::ALL {
        let pct = percentages.get(&candidate).copied().unwrap_or(0.0);
        let filled = ((pct / 100.0 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        writeln!(
            out,
            "  {:<10} {:>3.0}% {}{}",
            candidate.info().name,
            pct,
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
        )?;
    }
    Ok(())
}

/// Asks a yes/no question; anything but y/yes counts as no.
fn confirm(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<bool> {
    write!(out, "\n{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;

    fn run_scripted(script: &[u8]) -> io::Result<String> {
        let mut input = script;
        let mut out = Vec::new();
        let state = QuizState::new(Arc::new(test_catalog()));
        let result = run_session(&mut input, &mut out, state);
        result.map(|_| String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_session_over_scripted_stdin() {
        // Answer all three questions with option 1, decline the retake.
        let rendered = run_scripted(b"1\n1\n1\nn\n").unwrap();
        assert!(rendered.contains("Question 1 of 3"));
        assert!(rendered.contains("Welcome to Gryffindor!"));
        assert!(rendered.contains("100%"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let rendered = run_scripted(b"0\nbanana\n9\n2\n2\n2\nn\n").unwrap();
        assert!(rendered.contains("Please enter a number between 1 and 3."));
        assert!(rendered.contains("Welcome to Slytherin!"));
    }

    #[test]
    fn test_retake_runs_a_second_session() {
        let rendered = run_scripted(b"1\n1\n1\ny\n2\n2\n2\nn\n").unwrap();
        assert!(rendered.contains("Welcome to Gryffindor!"));
        assert!(rendered.contains("Welcome to Slytherin!"));
    }

    #[test]
    fn test_eof_at_retake_prompt_exits_cleanly() {
        let rendered = run_scripted(b"1\n1\n1\n").unwrap();
        assert!(rendered.contains("Welcome to Gryffindor!"));
    }

    #[test]
    fn test_eof_mid_quiz_is_an_error() {
        let err = run_scripted(b"1\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
