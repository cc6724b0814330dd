//! Parse a model quiz transcript of `Question:` blocks into question records.
//!
//! Expected block shape:
//!
//! ```text
//! Question: What is the SI unit of force?
//! A) Joule
//! B) Newton
//! C) Watt
//! D) Pascal
//! Answer: B
//! ```
//!
//! Blocks that do not fit are dropped; there is no repair strategy.

use std::collections::BTreeMap;

use super::{Letter, QuizQuestion};

const QUESTION_MARKER: &str = "Question:";
const ANSWER_PREFIX: &str = "answer:";
/// Prompt line plus four option lines.
const MIN_BLOCK_LINES: usize = 5;
const CHOICE_LINES: usize = 4;

/// Parse every well-formed block of `text`, in order. Text before the first marker is ignored.
pub fn parse_quiz(text: &str) -> Vec<QuizQuestion> {
    text.split(QUESTION_MARKER)
        .skip(1)
        .enumerate()
        .filter_map(|(i, block)| {
            let parsed = parse_block(block);
            if parsed.is_none() {
                log::debug!("Dropping malformed quiz block {}", i + 1);
            }
            parsed
        })
        .collect()
}

fn parse_block(block: &str) -> Option<QuizQuestion> {
    let lines: Vec<&str> = block.trim().lines().collect();
    if lines.len() < MIN_BLOCK_LINES {
        return None;
    }

    let prompt = lines[0].trim();
    if prompt.is_empty() {
        return None;
    }

    let choices: BTreeMap<Letter, String> = lines[1..=CHOICE_LINES]
        .iter()
        .filter_map(|line| parse_choice(line))
        .collect();
    if choices.is_empty() {
        return None;
    }

    let answer = lines[MIN_BLOCK_LINES..]
        .iter()
        .find_map(|line| answer_value(line))
        .and_then(parse_answer_letter)?;

    Some(QuizQuestion {
        prompt: prompt.to_string(),
        choices,
        answer,
    })
}

/// `"B) Newton"` -> `(B, "Newton")`. Keys may carry an opening parenthesis: `"(B) Newton"`.
fn parse_choice(line: &str) -> Option<(Letter, String)> {
    let (key, value) = line.split_once(')')?;
    let key = key.trim().trim_start_matches('(').trim();
    let letter = key.parse::<Letter>().ok()?;
    Some((letter, value.trim().to_string()))
}

/// Text after the colon of the first `Answer:` line (case-insensitive prefix).
fn answer_value(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let head = line.get(..ANSWER_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(ANSWER_PREFIX) {
        return None;
    }
    line.split_once(':').map(|(_, rest)| rest.trim())
}

/// Leading answer letter: `"B"`, `"b"`, `"(B)"`, `"B) Newton"`, `"B."` all give `B`; `"Newton"` gives nothing.
fn parse_answer_letter(value: &str) -> Option<Letter> {
    let mut chars = value.trim_start_matches('(').trim_start().chars();
    let letter = Letter::from_char(chars.next()?)?;
    match chars.next() {
        Some(c) if c.is_alphanumeric() => None,
        _ => Some(letter),
    }
}
