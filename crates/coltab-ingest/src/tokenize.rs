//! Line tokenizing and line classification.

use coltab_model::Token;

/// Splits a line into maximal runs of non-whitespace characters. Only ASCII
/// whitespace delimits; a non-breaking space is part of its token.
///
/// Offsets are character positions, not byte positions, so columns stay
/// aligned when a report contains multi-byte text.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    // (byte offset, char offset) of the run in progress
    let mut current: Option<(usize, usize)> = None;
    let mut chars = 0usize;

    for (byte, ch) in line.char_indices() {
        if ch.is_ascii_whitespace() {
            if let Some((start_byte, start)) = current.take() {
                tokens.push(Token::new(&line[start_byte..byte], start, chars));
            }
        } else if current.is_none() {
            current = Some((byte, chars));
        }
        chars += 1;
    }
    if let Some((start_byte, start)) = current {
        tokens.push(Token::new(&line[start_byte..], start, chars));
    }
    tokens
}

fn first_visible(line: &str) -> Option<char> {
    line.chars().find(|ch| !ch.is_ascii_whitespace())
}

/// Returns true if the line starts, after optional whitespace, with a digit.
pub fn is_data_line(line: &str) -> bool {
    first_visible(line).is_some_and(|ch| ch.is_ascii_digit())
}

/// Returns true if the line starts, after optional whitespace, with a letter.
pub fn is_header_line(line: &str) -> bool {
    first_visible(line).is_some_and(|ch| ch.is_ascii_alphabetic())
}
