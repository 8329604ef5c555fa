use crate::shell::ast::{CommandSlot, ParsedCommand};
use anyhow::{Result, bail};

pub const PARALLEL_MARKER: char = '&';
pub const REDIRECT_MARKER: char = '>';

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Splits a raw input line on `&`.
///
/// A line made only of whitespace and markers yields no slots at all. A single
/// trailing empty slot ("ls &") is dropped; any other empty slot is reported
/// as `CommandSlot::Malformed` so the caller can flag it without losing the
/// rest of the line.
pub fn split_into_commands(line: &str) -> Vec<CommandSlot> {
    if line.chars().all(|c| is_word_separator(c) || c == PARALLEL_MARKER) {
        return Vec::new();
    }

    let mut segments: Vec<&str> = line
        .split(PARALLEL_MARKER)
        .map(|s| s.trim_matches(is_word_separator))
        .collect();

    // "cmd &" terminates the line, it does not open an empty slot
    if segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    segments
        .into_iter()
        .map(|s| {
            if s.is_empty() {
                CommandSlot::Malformed
            } else {
                CommandSlot::Command(s.to_string())
            }
        })
        .collect()
}

pub fn split_into_words(command_text: &str) -> Vec<String> {
    command_text
        .split(is_word_separator)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses one command into words, pulling out a trailing `> file`.
///
/// The marker does not need surrounding whitespace, so `ls>out` and
/// `ls > out` parse the same way.
pub fn parse_command(command_text: &str) -> Result<ParsedCommand> {
    let mut parts = command_text.split(REDIRECT_MARKER);
    let head = parts.next().unwrap_or_default();
    let target = parts.next();

    if parts.next().is_some() {
        bail!("Multiple redirections in: {}", command_text.trim());
    }

    let argv = split_into_words(head);
    if argv.is_empty() {
        bail!("Missing command in: {}", command_text.trim());
    }

    let redirect = match target {
        None => None,
        Some(rest) => {
            let mut words = split_into_words(rest);
            match words.len() {
                1 => words.pop(),
                0 => bail!("Redirection without a target file"),
                n => bail!("Redirection expects exactly one target file, got {}", n),
            }
        }
    };

    Ok(ParsedCommand { argv, redirect })
}
