//! Argument helpers shared by the command handlers.
//!
//! Free text is separated from positional arguments with `/`, as in
//! `add expense 12.50 / lunch with Sam / F`.

use crate::cli::core::CommandError;

pub(crate) const SEGMENT_SEPARATOR: char = '/';

/// Groups the tokens between standalone `/` tokens. Segments are joined with
/// single spaces; empty trailing segments are kept so callers can report them.
pub(crate) fn split_segments(args: &[&str]) -> Vec<String> {
    if args.is_empty() {
        return Vec::new();
    }
    args.split(|token| token.len() == 1 && token.starts_with(SEGMENT_SEPARATOR))
        .map(|segment| segment.join(" "))
        .collect()
}

pub(crate) fn parse_amount(input: &str) -> Result<f64, CommandError> {
    let trimmed = input.trim().trim_start_matches('$');
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CommandError::InvalidArguments(format!("invalid amount `{}`", input.trim())))
}

/// Parses a one-based list position. Range checks, including position 0,
/// are left to the ledger so its errors reach the user unchanged.
pub(crate) fn parse_index(input: &str) -> Result<usize, CommandError> {
    input.trim().parse::<usize>().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "invalid index `{}` (use a whole number)",
            input.trim()
        ))
    })
}

pub(crate) fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", text))
}
