// File: crates/nametrend-core/src/dataset.rs
// Summary: Dataset text parser: legacy name-plus-ranks lines into RankEntry values.

use log::warn;
use thiserror::Error;

use crate::entry::RankEntry;
use crate::types::{MAX_RANK, NDECADES};

/// A dataset line that cannot be decomposed into a name plus rank vector.
/// Line numbers are 1-based positions in the input text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: no leading alphabetic name")]
    MissingName { line: usize },
    #[error("line {line}: expected {expected} rank values, found {found}")]
    RankCount { line: usize, expected: usize, found: usize },
    #[error("line {line}: invalid rank token '{token}'")]
    BadRank { line: usize, token: String },
    #[error("line {line}: rank {value} out of range")]
    RankRange { line: usize, value: u32 },
}

/// Parse full dataset text, one record per line, failing on the first
/// malformed line. Blank lines are skipped.
///
/// Line shape: `<Name><int_1> <int_2> ... <int_N>`. The name is the maximal
/// leading run of ASCII letters; the legacy format does not guarantee a
/// space between the name and the first rank.
pub fn parse_dataset(text: &str) -> Result<Vec<RankEntry>, FormatError> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        entries.push(parse_line(line, i + 1)?);
    }
    Ok(entries)
}

/// Resilient variant of [`parse_dataset`]: keeps every well-formed line and
/// collects the errors for the rest, warning once per skipped line.
pub fn parse_dataset_lossy(text: &str) -> (Vec<RankEntry>, Vec<FormatError>) {
    let mut entries = Vec::new();
    let mut errors = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, i + 1) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                warn!("skipping dataset line: {err}");
                errors.push(err);
            }
        }
    }
    (entries, errors)
}

fn parse_line(line: &str, lineno: usize) -> Result<RankEntry, FormatError> {
    let name_end = line
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(line.len());
    let name = &line[..name_end];
    if name.is_empty() {
        return Err(FormatError::MissingName { line: lineno });
    }

    let mut ranks = [0u32; NDECADES];
    let mut count = 0usize;
    for token in line[name_end..].split_whitespace() {
        if count == NDECADES {
            // Count the extras so the error reports what the line held.
            count += 1;
            continue;
        }
        let rank = token.parse::<u32>().map_err(|_| FormatError::BadRank {
            line: lineno,
            token: token.to_string(),
        })?;
        if rank > MAX_RANK {
            return Err(FormatError::RankRange { line: lineno, value: rank });
        }
        ranks[count] = rank;
        count += 1;
    }

    if count != NDECADES {
        return Err(FormatError::RankCount {
            line: lineno,
            expected: NDECADES,
            found: count,
        });
    }
    Ok(RankEntry::new(name, ranks))
}
