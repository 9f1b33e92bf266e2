//! Line-sequence helpers shared by the text-patching synchronizers.
//!
//! A text artifact is read as an ordered `Vec<String>` of lines, mutated at
//! a located index, and rewritten whole. The scan returns `Option<usize>` so
//! a missing anchor can never decay into a numeric insertion position.

use std::path::Path;

use crate::error::{io_err, SyncError};

/// Read a text file into its line sequence.
///
/// Splits on `\n` only; a trailing newline yields a final empty line, which
/// [`write_lines`] reproduces, so read-then-write round-trips byte-identical
/// LF content.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SyncError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    Ok(contents.split('\n').map(str::to_owned).collect())
}

/// Rewrite a file from its mutated line sequence, joined with `\n`.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), SyncError> {
    std::fs::write(path, lines.join("\n")).map_err(|e| io_err(path, e))
}

/// Index of the first line satisfying `pred`, scanning from the top.
pub fn find_line<P>(lines: &[String], pred: P) -> Option<usize>
where
    P: Fn(&str) -> bool,
{
    lines.iter().position(|line| pred(line))
}
