// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Write;

use tracing::{debug, info};

use dynarr::{DynamicArray, DynamicArrayError};

use crate::error::CliError;

/// Script replayed when no `--script` is given.
pub const DEMO_SCRIPT: &str = "\
append STRING4
insert STRING2 0
print
insert STRING3 1
print
remove STRING3
remove STRING2
append 1
print
! read 2
insert 2 0
print
";

/// One script command. Element operands borrow from the script text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `append <element>`
    Append(&'a str),
    /// `insert <element> <index>`
    Insert(&'a str, i64),
    /// `remove <element>`
    Remove(&'a str),
    /// `read <index>`
    Read(i64),
    /// `print`: renders the live elements.
    Print,
    /// `len`
    Len,
    /// `capacity`
    Capacity,
}

/// A parsed, non-blank script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The command to execute.
    pub command: Command<'a>,
    /// Set when the line starts with `!`.
    pub expect_failure: bool,
}

fn parse_index(line: usize, raw: &str) -> Result<i64, CliError> {
    raw.parse().map_err(|_| CliError::Parse {
        line,
        message: format!("invalid index '{raw}'"),
    })
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Line<'_>>, CliError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (expect_failure, body) = match trimmed.strip_prefix('!') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };

    let words: Vec<&str> = body.split_whitespace().collect();
    let command = match words.as_slice() {
        ["append", element] => Command::Append(*element),
        ["insert", element, index] => Command::Insert(*element, parse_index(line, index)?),
        ["remove", element] => Command::Remove(*element),
        ["read", index] => Command::Read(parse_index(line, index)?),
        ["print"] => Command::Print,
        ["len"] => Command::Len,
        ["capacity"] => Command::Capacity,
        [name @ ("append" | "insert" | "remove" | "read" | "print" | "len" | "capacity"), ..] => {
            return Err(CliError::Parse {
                line,
                message: format!("wrong number of operands for '{name}'"),
            });
        }
        [name, ..] => {
            return Err(CliError::Parse {
                line,
                message: format!("unknown command '{name}'"),
            });
        }
        [] => {
            return Err(CliError::Parse {
                line,
                message: "missing command after '!'".to_owned(),
            });
        }
    };

    Ok(Some(Line {
        command,
        expect_failure,
    }))
}

fn execute<'a>(
    arr: &mut DynamicArray<'a>,
    command: Command<'a>,
) -> Result<Option<String>, DynamicArrayError> {
    match command {
        Command::Append(element) => arr.append(element).map(|()| None),
        Command::Insert(element, index) => {
            let index = arr.signed_index(index)?;
            arr.insert(element, index).map(|()| None)
        }
        Command::Remove(element) => arr.remove(element).map(|_| None),
        Command::Read(index) => {
            let index = arr.signed_index(index)?;
            arr.read(index).map(|element| Some(element.to_owned()))
        }
        Command::Print => Ok(Some(arr.to_display_string())),
        Command::Len => Ok(Some(arr.len().to_string())),
        Command::Capacity => Ok(Some(arr.capacity().to_string())),
    }
}

/// Replays `source` against a fresh array of `capacity` slots, writing every
/// rendering to `out`.
///
/// Stops at the first unexpected array error or first unexpected success.
pub fn run_script<W: Write>(source: &str, capacity: usize, out: &mut W) -> Result<(), CliError> {
    let mut arr = DynamicArray::with_capacity(capacity).map_err(CliError::Create)?;
    info!(capacity, "array created");

    for (idx, text) in source.lines().enumerate() {
        let line = idx + 1;
        let Some(parsed) = parse_line(line, text)? else {
            continue;
        };
        debug!(line, command = ?parsed.command, "executing");

        match (execute(&mut arr, parsed.command), parsed.expect_failure) {
            (Ok(Some(rendered)), false) => writeln!(out, "{rendered}")?,
            (Ok(None), false) => {}
            (Ok(_), true) => return Err(CliError::UnexpectedSuccess { line }),
            (Err(source), false) => return Err(CliError::Array { line, source }),
            (Err(err), true) => writeln!(out, "expected error: {err}")?,
        }
    }

    info!(len = arr.len(), capacity = arr.capacity(), "script finished");
    arr.destroy();

    Ok(())
}
