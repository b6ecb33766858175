// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Demonstration entry point and command-script runner for `dynarr`.
//!
//! Without a script the built-in demonstration runs and prints every
//! intermediate state. A script is a line-oriented command list; a leading
//! `!` marks a command that is expected to fail:
//!
//! ```text
//! # comment
//! append STRING4
//! insert STRING2 0
//! print
//! ! read 5
//! ```

mod cli;
mod error;
mod logging;
mod script;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::CliError;
pub use logging::init as init_logging;
pub use script::{Command, DEMO_SCRIPT, Line, parse_line, run_script};

use std::io::{Read, Write};
use std::process::ExitCode;

/// Runs the CLI against `out`, loading the script named by `cli` if any.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let source = match cli.script.as_deref() {
        None => DEMO_SCRIPT.to_owned(),
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Script {
            path: path.to_owned(),
            source,
        })?,
    };

    run_script(&source, cli.capacity, out)
}

/// Maps a run result to the process exit code, reporting a failure exactly once.
pub fn finish(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "run aborted");
            ExitCode::FAILURE
        }
    }
}
