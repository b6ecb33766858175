// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use dynarr::DynamicArrayError;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The script file could not be read.
    #[error("cannot read script {path}: {source}")]
    Script {
        /// Path given on the command line.
        path: String,
        /// Underlying read failure.
        #[source]
        source: std::io::Error,
    },

    /// The initial array could not be created.
    #[error("cannot create array: {0}")]
    Create(#[source] DynamicArrayError),

    /// A script line is malformed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based script line number.
        line: usize,
        /// What is wrong with the line.
        message: String,
    },

    /// An array operation failed.
    #[error("line {line}: {source}")]
    Array {
        /// 1-based script line number.
        line: usize,
        /// The rejected array operation's error.
        #[source]
        source: DynamicArrayError,
    },

    /// A command marked with '!' succeeded.
    #[error("line {line}: expected failure but command succeeded")]
    UnexpectedSuccess {
        /// 1-based script line number.
        line: usize,
    },
}
